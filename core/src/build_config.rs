//! Frontend build configuration (dev server, production output, chunking).
//!
//! This is declarative input for an external bundler. It is loaded from
//! TOML, missing sections take the defaults below, and `validate` rejects
//! settings the bundler would choke on.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::BuildConfigError;

const DEFAULT_PORT: u16 = 5173;
const DEFAULT_HOST: &str = "0.0.0.0";

/// Minifier used for production builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Minifier {
    None,
    Esbuild,
    #[default]
    Terser,
}

/// Development server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevServerConfig {
    pub port: u16,
    pub host: String,
    /// Allow cross-origin requests to the dev server.
    pub cors: bool,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
            cors: true,
        }
    }
}

/// Settings for serving a finished build locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub port: u16,
    pub host: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
        }
    }
}

/// Production build output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOutputConfig {
    pub out_dir: String,
    pub sourcemap: bool,
    pub minify: Minifier,
    /// Chunk name -> modules bundled into that chunk.
    pub manual_chunks: BTreeMap<String, Vec<String>>,
}

impl Default for BuildOutputConfig {
    fn default() -> Self {
        let manual_chunks = ["echarts", "vue", "axios"]
            .into_iter()
            .map(|name| (name.to_string(), vec![name.to_string()]))
            .collect();
        Self {
            out_dir: "dist".to_string(),
            sourcemap: false,
            minify: Minifier::Terser,
            manual_chunks,
        }
    }
}

/// Full frontend build configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendBuildConfig {
    pub server: DevServerConfig,
    pub build: BuildOutputConfig,
    pub preview: PreviewConfig,
}

impl FrontendBuildConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, BuildConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load and validate the config at `path`.
    pub fn load(path: &Path) -> Result<Self, BuildConfigError> {
        let data = fs::read_to_string(path).map_err(|source| BuildConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_toml_str(&data)?;
        cfg.validate()?;
        tracing::info!("loaded frontend build config from {}", path.display());
        Ok(cfg)
    }

    pub fn to_toml_string(&self) -> Result<String, BuildConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), BuildConfigError> {
        check_listener("server", self.server.port, &self.server.host)?;
        check_listener("preview", self.preview.port, &self.preview.host)?;

        if self.build.out_dir.trim().is_empty() {
            return Err(BuildConfigError::EmptyOutDir);
        }

        let mut owner: HashMap<&str, &str> = HashMap::new();
        for (chunk, modules) in &self.build.manual_chunks {
            if chunk.trim().is_empty() {
                return Err(BuildConfigError::EmptyChunkName);
            }
            if modules.is_empty() {
                return Err(BuildConfigError::EmptyChunk {
                    chunk: chunk.clone(),
                });
            }
            for module in modules {
                if let Some(first) = owner.insert(module.as_str(), chunk.as_str()) {
                    return Err(BuildConfigError::DuplicateModule {
                        module: module.clone(),
                        first: first.to_string(),
                        second: chunk.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

fn check_listener(section: &'static str, port: u16, host: &str) -> Result<(), BuildConfigError> {
    if port == 0 {
        return Err(BuildConfigError::InvalidPort { section });
    }
    if host.trim().is_empty() {
        return Err(BuildConfigError::EmptyHost { section });
    }
    Ok(())
}
