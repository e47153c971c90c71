//! Error types for configuration loading.
//!
//! # Design
//! Resolving a base URL never fails, so there is no resolution error. The
//! fallible steps are reading the build mode from the environment and
//! loading or validating the frontend build configuration file.

use std::path::PathBuf;

use thiserror::Error;

/// A build mode string that matches none of the known aliases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown build mode {0:?}")]
pub struct UnknownBuildMode(pub String);

/// Errors returned while reading endpoint configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The build mode variable is set to something other than a known mode.
    #[error("invalid value {value:?} for {key}: expected \"production\" or \"development\"")]
    InvalidMode {
        key: &'static str,
        value: String,
        #[source]
        source: UnknownBuildMode,
    },
}

/// Errors returned while loading or validating a frontend build config.
#[derive(Debug, Error)]
pub enum BuildConfigError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse build config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize build config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A server section listens on port 0.
    #[error("{section}.port must be non-zero")]
    InvalidPort { section: &'static str },

    #[error("{section}.host must not be empty")]
    EmptyHost { section: &'static str },

    #[error("build.out_dir must not be empty")]
    EmptyOutDir,

    #[error("build.manual_chunks contains an empty chunk name")]
    EmptyChunkName,

    #[error("chunk {chunk:?} lists no modules")]
    EmptyChunk { chunk: String },

    /// A module is split into more than one chunk.
    #[error("module {module:?} is assigned to both {first:?} and {second:?}")]
    DuplicateModule {
        module: String,
        first: String,
        second: String,
    },
}
