//! `endpoint build-config` – validate and print the frontend build config.

use std::path::Path;

use anyhow::{Context, Result};
use endpoint_core::FrontendBuildConfig;

/// Load `file` (or the defaults when `None`) and render it as TOML.
pub fn run_build_config(file: Option<&Path>) -> Result<String> {
    let cfg = match file {
        Some(path) => FrontendBuildConfig::load(path)
            .with_context(|| format!("invalid build config {}", path.display()))?,
        None => FrontendBuildConfig::default(),
    };
    Ok(cfg.to_toml_string()?)
}
