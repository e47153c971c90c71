//! `endpoint resolve` – print the resolved base URL.

use anyhow::Result;
use endpoint_core::EndpointConfig;
use serde_json::json;

pub fn run_resolve(cfg: &EndpointConfig, as_json: bool) -> Result<String> {
    let resolved = cfg.resolve();
    tracing::debug!("resolve: {} via {}", resolved, resolved.source());
    if !as_json {
        return Ok(resolved.into_string());
    }
    let out = json!({
        "source": resolved.source(),
        "value": resolved.as_str(),
        "mode": cfg.mode,
    });
    Ok(serde_json::to_string_pretty(&out)?)
}
