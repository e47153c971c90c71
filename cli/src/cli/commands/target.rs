//! `endpoint target` – join a request path onto the resolved base URL.

use endpoint_core::{ClientConfig, EndpointConfig};

pub fn run_target(cfg: &EndpointConfig, path: &str) -> String {
    ClientConfig::from_endpoint(&cfg.resolve()).target(path)
}
