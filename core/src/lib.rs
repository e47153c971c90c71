//! Base URL resolution for the API client.
//!
//! # Overview
//! Decides once, at startup, which base URL the HTTP client should target:
//! an explicit override, the relative production path, or the local
//! development server. The decision is a pure function; reading the
//! environment and handing the result to a client are separate steps.
//!
//! # Design
//! - `endpoint::resolve` is pure and total. It records which rule fired.
//! - `config` reads `API_BASE` / `APP_MODE` through an injectable
//!   `ConfigSource` so the decision can be tested without touching the
//!   process environment.
//! - `client::ClientConfig` is the hand-off to an external HTTP client and
//!   only knows how to join request paths onto the base URL.
//! - `build_config` models the frontend bundler settings (dev server,
//!   production output, code-splitting) as validated TOML.

pub mod build_config;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod logging;

pub use build_config::{BuildOutputConfig, DevServerConfig, FrontendBuildConfig, Minifier, PreviewConfig};
pub use client::ClientConfig;
pub use config::{ConfigSource, EndpointConfig, MapSource, ProcessEnv, API_BASE_KEY, APP_MODE_KEY};
pub use endpoint::{
    resolve, resolve_base_url, BuildMode, EndpointSource, ResolvedEndpoint, DEVELOPMENT_BASE_URL,
    PRODUCTION_BASE_URL,
};
pub use error::{BuildConfigError, ConfigError, UnknownBuildMode};
