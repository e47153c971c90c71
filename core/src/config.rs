//! Reading endpoint configuration from the outside world.
//!
//! # Design
//! Lookups go through the [`ConfigSource`] trait so the resolver can be
//! driven from the process environment, a host application, or a test map
//! without touching global state. Values are read once at bootstrap and
//! copied into an [`EndpointConfig`]; nothing is watched or reloaded.

use std::collections::BTreeMap;

use crate::endpoint::{self, BuildMode, ResolvedEndpoint};
use crate::error::ConfigError;

/// Variable holding a full base URL that overrides the computed defaults.
pub const API_BASE_KEY: &str = "API_BASE";

/// Variable that overrides the compiled build mode.
pub const APP_MODE_KEY: &str = "APP_MODE";

/// Key/value lookup for external configuration.
pub trait ConfigSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// The current process environment. Non-UTF-8 values read as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ConfigSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory configuration, for tests and embedding hosts.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    values: BTreeMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl ConfigSource for MapSource {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for MapSource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Inputs to base URL resolution, captured once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub api_base: Option<String>,
    pub mode: BuildMode,
}

impl EndpointConfig {
    pub fn new(api_base: Option<String>, mode: BuildMode) -> Self {
        Self { api_base, mode }
    }

    /// Read `API_BASE` and `APP_MODE` from `source`.
    ///
    /// An unset or empty `APP_MODE` falls back to [`BuildMode::compiled`].
    /// `API_BASE` is copied untouched; an empty value is handled by the
    /// resolver.
    pub fn from_source<S: ConfigSource + ?Sized>(source: &S) -> Result<Self, ConfigError> {
        let api_base = source.get(API_BASE_KEY);
        let mode = match source.get(APP_MODE_KEY) {
            Some(raw) if !raw.trim().is_empty() => {
                raw.parse::<BuildMode>()
                    .map_err(|e| ConfigError::InvalidMode {
                        key: APP_MODE_KEY,
                        value: raw.clone(),
                        source: e,
                    })?
            }
            _ => BuildMode::compiled(),
        };
        tracing::info!(
            api_base_set = api_base.is_some(),
            %mode,
            "loaded endpoint configuration"
        );
        Ok(Self { api_base, mode })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&ProcessEnv)
    }

    pub fn resolve(&self) -> ResolvedEndpoint {
        endpoint::resolve(self.api_base.as_deref(), self.mode)
    }
}
