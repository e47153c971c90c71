//! Base URL resolution.
//!
//! # Design
//! `resolve` is a pure function of the override value and the build mode.
//! Three rules are checked in order and the first match wins:
//!
//! 1. a non-empty override is returned verbatim,
//! 2. production builds use the relative path [`PRODUCTION_BASE_URL`],
//! 3. everything else uses [`DEVELOPMENT_BASE_URL`].
//!
//! The result records which rule fired so callers can log or display it.
//! Nothing here reads the environment; see [`crate::config`] for that.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownBuildMode;

/// Base URL used by production builds, relative to the serving origin.
pub const PRODUCTION_BASE_URL: &str = "/api";

/// Base URL used by development builds.
pub const DEVELOPMENT_BASE_URL: &str = "http://localhost:8000/api";

/// Which resolution rule produced a [`ResolvedEndpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndpointSource {
    ExplicitOverride,
    ProductionDefault,
    DevelopmentDefault,
}

impl EndpointSource {
    pub fn as_str(self) -> &'static str {
        match self {
            EndpointSource::ExplicitOverride => "explicit-override",
            EndpointSource::ProductionDefault => "production-default",
            EndpointSource::DevelopmentDefault => "development-default",
        }
    }
}

impl fmt::Display for EndpointSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build or runtime mode of the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Development,
    Production,
}

impl BuildMode {
    pub fn from_is_production(is_production: bool) -> Self {
        if is_production {
            BuildMode::Production
        } else {
            BuildMode::Development
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, BuildMode::Production)
    }

    /// Mode implied by the compilation profile: release builds are
    /// production, builds with debug assertions are development.
    pub fn compiled() -> Self {
        Self::from_is_production(!cfg!(debug_assertions))
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildMode::Development => f.write_str("development"),
            BuildMode::Production => f.write_str("production"),
        }
    }
}

impl FromStr for BuildMode {
    type Err = UnknownBuildMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" | "release" => Ok(BuildMode::Production),
            "development" | "dev" | "debug" => Ok(BuildMode::Development),
            _ => Err(UnknownBuildMode(s.to_string())),
        }
    }
}

/// A base URL together with the rule that selected it.
///
/// Computed once at startup and never re-evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEndpoint {
    source: EndpointSource,
    value: String,
}

impl ResolvedEndpoint {
    pub fn source(&self) -> EndpointSource {
        self.source
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl fmt::Display for ResolvedEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for ResolvedEndpoint {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

/// Pick the base URL for `mode`, honoring `override_value` when it is
/// present and non-empty.
///
/// The override is not validated or trimmed; whatever the deployment
/// supplies is used as-is.
pub fn resolve(override_value: Option<&str>, mode: BuildMode) -> ResolvedEndpoint {
    let (source, value) = match override_value {
        Some(v) if !v.is_empty() => (EndpointSource::ExplicitOverride, v.to_string()),
        _ if mode.is_production() => (
            EndpointSource::ProductionDefault,
            PRODUCTION_BASE_URL.to_string(),
        ),
        _ => (
            EndpointSource::DevelopmentDefault,
            DEVELOPMENT_BASE_URL.to_string(),
        ),
    };
    tracing::debug!(%source, %mode, base_url = %value, "resolved api base url");
    ResolvedEndpoint { source, value }
}

/// Boolean-flag form of [`resolve`] that returns only the URL.
pub fn resolve_base_url(override_value: Option<&str>, is_production: bool) -> String {
    resolve(override_value, BuildMode::from_is_production(is_production)).into_string()
}
