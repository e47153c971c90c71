//! Client configuration built from a resolved endpoint.
//!
//! # Design
//! `ClientConfig` holds only the base URL and carries no mutable state. It
//! is what gets handed to whichever HTTP client the application uses; the
//! transport itself lives outside this crate. `target` turns a relative
//! request path into the full URL that client should call.

use crate::endpoint::ResolvedEndpoint;

/// Base URL configuration for an HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    pub fn from_endpoint(endpoint: &ResolvedEndpoint) -> Self {
        Self::new(endpoint.as_str())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request target for `path`.
    ///
    /// Absolute URLs are returned unchanged. Otherwise base and path are
    /// joined with exactly one `/`; an empty path yields the base itself.
    pub fn target(&self, path: &str) -> String {
        if is_absolute_url(path) {
            return path.to_string();
        }
        if path.is_empty() {
            return self.base_url.clone();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl From<&ResolvedEndpoint> for ClientConfig {
    fn from(endpoint: &ResolvedEndpoint) -> Self {
        Self::from_endpoint(endpoint)
    }
}

/// `scheme://...` or protocol-relative `//...`.
fn is_absolute_url(path: &str) -> bool {
    if path.starts_with("//") {
        return true;
    }
    match path.split_once("://") {
        Some((scheme, _)) => {
            let mut chars = scheme.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::{resolve, BuildMode};

    fn dev() -> ClientConfig {
        ClientConfig::from_endpoint(&resolve(None, BuildMode::Development))
    }

    #[test]
    fn joins_relative_path() {
        assert_eq!(dev().target("products/"), "http://localhost:8000/api/products/");
    }

    #[test]
    fn leading_slash_is_not_doubled() {
        assert_eq!(dev().target("/products/"), "http://localhost:8000/api/products/");
    }

    #[test]
    fn trailing_slash_on_base_is_not_doubled() {
        let client = ClientConfig::new("https://api.example.com/");
        assert_eq!(client.target("/brands/"), "https://api.example.com/brands/");
    }

    #[test]
    fn production_targets_stay_relative() {
        let client = ClientConfig::from(&resolve(None, BuildMode::Production));
        assert_eq!(client.target("policies/3/"), "/api/policies/3/");
    }

    #[test]
    fn absolute_path_bypasses_base() {
        assert_eq!(
            dev().target("https://cdn.example.com/logo.png"),
            "https://cdn.example.com/logo.png"
        );
        assert_eq!(dev().target("//cdn.example.com/x"), "//cdn.example.com/x");
    }

    #[test]
    fn empty_path_returns_base() {
        assert_eq!(dev().target(""), "http://localhost:8000/api");
    }

    #[test]
    fn query_strings_with_colons_are_relative() {
        assert_eq!(
            dev().target("price-trend/?since=12:00"),
            "http://localhost:8000/api/price-trend/?since=12:00"
        );
    }

    #[test]
    fn base_url_is_kept_verbatim() {
        let client = ClientConfig::new("https://api.example.com/");
        assert_eq!(client.base_url(), "https://api.example.com/");
    }
}
