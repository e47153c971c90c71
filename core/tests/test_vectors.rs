//! Verify resolution and target joining against JSON test vectors stored in
//! `test-vectors/`.
//!
//! The same files can drive other hosts (e.g. through the C ABI) so every
//! binding agrees on the rules.

use endpoint_core::{resolve, BuildMode, ClientConfig, EndpointSource};

fn parse_source(s: &str) -> EndpointSource {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .unwrap_or_else(|e| panic!("unknown source {s}: {e}"))
}

// ---------------------------------------------------------------------------
// Resolve
// ---------------------------------------------------------------------------

#[test]
fn resolve_test_vectors() {
    let raw = include_str!("../../test-vectors/resolve.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let override_value = case["override"].as_str();
        let mode = BuildMode::from_is_production(case["production"].as_bool().unwrap());
        let expected = &case["expected"];

        let resolved = resolve(override_value, mode);
        assert_eq!(
            resolved.source(),
            parse_source(expected["source"].as_str().unwrap()),
            "{name}: source"
        );
        assert_eq!(resolved.as_str(), expected["value"].as_str().unwrap(), "{name}: value");

        // Serialized form matches the vector exactly.
        assert_eq!(serde_json::to_value(&resolved).unwrap(), *expected, "{name}: json");
    }
}

// ---------------------------------------------------------------------------
// Targets
// ---------------------------------------------------------------------------

#[test]
fn target_test_vectors() {
    let raw = include_str!("../../test-vectors/targets.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let client = ClientConfig::new(case["base"].as_str().unwrap());
        let target = client.target(case["path"].as_str().unwrap());
        assert_eq!(target, case["expected"].as_str().unwrap(), "{name}: target");
    }
}
