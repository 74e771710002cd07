//! Inspector configuration.
//!
//! Provides [`InspectConfig`]. Values are loaded from environment variables and
//! may be overridden by command-line flags.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Inspector configuration.
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct InspectConfig {
    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("warn"))]
    pub log_level: String,

    /// Whether JSON output is pretty-printed.
    #[builder(default = false)]
    pub pretty: bool,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            log_level: String::from("warn"),
            pretty: false,
        }
    }
}

impl InspectConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `LOG_LEVEL` | `warn` |
    /// | `INSPECT_PRETTY` | `false` |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }
        if let Some(v) = lookup("INSPECT_PRETTY") {
            config.pretty = parse_bool(&v);
        }

        config
    }

    /// Apply command-line flags on top of this configuration.
    ///
    /// A flag that was not given keeps the current value.
    #[must_use]
    pub fn with_overrides(self, log_level: Option<String>, pretty: bool) -> Self {
        Self::builder()
            .log_level(log_level.unwrap_or(self.log_level))
            .pretty(pretty || self.pretty)
            .build()
    }
}

/// Parse a string as a boolean, accepting `"1"` and `"true"` (case-insensitive).
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_should_create_default_config() {
        let config = InspectConfig::default();
        assert_eq!(config.log_level, "warn");
        assert!(!config.pretty);
    }

    #[test]
    fn test_should_read_overrides_from_lookup() {
        let vars = HashMap::from([("LOG_LEVEL", "debug"), ("INSPECT_PRETTY", "TRUE")]);
        let config = InspectConfig::from_lookup(|key| vars.get(key).map(|v| (*v).to_owned()));
        assert_eq!(config.log_level, "debug");
        assert!(config.pretty);
    }

    #[test]
    fn test_should_keep_defaults_for_missing_vars() {
        let config = InspectConfig::from_lookup(|_| None);
        assert_eq!(config.log_level, "warn");
        assert!(!config.pretty);
    }

    #[test]
    fn test_should_build_with_typed_builder() {
        let config = InspectConfig::builder()
            .log_level("trace".into())
            .pretty(true)
            .build();
        assert_eq!(config.log_level, "trace");
        assert!(config.pretty);
    }

    #[test]
    fn test_should_apply_flag_overrides() {
        let config = InspectConfig::default().with_overrides(Some("debug".into()), true);
        assert_eq!(config.log_level, "debug");
        assert!(config.pretty);
    }

    #[test]
    fn test_should_keep_env_values_without_flags() {
        let env = InspectConfig::builder()
            .log_level("info".into())
            .pretty(true)
            .build();
        let config = env.with_overrides(None, false);
        assert_eq!(config.log_level, "info");
        assert!(config.pretty);
    }

    #[test]
    fn test_should_parse_bool_values() {
        assert!(parse_bool("1"));
        assert!(parse_bool("true"));
        assert!(parse_bool("True"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool("yes"));
    }

    #[test]
    fn test_should_serialize_to_camel_case_json() {
        let json = serde_json::to_string(&InspectConfig::default()).expect("test serialization");
        assert_eq!(json, r#"{"logLevel":"warn","pretty":false}"#);
    }
}
