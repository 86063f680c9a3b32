//! Config schema - Configuration for journeymap

use serde::{Deserialize, Serialize};

/// Storage key used by the browser build; kept so exported blobs line up
pub const DEFAULT_STORAGE_KEY: &str = "upstack-story-app";

/// Main configuration for journeymap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Name of the persisted state blob (file stem under .journeymap/)
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Write the state blob with indentation
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,

    /// Start from the sample project instead of a single empty one
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_pretty_json() -> bool {
    true
}

fn default_seed_sample_data() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: 1,
            storage_key: default_storage_key(),
            pretty_json: true,
            seed_sample_data: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.schema_version, 1);
        assert_eq!(config.storage_key, "upstack-story-app");
        assert!(config.pretty_json);
        assert!(config.seed_sample_data);
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = Config {
            storage_key: "team-board".to_string(),
            pretty_json: false,
            ..Config::default()
        };
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_partial_json() {
        let json = r#"{"seed_sample_data": false}"#;
        let parsed: Config = serde_json::from_str(json).unwrap();

        assert!(!parsed.seed_sample_data);
        assert_eq!(parsed.storage_key, DEFAULT_STORAGE_KEY);
        assert!(parsed.pretty_json);
    }
}
