//! # Client configuration — `quoteshelf.toml`
//!
//! Defines the TOML configuration file a QuoteShelf deployment ships next to
//! the client (filename: [`QuoteShelfConfig::filename`] = `"quoteshelf.toml"`).
//! Today it carries a single deployment-specific value: the base URL of the
//! backend every request is joined against.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000/api"
//! ```
//!
//! All structs derive `Default` so a missing or empty config file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `quoteshelf.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteShelfConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Backend connection configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL all endpoint paths are joined against.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl QuoteShelfConfig {
    /// Create a config pointing at the given backend base URL.
    pub fn new(base_url: String) -> Self {
        Self {
            api: ApiConfig { base_url },
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "quoteshelf.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = QuoteShelfConfig::from_toml("").unwrap();
        assert_eq!(config, QuoteShelfConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:5000/api");
    }

    #[test]
    fn test_roundtrip() {
        let config = QuoteShelfConfig::new("https://books.example.com/api".to_string());
        let toml_str = config.to_toml().unwrap();
        let parsed = QuoteShelfConfig::from_toml(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file() {
        let config = QuoteShelfConfig::from_toml("[api]\nbase_url = \"http://10.0.0.2/api\"\n")
            .unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.2/api");
    }
}
