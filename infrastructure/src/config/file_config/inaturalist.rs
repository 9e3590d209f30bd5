//! iNaturalist API configuration from TOML (`[inaturalist]` section)

use serde::{Deserialize, Serialize};
use taxa_domain::DEFAULT_OBSERVATIONS_BASE;

pub const DEFAULT_API_BASE: &str = "https://api.inaturalist.org/v1";
pub const DEFAULT_USER_AGENT: &str = concat!("taxa-check/", env!("CARGO_PKG_VERSION"));

/// Raw iNaturalist configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInaturalistConfig {
    /// API root; `/taxa/autocomplete` is appended
    pub api_base: String,
    /// Observations page prefix used for result links
    pub site_base: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for FileInaturalistConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            site_base: DEFAULT_OBSERVATIONS_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_section_keeps_defaults() {
        let toml_str = r#"
[inaturalist]
api_base = "http://localhost:8080/v1"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.inaturalist.api_base, "http://localhost:8080/v1");
        assert_eq!(config.inaturalist.site_base, DEFAULT_OBSERVATIONS_BASE);
        assert_eq!(config.inaturalist.timeout_seconds, 30);
    }
}
