#[cfg(feature = "cli")]
pub mod cli;

use crate::adapters::http::DEFAULT_TIMEOUT_SECONDS;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Provider-level configuration: where the catalog lives and how long a
/// lookup may take. Loadable from a TOML file or built directly by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

impl ProviderConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_seconds: None,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ProviderConfig = toml::from_str(content)?;
        Ok(config)
    }
}

impl ConfigProvider for ProviderConfig {
    fn api_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl Validate for ProviderConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("endpoint", &self.endpoint)?;
        if let Some(timeout) = self.timeout_seconds {
            validation::validate_range("timeout_seconds", timeout, 1, 300)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml_str() {
        let config = ProviderConfig::from_toml_str(
            r#"
endpoint = "https://poetrydb.org"
timeout_seconds = 10
"#,
        )
        .unwrap();

        assert_eq!(config.endpoint, "https://poetrydb.org");
        assert_eq!(ConfigProvider::timeout_seconds(&config), 10);
    }

    #[test]
    fn test_timeout_defaults_when_absent() {
        let config = ProviderConfig::from_toml_str(r#"endpoint = "https://poetrydb.org""#).unwrap();
        assert_eq!(ConfigProvider::timeout_seconds(&config), 30);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("provider.toml");
        std::fs::write(&path, "endpoint = \"http://localhost:9999\"\n").unwrap();

        let config = ProviderConfig::from_file(&path).unwrap();
        assert_eq!(config.endpoint, "http://localhost:9999");
    }

    #[test]
    fn test_from_toml_str_rejects_malformed_input() {
        let err = ProviderConfig::from_toml_str("endpoint = ").unwrap_err();
        assert!(matches!(
            err,
            crate::utils::error::CatalogError::ConfigParseError(_)
        ));
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        assert!(ProviderConfig::new("").validate().is_err());
        assert!(ProviderConfig::new("ftp://poetrydb.org").validate().is_err());
        assert!(ProviderConfig::new("https://poetrydb.org").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = ProviderConfig::new("https://poetrydb.org");
        config.timeout_seconds = Some(0);
        assert!(config.validate().is_err());
    }
}
