use crate::domain::ports::{CatalogSource, ConfigProvider};
use crate::utils::error::Result;
use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// HTTP adapter for the poem catalog service.
///
/// One GET per lookup against `<endpoint>/title/<title>`, body fully read
/// into memory. The HTTP status code is not inspected: error bodies flow to
/// the normalizer and fail there as decode errors.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    endpoint: String,
    timeout: Duration,
    client: Client,
}

impl HttpCatalog {
    pub fn new(endpoint: String) -> Self {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT_SECONDS)
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::with_timeout(config.api_endpoint().to_string(), config.timeout_seconds())
    }

    pub fn with_timeout(endpoint: String, timeout_seconds: u64) -> Self {
        Self {
            endpoint,
            timeout: Duration::from_secs(timeout_seconds),
            client: Client::new(),
        }
    }

    /// Titles are percent-encoded so reserved characters cannot alter the
    /// request path.
    fn lookup_url(&self, title: &str) -> String {
        let encoded = utf8_percent_encode(title, NON_ALPHANUMERIC);
        format!("{}/title/{}", self.endpoint, encoded)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_by_title(&self, title: &str) -> Result<Vec<u8>> {
        let url = self.lookup_url(title);
        tracing::debug!("Making catalog request to: {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await?;

        tracing::debug!("Catalog response status: {}", response.status());

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
