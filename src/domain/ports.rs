use crate::domain::model::PoemEnvelope;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Raw access to the catalog service. Implementations return the full
/// response body as opaque bytes; interpreting them is the normalizer's job.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_by_title(&self, title: &str) -> Result<Vec<u8>>;
}

/// Configuration surface the catalog adapter needs.
pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}

/// The one read operation exposed to the host tool. Idempotent and
/// side-effect-free on host-managed state.
#[async_trait]
pub trait PoemDataSource: Send + Sync {
    async fn read(&self, title: &str) -> Result<PoemEnvelope>;
}
