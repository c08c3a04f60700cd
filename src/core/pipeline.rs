use crate::core::normalize;
use crate::domain::model::PoemEnvelope;
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;

/// Fetch-and-normalize pipeline: one catalog lookup, fully buffered, then
/// decoded and converted in a single all-or-nothing pass. Holds no state
/// between invocations, so concurrent lookups need no coordination.
pub struct PoemLookup<S: CatalogSource> {
    source: S,
}

impl<S: CatalogSource> PoemLookup<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn fetch(&self, title: &str) -> Result<PoemEnvelope> {
        tracing::debug!("Looking up poems titled {:?}", title);
        let body = self.source.fetch_by_title(title).await?;
        tracing::debug!("Catalog returned {} bytes", body.len());

        let envelope = normalize::normalize(&body)?;
        tracing::info!(
            "Fetched {} poem(s) for {:?} (id {})",
            envelope.poems.len(),
            title,
            &envelope.id[..12.min(envelope.id.len())]
        );

        Ok(envelope)
    }
}
