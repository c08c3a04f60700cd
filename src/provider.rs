use crate::adapters::http::HttpCatalog;
use crate::config::ProviderConfig;
use crate::core::pipeline::PoemLookup;
use crate::domain::model::PoemEnvelope;
use crate::domain::ports::PoemDataSource;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::Validate;
use async_trait::async_trait;

/// User-facing failure report: a short category plus the descriptive cause,
/// in the form the host tool displays to the end user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub category: String,
    pub detail: String,
}

impl From<CatalogError> for Diagnostic {
    fn from(err: CatalogError) -> Self {
        Diagnostic {
            category: err.category().to_string(),
            detail: err.to_string(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.category, self.detail)
    }
}

/// Boundary adapter between the host configuration tool and the lookup
/// pipeline. Construction validates the configuration, so a live provider is
/// always a configured provider.
pub struct PoetryProvider {
    version: String,
    lookup: PoemLookup<HttpCatalog>,
}

impl PoetryProvider {
    pub fn new(version: impl Into<String>, config: ProviderConfig) -> Result<Self> {
        config.validate()?;

        let catalog = HttpCatalog::from_config(&config);
        Ok(Self {
            version: version.into(),
            lookup: PoemLookup::new(catalog),
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Like [`PoemDataSource::read`] but with the failure already rendered
    /// for display.
    pub async fn read_with_diagnostics(
        &self,
        title: &str,
    ) -> std::result::Result<PoemEnvelope, Diagnostic> {
        self.read(title).await.map_err(Diagnostic::from)
    }
}

#[async_trait]
impl PoemDataSource for PoetryProvider {
    async fn read(&self, title: &str) -> Result<PoemEnvelope> {
        self.lookup.fetch(title).await
    }
}
