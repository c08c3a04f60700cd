use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("catalog response is not valid JSON: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("poem {title:?} has non-numeric linecount {value:?}: {reason}")]
    ConversionError {
        title: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("configuration parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CatalogError {
    /// Short category string used as the headline of user-facing diagnostics.
    pub fn category(&self) -> &'static str {
        match self {
            CatalogError::TransportError(_) => "Transport Error",
            CatalogError::DecodeError(_) => "Decode Error",
            CatalogError::ConversionError { .. } => "Conversion Error",
            CatalogError::IoError(_)
            | CatalogError::ConfigParseError(_)
            | CatalogError::InvalidConfigValueError { .. } => "Configuration Error",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
