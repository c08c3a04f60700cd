use crate::utils::error::CatalogError;
use serde::{Deserialize, Serialize};

/// Poem record exactly as the catalog service returns it. The service encodes
/// `linecount` as a string, so this shape is only a decode target and never
/// leaves the normalization pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WirePoem {
    pub author: String,
    pub title: String,
    pub lines: Vec<String>,
    #[serde(rename = "linecount")]
    pub line_count: String,
}

/// Validated poem record. Line order is the poem's structure and is preserved
/// from the wire form untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poem {
    pub author: String,
    pub title: String,
    pub lines: Vec<String>,
    pub line_count: i64,
}

impl TryFrom<WirePoem> for Poem {
    type Error = CatalogError;

    fn try_from(raw: WirePoem) -> Result<Self, Self::Error> {
        let line_count =
            raw.line_count
                .parse::<i64>()
                .map_err(|e| CatalogError::ConversionError {
                    title: raw.title.clone(),
                    value: raw.line_count.clone(),
                    reason: e.to_string(),
                })?;

        Ok(Poem {
            author: raw.author,
            title: raw.title,
            lines: raw.lines,
            line_count,
        })
    }
}

/// What a lookup hands back to the host: a content fingerprint of the raw
/// response plus the poems in service order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoemEnvelope {
    pub id: String,
    pub poems: Vec<Poem>,
}
