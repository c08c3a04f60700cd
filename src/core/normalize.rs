use crate::domain::model::{Poem, PoemEnvelope, WirePoem};
use crate::utils::error::Result;
use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of the raw response body. The token is computed over
/// the bytes as received, not the converted records, so it is stable across
/// changes to the conversion logic and lets the host diff fetches cheaply.
pub fn fingerprint(body: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body);
    hex::encode(hasher.finalize())
}

/// Turn a raw catalog response into a validated envelope.
///
/// Single pass, all-or-nothing: a body that is not a JSON array of wire
/// records fails with `DecodeError`, and one record with a non-numeric
/// `linecount` fails the whole batch with `ConversionError`. Service order
/// is preserved.
pub fn normalize(body: &[u8]) -> Result<PoemEnvelope> {
    let wire_poems: Vec<WirePoem> = serde_json::from_slice(body)?;

    let poems = wire_poems
        .into_iter()
        .map(Poem::try_from)
        .collect::<Result<Vec<_>>>()?;

    Ok(PoemEnvelope {
        id: fingerprint(body),
        poems,
    })
}
