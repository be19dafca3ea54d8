//! Decode the engine's JSON response into star records.

use gaiafov_types::StarRecord;

use crate::error::DecodeError;

/// How much of a malformed response to keep for diagnostics.
const SNIPPET_CHARS: usize = 200;

/// Decode the engine's stdout into an ordered sequence of star records.
///
/// The engine's contract is that records arrive sorted ascending by
/// `mean_mag`; this function preserves that order exactly and performs no
/// filtering. Fields missing from a record stay absent.
pub fn decode(text: &str) -> Result<Vec<StarRecord>, DecodeError> {
    let records: Vec<StarRecord> =
        serde_json::from_str(text).map_err(|error| DecodeError {
            error,
            snippet: text.chars().take(SNIPPET_CHARS).collect(),
        })?;

    tracing::debug!(rows = records.len(), "decoded engine response");

    Ok(records)
}
