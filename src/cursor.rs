//! Continuation cursor extraction
//!
//! The upstream API reports the next page of a listing as an opaque URL
//! (e.g. `.../stat/?offset=40&limit=20`). The only part the walk needs is
//! the numeric `offset` query parameter; everything else stays client-side
//! configuration.

use crate::error::{Error, Result};
use url::Url;

/// Query parameter that carries the pagination offset.
const OFFSET_PARAM: &str = "offset";

/// Extract the pagination offset from a continuation URL.
///
/// Fails with [`Error::MalformedCursor`] when the URL does not parse, the
/// `offset` parameter is absent, or its value is not a non-negative integer.
/// A failure here signals an upstream contract break and must be propagated,
/// never suppressed.
pub fn extract_offset(next_url: &str) -> Result<u32> {
    let parsed =
        Url::parse(next_url).map_err(|e| Error::malformed_cursor(next_url, e.to_string()))?;

    let raw = parsed
        .query_pairs()
        .find(|(key, _)| key == OFFSET_PARAM)
        .map(|(_, value)| value.into_owned())
        .ok_or_else(|| Error::malformed_cursor(next_url, "missing 'offset' query parameter"))?;

    raw.parse::<u32>().map_err(|_| {
        Error::malformed_cursor(
            next_url,
            format!("'offset' value '{raw}' is not a non-negative integer"),
        )
    })
}
