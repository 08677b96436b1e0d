//! Share-link encoding for a working route.
//!
//! A route is shared as its ordered address strings, serialized to JSON and
//! wrapped in URL-safe base64 so the result can travel as a query parameter.
//! Decoding yields addresses only: the receiving session re-geocodes each
//! one independently, minting new stop identifiers, because the external
//! geocoding service is authoritative and its answers are not guaranteed
//! bit-stable over time.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use thiserror::Error;

use crate::Stop;

/// Errors from [`decode_share_param`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    /// The parameter was not valid URL-safe base64.
    #[error("share parameter is not valid base64: {message}")]
    InvalidEncoding {
        /// Decoder detail.
        message: String,
    },
    /// The decoded bytes were not a JSON array of strings.
    #[error("share parameter payload is not a JSON list of addresses: {message}")]
    InvalidPayload {
        /// Parser detail.
        message: String,
    },
}

/// Encode the ordered addresses of `stops` as a URL-safe share parameter.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfinder_core::{Stop, decode_share_param, encode_share_param};
///
/// let stops = vec![
///     Stop::new("London Bridge", Coord { x: -0.0877, y: 51.5079 }),
///     Stop::new("Tower of London", Coord { x: -0.0761, y: 51.5081 }),
/// ];
/// let param = encode_share_param(&stops);
/// let addresses = decode_share_param(&param)?;
/// assert_eq!(addresses, vec!["London Bridge", "Tower of London"]);
/// # Ok::<(), wayfinder_core::ShareError>(())
/// ```
#[must_use]
pub fn encode_share_param(stops: &[Stop]) -> String {
    let addresses: Vec<&str> = stops.iter().map(|stop| stop.address.as_str()).collect();
    // Serializing a list of strings cannot fail.
    let json = serde_json::to_string(&addresses).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

/// Decode a share parameter back into its ordered address strings.
///
/// # Errors
///
/// Returns [`ShareError::InvalidEncoding`] for malformed base64 and
/// [`ShareError::InvalidPayload`] when the decoded bytes are not a JSON
/// array of strings.
pub fn decode_share_param(param: &str) -> Result<Vec<String>, ShareError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(param)
        .map_err(|err| ShareError::InvalidEncoding {
            message: err.to_string(),
        })?;
    serde_json::from_slice(&bytes).map_err(|err| ShareError::InvalidPayload {
        message: err.to_string(),
    })
}
