//! Geocoding collaborator trait.

use thiserror::Error;

use crate::Stop;

/// Errors from [`Geocoder`] implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodeError {
    /// The address was empty or whitespace only.
    #[error("address must not be empty")]
    EmptyAddress,
    /// The service found no match for the address.
    #[error("no result found for address `{address}`")]
    NoResult {
        /// The address that failed to resolve.
        address: String,
    },
    /// The request exceeded the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service answered with a non-success HTTP status.
    #[error("geocoding service returned HTTP {status} for {url}: {message}")]
    Http {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error detail from the client.
        message: String,
    },
    /// The service was unreachable.
    #[error("failed to reach geocoding service at {url}: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Error detail from the client.
        message: String,
    },
    /// The response body could not be interpreted.
    #[error("failed to parse geocoding response: {message}")]
    Parse {
        /// Parser detail.
        message: String,
    },
}

/// Resolve a free-text address to a located [`Stop`].
///
/// Each successful call mints a stop with a fresh identifier, even for an
/// address that was resolved before; the external service is authoritative
/// and its answers may drift over time.
pub trait Geocoder {
    /// Geocode a single address.
    fn geocode(&self, address: &str) -> Result<Stop, GeocodeError>;
}
