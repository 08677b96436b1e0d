//! Route responses and the routing collaborator trait.

use std::time::Duration;

use geo::Coord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Stop, TravelMode};

/// Result of a routing computation for a stop sequence and travel mode.
///
/// The geometry traces the path as WGS84 coordinates with `x = longitude`,
/// `y = latitude`; the duration is the estimated travel time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResponse {
    /// Path geometry in visiting order.
    pub geometry: Vec<Coord<f64>>,
    /// Estimated total travel time.
    pub duration: Duration,
}

/// A single turn-by-turn instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    /// Length of this step in metres.
    pub distance_m: f64,
    /// Estimated time for this step.
    pub duration: Duration,
    /// Human-readable manoeuvre description.
    pub instruction: String,
}

/// Turn-by-turn instructions for a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteInstructions {
    /// Ordered manoeuvres from origin to destination.
    pub steps: Vec<RouteStep>,
    /// Total route length in metres.
    pub distance_m: f64,
    /// Estimated total travel time.
    pub duration: Duration,
}

/// Errors from [`RoutingProvider`] implementations.
///
/// Collaborator failures surface here as values; they never unwind into the
/// optimizer or cache logic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// Routing needs at least two stops. Callers should guard before
    /// invoking the provider; the guard is enforced here as well so a
    /// malformed call cannot reach the network.
    #[error("at least two stops are required to compute a route")]
    TooFewStops,
    /// The request exceeded the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service answered with a non-success HTTP status.
    #[error("routing service returned HTTP {status} for {url}: {message}")]
    Http {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error detail from the client.
        message: String,
    },
    /// The service was unreachable.
    #[error("failed to reach routing service at {url}: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Error detail from the client.
        message: String,
    },
    /// The service reported an application-level error code.
    #[error("routing service error {code}: {message}")]
    Service {
        /// Service status code, e.g. `NoRoute` or `InvalidQuery`.
        code: String,
        /// Error message from the service, possibly empty.
        message: String,
    },
    /// The response body could not be interpreted.
    #[error("failed to parse routing response: {message}")]
    Parse {
        /// Parser detail.
        message: String,
    },
    /// The service answered successfully but found no route.
    #[error("no route found between the given stops")]
    NoRoute,
}

/// Compute routes between ordered stops via an external routing service.
///
/// Implementations are synchronous from the caller's perspective; any
/// network suspension happens inside the provider.
pub trait RoutingProvider {
    /// Fetch the path geometry and duration for `stops` in order.
    ///
    /// Returns [`RoutingError::TooFewStops`] for fewer than two stops.
    fn route(&self, stops: &[Stop], mode: TravelMode) -> Result<RouteResponse, RoutingError>;

    /// Fetch turn-by-turn instructions for `stops` in order.
    ///
    /// Returns [`RoutingError::TooFewStops`] for fewer than two stops.
    fn route_instructions(
        &self,
        stops: &[Stop],
        mode: TravelMode,
    ) -> Result<RouteInstructions, RoutingError>;
}
