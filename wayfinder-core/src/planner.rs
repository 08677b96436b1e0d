//! Cache-backed route planning facade.

use crate::cache::{Clock, RouteCache, SystemClock};
use crate::{RouteInstructions, RouteResponse, RoutingError, RoutingProvider, Stop, TravelMode};

/// Routing provider wrapper that consults a [`RouteCache`] before going to
/// the external service.
///
/// `get_route` performs the lookup-then-fetch-then-store sequence the UI
/// layer relies on; turn-by-turn instructions are fetched fresh every time,
/// matching the service's own semantics (instructions are requested far less
/// often than geometry).
///
/// # Examples
/// ```
/// use geo::Coord;
/// use std::time::Duration;
/// use wayfinder_core::test_support::StubRoutingProvider;
/// use wayfinder_core::{RoutePlanner, RouteResponse, Stop, TravelMode};
///
/// let response = RouteResponse {
///     geometry: vec![Coord { x: 0.0, y: 0.0 }],
///     duration: Duration::from_secs(60),
/// };
/// let provider = StubRoutingProvider::with_response(response.clone());
/// let mut planner = RoutePlanner::new(provider);
///
/// let stops = vec![
///     Stop::new("a", Coord { x: 0.0, y: 0.0 }),
///     Stop::new("b", Coord { x: 1.0, y: 1.0 }),
/// ];
/// let first = planner.get_route(&stops, TravelMode::Driving)?;
/// let second = planner.get_route(&stops, TravelMode::Driving)?;
/// assert_eq!(first, second);
/// assert_eq!(planner.provider().route_calls(), 1);
/// # Ok::<(), wayfinder_core::RoutingError>(())
/// ```
#[derive(Debug)]
pub struct RoutePlanner<R: RoutingProvider, C: Clock = SystemClock> {
    provider: R,
    cache: RouteCache<C>,
}

impl<R: RoutingProvider> RoutePlanner<R, SystemClock> {
    /// Construct a planner with a fresh cache on the system clock.
    #[must_use]
    pub fn new(provider: R) -> Self {
        Self {
            provider,
            cache: RouteCache::new(),
        }
    }
}

impl<R: RoutingProvider, C: Clock> RoutePlanner<R, C> {
    /// Construct a planner around an existing cache.
    ///
    /// Useful for sharing a pre-warmed cache or injecting a manual clock in
    /// tests.
    #[must_use]
    pub fn with_cache(provider: R, cache: RouteCache<C>) -> Self {
        Self { provider, cache }
    }

    /// The wrapped routing provider.
    pub const fn provider(&self) -> &R {
        &self.provider
    }

    /// Fetch the route for `stops`, consulting the cache first.
    ///
    /// On a miss (or expiry) the external provider is queried and a
    /// successful response is stored before being returned. Provider errors
    /// pass through unchanged and leave the cache untouched.
    pub fn get_route(
        &mut self,
        stops: &[Stop],
        mode: TravelMode,
    ) -> Result<RouteResponse, RoutingError> {
        if stops.len() < 2 {
            return Err(RoutingError::TooFewStops);
        }
        if let Some(cached) = self.cache.lookup(stops, mode) {
            return Ok(cached);
        }
        let response = self.provider.route(stops, mode)?;
        self.cache.store(stops, mode, response.clone());
        Ok(response)
    }

    /// Fetch turn-by-turn instructions for `stops`, uncached.
    pub fn get_instructions(
        &self,
        stops: &[Stop],
        mode: TravelMode,
    ) -> Result<RouteInstructions, RoutingError> {
        if stops.len() < 2 {
            return Err(RoutingError::TooFewStops);
        }
        self.provider.route_instructions(stops, mode)
    }
}
