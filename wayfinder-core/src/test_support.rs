//! Test-only doubles for clocks and collaborators, used by unit and
//! behaviour tests across the workspace.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

use geo::Coord;

use crate::{
    Clock, GeocodeError, Geocoder, RouteInstructions, RouteResponse, RoutingError,
    RoutingProvider, Stop, TravelMode,
};

/// Manually advanced [`Clock`] for deterministic TTL tests.
///
/// Clones share the same underlying instant, so a test can keep a handle
/// while the cache owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    /// Construct a clock frozen at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    /// Move the clock forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

#[derive(Debug, Clone)]
enum StubAnswer {
    Response(RouteResponse),
    Error(RoutingError),
}

/// Deterministic [`RoutingProvider`] returning a canned response or error
/// and counting calls, so tests can assert how often the external service
/// would have been hit.
#[derive(Debug)]
pub struct StubRoutingProvider {
    answer: StubAnswer,
    route_calls: Cell<usize>,
    instruction_calls: Cell<usize>,
}

impl StubRoutingProvider {
    /// Provider that answers every routing request with `response`.
    #[must_use]
    pub fn with_response(response: RouteResponse) -> Self {
        Self {
            answer: StubAnswer::Response(response),
            route_calls: Cell::new(0),
            instruction_calls: Cell::new(0),
        }
    }

    /// Provider that fails every routing request with `error`.
    #[must_use]
    pub fn with_error(error: RoutingError) -> Self {
        Self {
            answer: StubAnswer::Error(error),
            route_calls: Cell::new(0),
            instruction_calls: Cell::new(0),
        }
    }

    /// How many times [`RoutingProvider::route`] was invoked.
    #[must_use]
    pub fn route_calls(&self) -> usize {
        self.route_calls.get()
    }

    /// How many times [`RoutingProvider::route_instructions`] was invoked.
    #[must_use]
    pub fn instruction_calls(&self) -> usize {
        self.instruction_calls.get()
    }
}

impl RoutingProvider for StubRoutingProvider {
    fn route(&self, stops: &[Stop], _mode: TravelMode) -> Result<RouteResponse, RoutingError> {
        if stops.len() < 2 {
            return Err(RoutingError::TooFewStops);
        }
        self.route_calls.set(self.route_calls.get() + 1);
        match &self.answer {
            StubAnswer::Response(response) => Ok(response.clone()),
            StubAnswer::Error(error) => Err(error.clone()),
        }
    }

    fn route_instructions(
        &self,
        stops: &[Stop],
        _mode: TravelMode,
    ) -> Result<RouteInstructions, RoutingError> {
        if stops.len() < 2 {
            return Err(RoutingError::TooFewStops);
        }
        self.instruction_calls.set(self.instruction_calls.get() + 1);
        match &self.answer {
            StubAnswer::Response(response) => Ok(RouteInstructions {
                steps: Vec::new(),
                distance_m: 0.0,
                duration: response.duration,
            }),
            StubAnswer::Error(error) => Err(error.clone()),
        }
    }
}

/// [`Geocoder`] backed by a fixed address table.
///
/// Unknown addresses yield [`GeocodeError::NoResult`]; known addresses mint
/// a fresh stop on every call, matching real geocoder behaviour.
#[derive(Debug, Default)]
pub struct StubGeocoder {
    table: HashMap<String, Coord<f64>>,
}

impl StubGeocoder {
    /// Construct from `(address, coordinate)` pairs.
    #[must_use]
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Coord<f64>)>,
        S: Into<String>,
    {
        Self {
            table: entries
                .into_iter()
                .map(|(address, coord)| (address.into(), coord))
                .collect(),
        }
    }
}

impl Geocoder for StubGeocoder {
    fn geocode(&self, address: &str) -> Result<Stop, GeocodeError> {
        if address.trim().is_empty() {
            return Err(GeocodeError::EmptyAddress);
        }
        self.table
            .get(address)
            .map(|coord| Stop::new(address, *coord))
            .ok_or_else(|| GeocodeError::NoResult {
                address: address.to_owned(),
            })
    }
}
