//! Located stops: the atoms of a planned route.

use std::fmt;

use geo::Coord;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, stable identifier for a [`Stop`].
///
/// Assigned once when the stop is created and never reused or mutated;
/// reordering a route moves stops around without minting new identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StopId(Uuid);

impl StopId {
    /// Mint a fresh identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StopId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A geocoded point in the working route.
///
/// Created when an address resolves successfully; destroyed only when the
/// caller removes it from the working set. The display address is free text
/// exactly as the user entered it.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfinder_core::Stop;
///
/// let stop = Stop::new("Tower of London", Coord { x: -0.0761, y: 51.5081 });
/// assert_eq!(stop.address, "Tower of London");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// Stable identity across reorders.
    pub id: StopId,
    /// Address text as entered by the user.
    pub address: String,
    /// WGS84 position with `x = longitude`, `y = latitude`.
    pub location: Coord<f64>,
}

impl Stop {
    /// Construct a stop with a freshly minted identifier.
    #[must_use]
    pub fn new(address: impl Into<String>, location: Coord<f64>) -> Self {
        Self::with_id(StopId::new(), address, location)
    }

    /// Construct a stop with an existing identifier.
    ///
    /// Intended for replaying persisted or deserialized stops; new stops
    /// should use [`Stop::new`].
    #[must_use]
    pub fn with_id(id: StopId, address: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            id,
            address: address.into(),
            location,
        }
    }
}
