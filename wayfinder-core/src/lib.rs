//! Core domain types and algorithms for the Wayfinder route planner.
//!
//! The crate owns the two non-trivial pieces of the planner: the
//! fixed-endpoint [`optimize`] permutation search and the TTL-bound
//! [`RouteCache`]. Geocoding and routing are external collaborators reached
//! through the [`Geocoder`] and [`RoutingProvider`] traits; HTTP
//! implementations live in `wayfinder-data`.
//!
//! Coordinates follow the `geo` convention used throughout the workspace:
//! `Coord { x: longitude, y: latitude }` in WGS84 degrees.

#![forbid(unsafe_code)]

mod cache;
mod distance;
mod geocode;
mod mode;
mod optimize;
mod planner;
mod route;
mod share;
mod stop;

pub mod test_support;

pub use cache::{CACHE_TTL, Clock, RouteCache, SystemClock};
pub use distance::{haversine_km, path_length_km};
pub use geocode::{GeocodeError, Geocoder};
pub use mode::{TravelMode, TravelModeParseError};
pub use optimize::optimize;
pub use planner::RoutePlanner;
pub use route::{RouteInstructions, RouteResponse, RouteStep, RoutingError, RoutingProvider};
pub use share::{ShareError, decode_share_param, encode_share_param};
pub use stop::{Stop, StopId};
