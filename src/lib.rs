//! Facade crate for the Wayfinder route-planning engine.
//!
//! This crate re-exports the core domain types, the route optimizer, and the
//! route response cache, and exposes the HTTP geocoding and routing providers
//! behind the `http` feature flag.

#![forbid(unsafe_code)]

pub use wayfinder_core::{
    CACHE_TTL, Clock, GeocodeError, Geocoder, RouteCache, RouteInstructions, RoutePlanner,
    RouteResponse, RouteStep, RoutingError, RoutingProvider, ShareError, Stop, StopId, SystemClock,
    TravelMode, TravelModeParseError, decode_share_param, encode_share_param, haversine_km,
    optimize, path_length_km,
};

#[cfg(feature = "http")]
pub use wayfinder_data::ProviderBuildError;

#[cfg(feature = "http")]
pub use wayfinder_data::geocoding::{HttpGeocoder, HttpGeocoderConfig};

#[cfg(feature = "http")]
pub use wayfinder_data::routing::{HttpRoutingProvider, HttpRoutingProviderConfig};
