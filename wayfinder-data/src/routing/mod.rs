//! HTTP routing against an OSRM route service.
//!
//! [`HttpRoutingProvider`] implements [`wayfinder_core::RoutingProvider`]
//! over the OSRM Route API, fetching path geometry and duration for an
//! ordered stop sequence, and turn-by-turn instructions when asked.
//!
//! # Example
//!
//! ```no_run
//! use geo::Coord;
//! use wayfinder_core::{RoutingProvider, Stop, TravelMode};
//! use wayfinder_data::routing::HttpRoutingProvider;
//!
//! let provider = HttpRoutingProvider::new("https://router.project-osrm.org")?;
//! let stops = vec![
//!     Stop::new("a", Coord { x: -0.1, y: 51.5 }),
//!     Stop::new("b", Coord { x: -0.2, y: 51.6 }),
//! ];
//! let response = provider.route(&stops, TravelMode::Driving)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod osrm;
mod provider;

pub use provider::{HttpRoutingProvider, HttpRoutingProviderConfig};
