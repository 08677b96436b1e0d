//! HTTP geocoding against a Nominatim search endpoint.
//!
//! [`HttpGeocoder`] implements [`wayfinder_core::Geocoder`] over the
//! Nominatim `/search?format=json` API, resolving free-text addresses to
//! located stops. The first search result wins; an empty result set maps to
//! [`wayfinder_core::GeocodeError::NoResult`].
//!
//! # Example
//!
//! ```no_run
//! use wayfinder_core::Geocoder;
//! use wayfinder_data::geocoding::HttpGeocoder;
//!
//! let geocoder = HttpGeocoder::new("https://nominatim.openstreetmap.org")?;
//! let stop = geocoder.geocode("Tower of London")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod nominatim;
mod provider;

pub use provider::{HttpGeocoder, HttpGeocoderConfig};
