//! HTTP implementations of the Wayfinder collaborator traits.
//!
//! The core library stays synchronous so it can be embedded anywhere; the
//! providers here bridge async `reqwest` calls onto that interface by
//! blocking on an owned Tokio runtime (see [`http`] for the dispatch rules).

#![forbid(unsafe_code)]

pub mod geocoding;
mod http;
pub mod routing;

pub use http::ProviderBuildError;
