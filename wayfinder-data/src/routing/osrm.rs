//! OSRM Route API response types.
//!
//! This module provides deserialisation types for the OSRM Route service
//! response format with GeoJSON geometries. The Route service computes the
//! fastest route through the supplied coordinates in order.
//!
//! See: <http://project-osrm.org/docs/v5.24.0/api/#route-service>

use serde::Deserialize;

/// OSRM Route API response.
///
/// Contains either a list of candidate routes on success or an error message
/// on failure; the `code` field indicates the response status.
#[derive(Debug, Deserialize)]
pub(crate) struct RouteApiResponse {
    /// Status code from OSRM.
    ///
    /// Common values:
    /// - `"Ok"` - Request was successful
    /// - `"NoRoute"` - No route was found between the coordinates
    /// - `"InvalidQuery"` - Invalid query parameters
    pub(crate) code: String,

    /// Optional error message when `code` is not `"Ok"`.
    pub(crate) message: Option<String>,

    /// Candidate routes, best first.
    #[serde(default)]
    pub(crate) routes: Vec<OsrmRoute>,
}

impl RouteApiResponse {
    /// Check if the response indicates success.
    pub(crate) fn is_ok(&self) -> bool {
        self.code == "Ok"
    }
}

/// A single route alternative.
#[derive(Debug, Deserialize)]
pub(crate) struct OsrmRoute {
    /// Total route length in metres.
    pub(crate) distance: f64,
    /// Total travel time in seconds.
    pub(crate) duration: f64,
    /// GeoJSON line geometry; present when `geometries=geojson` was asked.
    pub(crate) geometry: Option<OsrmGeometry>,
    /// Per-waypoint-pair legs; steps are present when `steps=true` was asked.
    #[serde(default)]
    pub(crate) legs: Vec<OsrmLeg>,
}

/// GeoJSON line geometry: coordinate pairs in `[lon, lat]` order.
#[derive(Debug, Deserialize)]
pub(crate) struct OsrmGeometry {
    /// Path coordinates, each `[longitude, latitude]`.
    pub(crate) coordinates: Vec<[f64; 2]>,
}

/// One leg of a route, between two consecutive waypoints.
#[derive(Debug, Deserialize)]
pub(crate) struct OsrmLeg {
    /// Turn-by-turn steps for this leg.
    #[serde(default)]
    pub(crate) steps: Vec<OsrmStep>,
}

/// A single manoeuvre within a leg.
#[derive(Debug, Deserialize)]
pub(crate) struct OsrmStep {
    /// Step length in metres.
    pub(crate) distance: f64,
    /// Step travel time in seconds.
    pub(crate) duration: f64,
    /// Name of the road this step travels on, possibly empty.
    #[serde(default)]
    pub(crate) name: String,
    /// The manoeuvre at the start of the step.
    pub(crate) maneuver: OsrmManeuver,
}

/// Manoeuvre metadata for a step.
#[derive(Debug, Deserialize)]
pub(crate) struct OsrmManeuver {
    /// Manoeuvre kind, e.g. `depart`, `turn`, `arrive`.
    #[serde(rename = "type")]
    pub(crate) kind: String,
    /// Turn direction, e.g. `left`, `slight right`, `straight`.
    pub(crate) modifier: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialise_success_response() {
        let json = r#"{
            "code": "Ok",
            "routes": [{
                "distance": 1523.4,
                "duration": 312.7,
                "geometry": {
                    "coordinates": [[-0.1, 51.5], [-0.12, 51.51]]
                },
                "legs": [{
                    "steps": [{
                        "distance": 100.0,
                        "duration": 20.0,
                        "name": "Borough High Street",
                        "maneuver": {"type": "depart", "modifier": "right"}
                    }]
                }]
            }]
        }"#;

        let response: RouteApiResponse = serde_json::from_str(json).expect("should deserialise");

        assert!(response.is_ok());
        assert_eq!(response.routes.len(), 1);
        let route = &response.routes[0];
        assert_eq!(route.duration, 312.7);
        let geometry = route.geometry.as_ref().expect("should have geometry");
        assert_eq!(geometry.coordinates, vec![[-0.1, 51.5], [-0.12, 51.51]]);
        assert_eq!(route.legs[0].steps[0].maneuver.kind, "depart");
    }

    #[test]
    fn deserialise_error_response() {
        let json = r#"{
            "code": "NoRoute",
            "message": "Impossible route between points"
        }"#;

        let response: RouteApiResponse = serde_json::from_str(json).expect("should deserialise");

        assert!(!response.is_ok());
        assert_eq!(
            response.message,
            Some("Impossible route between points".to_string())
        );
        assert!(response.routes.is_empty());
    }

    #[test]
    fn deserialise_step_without_modifier() {
        let json = r#"{
            "distance": 5.0,
            "duration": 1.0,
            "name": "",
            "maneuver": {"type": "arrive"}
        }"#;

        let step: OsrmStep = serde_json::from_str(json).expect("should deserialise");

        assert!(step.maneuver.modifier.is_none());
        assert!(step.name.is_empty());
    }
}
