//! HTTP `RoutingProvider` backed by OSRM's Route service.

use std::time::Duration;

use geo::Coord;
use log::debug;
use wayfinder_core::{
    RouteInstructions, RouteResponse, RouteStep, RoutingError, RoutingProvider, Stop, TravelMode,
};

use super::osrm::{OsrmRoute, OsrmStep, RouteApiResponse};
use crate::http::{BlockingClient, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, ProviderBuildError};

/// Configuration for [`HttpRoutingProvider`].
#[derive(Debug, Clone)]
pub struct HttpRoutingProviderConfig {
    /// Base URL of the OSRM service,
    /// e.g. `"https://router.project-osrm.org"`.
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpRoutingProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://router.project-osrm.org".to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpRoutingProviderConfig {
    /// Create a configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Synchronous [`RoutingProvider`] over the OSRM Route API.
///
/// Queries `/route/v1/{mode}/{coordinates}` with full GeoJSON overviews;
/// instruction requests additionally ask for per-step detail. The best
/// (first) route alternative is used.
#[derive(Debug)]
pub struct HttpRoutingProvider {
    http: BlockingClient,
    config: HttpRoutingProviderConfig,
}

impl HttpRoutingProvider {
    /// Create a provider with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpRoutingProviderConfig::new(base_url))
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpRoutingProviderConfig) -> Result<Self, ProviderBuildError> {
        let http = BlockingClient::new(config.timeout, &config.user_agent)?;
        Ok(Self { http, config })
    }

    /// Build the Route API URL for the given stops and mode.
    ///
    /// The URL format is `{base}/route/v1/{mode}/{coordinates}` where
    /// coordinates are semicolon-separated `lon,lat` pairs in visiting
    /// order.
    fn build_route_url(&self, stops: &[Stop], mode: TravelMode, with_steps: bool) -> String {
        let coords: String = stops
            .iter()
            .map(|stop| format!("{},{}", stop.location.x, stop.location.y))
            .collect::<Vec<_>>()
            .join(";");

        let steps = if with_steps { "&steps=true" } else { "" };
        format!(
            "{}/route/v1/{}/{}?overview=full&geometries=geojson{}",
            self.config.base_url.trim_end_matches('/'),
            mode,
            coords,
            steps
        )
    }

    async fn fetch_route(&self, url: &str) -> Result<RouteApiResponse, RoutingError> {
        debug!("requesting route from {url}");
        let response = self
            .http
            .client()
            .get(url)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, url))?;

        response.json().await.map_err(|err| RoutingError::Parse {
            message: err.to_string(),
        })
    }

    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> RoutingError {
        if error.is_timeout() {
            return RoutingError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }
        if let Some(status) = error.status() {
            return RoutingError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }
        RoutingError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }

    /// Pull the best route out of a service response.
    fn best_route(response: RouteApiResponse) -> Result<OsrmRoute, RoutingError> {
        if !response.is_ok() {
            return Err(RoutingError::Service {
                code: response.code,
                message: response.message.unwrap_or_default(),
            });
        }
        response
            .routes
            .into_iter()
            .next()
            .ok_or(RoutingError::NoRoute)
    }

    fn convert_route(route: OsrmRoute) -> Result<RouteResponse, RoutingError> {
        let geometry = route
            .geometry
            .ok_or_else(|| RoutingError::Parse {
                message: "OSRM response missing route geometry".to_owned(),
            })?
            .coordinates
            .into_iter()
            .map(|[x, y]| Coord { x, y })
            .collect();

        Ok(RouteResponse {
            geometry,
            duration: seconds(route.duration)?,
        })
    }

    fn convert_instructions(route: OsrmRoute) -> Result<RouteInstructions, RoutingError> {
        let steps = route
            .legs
            .into_iter()
            .flat_map(|leg| leg.steps)
            .map(|step| {
                Ok(RouteStep {
                    distance_m: step.distance,
                    duration: seconds(step.duration)?,
                    instruction: instruction_text(&step),
                })
            })
            .collect::<Result<Vec<_>, RoutingError>>()?;

        Ok(RouteInstructions {
            steps,
            distance_m: route.distance,
            duration: seconds(route.duration)?,
        })
    }
}

/// Convert a duration in fractional seconds, rejecting values that would
/// panic `Duration::from_secs_f64`.
fn seconds(value: f64) -> Result<Duration, RoutingError> {
    if value.is_finite() && value >= 0.0 {
        Ok(Duration::from_secs_f64(value))
    } else {
        Err(RoutingError::Parse {
            message: format!("invalid duration {value} in routing response"),
        })
    }
}

/// Human-readable text for a manoeuvre, matching the planner's phrasing.
fn instruction_text(step: &OsrmStep) -> String {
    let name = step.name.as_str();
    match step.maneuver.kind.as_str() {
        "arrive" => format!("Arrive at destination ({name})"),
        "depart" => format!("Depart from origin ({name})"),
        "turn" => match step.maneuver.modifier.as_deref() {
            Some(modifier) if modifier != "straight" => format!("Turn {modifier} onto {name}"),
            _ => format!("Continue on {name}"),
        },
        _ => format!("Continue on {name}"),
    }
}

impl RoutingProvider for HttpRoutingProvider {
    fn route(&self, stops: &[Stop], mode: TravelMode) -> Result<RouteResponse, RoutingError> {
        if stops.len() < 2 {
            return Err(RoutingError::TooFewStops);
        }
        let url = self.build_route_url(stops, mode, false);
        let response = self.http.block_on(self.fetch_route(&url))?;
        Self::convert_route(Self::best_route(response)?)
    }

    fn route_instructions(
        &self,
        stops: &[Stop],
        mode: TravelMode,
    ) -> Result<RouteInstructions, RoutingError> {
        if stops.len() < 2 {
            return Err(RoutingError::TooFewStops);
        }
        let url = self.build_route_url(stops, mode, true);
        let response = self.http.block_on(self.fetch_route(&url))?;
        Self::convert_instructions(Self::best_route(response)?)
    }
}
