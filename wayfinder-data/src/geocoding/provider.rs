//! HTTP `Geocoder` backed by Nominatim.

use std::time::Duration;

use geo::Coord;
use log::debug;
use url::Url;
use wayfinder_core::{GeocodeError, Geocoder, Stop};

use super::nominatim::SearchResult;
use crate::http::{BlockingClient, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, ProviderBuildError};

/// Configuration for [`HttpGeocoder`].
#[derive(Debug, Clone)]
pub struct HttpGeocoderConfig {
    /// Base URL of the Nominatim instance,
    /// e.g. `"https://nominatim.openstreetmap.org"`.
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string; Nominatim's usage policy requires one.
    pub user_agent: String,
}

impl Default for HttpGeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpGeocoderConfig {
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

/// Synchronous [`Geocoder`] over the Nominatim search API.
///
/// The first result for a query wins. Every successful call mints a stop
/// with a fresh identifier; geocoding the same address twice is expected to
/// agree in practice but is not guaranteed bit-exact, as the external
/// service is authoritative.
#[derive(Debug)]
pub struct HttpGeocoder {
    http: BlockingClient,
    config: HttpGeocoderConfig,
}

impl HttpGeocoder {
    /// Create a geocoder with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpGeocoderConfig::new(base_url))
    }

    /// Create a geocoder with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpGeocoderConfig) -> Result<Self, ProviderBuildError> {
        let http = BlockingClient::new(config.timeout, &config.user_agent)?;
        Ok(Self { http, config })
    }

    /// Build the search URL for an address query.
    fn build_search_url(&self, address: &str) -> Result<Url, GeocodeError> {
        let base = format!("{}/search", self.config.base_url.trim_end_matches('/'));
        Url::parse_with_params(&base, [("format", "json"), ("q", address)]).map_err(|err| {
            GeocodeError::Parse {
                message: format!("invalid geocoding URL: {err}"),
            }
        })
    }

    async fn fetch_results(&self, url: Url) -> Result<Vec<SearchResult>, GeocodeError> {
        let url_text = url.to_string();
        let response = self
            .http
            .client()
            .get(url)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url_text))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &url_text))?;

        response.json().await.map_err(|err| GeocodeError::Parse {
            message: err.to_string(),
        })
    }

    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> GeocodeError {
        if error.is_timeout() {
            return GeocodeError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }
        if let Some(status) = error.status() {
            return GeocodeError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }
        GeocodeError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }

    /// Turn the best search result into a stop carrying the queried address.
    fn convert_result(address: &str, result: &SearchResult) -> Result<Stop, GeocodeError> {
        let lat: f64 = result.lat.parse().map_err(|_| GeocodeError::Parse {
            message: format!("latitude `{}` is not a number", result.lat),
        })?;
        let lon: f64 = result.lon.parse().map_err(|_| GeocodeError::Parse {
            message: format!("longitude `{}` is not a number", result.lon),
        })?;
        debug!(
            "geocoded `{address}` to ({lat}, {lon}){}",
            result
                .display_name
                .as_deref()
                .map(|name| format!(" as {name}"))
                .unwrap_or_default()
        );
        Ok(Stop::new(address, Coord { x: lon, y: lat }))
    }
}

impl Geocoder for HttpGeocoder {
    fn geocode(&self, address: &str) -> Result<Stop, GeocodeError> {
        if address.trim().is_empty() {
            return Err(GeocodeError::EmptyAddress);
        }
        let url = self.build_search_url(address)?;
        let results = self.http.block_on(self.fetch_results(url))?;
        let Some(best) = results.first() else {
            return Err(GeocodeError::NoResult {
                address: address.to_owned(),
            });
        };
        Self::convert_result(address, best)
    }
}
