//! Forward and reverse geocoding against the Open-Meteo geocoding API.
//! No API key required.

use reqwest::Client;
use serde::Deserialize;

use crate::error::{WeatherError, truncate_body};
use crate::model::PlaceName;

pub const GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com/v1";

/// Queries shorter than this many characters skip the network entirely.
const MIN_SEARCH_LEN: usize = 2;

/// One raw row from the geocoding search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoMatch {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub admin1: Option<String>,
}

/// The endpoint omits `results` entirely when nothing matched.
#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeoMatch>>,
}

#[derive(Debug, Clone)]
pub struct Geocoder {
    http: Client,
    base_url: String,
}

impl Geocoder {
    pub fn new(http: Client) -> Self {
        Self::with_base_url(http, GEOCODING_BASE_URL)
    }

    /// Point the geocoder at a different endpoint; used by tests to
    /// target a local mock server.
    pub fn with_base_url(http: Client, base_url: impl Into<String>) -> Self {
        Self { http, base_url: base_url.into() }
    }

    /// Resolve a city name to its single best match.
    ///
    /// Zero matches is `NotFound` (carrying the queried name); the
    /// coordinates are never fabricated.
    pub async fn forward(&self, city_name: &str) -> Result<GeoMatch, WeatherError> {
        let parsed = self
            .query_search(&[
                ("name", city_name.to_string()),
                ("count", "1".to_string()),
                ("language", "en".to_string()),
                ("format", "json".to_string()),
            ])
            .await?;

        parsed
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::NotFound { query: city_name.to_string() })
    }

    /// Best-effort lookup of a place name for a coordinate pair.
    ///
    /// Any failure (transport, status, decode, zero matches) collapses
    /// to the sentinel `PlaceName` — the signature carries the
    /// contract, so callers never see an error from this path.
    pub async fn reverse(&self, lat: f64, lon: f64) -> PlaceName {
        let result = self
            .query_search(&[
                ("latitude", lat.to_string()),
                ("longitude", lon.to_string()),
                ("count", "1".to_string()),
                ("language", "en".to_string()),
                ("format", "json".to_string()),
            ])
            .await;

        match result {
            Ok(parsed) => match parsed.results.unwrap_or_default().into_iter().next() {
                Some(m) => PlaceName {
                    city_name: m.name,
                    country: m.country.unwrap_or_default(),
                },
                None => PlaceName::unknown(),
            },
            Err(e) => {
                tracing::debug!("reverse geocode for {lat},{lon} failed: {e}");
                PlaceName::unknown()
            }
        }
    }

    /// Autocomplete search returning up to 10 raw matches. Queries
    /// shorter than two characters return an empty list without a
    /// network call.
    pub async fn search(&self, query: &str) -> Result<Vec<GeoMatch>, WeatherError> {
        if query.chars().count() < MIN_SEARCH_LEN {
            return Ok(Vec::new());
        }

        let parsed = self
            .query_search(&[
                ("name", query.to_string()),
                ("count", "10".to_string()),
                ("language", "en".to_string()),
                ("format", "json".to_string()),
            ])
            .await?;

        Ok(parsed.results.unwrap_or_default())
    }

    async fn query_search(&self, params: &[(&str, String)]) -> Result<GeocodingResponse, WeatherError> {
        let url = format!("{}/search", self.base_url);

        let res = self.http.get(&url).query(params).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::Upstream {
                endpoint: "geocoding search",
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body)
            .map_err(|source| WeatherError::Decode { endpoint: "geocoding search", source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn short_query_skips_network() {
        // Unroutable base URL: any request would fail loudly.
        let geocoder = Geocoder::with_base_url(Client::new(), "http://127.0.0.1:9");

        let results = geocoder.search("a").await.unwrap();
        assert!(results.is_empty());

        let results = geocoder.search("").await.unwrap();
        assert!(results.is_empty());

        // One character, two bytes: still a short query.
        let results = geocoder.search("é").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn reverse_failure_collapses_to_sentinel() {
        let geocoder = Geocoder::with_base_url(Client::new(), "http://127.0.0.1:9");

        let place = geocoder.reverse(48.85, 2.35).await;
        assert_eq!(place, PlaceName::unknown());
    }
}
