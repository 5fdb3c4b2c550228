//! Transport for the Open-Meteo forecast endpoint.
//!
//! Fetches raw current conditions plus one day of sunrise/sunset
//! times. Purely a transport step: the payload is deserialized but not
//! interpreted here (see [`crate::transform`]).

use reqwest::Client;
use serde::Deserialize;

use crate::error::{WeatherError, truncate_body};

pub const FORECAST_BASE_URL: &str = "https://api.open-meteo.com/v1";

const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,apparent_temperature,is_day,weather_code,wind_speed_10m";

/// `current` block of the forecast response.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub apparent_temperature: f64,
    /// 1 for day, 0 for night.
    pub is_day: i32,
    pub weather_code: i32,
    pub wind_speed_10m: f64,
}

/// `daily` block: one entry per requested day, local date-time strings.
#[derive(Debug, Clone, Deserialize)]
pub struct DailySun {
    pub sunrise: Vec<String>,
    pub sunset: Vec<String>,
}

/// Raw forecast payload as returned by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone_abbreviation: String,
    pub current: CurrentConditions,
    pub daily: DailySun,
}

#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: Client,
    base_url: String,
}

impl ForecastClient {
    pub fn new(http: Client) -> Self {
        Self::with_base_url(http, FORECAST_BASE_URL)
    }

    /// Point the client at a different endpoint; used by tests to
    /// target a local mock server.
    pub fn with_base_url(http: Client, base_url: impl Into<String>) -> Self {
        Self { http, base_url: base_url.into() }
    }

    /// Fetch current conditions and today's sun times for a coordinate
    /// pair.
    pub async fn fetch_current(&self, lat: f64, lon: f64) -> Result<ForecastResponse, WeatherError> {
        let url = format!("{}/forecast", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", lat.to_string()),
                ("longitude", lon.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("daily", "sunrise,sunset".to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::Upstream {
                endpoint: "forecast",
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body)
            .map_err(|source| WeatherError::Decode { endpoint: "forecast", source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_payload_deserializes() {
        let body = r#"{
            "latitude": 51.51,
            "longitude": -0.13,
            "timezone_abbreviation": "GMT",
            "current": {
                "temperature_2m": 18.4,
                "relative_humidity_2m": 60,
                "apparent_temperature": 17.9,
                "is_day": 1,
                "weather_code": 0,
                "wind_speed_10m": 3.2
            },
            "daily": {
                "sunrise": ["2026-08-30T06:12"],
                "sunset": ["2026-08-30T19:58"]
            }
        }"#;

        let parsed: ForecastResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.current.weather_code, 0);
        assert_eq!(parsed.current.is_day, 1);
        assert_eq!(parsed.current.relative_humidity_2m, 60.0);
        assert_eq!(parsed.daily.sunrise.len(), 1);
        assert_eq!(parsed.timezone_abbreviation, "GMT");
    }
}
