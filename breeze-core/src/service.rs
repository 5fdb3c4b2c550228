//! Weather access facade.
//!
//! Orchestrates geocoder, forecast transport, transformer and cache
//! for the three operations the presentation layer calls. Each
//! operation checks the cache first and repopulates it on a miss; the
//! sub-steps within one call run strictly sequentially. Concurrent
//! calls share only the cache — two racing misses for the same key may
//! both hit the provider and both write, which is harmless since the
//! payloads are equivalent (last write wins).

use std::time::Duration;

use reqwest::Client;

use crate::cache::{WeatherCache, city_key, coordinate_key, search_key};
use crate::error::WeatherError;
use crate::forecast::ForecastClient;
use crate::geocode::Geocoder;
use crate::model::{CitySuggestion, WeatherRecord};
use crate::transform::to_weather_record;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug)]
pub struct WeatherService {
    geocoder: Geocoder,
    forecast: ForecastClient,
    cache: WeatherCache,
}

impl WeatherService {
    /// Service against the live Open-Meteo endpoints with a fresh
    /// cache.
    pub fn new() -> Result<Self, WeatherError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self::with_parts(
            Geocoder::new(http.clone()),
            ForecastClient::new(http),
            WeatherCache::new(),
        ))
    }

    /// Assemble a service from explicit collaborators. The cache is an
    /// injected dependency, so callers and tests control its lifetime.
    pub fn with_parts(geocoder: Geocoder, forecast: ForecastClient, cache: WeatherCache) -> Self {
        Self { geocoder, forecast, cache }
    }

    /// Current weather for a coordinate pair.
    ///
    /// The place name comes from best-effort reverse geocoding; its
    /// failure never fails this call. Forecast-fetch failures
    /// propagate.
    pub async fn weather_by_coordinates(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<WeatherRecord, WeatherError> {
        let key = coordinate_key(lat, lon);
        if let Some(record) = self.cache.get_weather(&key) {
            tracing::debug!(%key, "serving coordinate weather from cache");
            return Ok(record);
        }

        let place = self.geocoder.reverse(lat, lon).await;
        let raw = self.forecast.fetch_current(lat, lon).await?;
        let record = to_weather_record(&raw, &place.city_name, &place.country);

        self.cache.put_weather(key, record.clone());
        Ok(record)
    }

    /// Current weather for a city name.
    ///
    /// Propagates `NotFound` when the name geocodes to nothing; the
    /// record keeps the caller's spelling of the name, paired with the
    /// geocoded country.
    pub async fn weather_by_city(&self, city_name: &str) -> Result<WeatherRecord, WeatherError> {
        let key = city_key(city_name);
        if let Some(record) = self.cache.get_weather(&key) {
            tracing::debug!(%key, "serving city weather from cache");
            return Ok(record);
        }

        let matched = self.geocoder.forward(city_name).await?;
        let raw = self
            .forecast
            .fetch_current(matched.latitude, matched.longitude)
            .await?;
        let record = to_weather_record(&raw, city_name, matched.country.as_deref().unwrap_or(""));

        self.cache.put_weather(key, record.clone());
        Ok(record)
    }

    /// Search-as-you-type city suggestions. Queries under two
    /// characters return an empty list without touching cache or
    /// network.
    pub async fn search_cities(&self, query: &str) -> Result<Vec<CitySuggestion>, WeatherError> {
        if query.chars().count() < 2 {
            return Ok(Vec::new());
        }

        let key = search_key(query);
        if let Some(suggestions) = self.cache.get_search(&key) {
            tracing::debug!(%key, "serving city search from cache");
            return Ok(suggestions);
        }

        let matches = self.geocoder.search(query).await?;
        let suggestions: Vec<CitySuggestion> = matches
            .into_iter()
            .map(|m| CitySuggestion {
                name: m.name,
                country: m.country.unwrap_or_default(),
                state: m.admin1.unwrap_or_default(),
            })
            .collect();

        self.cache.put_search(key, suggestions.clone());
        Ok(suggestions)
    }
}
