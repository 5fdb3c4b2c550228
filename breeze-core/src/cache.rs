//! In-memory, time-bounded cache for weather records and city search
//! results.
//!
//! Entries expire lazily: an age check on read, no background sweep
//! and no capacity bound. Stale entries may sit in memory until
//! overwritten, which is an accepted tradeoff for a session-scoped
//! cache.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::model::{CitySuggestion, WeatherRecord};

/// How long a cached entry stays servable.
pub const CACHE_TTL: Duration = Duration::from_millis(30_000);

/// Cache key for a coordinate lookup: each axis rounded to two
/// decimal places, so nearby lookups share an entry.
pub fn coordinate_key(lat: f64, lon: f64) -> String {
    format!("{lat:.2},{lon:.2}")
}

/// Cache key for a city-name lookup.
pub fn city_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Cache key for an autocomplete query.
pub fn search_key(query: &str) -> String {
    format!("search:{}", query.trim().to_lowercase())
}

#[derive(Debug)]
struct Entry<T> {
    payload: T,
    stored_at: Instant,
}

#[derive(Debug)]
struct Store<T> {
    entries: Mutex<HashMap<String, Entry<T>>>,
}

impl<T: Clone> Store<T> {
    fn new() -> Self {
        Self { entries: Mutex::new(HashMap::new()) }
    }

    fn get_at(&self, key: &str, now: Instant, ttl: Duration) -> Option<T> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(key)
            .filter(|entry| now.duration_since(entry.stored_at) < ttl)
            .map(|entry| entry.payload.clone())
    }

    fn put(&self, key: String, payload: T) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key, Entry { payload, stored_at: Instant::now() });
    }
}

/// Two independent stores: weather records keyed by normalized
/// location-or-city string, suggestion lists keyed by search string.
#[derive(Debug)]
pub struct WeatherCache {
    ttl: Duration,
    weather: Store<WeatherRecord>,
    searches: Store<Vec<CitySuggestion>>,
}

impl Default for WeatherCache {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherCache {
    pub fn new() -> Self {
        Self::with_ttl(CACHE_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            weather: Store::new(),
            searches: Store::new(),
        }
    }

    /// Return the cached record for `key` if it is younger than the
    /// TTL; expired and missing entries both read as absent.
    pub fn get_weather(&self, key: &str) -> Option<WeatherRecord> {
        self.get_weather_at(key, Instant::now())
    }

    fn get_weather_at(&self, key: &str, now: Instant) -> Option<WeatherRecord> {
        self.weather.get_at(key, now, self.ttl)
    }

    /// Store a record under `key`, unconditionally replacing any
    /// previous entry and refreshing its timestamp.
    pub fn put_weather(&self, key: impl Into<String>, record: WeatherRecord) {
        self.weather.put(key.into(), record);
    }

    pub fn get_search(&self, key: &str) -> Option<Vec<CitySuggestion>> {
        self.get_search_at(key, Instant::now())
    }

    fn get_search_at(&self, key: &str, now: Instant) -> Option<Vec<CitySuggestion>> {
        self.searches.get_at(key, now, self.ttl)
    }

    pub fn put_search(&self, key: impl Into<String>, suggestions: Vec<CitySuggestion>) {
        self.searches.put(key.into(), suggestions);
    }
}
