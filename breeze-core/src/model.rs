use serde::{Deserialize, Serialize};

use crate::condition::ConditionCategory;

/// Place name resolved by reverse geocoding.
///
/// Reverse lookup is advisory: when it fails (or matches nothing) the
/// sentinel value is used instead of an error, so a weather fetch can
/// proceed without a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceName {
    pub city_name: String,
    pub country: String,
}

impl PlaceName {
    /// The soft-failure sentinel.
    pub fn unknown() -> Self {
        Self {
            city_name: "Unknown Location".to_string(),
            country: String::new(),
        }
    }
}

/// One autocomplete match for a city search. `state` is the provider's
/// admin-area field and is empty when the provider omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitySuggestion {
    pub name: String,
    pub country: String,
    pub state: String,
}

/// Canonical current-conditions record, produced by the transformer
/// from one forecast response. Immutable once built; a later fetch for
/// the same key supersedes it rather than mutating it.
///
/// Temperatures are rounded to whole degrees; humidity and wind speed
/// are copied from the provider as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub city_name: String,
    pub country: String,
    /// Air temperature, °C, rounded to the nearest degree.
    pub temperature: i32,
    /// Apparent temperature, °C, rounded to the nearest degree.
    pub feels_like: i32,
    /// Relative humidity, %.
    pub humidity: f64,
    /// Wind speed, m/s.
    pub wind_speed: f64,
    pub description: String,
    /// Weather code plus a `d`/`n` day-night suffix, e.g. `"0d"`.
    pub icon: String,
    pub condition: ConditionCategory,
    /// Capture time in epoch millis (transform time, not provider time).
    pub dt: i64,
    /// Timezone abbreviation reported by the provider, e.g. `"GMT"`.
    pub timezone: String,
    /// Sunrise in epoch millis.
    pub sunrise: i64,
    /// Sunset in epoch millis.
    pub sunset: i64,
    pub lat: f64,
    pub lon: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_place_sentinel() {
        let place = PlaceName::unknown();
        assert_eq!(place.city_name, "Unknown Location");
        assert_eq!(place.country, "");
    }
}
