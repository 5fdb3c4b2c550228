//! Conversion of raw forecast payloads into the canonical
//! [`WeatherRecord`].

use chrono::{NaiveDateTime, Utc};

use crate::condition::{ConditionCategory, describe_wmo_code};
use crate::forecast::ForecastResponse;
use crate::model::WeatherRecord;

/// Build the canonical record from a raw forecast payload and a
/// resolved place name.
///
/// Temperatures are rounded to whole degrees; humidity and wind speed
/// are copied as the provider supplied them. The capture timestamp is
/// the wall clock at transform time, not the provider's observation
/// time. Total apart from reading the clock — the payload already
/// passed transport-level validation.
pub fn to_weather_record(raw: &ForecastResponse, city_name: &str, country: &str) -> WeatherRecord {
    let current = &raw.current;
    let is_day = current.is_day == 1;
    let now_millis = Utc::now().timestamp_millis();

    WeatherRecord {
        city_name: city_name.to_string(),
        country: country.to_string(),
        temperature: current.temperature_2m.round() as i32,
        feels_like: current.apparent_temperature.round() as i32,
        humidity: current.relative_humidity_2m,
        wind_speed: current.wind_speed_10m,
        description: describe_wmo_code(current.weather_code, is_day).to_string(),
        icon: format!("{}{}", current.weather_code, if is_day { 'd' } else { 'n' }),
        condition: ConditionCategory::from_wmo_code(current.weather_code),
        dt: now_millis,
        timezone: raw.timezone_abbreviation.clone(),
        sunrise: sun_time_millis(raw.daily.sunrise.first(), now_millis),
        sunset: sun_time_millis(raw.daily.sunset.first(), now_millis),
        lat: raw.latitude,
        lon: raw.longitude,
    }
}

/// Provider sun times are local date-time strings without an offset,
/// e.g. `"2026-08-30T06:12"`. Missing or unparseable values fall back
/// to the capture time so the transform stays total.
fn sun_time_millis(value: Option<&String>, fallback: i64) -> i64 {
    value
        .and_then(|s| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").ok())
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or(fallback)
}
