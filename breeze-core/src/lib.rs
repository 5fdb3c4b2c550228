//! Core library for the `breeze` weather lookup.
//!
//! This crate defines:
//! - WMO weather-code interpretation (condition categories, descriptions)
//! - Geocoding and forecast transport against the Open-Meteo APIs
//! - Transformation of raw payloads into the canonical weather record
//! - A time-bounded in-memory cache and the access facade on top
//!
//! It is used by `breeze-cli`, but can sit behind any other
//! presentation layer.

pub mod cache;
pub mod condition;
pub mod error;
pub mod forecast;
pub mod geocode;
pub mod model;
pub mod service;
pub mod transform;

pub use cache::{CACHE_TTL, WeatherCache};
pub use condition::{ConditionCategory, describe_wmo_code};
pub use error::WeatherError;
pub use forecast::ForecastClient;
pub use geocode::Geocoder;
pub use model::{CitySuggestion, PlaceName, WeatherRecord};
pub use service::WeatherService;
pub use transform::to_weather_record;
