use chrono::DateTime;
use clap::{Parser, Subcommand};

use breeze_core::{WeatherRecord, WeatherService};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "breeze", version, about = "City weather lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current weather for a city.
    City {
        /// City name, e.g. "London".
        name: String,
    },

    /// Show current weather for a coordinate pair.
    Coords {
        latitude: f64,
        longitude: f64,
    },

    /// Search for cities matching a query.
    Search {
        /// Partial city name; at least two characters.
        query: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let service = WeatherService::new()?;

        match self.command {
            Command::City { name } => {
                let record = service.weather_by_city(&name).await?;
                print_record(&record);
            }
            Command::Coords { latitude, longitude } => {
                let record = service.weather_by_coordinates(latitude, longitude).await?;
                print_record(&record);
            }
            Command::Search { query } => {
                let suggestions = service.search_cities(&query).await?;
                if suggestions.is_empty() {
                    println!("No matches for \"{query}\"");
                }
                for s in &suggestions {
                    if s.state.is_empty() {
                        println!("{}, {}", s.name, s.country);
                    } else {
                        println!("{}, {}, {}", s.name, s.state, s.country);
                    }
                }
            }
        }

        Ok(())
    }
}

fn print_record(record: &WeatherRecord) {
    if record.country.is_empty() {
        println!("{}", record.city_name);
    } else {
        println!("{}, {}", record.city_name, record.country);
    }
    println!("  {} ({})", record.description, record.condition);
    println!(
        "  Temperature: {}°C (feels like {}°C)",
        record.temperature, record.feels_like
    );
    println!("  Humidity: {}%", record.humidity);
    println!("  Wind: {} m/s", record.wind_speed);
    println!(
        "  Sunrise: {}  Sunset: {}  [{}]",
        format_time(record.sunrise),
        format_time(record.sunset),
        record.timezone
    );
}

fn format_time(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}
