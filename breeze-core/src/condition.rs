//! Interpretation of WMO weather codes.
//!
//! The forecast provider reports sky/precipitation state as a numeric
//! WMO code (<https://open-meteo.com/en/docs#weathervariables>). This
//! module is the single place that code is interpreted; icon selection
//! and textual descriptions both go through it so the two can never
//! drift apart.

use serde::{Deserialize, Serialize};

/// Condition category derived from a WMO weather code. Drives icon and
/// background-theme selection in the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConditionCategory {
    Clear,
    Clouds,
    Rain,
    Snow,
    Thunderstorm,
    Mist,
    #[default]
    Default,
}

impl ConditionCategory {
    /// Map a WMO weather code to its category. Total over all integers;
    /// codes outside the known ranges fall back to `Default`.
    pub fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => Self::Clear,
            1..=3 => Self::Clouds,
            51..=67 | 80..=82 => Self::Rain,
            71..=77 | 85 | 86 => Self::Snow,
            95..=99 => Self::Thunderstorm,
            45..=48 => Self::Mist,
            _ => Self::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Clouds => "clouds",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Thunderstorm => "thunderstorm",
            Self::Mist => "mist",
            Self::Default => "default",
        }
    }
}

impl std::fmt::Display for ConditionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-readable description for a WMO weather code. Only code 0 is
/// day/night sensitive; unknown codes return "Unknown".
pub fn describe_wmo_code(code: i32, is_day: bool) -> &'static str {
    match code {
        0 => {
            if is_day {
                "Clear sky"
            } else {
                "Clear night"
            }
        }
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_code() {
        assert_eq!(ConditionCategory::from_wmo_code(0), ConditionCategory::Clear);
    }

    #[test]
    fn cloud_codes() {
        for code in 1..=3 {
            assert_eq!(ConditionCategory::from_wmo_code(code), ConditionCategory::Clouds);
        }
    }

    #[test]
    fn rain_codes() {
        for code in [51, 53, 55, 56, 57, 61, 63, 65, 66, 67, 80, 81, 82] {
            assert_eq!(ConditionCategory::from_wmo_code(code), ConditionCategory::Rain);
        }
    }

    #[test]
    fn snow_codes() {
        for code in [71, 73, 75, 77, 85, 86] {
            assert_eq!(ConditionCategory::from_wmo_code(code), ConditionCategory::Snow);
        }
    }

    #[test]
    fn thunderstorm_codes() {
        for code in [95, 96, 99] {
            assert_eq!(
                ConditionCategory::from_wmo_code(code),
                ConditionCategory::Thunderstorm
            );
        }
    }

    #[test]
    fn mist_codes() {
        for code in [45, 48] {
            assert_eq!(ConditionCategory::from_wmo_code(code), ConditionCategory::Mist);
        }
    }

    #[test]
    fn category_boundaries() {
        // Edges just outside each known range fall back to Default.
        assert_eq!(ConditionCategory::from_wmo_code(67), ConditionCategory::Rain);
        assert_eq!(ConditionCategory::from_wmo_code(68), ConditionCategory::Default);
        assert_eq!(ConditionCategory::from_wmo_code(50), ConditionCategory::Default);
        assert_eq!(ConditionCategory::from_wmo_code(70), ConditionCategory::Default);
        assert_eq!(ConditionCategory::from_wmo_code(78), ConditionCategory::Default);
        assert_eq!(ConditionCategory::from_wmo_code(84), ConditionCategory::Default);
        assert_eq!(ConditionCategory::from_wmo_code(87), ConditionCategory::Default);
        assert_eq!(ConditionCategory::from_wmo_code(94), ConditionCategory::Default);
        assert_eq!(ConditionCategory::from_wmo_code(100), ConditionCategory::Default);
        assert_eq!(ConditionCategory::from_wmo_code(-1), ConditionCategory::Default);
        assert_eq!(ConditionCategory::from_wmo_code(44), ConditionCategory::Default);
        assert_eq!(ConditionCategory::from_wmo_code(49), ConditionCategory::Default);
    }

    #[test]
    fn category_display() {
        assert_eq!(ConditionCategory::Clear.to_string(), "clear");
        assert_eq!(ConditionCategory::Default.to_string(), "default");
    }

    #[test]
    fn clear_description_is_day_night_sensitive() {
        assert_eq!(describe_wmo_code(0, true), "Clear sky");
        assert_eq!(describe_wmo_code(0, false), "Clear night");
    }

    #[test]
    fn descriptions_match_wmo_table() {
        let expected = [
            (1, "Mainly clear"),
            (2, "Partly cloudy"),
            (3, "Overcast"),
            (45, "Fog"),
            (48, "Depositing rime fog"),
            (51, "Light drizzle"),
            (53, "Moderate drizzle"),
            (55, "Dense drizzle"),
            (56, "Light freezing drizzle"),
            (57, "Dense freezing drizzle"),
            (61, "Slight rain"),
            (63, "Moderate rain"),
            (65, "Heavy rain"),
            (66, "Light freezing rain"),
            (67, "Heavy freezing rain"),
            (71, "Slight snow fall"),
            (73, "Moderate snow fall"),
            (75, "Heavy snow fall"),
            (77, "Snow grains"),
            (80, "Slight rain showers"),
            (81, "Moderate rain showers"),
            (82, "Violent rain showers"),
            (85, "Slight snow showers"),
            (86, "Heavy snow showers"),
            (95, "Thunderstorm"),
            (96, "Thunderstorm with slight hail"),
            (99, "Thunderstorm with heavy hail"),
        ];

        for (code, text) in expected {
            // Only code 0 differs by day/night.
            assert_eq!(describe_wmo_code(code, true), text);
            assert_eq!(describe_wmo_code(code, false), text);
        }
    }

    #[test]
    fn unknown_codes_describe_as_unknown() {
        for code in [-1, 4, 46, 47, 58, 68, 83, 97, 98, 100] {
            assert_eq!(describe_wmo_code(code, true), "Unknown");
            assert_eq!(describe_wmo_code(code, false), "Unknown");
        }
    }
}
