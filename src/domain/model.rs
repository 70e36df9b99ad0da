use crate::utils::error::AirportError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Sunny,
    Stormy,
}

impl Weather {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weather::Sunny => "sunny",
            Weather::Stormy => "stormy",
        }
    }

    pub fn is_stormy(&self) -> bool {
        matches!(self, Weather::Stormy)
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weather {
    type Err = AirportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunny" => Ok(Weather::Sunny),
            "stormy" => Ok(Weather::Stormy),
            other => Err(AirportError::InvalidConfigValueError {
                field: "weather".to_string(),
                value: other.to_string(),
                reason: "Expected 'sunny' or 'stormy'".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_parses_case_insensitively() {
        assert_eq!("Sunny".parse::<Weather>().unwrap(), Weather::Sunny);
        assert_eq!(" STORMY ".parse::<Weather>().unwrap(), Weather::Stormy);
        assert!("foggy".parse::<Weather>().is_err());
    }

    #[test]
    fn test_weather_serializes_lowercase() {
        let json = serde_json::to_string(&Weather::Stormy).unwrap();
        assert_eq!(json, "\"stormy\"");
        assert_eq!(Weather::Sunny.to_string(), "sunny");
    }
}
