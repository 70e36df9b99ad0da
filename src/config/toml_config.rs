use crate::adapters::weather::{ConfiguredWeather, WeatherMode, DEFAULT_STORM_CHANCE};
use crate::core::airport::{Airport, DEFAULT_CAPACITY};
use crate::utils::error::{AirportError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AirportConfig {
    pub airport: AirportSection,
    pub weather: WeatherConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AirportSection {
    pub name: String,
    pub capacity: usize,
}

impl Default for AirportSection {
    fn default() -> Self {
        Self {
            name: "airport".to_string(),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub mode: WeatherMode,
    pub storm_chance: f64,
    pub seed: Option<u64>,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            mode: WeatherMode::Random,
            storm_chance: DEFAULT_STORM_CHANCE,
            seed: None,
        }
    }
}

impl AirportConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string, expanding ${VAR} first
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AirportError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn weather_source(&self) -> Result<ConfiguredWeather> {
        ConfiguredWeather::from_mode(
            self.weather.mode,
            self.weather.storm_chance,
            self.weather.seed,
        )
    }

    /// Validated airport built from this configuration.
    pub fn build_airport(&self) -> Result<Airport<ConfiguredWeather>> {
        self.validate()?;
        let weather = self.weather_source()?;
        tracing::debug!(
            "Building {} with capacity {} and {:?} weather",
            self.airport.name,
            self.airport.capacity,
            self.weather.mode
        );
        Ok(Airport::with_weather(self.airport.capacity, weather).named(self.airport.name.clone()))
    }
}

impl Validate for AirportConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("airport.name", &self.airport.name)?;
        validate_positive_number("airport.capacity", self.airport.capacity, 1)?;
        validate_range("weather.storm_chance", self.weather.storm_chance, 0.0, 1.0)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Weather;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[airport]
name = "Gatwick"
capacity = 3

[weather]
mode = "sunny"
storm_chance = 0.5
seed = 9
"#;

        let config = AirportConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.airport.name, "Gatwick");
        assert_eq!(config.airport.capacity, 3);
        assert_eq!(config.weather.mode, WeatherMode::Sunny);
        assert_eq!(config.weather.seed, Some(9));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AirportConfig::from_toml_str("").unwrap();

        assert_eq!(config.airport.capacity, DEFAULT_CAPACITY);
        assert_eq!(config.weather.mode, WeatherMode::Random);
        assert_eq!(config.weather.storm_chance, DEFAULT_STORM_CHANCE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_weather_mode_rejected() {
        let toml_content = r#"
[weather]
mode = "foggy"
"#;
        let err = AirportConfig::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, AirportError::TomlError(_)));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("AIRPORT_CONTROL_TEST_NAME", "Heathrow");

        let toml_content = r#"
[airport]
name = "${AIRPORT_CONTROL_TEST_NAME}"
"#;

        let config = AirportConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.airport.name, "Heathrow");

        std::env::remove_var("AIRPORT_CONTROL_TEST_NAME");
    }

    #[test]
    fn test_config_validation() {
        let zero_capacity = AirportConfig::from_toml_str("[airport]\ncapacity = 0\n").unwrap();
        assert!(zero_capacity.validate().is_err());
        assert!(zero_capacity.build_airport().is_err());

        let bad_chance = AirportConfig::from_toml_str("[weather]\nstorm_chance = 1.5\n").unwrap();
        assert!(bad_chance.validate().is_err());
    }

    #[test]
    fn test_build_airport_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let toml_content = r#"
[airport]
name = "Stansted"
capacity = 2

[weather]
mode = "stormy"
"#;
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = AirportConfig::from_file(temp_file.path()).unwrap();
        let mut airport = config.build_airport().unwrap();

        assert_eq!(airport.name(), "Stansted");
        assert_eq!(airport.capacity(), 2);
        assert_eq!(airport.local_weather(), Weather::Stormy);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = AirportConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, AirportError::IoError(_)));
    }
}
