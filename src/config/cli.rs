use crate::adapters::weather::WeatherMode;
use crate::config::toml_config::AirportConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, validate_range, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "airport")]
#[command(about = "Run control tower commands against a single airport")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the airport capacity
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Override the weather mode (sunny, stormy or random)
    #[arg(long)]
    pub weather: Option<String>,

    /// Override the chance of a storm on each observation
    #[arg(long)]
    pub storm_chance: Option<f64>,

    /// Seed for reproducible random weather
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, help = "Print the flight log as JSON")]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Commands: land:<callsign>, take-off[:<callsign>], weather, status
    pub commands: Vec<String>,
}

impl CliConfig {
    /// File configuration (or defaults) with command-line overrides applied.
    pub fn resolve(&self) -> Result<AirportConfig> {
        let mut config = match &self.config {
            Some(path) => AirportConfig::from_file(path)?,
            None => AirportConfig::default(),
        };

        if let Some(capacity) = self.capacity {
            config.airport.capacity = capacity;
        }
        if let Some(weather) = &self.weather {
            config.weather.mode = weather.parse::<WeatherMode>()?;
        }
        if let Some(chance) = self.storm_chance {
            config.weather.storm_chance = chance;
        }
        if self.seed.is_some() {
            config.weather.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Some(capacity) = self.capacity {
            validate_positive_number("capacity", capacity, 1)?;
        }
        if let Some(weather) = &self.weather {
            weather.parse::<WeatherMode>()?;
        }
        if let Some(chance) = self.storm_chance {
            validate_range("storm_chance", chance, 0.0, 1.0)?;
        }
        Ok(())
    }
}
