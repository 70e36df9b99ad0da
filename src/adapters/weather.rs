use crate::domain::model::Weather;
use crate::domain::ports::WeatherSource;
use crate::utils::error::{AirportError, Result};
use crate::utils::validation::{validate_one_of, validate_range};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_STORM_CHANCE: f64 = 0.2;

/// Weather drawn at random on every observation.
#[derive(Debug, Clone)]
pub struct RandomWeather {
    rng: StdRng,
    storm_chance: f64,
}

impl RandomWeather {
    pub fn new(storm_chance: f64) -> Result<Self> {
        validate_range("storm_chance", storm_chance, 0.0, 1.0)?;
        Ok(Self {
            rng: StdRng::from_entropy(),
            storm_chance,
        })
    }

    /// Reproducible sequence of observations for a given seed.
    pub fn seeded(storm_chance: f64, seed: u64) -> Result<Self> {
        validate_range("storm_chance", storm_chance, 0.0, 1.0)?;
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            storm_chance,
        })
    }

    pub fn storm_chance(&self) -> f64 {
        self.storm_chance
    }
}

impl Default for RandomWeather {
    fn default() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            storm_chance: DEFAULT_STORM_CHANCE,
        }
    }
}

impl WeatherSource for RandomWeather {
    fn observe(&mut self) -> Weather {
        let weather = if self.rng.gen_bool(self.storm_chance) {
            Weather::Stormy
        } else {
            Weather::Sunny
        };
        tracing::debug!("🌦️ Observed local weather: {}", weather);
        weather
    }
}

/// How the local weather is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherMode {
    Sunny,
    Stormy,
    #[default]
    Random,
}

impl WeatherMode {
    pub const NAMES: [&'static str; 3] = ["sunny", "stormy", "random"];
}

impl FromStr for WeatherMode {
    type Err = AirportError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        validate_one_of("weather", &name, &Self::NAMES)?;
        Ok(match name.as_str() {
            "sunny" => WeatherMode::Sunny,
            "stormy" => WeatherMode::Stormy,
            _ => WeatherMode::Random,
        })
    }
}

/// Weather source chosen at runtime from configuration.
#[derive(Debug, Clone)]
pub enum ConfiguredWeather {
    Fixed(Weather),
    Random(RandomWeather),
}

impl ConfiguredWeather {
    pub fn from_mode(mode: WeatherMode, storm_chance: f64, seed: Option<u64>) -> Result<Self> {
        Ok(match mode {
            WeatherMode::Sunny => ConfiguredWeather::Fixed(Weather::Sunny),
            WeatherMode::Stormy => ConfiguredWeather::Fixed(Weather::Stormy),
            WeatherMode::Random => match seed {
                Some(seed) => ConfiguredWeather::Random(RandomWeather::seeded(storm_chance, seed)?),
                None => ConfiguredWeather::Random(RandomWeather::new(storm_chance)?),
            },
        })
    }
}

impl WeatherSource for ConfiguredWeather {
    fn observe(&mut self) -> Weather {
        match self {
            ConfiguredWeather::Fixed(weather) => weather.observe(),
            ConfiguredWeather::Random(random) => random.observe(),
        }
    }
}
