pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{flight::Flight, weather::RandomWeather};
pub use crate::config::AirportConfig;
pub use crate::core::{airport::Airport, shared::SharedAirport, tower::Tower};
pub use crate::domain::{
    model::Weather,
    ports::{Plane, PlaneRef, WeatherSource},
};
pub use crate::utils::error::{AirportError, Result};
