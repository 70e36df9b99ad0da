pub mod airport;
pub mod shared;
pub mod tower;

pub use crate::domain::model::Weather;
pub use crate::domain::ports::{Plane, PlaneRef, WeatherSource};
pub use crate::utils::error::Result;
