// Adapters layer: concrete planes and weather sources.

pub mod flight;
pub mod weather;
