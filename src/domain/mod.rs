// Domain layer: the weather model and the capabilities the airport relies on.

pub mod model;
pub mod ports;
