use thiserror::Error;

#[derive(Error, Debug)]
pub enum AirportError {
    #[error("not now, storms brewing!")]
    WeatherError,

    #[error("airport is full")]
    CapacityError,

    #[error("airport is currently empty")]
    EmptyAirportError,

    #[error("plane has already landed")]
    AlreadyLandedError,

    #[error("plane is not at this airport")]
    PlaneNotFoundError,

    #[error("Unrecognised command '{input}': {reason}")]
    CommandParseError { input: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Airport lock poisoned by a panicking thread")]
    LockPoisoned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Traffic,
    Weather,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AirportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AirportError::WeatherError => ErrorCategory::Weather,
            AirportError::CapacityError
            | AirportError::EmptyAirportError
            | AirportError::AlreadyLandedError
            | AirportError::PlaneNotFoundError => ErrorCategory::Traffic,
            AirportError::CommandParseError { .. }
            | AirportError::TomlError(_)
            | AirportError::ConfigError { .. }
            | AirportError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AirportError::IoError(_)
            | AirportError::SerializationError(_)
            | AirportError::LockPoisoned => ErrorCategory::System,
        }
    }

    /// Traffic and weather refusals are routine; the tower keeps going after them.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Weather => ErrorSeverity::Low,
            ErrorCategory::Traffic => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// True for refusals produced by the airport rules themselves.
    pub fn is_refusal(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Traffic | ErrorCategory::Weather
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AirportError::CommandParseError { input, .. } => {
                format!("Could not understand tower command '{}'", input)
            }
            AirportError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            AirportError::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not an acceptable value for {}", value, field)
            }
            AirportError::IoError(_) => "Could not read a required file".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AirportError::WeatherError => "Wait for the storm to pass and try again",
            AirportError::CapacityError => "Clear a plane for take-off before landing another",
            AirportError::EmptyAirportError => "Land a plane before requesting take-off",
            AirportError::AlreadyLandedError => "The plane is already on the ground",
            AirportError::PlaneNotFoundError => "Check the call sign of the departing plane",
            AirportError::CommandParseError { .. } => {
                "Use land:<callsign>, take-off[:<callsign>], weather or status"
            }
            AirportError::TomlError(_)
            | AirportError::ConfigError { .. }
            | AirportError::InvalidConfigValueError { .. } => {
                "Check the configuration file and command-line flags"
            }
            AirportError::IoError(_) => "Make sure the file exists and is readable",
            AirportError::SerializationError(_) => "Try again without --json",
            AirportError::LockPoisoned => "Restart the process",
        }
    }
}

pub type Result<T> = std::result::Result<T, AirportError>;
