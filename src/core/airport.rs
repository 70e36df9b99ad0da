use crate::adapters::weather::RandomWeather;
use crate::domain::model::Weather;
use crate::domain::ports::{same_plane, PlaneRef, WeatherSource};
use crate::utils::error::{AirportError, Result};

pub const DEFAULT_CAPACITY: usize = 6;

/// A bounded apron of planes, gated by capacity and local weather.
///
/// Every failed request leaves the airport exactly as it was.
pub struct Airport<W: WeatherSource = RandomWeather> {
    name: String,
    capacity: usize,
    planes: Vec<PlaneRef>,
    weather: W,
}

impl Airport<RandomWeather> {
    /// Airport with the default capacity and random weather.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Airport with `capacity` stands and random weather.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_weather(capacity, RandomWeather::default())
    }
}

impl Default for Airport<RandomWeather> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: WeatherSource> Airport<W> {
    pub fn with_weather(capacity: usize, weather: W) -> Self {
        Self {
            name: "airport".to_string(),
            capacity,
            planes: Vec::new(),
            weather,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.planes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.planes.len() >= self.capacity
    }

    pub fn contains(&self, plane: &PlaneRef) -> bool {
        self.position(plane).is_some()
    }

    /// Grounded planes in landing order.
    pub fn planes(&self) -> &[PlaneRef] {
        &self.planes
    }

    /// Fresh observation from the weather source; never cached.
    pub fn local_weather(&mut self) -> Weather {
        self.weather.observe()
    }

    pub fn land(&mut self, plane: PlaneRef) -> Result<()> {
        if self.local_weather().is_stormy() {
            tracing::warn!("⛈️ {}: landing refused, storm overhead", self.name);
            return Err(AirportError::WeatherError);
        }
        if self.is_full() {
            tracing::warn!(
                "🚫 {}: landing refused, {} of {} stands taken",
                self.name,
                self.planes.len(),
                self.capacity
            );
            return Err(AirportError::CapacityError);
        }
        if self.contains(&plane) {
            tracing::warn!("🚫 {}: landing refused, plane already on the ground", self.name);
            return Err(AirportError::AlreadyLandedError);
        }

        plane.touch_down();
        self.planes.push(plane);
        tracing::info!(
            "{}: plane landed ({}/{})",
            self.name,
            self.planes.len(),
            self.capacity
        );
        Ok(())
    }

    /// Releases `plane`, or the most recently landed plane when `None`.
    /// The departed plane is handed back.
    pub fn take_off(&mut self, plane: Option<&PlaneRef>) -> Result<PlaneRef> {
        if self.planes.is_empty() {
            return Err(AirportError::EmptyAirportError);
        }
        if self.local_weather().is_stormy() {
            tracing::warn!("⛈️ {}: take-off refused, storm overhead", self.name);
            return Err(AirportError::WeatherError);
        }

        let index = match plane {
            Some(plane) => self
                .position(plane)
                .ok_or(AirportError::PlaneNotFoundError)?,
            None => self.planes.len() - 1,
        };

        let departed = self.planes.remove(index);
        departed.take_off();
        tracing::info!(
            "{}: plane departed ({}/{})",
            self.name,
            self.planes.len(),
            self.capacity
        );
        Ok(departed)
    }

    fn position(&self, plane: &PlaneRef) -> Option<usize> {
        self.planes.iter().position(|p| same_plane(p, plane))
    }
}

impl<W: WeatherSource> std::fmt::Debug for Airport<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Airport")
            .field("name", &self.name)
            .field("capacity", &self.capacity)
            .field("occupancy", &self.planes.len())
            .finish()
    }
}
