use crate::adapters::weather::RandomWeather;
use crate::core::airport::Airport;
use crate::domain::model::Weather;
use crate::domain::ports::{PlaneRef, WeatherSource};
use crate::utils::error::{AirportError, Result};
use std::sync::{Arc, Mutex, MutexGuard};

/// Thread-safe handle to one airport.
///
/// Each request holds the lock across the weather check, the capacity check,
/// the mutation and the plane notification, so concurrent landings can never
/// push occupancy past capacity.
pub struct SharedAirport<W: WeatherSource = RandomWeather> {
    inner: Arc<Mutex<Airport<W>>>,
}

impl<W: WeatherSource> Clone for SharedAirport<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<W: WeatherSource> SharedAirport<W> {
    pub fn new(airport: Airport<W>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(airport)),
        }
    }

    pub fn land(&self, plane: PlaneRef) -> Result<()> {
        self.lock()?.land(plane)
    }

    pub fn take_off(&self, plane: Option<&PlaneRef>) -> Result<PlaneRef> {
        self.lock()?.take_off(plane)
    }

    pub fn local_weather(&self) -> Result<Weather> {
        Ok(self.lock()?.local_weather())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }

    pub fn capacity(&self) -> Result<usize> {
        Ok(self.lock()?.capacity())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Airport<W>>> {
        self.inner.lock().map_err(|_| AirportError::LockPoisoned)
    }
}

impl<W: WeatherSource> From<Airport<W>> for SharedAirport<W> {
    fn from(airport: Airport<W>) -> Self {
        Self::new(airport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::flight::Flight;
    use crate::domain::ports::Plane;
    use std::thread;

    struct FaultyGear;

    impl Plane for FaultyGear {
        fn touch_down(&self) {
            panic!("landing gear collapsed");
        }

        fn take_off(&self) {}
    }

    #[test]
    fn test_clones_share_one_airport() {
        let airport = SharedAirport::new(Airport::with_weather(3, Weather::Sunny));
        let other = airport.clone();

        airport.land(Arc::new(Flight::new("EZY1"))).unwrap();

        assert_eq!(other.len().unwrap(), 1);
        assert!(other.take_off(None).is_ok());
        assert!(airport.is_empty().unwrap());
    }

    #[test]
    fn test_weather_passes_through() {
        let airport: SharedAirport<Weather> = Airport::with_weather(1, Weather::Stormy).into();
        assert_eq!(airport.local_weather().unwrap(), Weather::Stormy);
        assert_eq!(airport.capacity().unwrap(), 1);
    }

    #[test]
    fn test_panic_during_landing_poisons_airport() {
        let airport = SharedAirport::new(Airport::with_weather(3, Weather::Sunny));
        airport.land(Arc::new(Flight::new("EZY1"))).unwrap();

        let crashing = airport.clone();
        let joined = thread::spawn(move || crashing.land(Arc::new(FaultyGear))).join();
        assert!(joined.is_err());

        assert!(matches!(airport.len(), Err(AirportError::LockPoisoned)));
        assert!(matches!(
            airport.land(Arc::new(Flight::new("EZY2"))),
            Err(AirportError::LockPoisoned)
        ));
        assert!(matches!(
            airport.take_off(None),
            Err(AirportError::LockPoisoned)
        ));
    }
}
