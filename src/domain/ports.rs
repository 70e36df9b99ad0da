use crate::domain::model::Weather;
use std::sync::Arc;

/// Anything the airport can land and release.
///
/// The airport never looks inside a plane: it only tracks whether a given
/// plane (by pointer identity) is on the ground, and tells it when it
/// touches down or leaves.
pub trait Plane: Send + Sync {
    fn touch_down(&self);
    fn take_off(&self);
}

impl std::fmt::Debug for dyn Plane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Plane({:p})", self)
    }
}

/// Shared handle to a plane. Two handles name the same plane when they point
/// at the same allocation.
pub type PlaneRef = Arc<dyn Plane>;

/// Source of local weather, consulted on every landing and take-off attempt.
pub trait WeatherSource: Send {
    fn observe(&mut self) -> Weather;
}

impl<F> WeatherSource for F
where
    F: FnMut() -> Weather + Send,
{
    fn observe(&mut self) -> Weather {
        self()
    }
}

/// Fixed weather.
impl WeatherSource for Weather {
    fn observe(&mut self) -> Weather {
        *self
    }
}

pub fn same_plane(a: &PlaneRef, b: &PlaneRef) -> bool {
    // Compare data pointers only; vtable pointers may differ across codegen units.
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
