use crate::domain::ports::Plane;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A plane identified by its call sign, counting the tower notifications it
/// receives.
#[derive(Debug)]
pub struct Flight {
    callsign: String,
    touch_downs: AtomicUsize,
    take_offs: AtomicUsize,
}

impl Flight {
    pub fn new(callsign: impl Into<String>) -> Self {
        Self {
            callsign: callsign.into(),
            touch_downs: AtomicUsize::new(0),
            take_offs: AtomicUsize::new(0),
        }
    }

    pub fn callsign(&self) -> &str {
        &self.callsign
    }

    pub fn touch_downs(&self) -> usize {
        self.touch_downs.load(Ordering::SeqCst)
    }

    pub fn take_offs(&self) -> usize {
        self.take_offs.load(Ordering::SeqCst)
    }

    /// On the ground when it has landed more often than it has left.
    pub fn is_grounded(&self) -> bool {
        self.touch_downs() > self.take_offs()
    }
}

impl Plane for Flight {
    fn touch_down(&self) {
        self.touch_downs.fetch_add(1, Ordering::SeqCst);
        tracing::info!("🛬 {} has touched down", self.callsign);
    }

    fn take_off(&self) {
        self.take_offs.fetch_add(1, Ordering::SeqCst);
        tracing::info!("🛫 {} is airborne", self.callsign);
    }
}
