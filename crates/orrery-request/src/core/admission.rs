use std::cell::Cell;

use tracing::warn;

/// Maximum number of fetches dispatched to the host at the same time.
pub const MAX_IN_FLIGHT: usize = 16;

/// Counter of in-flight fetches gated against a fixed cap.
///
/// Every successful [`try_acquire`](Self::try_acquire) must be matched by
/// exactly one [`release`](Self::release): from a continuation or from the
/// deletion of an in-flight request. The controller is single-threaded and
/// shared through `Rc`.
#[derive(Debug)]
pub struct AdmissionController {
    in_flight: Cell<usize>,
    capacity: usize,
}

impl AdmissionController {
    pub fn new() -> Self {
        Self::with_capacity(MAX_IN_FLIGHT)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            in_flight: Cell::new(0),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.get()
    }

    pub fn has_budget(&self) -> bool {
        self.in_flight.get() < self.capacity
    }

    /// Take a slot if one is free.
    pub fn try_acquire(&self) -> bool {
        let current = self.in_flight.get();
        if current >= self.capacity {
            return false;
        }
        self.in_flight.set(current + 1);
        true
    }

    /// Give a slot back.
    pub fn release(&self) {
        let current = self.in_flight.get();
        if current == 0 {
            warn!("admission slot released with no fetch in flight");
            return;
        }
        self.in_flight.set(current - 1);
    }
}

impl Default for AdmissionController {
    fn default() -> Self {
        Self::new()
    }
}
