//! Interface to SGP4 satellite propagation backends.
//!
//! This crate only declares the contract. A backend converts Two-Line
//! Element sets into satellite records and propagates them; the numeric
//! model lives in the backend.
//!
//! Times are UTC Modified Julian Dates, distances are kilometres and
//! velocities kilometres per second.

mod error;
mod options;

pub use error::{PropagationError, Result};
pub use options::{InputType, OpsMode, RunType, TimeWindow};

/// Longest TLE line a backend must accept.
pub const TLE_LINE_CAPACITY: usize = 130;

/// Position and velocity of a satellite at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StateVector {
    /// Kilometres.
    pub position: [f64; 3],
    /// Kilometres per second.
    pub velocity: [f64; 3],
}

/// An SGP4 propagation backend.
pub trait Propagator {
    /// Backend-specific satellite record.
    type Record;

    /// Build a record from the two lines of a TLE.
    ///
    /// The window is read and, for [`RunType::Manual`], may be rewritten by
    /// the backend. Returns `None` if the lines cannot be parsed.
    fn twoline_to_record(
        &self,
        line1: &str,
        line2: &str,
        run_type: RunType,
        input_type: InputType,
        ops_mode: OpsMode,
        window: &mut TimeWindow,
    ) -> Option<Self::Record>;

    /// Propagate a record to `utc_mjd`.
    fn propagate(&self, record: &mut Self::Record, utc_mjd: f64) -> Result<StateVector>;

    /// Reference epoch of the element set.
    fn epoch(&self, record: &Self::Record) -> f64;

    /// Perigee height above the Earth's surface, in kilometres.
    fn perigee_height(&self, record: &Self::Record) -> f64;
}
