//! Pure transformations and admission control.
//!
//! Nothing in this module talks to the host fetch primitive, so every
//! piece can be tested in isolation.

mod admission;
mod classify;
mod terminate;

pub use admission::{AdmissionController, MAX_IN_FLIGHT};
pub use classify::{BINARY_EXTENSIONS, ContentKind, classify};
pub use terminate::null_terminate;
