/// Status recorded by the success continuation.
pub const STATUS_OK: i32 = 200;

/// Status recorded when the host fails without a usable code.
pub const STATUS_UNKNOWN_NETWORK_ERROR: i32 = 499;

/// Lifecycle of a request.
///
/// Requests move forward only:
/// Unstarted → InFlight → Done
///
/// Deletion is allowed from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    /// Created, no network activity yet.
    #[default]
    Unstarted,

    /// Dispatched to the host and holding an admission slot.
    InFlight,

    /// A terminal outcome has been recorded.
    Done,
}

impl std::fmt::Display for RequestState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestState::Unstarted => write!(f, "Unstarted"),
            RequestState::InFlight => write!(f, "InFlight"),
            RequestState::Done => write!(f, "Done"),
        }
    }
}
