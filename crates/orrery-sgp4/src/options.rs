/// How the backend treats the time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunType {
    Verification,
    Catalog,
    Manual,
}

impl RunType {
    pub fn as_char(&self) -> char {
        match self {
            RunType::Verification => 'v',
            RunType::Catalog => 'c',
            RunType::Manual => 'm',
        }
    }
}

/// Units of a manual time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    MinutesFromEpoch,
    Epoch,
    DayOfYear,
}

impl InputType {
    pub fn as_char(&self) -> char {
        match self {
            InputType::MinutesFromEpoch => 'm',
            InputType::Epoch => 'e',
            InputType::DayOfYear => 'd',
        }
    }
}

/// Operation mode of the propagator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpsMode {
    /// AFSPC-compatible.
    Afspc,
    #[default]
    Improved,
}

impl OpsMode {
    pub fn as_char(&self) -> char {
        match self {
            OpsMode::Afspc => 'a',
            OpsMode::Improved => 'i',
        }
    }
}

/// Start, stop and step of a propagation run, in minutes from epoch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimeWindow {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_codes() {
        assert_eq!(RunType::Catalog.as_char(), 'c');
        assert_eq!(InputType::DayOfYear.as_char(), 'd');
        assert_eq!(OpsMode::default().as_char(), 'i');
    }
}
