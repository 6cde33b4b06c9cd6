use thiserror::Error;

/// Non-zero status codes of an SGP4 propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PropagationError {
    #[error("mean elements out of range (eccentricity or semi-major axis)")]
    InvalidMeanElements,

    #[error("mean motion is negative")]
    NegativeMeanMotion,

    #[error("perturbed elements out of range (eccentricity)")]
    InvalidPerturbedElements,

    #[error("semi-latus rectum is negative")]
    NegativeSemiLatusRectum,

    #[error("epoch elements are sub-orbital")]
    SubOrbitalEpoch,

    #[error("satellite has decayed")]
    Decayed,
}

impl PropagationError {
    /// Map a backend status code. `0` and unknown codes yield `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::InvalidMeanElements),
            2 => Some(Self::NegativeMeanMotion),
            3 => Some(Self::InvalidPerturbedElements),
            4 => Some(Self::NegativeSemiLatusRectum),
            5 => Some(Self::SubOrbitalEpoch),
            6 => Some(Self::Decayed),
            _ => None,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidMeanElements => 1,
            Self::NegativeMeanMotion => 2,
            Self::InvalidPerturbedElements => 3,
            Self::NegativeSemiLatusRectum => 4,
            Self::SubOrbitalEpoch => 5,
            Self::Decayed => 6,
        }
    }
}

pub type Result<T> = std::result::Result<T, PropagationError>;
