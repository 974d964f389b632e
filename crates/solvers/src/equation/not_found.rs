use std::fmt;

use thiserror::Error;

/// The solver could not locate a root in the bracket.
///
/// This is the recoverable outcome of a root search: callers should branch on
/// it before trusting any value.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("root not found: {reason}")]
pub struct NotFound {
    pub reason: Reason,
}

impl NotFound {
    /// Creates a `NotFound` with the given reason.
    #[must_use]
    pub fn new(reason: Reason) -> Self {
        Self { reason }
    }
}

/// Why a root search ended without a root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reason {
    /// `f(low) · f(high) >= 0`, so the bracket does not guarantee a root.
    NoSignChange { f_low: f64, f_high: f64 },

    /// An iterate fell outside the bracket.
    LeftBracket { x: f64 },

    /// The configured iteration cap was reached before convergence.
    MaxIters { iters: usize },
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSignChange { f_low, f_high } => {
                write!(f, "no sign change in bracket: f(low)={f_low}, f(high)={f_high}")
            }
            Self::LeftBracket { x } => write!(f, "iterate {x} left the bracket"),
            Self::MaxIters { iters } => write!(f, "no convergence after {iters} iterations"),
        }
    }
}
