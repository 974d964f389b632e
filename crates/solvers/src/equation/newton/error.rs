use thiserror::Error;

use crate::equation::{ConfigError, NotFound};

/// Errors that can occur during Newton–Raphson solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error(transparent)]
    NotFound(#[from] NotFound),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("derivative is zero at x = {x}")]
    ZeroDerivative { x: f64 },

    #[error("non-finite value {value} at x = {x}")]
    NonFinite { x: f64, value: f64 },
}

impl Error {
    /// Returns the `NotFound` outcome, if this is one.
    #[must_use]
    pub fn not_found(&self) -> Option<&NotFound> {
        match self {
            Self::NotFound(not_found) => Some(not_found),
            Self::InvalidConfig(_) | Self::ZeroDerivative { .. } | Self::NonFinite { .. } => None,
        }
    }
}
