use thiserror::Error;

/// Configuration shared by the root-finding solvers.
///
/// `eps` is the absolute residual tolerance: iteration stops once
/// `|f(x)| < eps`. `max_iters` caps the number of bracket updates (bisection)
/// or Newton steps; `None` leaves the loop unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    eps: f64,
    max_iters: Option<usize>,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("eps must be finite and positive")]
    Eps,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            eps: 1e-5,
            max_iters: Some(1000),
        }
    }
}

impl Config {
    /// Creates an unbounded config with the given residual tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `eps` is not finite and strictly positive. A zero
    /// tolerance could never be met and the unbounded loop would not end.
    pub fn new(eps: f64) -> Result<Self, ConfigError> {
        if !eps.is_finite() || eps <= 0.0 {
            return Err(ConfigError::Eps);
        }
        Ok(Self {
            eps,
            max_iters: None,
        })
    }

    /// Caps the number of iterations.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self {
            max_iters: Some(max_iters),
            ..self
        }
    }

    /// Removes the iteration cap.
    #[must_use]
    pub fn unbounded(self) -> Self {
        Self {
            max_iters: None,
            ..self
        }
    }

    /// Returns the absolute residual tolerance.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Returns the iteration cap, if any.
    #[must_use]
    pub fn max_iters(&self) -> Option<usize> {
        self.max_iters
    }

    /// Returns true if `iters` has reached the cap.
    pub(crate) fn is_exhausted(&self, iters: usize) -> bool {
        self.max_iters.is_some_and(|max| iters >= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_unbounded() {
        let config = Config::new(1e-5).expect("valid eps");
        assert_eq!(config.max_iters(), None);
        assert!(!config.is_exhausted(usize::MAX));
    }

    #[test]
    fn rejects_bad_eps() {
        assert_eq!(Config::new(0.0), Err(ConfigError::Eps));
        assert_eq!(Config::new(-1e-3), Err(ConfigError::Eps));
        assert_eq!(Config::new(f64::NAN), Err(ConfigError::Eps));
        assert_eq!(Config::new(f64::INFINITY), Err(ConfigError::Eps));
    }

    #[test]
    fn iteration_cap_round_trip() {
        let config = Config::new(1e-8).expect("valid eps").with_max_iters(3);
        assert_eq!(config.max_iters(), Some(3));
        assert!(!config.is_exhausted(2));
        assert!(config.is_exhausted(3));

        assert_eq!(config.unbounded().max_iters(), None);
    }
}
