use crate::{Differentiable, ScalarFunction};

/// A dense single-variable polynomial.
///
/// Coefficients are stored in ascending power order, so `[c0, c1, c2]`
/// represents `c0 + c1·x + c2·x²`. Trailing zero coefficients are trimmed on
/// construction; the zero polynomial has no coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from coefficients in ascending power order.
    #[must_use]
    pub fn new(coeffs: impl Into<Vec<f64>>) -> Self {
        let mut coeffs = coeffs.into();
        while coeffs.last().is_some_and(|&c| c == 0.0) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    /// Returns the coefficients in ascending power order.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Evaluates the polynomial at `x` using Horner's scheme.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Returns the first derivative as a new polynomial.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let coeffs: Vec<f64> = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(power, &c)| power as f64 * c)
            .collect();
        Self::new(coeffs)
    }
}

impl ScalarFunction for Polynomial {
    fn eval(&self, x: f64) -> f64 {
        Polynomial::eval(self, x)
    }
}

impl Differentiable for Polynomial {
    /// Evaluates `p'(x)` in place, without building the derivative polynomial.
    fn derivative(&self, x: f64) -> f64 {
        self.coeffs
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .fold(0.0, |acc, (power, &c)| acc * x + power as f64 * c)
    }
}
