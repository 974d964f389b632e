use crate::equation::Bracket;

/// The shrinking search interval `[x1, x2]` with the residual at `x2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Interval {
    left: f64,
    right: f64,
    right_residual: f64,
}

impl Interval {
    pub(super) fn new(bracket: Bracket, right_residual: f64) -> Self {
        Self {
            left: bracket.low(),
            right: bracket.high(),
            right_residual,
        }
    }

    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Replaces one endpoint with `x`.
    ///
    /// A strictly negative `f(x) · f(x2)` puts the root in `[x, x2]`, so `x1`
    /// moves. Anything else, including a zero product, moves `x2`.
    pub(super) fn shrink(&mut self, x: f64, residual: f64) {
        if residual * self.right_residual < 0.0 {
            self.left = x;
        } else {
            self.right = x;
            self.right_residual = residual;
        }
    }
}
