/// Iterate evaluation emitted by the Newton–Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Number of Newton steps taken before this evaluation.
    pub iter: usize,

    /// The current iterate.
    pub x: f64,

    /// `f(x)` at the iterate.
    pub residual: f64,

    /// `f'(x)` at the iterate.
    pub slope: f64,
}
