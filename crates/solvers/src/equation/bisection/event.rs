/// Midpoint evaluation emitted by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Number of bracket updates made before this evaluation.
    pub iter: usize,

    /// Current search bracket `[x1, x2]`.
    pub bracket: [f64; 2],

    /// The evaluated midpoint.
    pub x: f64,

    /// `f(x)` at the midpoint.
    pub residual: f64,
}
