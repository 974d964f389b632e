/// Search interval `[low, high]` for a root.
///
/// The bracket is taken as given: `low < high` is the caller's
/// responsibility and is not checked or normalized. A reversed bracket
/// contains no points, so a solver started on one reports the first iterate
/// as having left the bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    low: f64,
    high: f64,
}

impl Bracket {
    /// Creates a bracket from its endpoints.
    #[must_use]
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Returns the lower endpoint.
    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Returns the upper endpoint.
    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Returns the bracket endpoints as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.low, self.high]
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.low + self.high)
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Returns true if `x` lies in the closed interval `[low, high]`.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        (self.low..=self.high).contains(&x)
    }
}

impl From<[f64; 2]> for Bracket {
    fn from([low, high]: [f64; 2]) -> Self {
        Self::new(low, high)
    }
}

impl From<(f64, f64)> for Bracket {
    fn from((low, high): (f64, f64)) -> Self {
        Self::new(low, high)
    }
}
