//! Shared fixtures for the cross-crate tests.

use compphys_core::{Polynomial, WithDerivative};
use tracing_subscriber::filter::LevelFilter;

/// Installs a `tracing` subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_test_writer()
        .try_init();
}

/// `f(x) = sin(x) (x² + 2x)`, roots at `-2`, `0`, and every multiple of `π`.
#[must_use]
pub fn wave(x: f64) -> f64 {
    x.sin() * (x * x + 2.0 * x)
}

/// Analytic derivative of [`wave`].
#[must_use]
pub fn wave_derivative(x: f64) -> f64 {
    x.cos() * (x * x + 2.0 * x) + x.sin() * (2.0 * x + 2.0)
}

/// [`wave`] paired with its derivative.
#[must_use]
pub fn differentiable_wave() -> WithDerivative<fn(f64) -> f64, fn(f64) -> f64> {
    WithDerivative::new(wave as fn(f64) -> f64, wave_derivative as fn(f64) -> f64)
}

/// The polynomial `x³ + 2x⁴ + 5x⁵`.
#[must_use]
pub fn quintic() -> Polynomial {
    Polynomial::new([0.0, 0.0, 0.0, 1.0, 2.0, 5.0])
}
