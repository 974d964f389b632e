//! Solvers for scalar equations: finding `x` in `[a, b]` with `f(x) ≈ 0`.
//!
//! Both solvers share one contract:
//!
//! - The bracket must show a sign change, `f(a) · f(b) < 0`, or the solver
//!   returns [`NotFound`] without iterating.
//! - Iteration stops once `|f(x)| < eps`.
//! - An iterate that falls outside `[a, b]` aborts with [`NotFound`].
//!
//! # Solvers
//!
//! - [`bisection`]: guaranteed convergence on a bracketed interval
//! - [`newton`]: quadratic convergence from the bracket midpoint, using the
//!   derivative
//!
//! [`find_root_bisection`] and [`find_root_newton`] run the solvers with no
//! iteration cap and return only the root. Use the modules directly for an
//! iteration cap, observers, or the full [`Solution`].

mod action;
mod bracket;
mod config;
mod not_found;
mod solution;

pub mod bisection;
pub mod newton;

pub use action::Action;
pub use bracket::Bracket;
pub use config::{Config, ConfigError};
pub use not_found::{NotFound, Reason};
pub use solution::{Solution, Status};

use compphys_core::{ScalarFunction, WithDerivative};

/// Finds a root of `f` in `[a, b]` using bisection.
///
/// The loop has no iteration cap; it relies on the shrinking bracket.
///
/// # Errors
///
/// Returns [`bisection::Error::NotFound`] if `f(a) · f(b) >= 0` or the
/// midpoint leaves `[a, b]`, and [`bisection::Error::InvalidConfig`] if `eps`
/// is not finite and positive.
pub fn find_root_bisection<F>(f: &F, a: f64, b: f64, eps: f64) -> Result<f64, bisection::Error>
where
    F: ScalarFunction + ?Sized,
{
    let config = Config::new(eps)?;
    bisection::solve_unobserved(f, [a, b], &config).map(|solution| solution.x)
}

/// Finds a root of `f` in `[a, b]` using Newton–Raphson with derivative `fder`.
///
/// The loop has no iteration cap. The bracket sign-change check is applied
/// even though Newton–Raphson does not need it; see [`newton::solve`].
///
/// # Errors
///
/// Returns [`newton::Error::NotFound`] if `f(a) · f(b) >= 0` or an iterate
/// leaves `[a, b]`, [`newton::Error::ZeroDerivative`] or
/// [`newton::Error::NonFinite`] if a step cannot be taken, and
/// [`newton::Error::InvalidConfig`] if `eps` is not finite and positive.
pub fn find_root_newton<F, D>(
    f: &F,
    fder: &D,
    a: f64,
    b: f64,
    eps: f64,
) -> Result<f64, newton::Error>
where
    F: ScalarFunction + ?Sized,
    D: ScalarFunction + ?Sized,
{
    let config = Config::new(eps)?;
    let function = WithDerivative::new(|x: f64| f.eval(x), |x: f64| fder.eval(x));
    newton::solve_unobserved(&function, [a, b], &config).map(|solution| solution.x)
}

/// Returns true when a residual satisfies the absolute tolerance.
///
/// A NaN residual never converges.
fn is_converged(residual: f64, eps: f64) -> bool {
    residual.abs() < eps
}

/// Checks the shared entry condition: `f(low)` and `f(high)` differ in sign.
fn check_sign_change(f_low: f64, f_high: f64) -> Result<(), NotFound> {
    let product = f_low * f_high;
    if product.is_nan() || product >= 0.0 {
        return Err(NotFound::new(Reason::NoSignChange { f_low, f_high }));
    }
    Ok(())
}
