//! Newton–Raphson root finding, guarded by a bracket.
//!
//! # Algorithm
//!
//! The iteration starts at the bracket midpoint and repeats
//! `x ← x − f(x) / f'(x)` until `|f(x)| < eps`. Any step that lands outside
//! `[a, b]` aborts the search, which catches overshooting steps.
//!
//! # Entry condition
//!
//! Like [`bisection`](super::bisection), the solver requires
//! `f(a) · f(b) < 0` before it starts. Newton–Raphson does not need a sign
//! change to converge, so this rejects some brackets it could solve. The check
//! is kept so that both solvers accept exactly the same brackets.
//!
//! # Failure modes
//!
//! A zero derivative or a non-finite step is reported as
//! [`Error::ZeroDerivative`] or [`Error::NonFinite`] instead of letting NaN or
//! infinity flow into the next iterate.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iterate, starting with the midpoint at
//! `iter = 0`.

mod error;
mod event;


pub use error::Error;
pub use event::Event;

use compphys_core::{Differentiable, Observer};

use super::{
    Action, Bracket, Config, NotFound, Reason, Solution, Status, check_sign_change,
    is_converged,
};

/// Finds a root of `f` in `bracket` using Newton–Raphson.
///
/// The observer receives an [`Event`] for each iterate.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the bracket has no sign change, an iterate
/// leaves the bracket, or the iteration cap is reached.
/// Returns [`Error::ZeroDerivative`] if `f'(x) = 0` at an unconverged
/// iterate, and [`Error::NonFinite`] if `f(x)`, `f'(x)`, or the next iterate
/// is NaN or infinite.
pub fn solve<F, Obs>(
    f: &F,
    bracket: impl Into<Bracket>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Differentiable + ?Sized,
    Obs: Observer<Event, Action>,
{
    let bracket = bracket.into();
    check_sign_change(f.eval(bracket.low()), f.eval(bracket.high()))?;

    let mut x = bracket.midpoint();
    let mut iters = 0;

    loop {
        let residual = f.eval(x);
        if !residual.is_finite() {
            return Err(Error::NonFinite { x, value: residual });
        }
        let slope = f.derivative(x);

        let event = Event {
            iter: iters,
            x,
            residual,
            slope,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x,
                residual,
                iters,
            });
        }

        if is_converged(residual, config.eps()) {
            return Ok(Solution {
                status: Status::Converged,
                x,
                residual,
                iters,
            });
        }

        if config.is_exhausted(iters) {
            return Err(NotFound::new(Reason::MaxIters { iters }).into());
        }

        x = step(x, residual, slope)?;
        iters += 1;

        if !bracket.contains(x) {
            return Err(NotFound::new(Reason::LeftBracket { x }).into());
        }
    }
}

/// Runs Newton–Raphson without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F>(
    f: &F,
    bracket: impl Into<Bracket>,
    config: &Config,
) -> Result<Solution, Error>
where
    F: Differentiable + ?Sized,
{
    solve(f, bracket, config, ())
}

/// Takes one Newton step from `x`.
#[allow(clippy::float_cmp)]
fn step(x: f64, residual: f64, slope: f64) -> Result<f64, Error> {
    if !slope.is_finite() {
        return Err(Error::NonFinite { x, value: slope });
    }
    if slope == 0.0 {
        return Err(Error::ZeroDerivative { x });
    }

    let next = x - residual / slope;
    if !next.is_finite() {
        return Err(Error::NonFinite { x, value: next });
    }
    Ok(next)
}
