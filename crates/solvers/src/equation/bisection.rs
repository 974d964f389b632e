//! Bisection root finding on a sign-changing bracket.
//!
//! # Algorithm
//!
//! Starting from `[x1, x2] = [a, b]`, the solver evaluates the midpoint `p`.
//! While `|f(p)| >= eps` it keeps the half whose endpoints still differ in
//! sign: if `f(p) · f(x2) < 0` the lower bound moves up to `p`, otherwise the
//! upper bound moves down to `p`. A zero or positive product therefore always
//! narrows toward `x2`.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per midpoint evaluation, starting with the
//! midpoint of the initial bracket at `iter = 0`. Observers can return
//! [`Action::StopEarly`] to halt and receive the current midpoint.

mod error;
mod event;
mod interval;

#[cfg(test)]
mod tests;

pub use error::Error;
pub use event::Event;

use compphys_core::{Observer, ScalarFunction};

use super::{
    Action, Bracket, Config, NotFound, Reason, Solution, Status, check_sign_change,
    is_converged,
};

use interval::Interval;

/// Finds a root of `f` in `bracket` using bisection.
///
/// The observer receives an [`Event`] for each midpoint evaluation.
/// See the [module docs](self) for the update rule.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the bracket has no sign change, a midpoint
/// leaves the bracket, or the iteration cap is reached. Returns
/// [`Error::NonFinite`] if `f` returns NaN or an infinity at a midpoint.
pub fn solve<F, Obs>(
    f: &F,
    bracket: impl Into<Bracket>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: ScalarFunction + ?Sized,
    Obs: Observer<Event, Action>,
{
    let bracket = bracket.into();
    let f_low = f.eval(bracket.low());
    let f_high = f.eval(bracket.high());
    check_sign_change(f_low, f_high)?;

    let mut interval = Interval::new(bracket, f_high);
    let mut x = interval.midpoint();
    let mut iters = 0;

    loop {
        let residual = f.eval(x);
        if !residual.is_finite() {
            return Err(Error::NonFinite { x, value: residual });
        }

        let event = Event {
            iter: iters,
            bracket: interval.as_array(),
            x,
            residual,
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

        interval.shrink(x, residual);
        x = interval.midpoint();
        iters += 1;

        if !bracket.contains(x) {
            return Err(NotFound::new(Reason::LeftBracket { x }).into());
        }
    }
}

/// Runs bisection without observation.
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
    F: ScalarFunction + ?Sized,
{
    solve(f, bracket, config, ())
}
