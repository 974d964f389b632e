use compphys_core::Observer;
use compphys_kmc as kmc;
use compphys_solvers::equation::{self, bisection, newton};
use tracing::{debug, trace};

/// Logs every observed event through `tracing` and never intervenes.
///
/// Solver iterations are logged at `DEBUG`, replayed events at `TRACE`.
/// Each record carries the observer's `label` field so that several runs can
/// be told apart in one log.
///
/// # Example
///
/// ```rust
/// use compphys_observers::TraceObserver;
/// use compphys_solvers::equation::{Config, bisection};
///
/// let f = |x: f64| x * x - 2.0;
/// let solution =
///     bisection::solve(&f, [0.0, 2.0], &Config::default(), TraceObserver::new("sqrt2"))
///         .unwrap();
/// assert!((solution.x - 2f64.sqrt()).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TraceObserver {
    label: String,
    seen: usize,
}

impl TraceObserver {
    /// Creates an observer that tags its records with `label`.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            seen: 0,
        }
    }

    /// Returns the record label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the number of events logged so far.
    #[must_use]
    pub fn seen(&self) -> usize {
        self.seen
    }
}

impl Observer<bisection::Event, equation::Action> for TraceObserver {
    fn observe(&mut self, event: &bisection::Event) -> Option<equation::Action> {
        self.seen += 1;
        let [low, high] = event.bracket;
        debug!(
            label = %self.label,
            iter = event.iter,
            low,
            high,
            x = event.x,
            residual = event.residual,
            "bisection step"
        );
        None
    }
}

impl Observer<newton::Event, equation::Action> for TraceObserver {
    fn observe(&mut self, event: &newton::Event) -> Option<equation::Action> {
        self.seen += 1;
        debug!(
            label = %self.label,
            iter = event.iter,
            x = event.x,
            residual = event.residual,
            slope = event.slope,
            "newton step"
        );
        None
    }
}

impl Observer<kmc::Step, kmc::Action> for TraceObserver {
    fn observe(&mut self, step: &kmc::Step) -> Option<kmc::Action> {
        self.seen += 1;
        trace!(
            label = %self.label,
            index = step.index,
            remaining = step.remaining,
            record = %step.event,
            "event executed"
        );
        None
    }
}

/// Allows `&mut TraceObserver` to be passed to components that take an
/// observer by value, so the count stays readable afterwards.
impl<E, A> Observer<E, A> for &mut TraceObserver
where
    TraceObserver: Observer<E, A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
