use compphys_core::Observer;

use crate::{Event, EventQueue};

/// An executed event reported to a simulation observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Zero-based position of the event in the replay.
    pub index: usize,

    /// The event just removed from the queue.
    pub event: Event,

    /// Events still queued after this one.
    pub remaining: usize,
}

/// Control actions supported by [`simulate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the replay after the current event.
    StopEarly,
}

/// Indicates how the replay finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every queued event was executed.
    Drained,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// Outcome of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Final replay status.
    pub status: Status,

    /// Number of events executed.
    pub executed: usize,

    /// Events left in the queue when the replay ended.
    ///
    /// These are dropped together with the queue.
    pub remaining: usize,

    /// Execution time of the last executed event, if any.
    pub last_time: Option<f64>,
}

/// Drains `queue` in ascending execution time order, reporting each event.
///
/// The observer sees one [`Step`] per executed event and may return
/// [`Action::StopEarly`] to end the replay after that event.
pub fn simulate<Obs>(mut queue: EventQueue, mut observer: Obs) -> Summary
where
    Obs: Observer<Step, Action>,
{
    let mut executed = 0;
    let mut last_time = None;

    while let Some(event) = queue.pop() {
        let step = Step {
            index: executed,
            event,
            remaining: queue.len(),
        };
        executed += 1;
        last_time = Some(event.execution_time());

        if let Some(Action::StopEarly) = observer.observe(&step) {
            return Summary {
                status: Status::StoppedByObserver,
                executed,
                remaining: queue.len(),
                last_time,
            };
        }
    }

    Summary {
        status: Status::Drained,
        executed,
        remaining: 0,
        last_time,
    }
}
