use std::iter::FusedIterator;

use crate::{Event, EventQueue};

/// A draining, earliest-first traversal of an [`EventQueue`].
///
/// Each call to `next` removes the event with the smallest execution time.
/// The replay owns the queue, so once it is consumed the events are gone and
/// the sequence cannot be restarted. A replay cannot be cloned either:
///
/// ```compile_fail
/// use compphys_kmc::{EventQueue, run_simulation};
///
/// let replay = run_simulation(EventQueue::new());
/// let again = replay.clone();
/// ```
///
/// Clone the [`EventQueue`] before replaying it to drain the events twice.
#[derive(Debug)]
pub struct Replay {
    queue: EventQueue,
}

impl Replay {
    pub(crate) fn new(queue: EventQueue) -> Self {
        Self { queue }
    }

    /// Returns the next event without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Event> {
        self.queue.peek()
    }
}

impl Iterator for Replay {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        self.queue.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for Replay {}

impl FusedIterator for Replay {}

/// Replays the queue lazily in nondecreasing execution time order.
#[must_use]
pub fn run_simulation(queue: EventQueue) -> Replay {
    Replay::new(queue)
}
