use std::{cmp::Ordering, collections::BinaryHeap};

use crate::{Event, EventCollection, Replay};

/// Queue entry ordered so that the earliest execution time has the highest
/// priority.
///
/// `BinaryHeap` pops its maximum, so the comparison is reversed: a smaller
/// execution time compares as greater. `total_cmp` keeps the order total.
#[derive(Debug, Clone, Copy)]
struct Pending(Event);

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .execution_time()
            .total_cmp(&self.0.execution_time())
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

/// Priority queue of events, earliest execution time first.
///
/// Events with equal execution times pop in unspecified order.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    heap: BinaryHeap<Pending>,
}

impl EventQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an event.
    pub fn push(&mut self, event: Event) {
        self.heap.push(Pending(event));
    }

    /// Removes and returns the event with the smallest execution time.
    pub fn pop(&mut self) -> Option<Event> {
        self.heap.pop().map(|Pending(event)| event)
    }

    /// Returns the event with the smallest execution time without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Event> {
        self.heap.peek().map(|Pending(event)| event)
    }

    /// Returns the number of queued events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl FromIterator<Event> for EventQueue {
    fn from_iter<T: IntoIterator<Item = Event>>(iter: T) -> Self {
        Self {
            heap: iter.into_iter().map(Pending).collect(),
        }
    }
}

impl Extend<Event> for EventQueue {
    fn extend<T: IntoIterator<Item = Event>>(&mut self, iter: T) {
        self.heap.extend(iter.into_iter().map(Pending));
    }
}

/// Drains the queue in ascending execution time order.
impl IntoIterator for EventQueue {
    type Item = Event;
    type IntoIter = Replay;

    fn into_iter(self) -> Self::IntoIter {
        Replay::new(self)
    }
}

/// Moves every event into a queue ordered by ascending execution time.
#[must_use]
pub fn build_priority_queue(events: EventCollection) -> EventQueue {
    events.into_iter().collect()
}
