use crate::Event;

/// A closed interval `[min, max]` of execution times.
///
/// An interval with `min > max` contains nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    min: f64,
    max: f64,
}

impl TimeWindow {
    /// Creates a window from its bounds.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns true if `t` lies in `[min, max]`.
    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        (self.min..=self.max).contains(&t)
    }
}

impl From<(f64, f64)> for TimeWindow {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

/// An ordered, mutable sequence of events owned by the caller.
///
/// Duplicates are kept: equal events are separate entries.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EventCollection {
    events: Vec<Event>,
}

impl EventCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty collection with room for `capacity` events.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::with_capacity(capacity),
        }
    }

    /// Appends an event.
    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Returns the number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if there are no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the events in order.
    #[must_use]
    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }

    /// Iterates over the events in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// Keeps only the events for which `keep` returns true, preserving order.
    pub fn retain(&mut self, keep: impl FnMut(&Event) -> bool) {
        self.events.retain(keep);
    }

    /// Removes every event whose execution time lies in `window`.
    ///
    /// Survivors keep their relative order. Returns the number removed.
    pub fn remove_window(&mut self, window: impl Into<TimeWindow>) -> usize {
        let window = window.into();
        let before = self.events.len();
        self.events
            .retain(|event| !window.contains(event.execution_time()));
        before - self.events.len()
    }

    /// Consumes the collection and returns the underlying events.
    #[must_use]
    pub fn into_vec(self) -> Vec<Event> {
        self.events
    }
}

impl From<Vec<Event>> for EventCollection {
    fn from(events: Vec<Event>) -> Self {
        Self { events }
    }
}

impl FromIterator<Event> for EventCollection {
    fn from_iter<T: IntoIterator<Item = Event>>(iter: T) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

impl Extend<Event> for EventCollection {
    fn extend<T: IntoIterator<Item = Event>>(&mut self, iter: T) {
        self.events.extend(iter);
    }
}

impl IntoIterator for EventCollection {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a> IntoIterator for &'a EventCollection {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// Removes every event whose execution time lies in `[min, max]`.
///
/// Survivors keep their relative order.
#[must_use]
pub fn remove_events(mut events: EventCollection, min: f64, max: f64) -> EventCollection {
    events.remove_window(TimeWindow::new(min, max));
    events
}
