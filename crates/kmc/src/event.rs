use std::fmt;

/// Largest process id drawn by the default generator.
pub const MAX_PROCESS_ID: u8 = 12;

/// A timestamped kinetic Monte Carlo event.
///
/// Events are immutable once created. Two events with equal fields are still
/// distinct entries wherever they are stored.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    queue_time: f64,
    execution_time: f64,
    process_id: u8,
}

impl Event {
    /// Creates an event.
    ///
    /// The id is not checked against [`MAX_PROCESS_ID`]; keeping it in range
    /// is the caller's responsibility, as it is for deserialized events.
    /// [`Generator`](crate::Generator) only draws ids in range.
    #[must_use]
    pub fn new(queue_time: f64, execution_time: f64, process_id: u8) -> Self {
        Self {
            queue_time,
            execution_time,
            process_id,
        }
    }

    /// Time at which the event entered the queue.
    #[must_use]
    pub fn queue_time(&self) -> f64 {
        self.queue_time
    }

    /// Time at which the event executes; the replay ordering key.
    #[must_use]
    pub fn execution_time(&self) -> f64 {
        self.execution_time
    }

    /// Identifier of the process the event belongs to.
    #[must_use]
    pub fn process_id(&self) -> u8 {
        self.process_id
    }
}

/// Formats the event as its textual record,
/// `"<queue_time> <execution_time> <process_id>"`.
///
/// A precision (`{:.3}`) applies to both times.
impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            queue_time,
            execution_time,
            process_id,
        } = self;
        match f.precision() {
            Some(p) => write!(f, "{queue_time:.p$} {execution_time:.p$} {process_id}"),
            None => write!(f, "{queue_time} {execution_time} {process_id}"),
        }
    }
}
