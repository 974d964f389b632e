//! Kinetic Monte Carlo event generation and ordered replay.
//!
//! The pipeline runs in one direction and each stage takes ownership of the
//! previous stage's output:
//!
//! 1. [`generate_events`] (or a seeded [`Generator`]) draws timestamped
//!    [`Event`]s into an [`EventCollection`].
//! 2. [`remove_events`] drops events whose execution time falls in a closed
//!    window.
//! 3. [`build_priority_queue`] moves the survivors into an [`EventQueue`]
//!    ordered by ascending execution time.
//! 4. [`run_simulation`] drains the queue lazily, earliest event first, or
//!    [`simulate`] drains it while reporting each [`Step`] to an observer.
//!
//! Nothing here is shared between calls; every random draw comes from
//! generator state owned by the caller.

mod collection;
mod event;
mod generate;
mod queue;
mod replay;
mod simulation;

pub use collection::{EventCollection, TimeWindow, remove_events};
pub use event::{Event, MAX_PROCESS_ID};
pub use generate::{
    Channel, Generator, GeneratorConfig, GeneratorConfigError, Rate, RateError, generate_events,
};
pub use queue::{EventQueue, build_priority_queue};
pub use replay::{Replay, run_simulation};
pub use simulation::{Action, Status, Step, Summary, simulate};
