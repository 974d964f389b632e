//! Reusable observers for the compphys root finders and event replay.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the solvers in `compphys-solvers` and the replay in
//! `compphys-kmc`.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasIteration`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`TraceObserver`] logs every event through `tracing`.
//! - [`RecordWriter`] writes one textual record per replayed event.
//!
//! [`Observer`]: compphys_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasIteration`]: traits::HasIteration
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod record;
mod trace;

pub use record::RecordWriter;
pub use trace::TraceObserver;
