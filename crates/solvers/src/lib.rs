//! Numerical solvers for the compphys workspace.
//!
//! - [`equation`]: root-finding on a bracketed interval: bisection and
//!   Newton–Raphson sharing one contract
//!
//! Solvers accept an optional [`Observer`](compphys_core::Observer) that sees
//! one event per evaluation and may stop the iteration early.

pub mod equation;
