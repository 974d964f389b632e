//! Core traits and types for the compphys workspace.
//!
//! This crate defines the shared abstractions that the root-finding solvers,
//! the kinetic Monte Carlo event simulator, and the observers build on:
//!
//! - [`ScalarFunction`]: a unary real-valued callable `f(x)`
//! - [`Differentiable`]: a scalar function that also knows its derivative
//! - [`WithDerivative`]: pairs a function with a separate derivative callable
//! - [`Polynomial`]: a dense polynomial with Horner evaluation
//! - [`Observer`]: receives solver or simulation events and optionally
//!   returns control actions

mod function;
mod observer;
mod polynomial;

pub use function::{Differentiable, ScalarFunction, WithDerivative};
pub use observer::Observer;
pub use polynomial::Polynomial;
