//! Core traits and types for scalar root finding.
//!
//! This crate defines the shared abstractions the solvers build on:
//!
//! - [`Function`] — a scalar function of `x` that may take extra arguments
//! - [`Args`] — extra arguments (none, positional, or keyed) forwarded on every call
//! - [`Signature`] — which extra arguments a function accepts
//! - [`invoke`] — the single entry point solvers use to call a function
//! - [`Inverse`] — adapts `f(x) = y` into a root problem
//! - [`Observer`] — receives solver events and optionally returns control actions

mod args;
mod function;
mod inverse;
mod invoke;
mod observer;
mod signature;

pub use args::{Args, Shape};
pub use function::{ArgsError, Function, Keyed, Positional, Unary, keyed, positional, unary};
pub use inverse::Inverse;
pub use invoke::{InvokeError, invoke};
pub use observer::Observer;
pub use signature::Signature;
