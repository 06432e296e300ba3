//! Solvers for scalar equations: finding `x` such that `f(x) ≈ 0`.
//!
//! A [`Function`] maps `x` (plus fixed extra [`Args`]) to a residual. Solvers
//! in this module iterate until `|f(x)|` is below the configured tolerance or
//! the iteration budget runs out. There is no partial result: a solve either
//! returns a converged [`Solution`] or an error.
//!
//! # Solvers
//!
//! - [`newton_raphson`] — uses the function and its derivative
//! - [`secant`] — derivative-free, slope from the last two iterates
//!
//! Both share the same zero-slope floor and convergence test.
//!
//! [`Function`]: rootline_core::Function
//! [`Args`]: rootline_core::Args

mod config;
mod evaluate;
mod event;
mod guard;
mod solution;

pub use config::{Config, ConfigError};
pub use event::{Action, Event};
pub use solution::Solution;

pub mod newton_raphson;
pub mod secant;
