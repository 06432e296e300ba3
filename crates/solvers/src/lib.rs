//! Newton-Raphson and secant root finding for scalar functions.
//!
//! The quickest way in is [`root_for`] (or [`inverse_for`] to solve
//! `f(x) = y`), which validates caller input and picks a solver by name:
//!
//! ```
//! use rootline_core::positional;
//! use rootline_solvers::root_for;
//!
//! let f = positional(|x: f64, [a, b]: [f64; 2]| a * x * x + b);
//!
//! let x = root_for(&f)
//!     .method("secant")
//!     .f_args([1.0, -2.0])
//!     .x0(10.0)
//!     .x1(9.0)
//!     .solve()
//!     .unwrap();
//! assert!((x - 2f64.sqrt()).abs() < 1e-6);
//! ```
//!
//! The solvers themselves live in [`equation`] and can be called directly
//! with a validated [`equation::Config`] and an observer.

mod dispatch;
mod error;

pub mod equation;

pub use dispatch::{
    Method, MethodArg, NoDerivative, RootFor, Scalar, inverse_for, inverse_for as inv_for,
    root_for,
};
pub use error::{Error, InvalidArgument};
