//! Secant root finding for scalar functions.
//!
//! # Algorithm
//!
//! The secant method replaces the derivative in Newton-Raphson with the slope
//! through the last two iterates:
//!
//! ```text
//! x = x1 - f(x1) * (x1 - x0) / (f(x1) - f(x0))
//! ```
//!
//! After each step the window shifts to `(x1, x)`. The solve converges as soon
//! as `|f(x)|` drops below the residual tolerance.
//!
//! # Degenerate Windows
//!
//! When `f(x1) == f(x0)` the denominator is replaced by
//! `max(1e-3, residual_tol * 1e3)` and the step proceeds. A symmetric start
//! such as `(9, -9)` on an even function takes a large step and may settle on
//! either root.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration. Returning
//! [`Action::StopEarly`] ends the solve with [`Error::StoppedByObserver`]
//! unless that iteration already converged.

use rootline_core::{Args, Function, Observer};

use crate::Error;

use super::{Action, Config, Event, Solution, evaluate::target, guard::floor_zero_slope};

/// Finds a root of `f` using the secant method from `x0` and `x1`.
///
/// `f_args` is forwarded unchanged to every call of `f`. The function is
/// evaluated three times per iteration.
///
/// # Errors
///
/// Returns [`Error::NoConvergence`] if no iterate meets the tolerance within
/// `config.max_iters()` iterations, [`Error::StoppedByObserver`] if the
/// observer stops the solve, or a function error if a call fails or rejects
/// its arguments.
pub fn solve<F, Obs>(
    f: &F,
    f_args: &Args,
    x0: f64,
    x1: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    let tol = config.residual_tol();
    let (mut x0, mut x1) = (x0, x1);

    for iter in 1..=config.max_iters() {
        let fx0 = target(f, x0, f_args)?;
        let fx1 = target(f, x1, f_args)?;

        let (delta, floored) = floor_zero_slope(fx1 - fx0, tol);
        if floored {
            log::debug!("secant: flat window at ({x0}, {x1}), using denominator {delta}");
        }

        let x = x1 - fx1 * (x1 - x0) / delta;

        let residual = target(f, x, f_args)?;
        log::trace!("secant iter {iter}: x = {x}, f(x) = {residual}");

        let event = Event {
            iter,
            x,
            residual,
            floored,
        };
        let stop = matches!(observer.observe(&event), Some(Action::StopEarly));

        if residual.abs() < tol {
            return Ok(Solution {
                x,
                residual,
                iters: iter,
            });
        }

        if stop {
            return Err(Error::StoppedByObserver { iters: iter });
        }

        (x0, x1) = (x1, x);
    }

    log::debug!(
        "secant: no convergence after {} iterations (window = ({x0}, {x1}))",
        config.max_iters()
    );
    Err(Error::NoConvergence {
        iters: config.max_iters(),
    })
}

/// Runs the secant method without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F>(
    f: &F,
    f_args: &Args,
    x0: f64,
    x1: f64,
    config: &Config,
) -> Result<Solution, Error>
where
    F: Function,
{
    solve(f, f_args, x0, x1, config, ())
}
