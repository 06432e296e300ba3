//! Newton-Raphson root finding for scalar functions.
//!
//! # Algorithm
//!
//! Each iteration evaluates `f(x)` and `f'(x)`, steps to
//! `x - f(x) / f'(x)`, and re-evaluates `f` at the new estimate. The solve
//! converges as soon as `|f(x)|` drops below the residual tolerance.
//!
//! A derivative of exactly zero is replaced by `max(1e-3, residual_tol * 1e3)`
//! so the step stays finite and moves in a stable direction.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration. Returning
//! [`Action::StopEarly`] ends the solve with [`Error::StoppedByObserver`]
//! unless that iteration already converged.

use rootline_core::{Args, Function, Observer};

use crate::Error;

use super::{
    Action, Config, Event, Solution,
    evaluate::{derivative, target},
    guard::floor_zero_slope,
};

/// Finds a root of `f` using Newton-Raphson iteration from `x0`.
///
/// `f_args` and `df_args` are forwarded unchanged to every call of `f` and
/// `df`. The function is evaluated twice per iteration and the derivative
/// once.
///
/// # Errors
///
/// Returns [`Error::NoConvergence`] if no iterate meets the tolerance within
/// `config.max_iters()` iterations, [`Error::StoppedByObserver`] if the
/// observer stops the solve, or a function/derivative error if a call fails
/// or rejects its arguments.
pub fn solve<F, D, Obs>(
    f: &F,
    f_args: &Args,
    df: &D,
    df_args: &Args,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    D: Function,
    Obs: Observer<Event, Action>,
{
    let tol = config.residual_tol();
    let mut x = x0;

    for iter in 1..=config.max_iters() {
        let fx = target(f, x, f_args)?;
        let (slope, floored) = floor_zero_slope(derivative(df, x, df_args)?, tol);
        if floored {
            log::debug!("newton-raphson: zero derivative at x = {x}, using slope {slope}");
        }

        x -= fx / slope;

        let residual = target(f, x, f_args)?;
        log::trace!("newton-raphson iter {iter}: x = {x}, f(x) = {residual}");

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
    }

    log::debug!(
        "newton-raphson: no convergence after {} iterations (last x = {x})",
        config.max_iters()
    );
    Err(Error::NoConvergence {
        iters: config.max_iters(),
    })
}

/// Runs Newton-Raphson without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F, D>(
    f: &F,
    f_args: &Args,
    df: &D,
    df_args: &Args,
    x0: f64,
    config: &Config,
) -> Result<Solution, Error>
where
    F: Function,
    D: Function,
{
    solve(f, f_args, df, df_args, x0, config, ())
}
