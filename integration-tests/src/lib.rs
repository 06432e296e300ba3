//! Shared fixtures for the end-to-end tests.

use std::cell::Cell;

use rootline_core::{Args, Function, Signature, positional, unary};
use rootline_solvers::{Error, Method, inverse_for, root_for};
use serde::Deserialize;

/// `f(x) = x² - 2`, with roots at ±√2.
pub fn square_minus_two() -> impl Function {
    unary(|x| x * x - 2.0)
}

/// `df(x) = 2x`.
pub fn twice() -> impl Function {
    unary(|x| 2.0 * x)
}

/// `f(x, a, b) = a x² + b`.
pub fn scaled_square() -> impl Function {
    positional(|x: f64, [a, b]: [f64; 2]| a * x * x + b)
}

/// `df(x, a) = a x`.
pub fn scaled_slope() -> impl Function {
    positional(|x: f64, [a]: [f64; 1]| a * x)
}

/// Wraps a function and counts how often it is called.
pub struct Counting<F> {
    inner: F,
    calls: Cell<usize>,
}

impl<F> Counting<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<F: Function> Function for Counting<F> {
    type Error = F::Error;

    fn signature(&self) -> Signature {
        self.inner.signature()
    }

    fn call(&self, x: f64, args: &Args) -> Result<f64, Self::Error> {
        self.calls.set(self.calls.get() + 1);
        self.inner.call(x, args)
    }
}

/// A solve described as data, as it might arrive from a config file.
///
/// Unset fields fall back to the builder's defaults.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Case {
    pub method: Method,
    pub target: Option<f64>,
    pub x0: Option<f64>,
    pub x1: Option<f64>,
    #[serde(default)]
    pub f_args: Args,
    #[serde(default)]
    pub df_args: Args,
    pub num: Option<usize>,
    pub err: Option<f64>,
}

impl Case {
    /// Parses a case from JSON.
    ///
    /// # Errors
    ///
    /// Returns the parse error for malformed JSON, an unknown method name,
    /// or a field of the wrong type.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Runs the case against `f` and its derivative `df`.
    ///
    /// # Errors
    ///
    /// Returns whatever the solve returns.
    pub fn solve<F: Function, D: Function>(&self, f: F, df: D) -> Result<f64, Error> {
        let builder = match self.target {
            Some(y) => inverse_for(f, y),
            None => root_for(f),
        };

        let mut builder = builder
            .method(self.method)
            .derivative(df)
            .f_args(self.f_args.clone())
            .df_args(self.df_args.clone());

        if let Some(x0) = self.x0 {
            builder = builder.x0(x0);
        }
        if let Some(x1) = self.x1 {
            builder = builder.x1(x1);
        }
        if let Some(num) = self.num {
            builder = builder.num(num);
        }
        if let Some(err) = self.err {
            builder = builder.err(err);
        }

        builder.solve()
    }
}
