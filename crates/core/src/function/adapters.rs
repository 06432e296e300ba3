use thiserror::Error;

use crate::{Args, Shape, Signature};

use super::Function;

/// Errors returned when a closure adapter is called with arguments it
/// cannot unpack.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgsError {
    #[error("expected {expected} positional argument(s), got {got}")]
    Arity { expected: usize, got: usize },

    #[error("missing keyed argument `{0}`")]
    MissingKey(&'static str),

    #[error("unexpected keyed argument `{0}`")]
    UnexpectedKey(String),

    #[error("cannot be called with {0}")]
    Unsupported(Shape),
}

/// Wraps `Fn(x) -> f64`, called as `f(x)`.
#[derive(Debug, Clone, Copy)]
pub struct Unary<F>(F);

/// Wraps `Fn(x, [f64; N]) -> f64`, called as `f(x, a, b, ...)`.
#[derive(Debug, Clone, Copy)]
pub struct Positional<F, const N: usize>(F);

/// Wraps `Fn(x, [f64; N]) -> f64` with named parameters.
///
/// Keyed arguments are looked up by name and passed to the closure in the
/// order the names were declared.
#[derive(Debug, Clone, Copy)]
pub struct Keyed<F, const N: usize> {
    names: [&'static str; N],
    f: F,
}

/// Adapts a closure of `x` alone.
pub fn unary<F>(f: F) -> Unary<F>
where
    F: Fn(f64) -> f64,
{
    Unary(f)
}

/// Adapts a closure taking `x` and `N` positional values.
pub fn positional<F, const N: usize>(f: F) -> Positional<F, N>
where
    F: Fn(f64, [f64; N]) -> f64,
{
    Positional(f)
}

/// Adapts a closure taking `x` and `N` named values.
pub fn keyed<F, const N: usize>(names: [&'static str; N], f: F) -> Keyed<F, N>
where
    F: Fn(f64, [f64; N]) -> f64,
{
    Keyed { names, f }
}

impl<F> Function for Unary<F>
where
    F: Fn(f64) -> f64,
{
    type Error = ArgsError;

    fn signature(&self) -> Signature {
        Signature::Unary
    }

    fn call(&self, x: f64, args: &Args) -> Result<f64, Self::Error> {
        if !args.is_empty() {
            return Err(ArgsError::Unsupported(args.shape()));
        }
        Ok((self.0)(x))
    }
}

impl<F, const N: usize> Function for Positional<F, N>
where
    F: Fn(f64, [f64; N]) -> f64,
{
    type Error = ArgsError;

    fn signature(&self) -> Signature {
        Signature::Positional(N)
    }

    fn call(&self, x: f64, args: &Args) -> Result<f64, Self::Error> {
        let values: &[f64] = match args {
            Args::Positional(values) => values.as_slice(),
            args if args.is_empty() => &[],
            args => return Err(ArgsError::Unsupported(args.shape())),
        };

        let values = <[f64; N]>::try_from(values).map_err(|_| ArgsError::Arity {
            expected: N,
            got: values.len(),
        })?;

        Ok((self.0)(x, values))
    }
}

impl<F, const N: usize> Function for Keyed<F, N>
where
    F: Fn(f64, [f64; N]) -> f64,
{
    type Error = ArgsError;

    fn signature(&self) -> Signature {
        Signature::Keyed(self.names.to_vec())
    }

    fn call(&self, x: f64, args: &Args) -> Result<f64, Self::Error> {
        let mut values = [0.0; N];

        match args {
            Args::Keyed(map) => {
                for (slot, name) in values.iter_mut().zip(self.names) {
                    *slot = *map.get(name).ok_or(ArgsError::MissingKey(name))?;
                }
                if let Some(extra) = map
                    .keys()
                    .find(|key| !self.names.iter().any(|name| *name == key.as_str()))
                {
                    return Err(ArgsError::UnexpectedKey(extra.clone()));
                }
            }
            args if args.is_empty() && N == 0 => {}
            args => return Err(ArgsError::Unsupported(args.shape())),
        }

        Ok((self.f)(x, values))
    }
}
