use std::error::Error as StdError;

use rootline_core::{InvokeError, Shape};
use thiserror::Error;

use crate::equation::ConfigError;

/// Errors that can occur while finding a root.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    #[error("no convergence within {iters} iterations")]
    NoConvergence { iters: usize },

    #[error("stopped by observer after {iters} iterations")]
    StoppedByObserver { iters: usize },

    #[error("function call failed")]
    Function(#[source] Box<dyn StdError + Send + Sync>),

    #[error("derivative call failed")]
    Derivative(#[source] Box<dyn StdError + Send + Sync>),
}

/// Arguments rejected before any iteration starts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidArgument {
    #[error("function cannot be called with {0}")]
    Function(Shape),

    #[error("derivative cannot be called with {0}")]
    Derivative(Shape),

    #[error("newton-raphson requires a derivative")]
    MissingDerivative,

    #[error("no method given (expected newton or secant)")]
    MissingMethod,

    #[error("unknown method `{0}` (expected newton or secant)")]
    UnknownMethod(String),

    #[error("`{name}` is not numeric: {value:?}")]
    NotNumeric { name: &'static str, value: String },

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
}

impl Error {
    /// Maps a failed call of the target function.
    pub(crate) fn function<E>(err: InvokeError<E>) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        match err {
            InvokeError::Rejected(shape) => InvalidArgument::Function(shape).into(),
            InvokeError::Function(e) => Self::Function(Box::new(e)),
        }
    }

    /// Maps a failed call of the derivative.
    pub(crate) fn derivative<E>(err: InvokeError<E>) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        match err {
            InvokeError::Rejected(shape) => InvalidArgument::Derivative(shape).into(),
            InvokeError::Function(e) => Self::Derivative(Box::new(e)),
        }
    }
}
