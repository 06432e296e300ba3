mod adapters;

pub use adapters::{ArgsError, Keyed, Positional, Unary, keyed, positional, unary};

use crate::{Args, Signature};

/// A scalar function of `x`, optionally taking extra arguments.
///
/// Root finders call a `Function` many times with different `x` and the same
/// [`Args`]. Implementors report what they accept through [`signature`], and
/// callers are expected to go through [`invoke`] so that unacceptable
/// arguments are rejected before `call` runs.
///
/// For closures, the [`unary`], [`positional`], and [`keyed`] adapters cover
/// the usual call shapes.
///
/// [`signature`]: Function::signature
/// [`invoke`]: crate::invoke
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the extra arguments this function accepts.
    fn signature(&self) -> Signature;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the evaluation fails.
    fn call(&self, x: f64, args: &Args) -> Result<f64, Self::Error>;
}

impl<F: Function + ?Sized> Function for &F {
    type Error = F::Error;

    fn signature(&self) -> Signature {
        (**self).signature()
    }

    fn call(&self, x: f64, args: &Args) -> Result<f64, Self::Error> {
        (**self).call(x, args)
    }
}
