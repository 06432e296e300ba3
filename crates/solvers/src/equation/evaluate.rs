use rootline_core::{Args, Function, invoke};

use crate::Error;

/// Evaluates the target function, mapping failures to [`Error::Function`].
pub(super) fn target<F: Function>(f: &F, x: f64, args: &Args) -> Result<f64, Error> {
    invoke(f, x, args).map_err(Error::function)
}

/// Evaluates the derivative, mapping failures to [`Error::Derivative`].
pub(super) fn derivative<D: Function>(df: &D, x: f64, args: &Args) -> Result<f64, Error> {
    invoke(df, x, args).map_err(Error::derivative)
}
