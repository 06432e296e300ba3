use thiserror::Error;

use crate::{Args, Function, Shape};

/// Errors that can occur when invoking a function with extra arguments.
#[derive(Debug, Error)]
pub enum InvokeError<E> {
    /// The function's signature does not accept the arguments.
    #[error("function cannot be called with {0}")]
    Rejected(Shape),

    /// The function itself failed.
    #[error("function call failed")]
    Function(#[source] E),
}

/// Calls `f` at `x` with the given extra arguments.
///
/// The arguments are checked against [`Function::signature`] first, so a
/// rejected call never reaches the function.
///
/// # Errors
///
/// Returns [`InvokeError::Rejected`] if `f` does not accept `args`, or
/// [`InvokeError::Function`] if the call fails.
pub fn invoke<F>(f: &F, x: f64, args: &Args) -> Result<f64, InvokeError<F::Error>>
where
    F: Function + ?Sized,
{
    if !f.signature().accepts(args) {
        return Err(InvokeError::Rejected(args.shape()));
    }
    f.call(x, args).map_err(InvokeError::Function)
}
