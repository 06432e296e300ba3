use crate::{Args, Function, Signature};

/// Turns `f(x) = y` into the root problem `f(x) - y = 0`.
///
/// Extra arguments reach `f` exactly as they would without the wrapper, and
/// the signature is `f`'s own. The derivative of an `Inverse` is the
/// derivative of `f`, since `y` is constant.
#[derive(Debug, Clone, Copy)]
pub struct Inverse<F> {
    f: F,
    y: f64,
}

impl<F: Function> Inverse<F> {
    /// Wraps `f` with target value `y`.
    pub fn new(f: F, y: f64) -> Self {
        Self { f, y }
    }

    /// Returns the target value.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.y
    }
}

impl<F: Function> Function for Inverse<F> {
    type Error = F::Error;

    fn signature(&self) -> Signature {
        self.f.signature()
    }

    fn call(&self, x: f64, args: &Args) -> Result<f64, Self::Error> {
        self.f.call(x, args).map(|fx| fx - self.y)
    }
}
