/// A converged root estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// The root estimate.
    pub x: f64,

    /// Function value at `x`; its magnitude is below the residual tolerance.
    pub residual: f64,

    /// Iterations used.
    pub iters: usize,
}
