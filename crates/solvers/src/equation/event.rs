/// Iteration event emitted by the Newton-Raphson and secant solvers.
///
/// One event is emitted per iteration, after the step and its residual check
/// have been evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The new estimate produced by this iteration.
    pub x: f64,

    /// The function value at the new estimate.
    pub residual: f64,

    /// Whether a zero slope was replaced by the floor during this step.
    pub floored: bool,
}

/// Actions an observer can take during a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver with [`Error::StoppedByObserver`].
    ///
    /// An event whose residual already meets the tolerance still returns the
    /// converged solution.
    ///
    /// [`Error::StoppedByObserver`]: crate::Error::StoppedByObserver
    StopEarly,
}
