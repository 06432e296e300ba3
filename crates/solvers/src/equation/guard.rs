/// Replaces an exactly-zero slope with a small positive floor.
///
/// The floor is `max(1e-3, residual_tol * 1e3)`. Newton-Raphson applies it to
/// `f'(x)` and the secant method to `f(x1) - f(x0)`.
///
/// Returns the slope to divide by and whether the floor was used.
#[allow(clippy::float_cmp)]
pub(super) fn floor_zero_slope(slope: f64, residual_tol: f64) -> (f64, bool) {
    if slope == 0.0 {
        (slope_floor(residual_tol), true)
    } else {
        (slope, false)
    }
}

fn slope_floor(residual_tol: f64) -> f64 {
    f64::max(1e-3, residual_tol * 1e3)
}
