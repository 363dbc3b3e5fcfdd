/// Values closer to zero than this are treated as exactly zero.
pub const ALIGN_EPSILON: f64 = 1e-10;

/// Snap `x` to exactly `0.0` when it lies within [`ALIGN_EPSILON`] of zero.
///
/// Every sign or parallelism decision in the geometry and shading code goes
/// through this first, so floating noise around zero reads as zero.
#[inline]
pub fn align_zero(x: f64) -> f64 {
    if x.abs() < ALIGN_EPSILON {
        0.0
    } else {
        x
    }
}

/// Returns true if `x` is within [`ALIGN_EPSILON`] of zero.
#[inline]
pub fn is_zero(x: f64) -> bool {
    x.abs() < ALIGN_EPSILON
}
