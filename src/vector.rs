//! Small helpers on top of nalgebra's `Vector3<f32>`.
//!
//! Addition, scaling, dot and cross products come straight from nalgebra;
//! this module only adds the two operations the tracer needs with
//! slightly different semantics than the library defaults.

use na::Vector3;

/// Below this magnitude a vector is treated as zero-length.
pub const NORMALIZE_EPSILON: f32 = 1e-6;

/// Normalizes `v`, returning the zero vector when `v` is (almost) zero-length
/// instead of producing NaN components.
pub fn normalize_or_zero(v: &Vector3<f32>) -> Vector3<f32> {
    v.try_normalize(NORMALIZE_EPSILON)
        .unwrap_or_else(Vector3::zeros)
}

/// Mirrors `v` about `normal`: `2 (n·v) n - v`.
///
/// Both vectors are expected to point away from the surface.
pub fn reflect(v: &Vector3<f32>, normal: &Vector3<f32>) -> Vector3<f32> {
    normal * (2.0 * normal.dot(v)) - v
}
