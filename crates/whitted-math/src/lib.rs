#![warn(missing_docs)]

//! Math types for the whitted ray tracer.
//!
//! Thin wrappers around nalgebra: points, vectors, unit directions and RGB
//! triples, plus the handful of helpers the tracer and its camera need.

use nalgebra::{Unit, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// A linear RGB triple, one `f64` per channel.
pub type Rgb = Vector3<f64>;

/// Tolerance below which a length or denominator counts as zero.
pub const EPSILON: f64 = 1e-6;

/// Magnitude of one [`rotate`] step, in radians.
pub const ROTATION_STEP: f64 = 0.05;

/// Normalize `v`, or `None` if it is too short to have a direction.
pub fn try_normalize(v: &Vec3) -> Option<Vec3> {
    v.try_normalize(EPSILON)
}

/// Rotate `vec` by one fixed step about the axis perpendicular to both
/// `vec` and `reference`.
///
/// `sign` scales the step: `1.0` turns towards `reference × vec`, `-1.0`
/// turns away from it. The result is not renormalized, so repeated calls
/// on a non-perpendicular pair drift in length.
pub fn rotate(vec: &Vec3, reference: &Vec3, sign: f64) -> Vec3 {
    let angle = ROTATION_STEP * sign;
    let (s, c) = angle.sin_cos();
    let n = reference.cross(vec);
    vec * c + n * s
}

/// Mirror direction `d` about the plane with normal `n`.
///
/// `n` must be unit length.
pub fn reflect(d: &Vec3, n: &Vec3) -> Vec3 {
    d - n * (2.0 * d.dot(n))
}

/// Transmit direction `d` through a surface with normal `n` and relative
/// refractive index `eta` (Snell's law).
///
/// Returns `None` on total internal reflection, or when the transmitted
/// direction degenerates to zero length.
pub fn refract(d: &Vec3, n: &Vec3, eta: f64) -> Option<Vec3> {
    let n_dot_i = n.dot(d);
    let k = 1.0 - eta * eta * (1.0 - n_dot_i * n_dot_i);
    if k < 0.0 {
        return None;
    }
    let out = d * eta - n * (eta * n_dot_i + k.sqrt());
    try_normalize(&out)
}

/// Clamp every channel of `c` into `[0, 1]`.
///
/// NaN channels collapse to zero.
pub fn clamp_rgb(c: &Rgb) -> Rgb {
    c.map(|v| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) })
}
