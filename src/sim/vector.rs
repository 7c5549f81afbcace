//! 2D vector math
//!
//! Free functions over `glam::DVec2`. Every operation returns a new value
//! except [`scale_in_place`], the one mutator kept for hot paths.

use glam::DVec2;

use crate::error::{Error, Result};

/// Component-wise sum
#[inline]
pub fn add(a: DVec2, b: DVec2) -> DVec2 {
    DVec2::new(a.x + b.x, a.y + b.y)
}

/// Component-wise difference `a - b`
#[inline]
pub fn sub(a: DVec2, b: DVec2) -> DVec2 {
    DVec2::new(a.x - b.x, a.y - b.y)
}

/// Multiply both components by `k`
#[inline]
pub fn scale(a: DVec2, k: f64) -> DVec2 {
    DVec2::new(a.x * k, a.y * k)
}

/// Multiply both components by `k`, in place
#[inline]
pub fn scale_in_place(a: &mut DVec2, k: f64) {
    a.x *= k;
    a.y *= k;
}

/// Euclidean length
#[inline]
pub fn length(a: DVec2) -> f64 {
    (a.x * a.x + a.y * a.y).sqrt()
}

/// Unit vector in the direction of `a`
///
/// Fails with [`Error::DegenerateVector`] when `a` has zero or non-finite length.
pub fn normalize(a: DVec2) -> Result<DVec2> {
    let len = length(a);
    if len == 0.0 || !len.is_finite() {
        return Err(Error::DegenerateVector);
    }
    Ok(DVec2::new(a.x / len, a.y / len))
}

/// Dot product
#[inline]
pub fn dot(a: DVec2, b: DVec2) -> f64 {
    a.x * b.x + a.y * b.y
}

/// Rotate `a` counter-clockwise by `angle` radians about the origin
///
/// Both output components are computed from the unrotated input.
#[inline]
pub fn rotate(a: DVec2, angle: f64) -> DVec2 {
    let (sin, cos) = angle.sin_cos();
    DVec2::new(a.x * cos - a.y * sin, a.x * sin + a.y * cos)
}

/// Distance between two points
#[inline]
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    length(sub(a, b))
}

/// Reflect `v` off a surface with normal `n` (need not be unit length)
///
/// v' = v - 2(v·n̂)n̂
pub fn reflect(v: DVec2, n: DVec2) -> Result<DVec2> {
    let n = normalize(n)?;
    Ok(sub(v, scale(n, 2.0 * dot(v, n))))
}
