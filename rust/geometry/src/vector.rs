// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vector helpers on top of nalgebra.
//!
//! nalgebra already provides the arithmetic (add, sub, scale, dot, cross,
//! norm). What it does not provide is a normalization that reports a zero
//! vector as an error, which is what [`VectorExt::unit`] adds.

use nalgebra::{Point2, Point3, Unit, Vector2, Vector3};

use crate::error::{Error, Result};
use crate::tolerance::MIN_VECTOR_NORM;

/// Extension methods for `Vector3<f64>`.
pub trait VectorExt {
    /// Normalizes the vector, failing on zero length instead of producing NaN.
    fn unit(&self) -> Result<Unit<Vector3<f64>>>;
}

impl VectorExt for Vector3<f64> {
    fn unit(&self) -> Result<Unit<Vector3<f64>>> {
        Unit::try_new(*self, MIN_VECTOR_NORM).ok_or(Error::ZeroLengthVector)
    }
}

/// The vertical axis. Views and shadows are cast along it.
#[inline]
pub fn vertical() -> Unit<Vector3<f64>> {
    Vector3::z_axis()
}

/// Parallel projection of a point onto the horizontal plane.
#[inline]
pub fn project(p: &Point3<f64>) -> Point2<f64> {
    Point2::new(p.x, p.y)
}

/// Z component of the 3D cross product of two planar vectors.
#[inline]
pub fn cross_2d(a: &Vector2<f64>, b: &Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Linear interpolation between two points, `t` in `[0, 1]`.
#[inline]
pub fn lerp(a: &Point3<f64>, b: &Point3<f64>, t: f64) -> Point3<f64> {
    a + (b - a) * t
}
