//! Direction vectors.

use std::ops::{Add, Mul, Neg, Sub};

use glam::DVec3;

use crate::{align_zero, MathError, MathResult};

/// A direction (or displacement) in 3D space.
///
/// Vectors may be zero length (e.g. the cross product of parallel vectors),
/// but [`Vector::normalize`] refuses to turn a zero vector into a direction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector(DVec3);

impl Vector {
    pub const X: Vector = Vector(DVec3::X);
    pub const Y: Vector = Vector(DVec3::Y);
    pub const Z: Vector = Vector(DVec3::Z);

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    #[inline]
    pub const fn from_dvec3(v: DVec3) -> Self {
        Self(v)
    }

    #[inline]
    pub fn as_dvec3(self) -> DVec3 {
        self.0
    }

    #[inline]
    pub fn x(self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn z(self) -> f64 {
        self.0.z
    }

    #[inline]
    pub fn dot(self, other: Vector) -> f64 {
        self.0.dot(other.0)
    }

    #[inline]
    pub fn cross(self, other: Vector) -> Vector {
        Vector(self.0.cross(other.0))
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.0.length_squared()
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.0.length()
    }

    /// Multiply every component by `s`.
    #[inline]
    pub fn scale(self, s: f64) -> Vector {
        Vector(self.0 * s)
    }

    /// Returns the unit vector in the same direction.
    ///
    /// Fails with [`MathError::ZeroVector`] when the length is zero; a zero
    /// vector is never silently substituted.
    pub fn normalize(self) -> MathResult<Vector> {
        let len = self.length();
        if len == 0.0 || !len.is_finite() {
            return Err(MathError::ZeroVector);
        }
        Ok(Vector(self.0 / len))
    }

    /// Mirror this vector about the (unit) normal `n`: `v - 2(n·v)n`.
    ///
    /// A dot product within [`ALIGN_EPSILON`](crate::ALIGN_EPSILON) of zero
    /// leaves the vector unchanged.
    #[inline]
    pub fn reflect(self, n: Vector) -> Vector {
        self - n.scale(2.0 * align_zero(n.dot(self)))
    }
}

impl Add for Vector {
    type Output = Vector;

    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector(self.0 + rhs.0)
    }
}

impl Sub for Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector(self.0 - rhs.0)
    }
}

impl Neg for Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Vector {
        Vector(-self.0)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}
