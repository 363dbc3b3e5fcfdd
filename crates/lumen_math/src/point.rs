//! Locations in 3D space.

use std::ops::{Add, Sub};

use glam::DVec3;

use crate::Vector;

/// A location in 3D space.
///
/// Subtracting two points yields a [`Vector`]; adding a vector to a point
/// yields a point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point(DVec3);

impl Point {
    pub const ZERO: Point = Point(DVec3::ZERO);

    /// Create a new point.
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
    pub fn distance_squared(self, other: Point) -> f64 {
        self.0.distance_squared(other.0)
    }

    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        self.0.distance(other.0)
    }

    /// Component-wise minimum of two points.
    #[inline]
    pub fn min(self, other: Point) -> Point {
        Point(self.0.min(other.0))
    }

    /// Component-wise maximum of two points.
    #[inline]
    pub fn max(self, other: Point) -> Point {
        Point(self.0.max(other.0))
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Vector) -> Point {
        Point(self.0 + rhs.as_dvec3())
    }
}

impl Sub<Vector> for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Vector) -> Point {
        Point(self.0 - rhs.as_dvec3())
    }
}

impl Sub for Point {
    type Output = Vector;

    #[inline]
    fn sub(self, rhs: Point) -> Vector {
        Vector::from_dvec3(self.0 - rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point::new(1.0, 0.0, 0.0);
        let b = Point::new(1.0, 3.0, 4.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn test_point_sub_vector() {
        let p = Point::new(1.0, 1.0, 1.0) - Vector::new(1.0, 0.0, 0.0);
        assert_eq!(p, Point::new(0.0, 1.0, 1.0));
    }

    #[test]
    fn test_min_max() {
        let a = Point::new(1.0, 5.0, -2.0);
        let b = Point::new(3.0, 0.0, -4.0);
        assert_eq!(a.min(b), Point::new(1.0, 0.0, -4.0));
        assert_eq!(a.max(b), Point::new(3.0, 5.0, -2.0));
    }
}
