//! Infinite plane.

use lumen_math::{align_zero, Point, Ray, Vector};

use super::points_in_range;
use crate::{GeometryError, GeometryResult};

/// An infinite plane through `point` with a unit `normal`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    point: Point,
    normal: Vector,
}

impl Plane {
    /// Create a plane from a point and a (not necessarily unit) normal.
    pub fn new(point: Point, normal: Vector) -> GeometryResult<Self> {
        Ok(Self {
            point,
            normal: normal.normalize()?,
        })
    }

    /// Create the plane through three points. The normal follows the
    /// winding `a -> b -> c`.
    pub fn from_points(a: Point, b: Point, c: Point) -> GeometryResult<Self> {
        let normal = (b - a)
            .cross(c - a)
            .normalize()
            .map_err(|_| GeometryError::DegenerateVertices)?;
        Ok(Self { point: a, normal })
    }

    pub fn point(&self) -> Point {
        self.point
    }

    pub fn normal(&self) -> Vector {
        self.normal
    }

    pub fn normal_at(&self, _p: Point) -> Vector {
        self.normal
    }

    /// Ray parameter of the plane crossing, if it lies in front of the origin.
    ///
    /// Rays parallel to the plane and rays starting on it do not cross.
    pub fn crossing(&self, ray: &Ray) -> Option<f64> {
        let nv = align_zero(self.normal.dot(ray.direction()));
        if nv == 0.0 {
            return None;
        }

        let qp = self.point - ray.origin();
        let t = align_zero(self.normal.dot(qp) / nv);
        (t > 0.0).then_some(t)
    }

    pub fn intersect(&self, ray: &Ray, max_distance: f64) -> Vec<Point> {
        match self.crossing(ray) {
            Some(t) => points_in_range(ray, &[t], max_distance),
            None => Vec::new(),
        }
    }
}
