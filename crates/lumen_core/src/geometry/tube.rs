//! Infinite cylinder around an axis ray.

use lumen_math::{align_zero, is_zero, MathResult, Point, Ray, Vector};

use super::points_in_range;
use crate::{GeometryError, GeometryResult};

/// An infinite tube of constant radius around an axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Tube {
    axis: Ray,
    radius: f64,
}

impl Tube {
    /// Create a tube. The radius must be positive.
    pub fn new(axis: Ray, radius: f64) -> GeometryResult<Self> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(GeometryError::InvalidRadius(radius));
        }
        Ok(Self { axis, radius })
    }

    pub fn axis(&self) -> &Ray {
        &self.axis
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Unit normal pointing from the nearest axis point towards `p`.
    ///
    /// When `p` projects onto the axis origin itself, the origin is used
    /// directly as the nearest axis point.
    pub fn normal_at(&self, p: Point) -> MathResult<Vector> {
        let t = align_zero((p - self.axis.origin()).dot(self.axis.direction()));
        let o = if t == 0.0 {
            self.axis.origin()
        } else {
            self.axis.at(t)
        };
        (p - o).normalize()
    }

    /// Ray parameters of the side-surface crossings in front of the origin,
    /// ascending.
    ///
    /// Only the components perpendicular to the axis matter, which leaves a
    /// quadratic `a t² + b t + c = 0`. A ray parallel to the axis (`a = 0`)
    /// never crosses, and a tangent ray (zero discriminant) is a miss.
    pub fn crossings(&self, ray: &Ray) -> Vec<f64> {
        let va = self.axis.direction();
        let v = ray.direction();
        let dp = ray.origin() - self.axis.origin();

        let v_perp = v - va.scale(v.dot(va));
        let dp_perp = dp - va.scale(dp.dot(va));

        let a = v_perp.length_squared();
        if is_zero(a) {
            return Vec::new();
        }
        let b = 2.0 * v_perp.dot(dp_perp);
        let c = dp_perp.length_squared() - self.radius * self.radius;

        let discriminant = align_zero(b * b - 4.0 * a * c);
        if discriminant <= 0.0 {
            return Vec::new();
        }

        let sqrtd = discriminant.sqrt();
        [(-b - sqrtd) / (2.0 * a), (-b + sqrtd) / (2.0 * a)]
            .into_iter()
            .filter(|&t| align_zero(t) > 0.0)
            .collect()
    }

    pub fn intersect(&self, ray: &Ray, max_distance: f64) -> Vec<Point> {
        points_in_range(ray, &self.crossings(ray), max_distance)
    }
}
