//! Sphere primitive.

use lumen_math::{align_zero, Aabb, MathResult, Point, Ray, Vector};

use super::points_in_range;
use crate::{GeometryError, GeometryResult};

/// A sphere given by center and radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Point,
    radius: f64,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive.
    pub fn new(center: Point, radius: f64) -> GeometryResult<Self> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(GeometryError::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn normal_at(&self, p: Point) -> MathResult<Vector> {
        (p - self.center).normalize()
    }

    /// Geometric ray-sphere intersection.
    ///
    /// With `u = center - origin`, `tm` is the projection of `u` on the ray
    /// and `d²` the squared distance from the center to the ray line. A ray
    /// whose line passes at distance `>= radius` misses, so tangency is a
    /// miss. Hits come back nearest first.
    pub fn intersect(&self, ray: &Ray, max_distance: f64) -> Vec<Point> {
        let u = self.center - ray.origin();
        let r2 = self.radius * self.radius;

        let (tm, th) = if u.length_squared() == 0.0 {
            // Origin at the center: one hit at distance `radius`
            (0.0, self.radius)
        } else {
            let tm = align_zero(u.dot(ray.direction()));
            let d2 = u.length_squared() - tm * tm;
            if align_zero(d2 - r2) >= 0.0 {
                return Vec::new();
            }
            (tm, (r2 - d2).sqrt())
        };

        points_in_range(ray, &[tm - th, tm + th], max_distance)
    }

    pub fn bounding_box(&self) -> Aabb {
        let r = Vector::new(self.radius, self.radius, self.radius);
        Aabb::from_points(self.center - r, self.center + r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ray(origin: Point, direction: Vector) -> Ray {
        Ray::new(origin, direction).unwrap()
    }

    fn unit_sphere() -> Sphere {
        Sphere::new(Point::new(1.0, 0.0, 0.0), 1.0).unwrap()
    }

    #[test]
    fn test_invalid_radius() {
        assert_eq!(
            Sphere::new(Point::ZERO, 0.0),
            Err(GeometryError::InvalidRadius(0.0))
        );
        assert!(Sphere::new(Point::ZERO, -1.0).is_err());
        assert!(Sphere::new(Point::ZERO, f64::NAN).is_err());
    }

    #[test]
    fn test_normal() {
        let s = unit_sphere();
        let n = s.normal_at(Point::new(1.0, 0.0, 1.0)).unwrap();
        assert_eq!(n, Vector::Z);
    }

    #[test]
    fn test_ray_misses() {
        let s = unit_sphere();
        let r = ray(Point::new(-1.0, 0.0, 0.0), Vector::new(1.0, 1.0, 0.0));
        assert!(s.intersect(&r, f64::INFINITY).is_empty());
    }

    #[test]
    fn test_ray_crosses_twice_nearest_first() {
        let s = unit_sphere();
        let r = ray(Point::new(-1.0, 0.0, 0.0), Vector::X);

        let hits = s.intersect(&r, f64::INFINITY);
        assert_eq!(hits, vec![Point::new(0.0, 0.0, 0.0), Point::new(2.0, 0.0, 0.0)]);
    }

    #[test]
    fn test_ray_from_inside() {
        let s = unit_sphere();
        let r = ray(Point::new(0.5, 0.0, 0.0), Vector::X);

        let hits = s.intersect(&r, f64::INFINITY);
        assert_eq!(hits, vec![Point::new(2.0, 0.0, 0.0)]);
    }

    #[test]
    fn test_ray_from_center_hits_once_at_radius() {
        let s = Sphere::new(Point::new(0.0, 0.0, 0.0), 3.0).unwrap();
        let r = ray(Point::ZERO, Vector::new(0.0, 1.0, 1.0));

        let hits = s.intersect(&r, f64::INFINITY);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].distance(Point::ZERO) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_ray_pointing_away() {
        let s = unit_sphere();
        let r = ray(Point::new(3.0, 0.0, 0.0), Vector::X);
        assert!(s.intersect(&r, f64::INFINITY).is_empty());
    }

    #[test]
    fn test_tangent_ray_is_a_miss() {
        let s = unit_sphere();
        let r = ray(Point::new(0.0, 1.0, 0.0), Vector::X);
        assert!(s.intersect(&r, f64::INFINITY).is_empty());
    }

    #[test]
    fn test_ray_starting_on_surface() {
        let s = unit_sphere();

        // Leaving outwards: nothing in front
        let out = ray(Point::new(2.0, 0.0, 0.0), Vector::X);
        assert!(s.intersect(&out, f64::INFINITY).is_empty());

        // Going inwards: only the far side
        let inwards = ray(Point::new(2.0, 0.0, 0.0), -Vector::X);
        assert_eq!(s.intersect(&inwards, f64::INFINITY), vec![Point::ZERO]);
    }

    #[test]
    fn test_max_distance() {
        let s = unit_sphere();
        let r = ray(Point::new(-1.0, 0.0, 0.0), Vector::X);

        assert_eq!(s.intersect(&r, 1.5), vec![Point::ZERO]);
        assert_eq!(s.intersect(&r, 3.0).len(), 2);
        assert!(s.intersect(&r, 0.5).is_empty());
    }
}
