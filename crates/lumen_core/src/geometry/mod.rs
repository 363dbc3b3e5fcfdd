//! Geometric surfaces and ray intersection.
//!
//! Shapes form a closed set ([`Shape`]) so intersection dispatch stays
//! exhaustive. A [`Geometry`] pairs a shape with its material and emission;
//! [`Geometries`] is the composite that the scene holds.

mod cylinder;
mod geometries;
mod plane;
mod polygon;
mod sphere;
mod tube;

pub use cylinder::Cylinder;
pub use geometries::{Geometries, GeometryNode};
pub use plane::Plane;
pub use polygon::Polygon;
pub use sphere::Sphere;
pub use tube::Tube;

use lumen_math::{align_zero, Aabb, Color, MathResult, Point, Ray, Vector};

use crate::{GeometryResult, Material};

/// Returns true if ray parameter `t` lies in `(0, max_distance]`.
#[inline]
pub(crate) fn in_range(t: f64, max_distance: f64) -> bool {
    align_zero(t) > 0.0 && align_zero(t - max_distance) <= 0.0
}

/// Turn ray parameters into hit points, keeping those in `(0, max_distance]`.
pub(crate) fn points_in_range(ray: &Ray, ts: &[f64], max_distance: f64) -> Vec<Point> {
    ts.iter()
        .copied()
        .filter(|&t| in_range(t, max_distance))
        .map(|t| ray.at(t))
        .collect()
}

/// An intersection record: the surface that was hit and where.
#[derive(Debug, Clone, Copy)]
pub struct GeoPoint<'a> {
    pub geometry: &'a Geometry,
    pub point: Point,
}

impl<'a> GeoPoint<'a> {
    pub fn new(geometry: &'a Geometry, point: Point) -> Self {
        Self { geometry, point }
    }

    /// Unit surface normal at the hit point.
    pub fn normal(&self) -> MathResult<Vector> {
        self.geometry.normal_at(self.point)
    }
}

/// Trait for anything that can be intersected by rays.
pub trait Intersectable: Send + Sync {
    /// All intersections with `t` in `(0, max_distance]`, in no particular
    /// order across members. An empty vector means no intersection.
    fn find_intersections<'a>(&'a self, ray: &Ray, max_distance: f64) -> Vec<GeoPoint<'a>>;

    /// All intersections in front of the ray origin.
    fn find_all_intersections<'a>(&'a self, ray: &Ray) -> Vec<GeoPoint<'a>> {
        self.find_intersections(ray, f64::INFINITY)
    }

    /// Bounding box, or `None` for unbounded surfaces.
    fn bounding_box(&self) -> Option<Aabb>;
}

/// The closed set of supported surface shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Polygon(Polygon),
    Tube(Tube),
    Cylinder(Cylinder),
}

impl Shape {
    /// Unit normal at a point on the surface.
    pub fn normal_at(&self, p: Point) -> MathResult<Vector> {
        match self {
            Shape::Sphere(s) => s.normal_at(p),
            Shape::Plane(s) => Ok(s.normal_at(p)),
            Shape::Polygon(s) => Ok(s.normal_at(p)),
            Shape::Tube(s) => s.normal_at(p),
            Shape::Cylinder(s) => s.normal_at(p),
        }
    }

    /// Hit points with `t` in `(0, max_distance]`, nearest first.
    pub fn intersect(&self, ray: &Ray, max_distance: f64) -> Vec<Point> {
        match self {
            Shape::Sphere(s) => s.intersect(ray, max_distance),
            Shape::Plane(s) => s.intersect(ray, max_distance),
            Shape::Polygon(s) => s.intersect(ray, max_distance),
            Shape::Tube(s) => s.intersect(ray, max_distance),
            Shape::Cylinder(s) => s.intersect(ray, max_distance),
        }
    }

    pub fn bounding_box(&self) -> Option<Aabb> {
        match self {
            Shape::Sphere(s) => Some(s.bounding_box()),
            Shape::Plane(_) | Shape::Tube(_) => None,
            Shape::Polygon(s) => Some(s.bounding_box()),
            Shape::Cylinder(s) => Some(s.bounding_box()),
        }
    }
}

macro_rules! impl_shape_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Shape {
                fn from(s: $variant) -> Self {
                    Shape::$variant(s)
                }
            }
        )*
    };
}

impl_shape_from!(Sphere, Plane, Polygon, Tube, Cylinder);

/// A renderable surface: a shape with a material and an emission color.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    shape: Shape,
    material: Material,
    emission: Color,
}

impl Geometry {
    /// Create a geometry with the default (all-zero) material and no emission.
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self {
            shape: shape.into(),
            material: Material::default(),
            emission: Color::BLACK,
        }
    }

    pub fn sphere(center: Point, radius: f64) -> GeometryResult<Self> {
        Ok(Self::new(Sphere::new(center, radius)?))
    }

    pub fn plane(point: Point, normal: Vector) -> GeometryResult<Self> {
        Ok(Self::new(Plane::new(point, normal)?))
    }

    pub fn triangle(a: Point, b: Point, c: Point) -> GeometryResult<Self> {
        Ok(Self::new(Polygon::triangle(a, b, c)?))
    }

    pub fn polygon(vertices: Vec<Point>) -> GeometryResult<Self> {
        Ok(Self::new(Polygon::new(vertices)?))
    }

    pub fn tube(axis: Ray, radius: f64) -> GeometryResult<Self> {
        Ok(Self::new(Tube::new(axis, radius)?))
    }

    pub fn cylinder(axis: Ray, radius: f64, height: f64) -> GeometryResult<Self> {
        Ok(Self::new(Cylinder::new(axis, radius, height)?))
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_emission(mut self, emission: Color) -> Self {
        self.emission = emission;
        self
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn emission(&self) -> Color {
        self.emission
    }

    pub fn normal_at(&self, p: Point) -> MathResult<Vector> {
        self.shape.normal_at(p)
    }
}

impl Intersectable for Geometry {
    fn find_intersections<'a>(&'a self, ray: &Ray, max_distance: f64) -> Vec<GeoPoint<'a>> {
        if let Some(bbox) = self.bounding_box() {
            if !bbox.hit(ray, max_distance) {
                return Vec::new();
            }
        }

        self.shape
            .intersect(ray, max_distance)
            .into_iter()
            .map(|p| GeoPoint::new(self, p))
            .collect()
    }

    fn bounding_box(&self) -> Option<Aabb> {
        self.shape.bounding_box()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range() {
        assert!(in_range(1.0, f64::INFINITY));
        assert!(in_range(5.0, 5.0));
        assert!(!in_range(5.1, 5.0));
        assert!(!in_range(0.0, 5.0));
        assert!(!in_range(1e-12, 5.0));
        assert!(!in_range(-1.0, 5.0));
    }

    #[test]
    fn test_geometry_defaults() {
        let g = Geometry::sphere(Point::ZERO, 1.0).unwrap();
        assert_eq!(g.emission(), Color::BLACK);
        assert_eq!(*g.material(), Material::default());
    }

    #[test]
    fn test_geometry_geo_points_reference_their_geometry() {
        let g = Geometry::sphere(Point::new(0.0, 0.0, -5.0), 1.0)
            .unwrap()
            .with_emission(Color::new(1.0, 2.0, 3.0));
        let ray = Ray::new(Point::ZERO, -Vector::Z).unwrap();

        let hits = g.find_all_intersections(&ray);
        assert_eq!(hits.len(), 2);
        for hit in &hits {
            assert!(std::ptr::eq(hit.geometry, &g));
            assert_eq!(hit.geometry.emission(), Color::new(1.0, 2.0, 3.0));
        }
    }

    #[test]
    fn test_geometry_bounding_box_culls_misses() {
        let g = Geometry::sphere(Point::new(0.0, 0.0, -5.0), 1.0).unwrap();
        let ray = Ray::new(Point::new(10.0, 0.0, 0.0), -Vector::Z).unwrap();
        assert!(g.find_all_intersections(&ray).is_empty());
    }

    #[test]
    fn test_geo_point_normal() {
        let g = Geometry::sphere(Point::ZERO, 2.0).unwrap();
        let gp = GeoPoint::new(&g, Point::new(0.0, 2.0, 0.0));
        assert_eq!(gp.normal().unwrap(), Vector::Y);
    }
}
