//! Convex planar polygons (triangles included).

use lumen_math::{align_zero, Aabb, Point, Ray, Vector};

use super::{in_range, Plane};
use crate::{GeometryError, GeometryResult};

/// A convex polygon with ordered, coplanar vertices.
///
/// The normal follows the vertex order (right-hand rule), so the order must
/// be consistent: either all clockwise or all counter-clockwise as seen
/// from one side. Mixed order is rejected at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    plane: Plane,
    bbox: Aabb,
}

impl Polygon {
    /// Create a polygon from at least three ordered vertices.
    pub fn new(vertices: Vec<Point>) -> GeometryResult<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices(vertices.len()));
        }

        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        let n = plane.normal();

        if vertices.len() > 3 {
            for (i, v) in vertices.iter().enumerate().skip(3) {
                if align_zero((*v - vertices[0]).dot(n)) != 0.0 {
                    return Err(GeometryError::NotCoplanar(i));
                }
            }

            // Every turn must bend the same way as the first one
            let count = vertices.len();
            for i in 0..count {
                let prev = vertices[(i + count - 1) % count];
                let curr = vertices[i];
                let next = vertices[(i + 1) % count];
                let turn = align_zero((curr - prev).cross(next - curr).dot(n));
                if turn <= 0.0 {
                    return Err(GeometryError::NotConvex(i));
                }
            }
        }

        let bbox = Aabb::enclosing(&vertices);
        Ok(Self {
            vertices,
            plane,
            bbox,
        })
    }

    /// Create a triangle.
    pub fn triangle(a: Point, b: Point, c: Point) -> GeometryResult<Self> {
        Self::new(vec![a, b, c])
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn normal(&self) -> Vector {
        self.plane.normal()
    }

    pub fn normal_at(&self, _p: Point) -> Vector {
        self.plane.normal()
    }

    /// Ray-plane intersection followed by an inside test.
    ///
    /// The hit point is inside when the cross products of every edge with
    /// the vector from the edge start to the point all point to the same
    /// side of the plane. A point on an edge or vertex gives a zero
    /// product and counts as a miss.
    pub fn intersect(&self, ray: &Ray, max_distance: f64) -> Vec<Point> {
        let Some(t) = self.plane.crossing(ray) else {
            return Vec::new();
        };
        if !in_range(t, max_distance) {
            return Vec::new();
        }

        let p = ray.at(t);
        let n = self.plane.normal();
        let count = self.vertices.len();

        let mut expected_sign = 0.0;
        for i in 0..count {
            let start = self.vertices[i];
            let end = self.vertices[(i + 1) % count];
            let side = align_zero((end - start).cross(p - start).dot(n));
            if side == 0.0 {
                return Vec::new();
            }
            if expected_sign == 0.0 {
                expected_sign = side.signum();
            } else if side.signum() != expected_sign {
                return Vec::new();
            }
        }

        vec![p]
    }

    pub fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}
