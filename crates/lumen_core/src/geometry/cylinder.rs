//! Finite cylinder with flat caps.

use lumen_math::{align_zero, Aabb, MathResult, Point, Ray, Vector};

use super::{points_in_range, Plane, Tube};
use crate::{GeometryError, GeometryResult};

/// A tube cut to `height` along its axis and closed by two discs.
///
/// The bottom cap is centered on the axis origin, the top cap `height`
/// further along the axis direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Cylinder {
    tube: Tube,
    height: f64,
    bottom: Plane,
    top: Plane,
    bbox: Aabb,
}

impl Cylinder {
    pub fn new(axis: Ray, radius: f64, height: f64) -> GeometryResult<Self> {
        if !(height > 0.0 && height.is_finite()) {
            return Err(GeometryError::InvalidHeight(height));
        }
        let tube = Tube::new(axis, radius)?;

        let va = axis.direction();
        let bottom_center = axis.origin();
        let top_center = axis.at(height);
        let bottom = Plane::new(bottom_center, -va)?;
        let top = Plane::new(top_center, va)?;

        let r = Vector::new(radius, radius, radius);
        let bbox = Aabb::from_points(
            bottom_center.min(top_center) - r,
            bottom_center.max(top_center) + r,
        );

        Ok(Self {
            tube,
            height,
            bottom,
            top,
            bbox,
        })
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn radius(&self) -> f64 {
        self.tube.radius()
    }

    /// Axial coordinate of `p`: 0 at the bottom cap, `height` at the top.
    fn axial(&self, p: Point) -> f64 {
        let axis = self.tube.axis();
        (p - axis.origin()).dot(axis.direction())
    }

    /// Outward unit normal: `∓axis` on the caps, radial on the side.
    pub fn normal_at(&self, p: Point) -> MathResult<Vector> {
        let s = self.axial(p);
        if align_zero(s) == 0.0 {
            Ok(self.bottom.normal())
        } else if align_zero(s - self.height) == 0.0 {
            Ok(self.top.normal())
        } else {
            self.tube.normal_at(p)
        }
    }

    pub fn intersect(&self, ray: &Ray, max_distance: f64) -> Vec<Point> {
        let r2 = self.radius() * self.radius();

        let side = self.tube.crossings(ray).into_iter().filter(|&t| {
            let s = self.axial(ray.at(t));
            align_zero(s) > 0.0 && align_zero(s - self.height) < 0.0
        });

        let caps = [&self.bottom, &self.top].into_iter().filter_map(|cap| {
            let t = cap.crossing(ray)?;
            let offset = ray.at(t) - cap.point();
            (align_zero(offset.length_squared() - r2) < 0.0).then_some(t)
        });

        let mut ts: Vec<f64> = side.chain(caps).collect();
        ts.sort_by(|a, b| a.total_cmp(b));
        points_in_range(ray, &ts, max_distance)
    }

    pub fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}
