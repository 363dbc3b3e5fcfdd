use crate::{Interval, Point, Ray};

/// Axis-Aligned Bounding Box used to skip intersection tests early.
///
/// An AABB is defined by three intervals (one per axis) that bound a 3D volume.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    /// Create an AABB from two corner points.
    pub fn from_points(a: Point, b: Point) -> Self {
        let lo = a.min(b);
        let hi = a.max(b);

        let mut aabb = Self {
            x: Interval::new(lo.x(), hi.x()),
            y: Interval::new(lo.y(), hi.y()),
            z: Interval::new(lo.z(), hi.z()),
        };
        aabb.pad_to_minimums();
        aabb
    }

    /// Create the smallest AABB containing every point.
    pub fn enclosing(points: &[Point]) -> Self {
        match points.split_first() {
            Some((first, rest)) => {
                let (lo, hi) = rest
                    .iter()
                    .fold((*first, *first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
                Aabb::from_points(lo, hi)
            }
            None => Aabb::EMPTY,
        }
    }

    /// Create an AABB that surrounds two other AABBs.
    pub fn surrounding(box0: &Aabb, box1: &Aabb) -> Self {
        Self {
            x: Interval::surrounding(&box0.x, &box1.x),
            y: Interval::surrounding(&box0.y, &box1.y),
            z: Interval::surrounding(&box0.z, &box1.z),
        }
    }

    /// Test if a ray crosses this AABB for some `t` in `[0, max_distance]`.
    ///
    /// Uses the slab method. Axis-parallel rays produce infinite or NaN slab
    /// bounds; `f64::max`/`f64::min` discard the NaN, so those cases fall
    /// through to the remaining axes.
    pub fn hit(&self, r: &Ray, max_distance: f64) -> bool {
        let origin = r.origin();
        let dir = r.direction();
        let mut ray_t = Interval::new(0.0, max_distance);

        for (slab, o, d) in [
            (self.x, origin.x(), dir.x()),
            (self.y, origin.y(), dir.y()),
            (self.z, origin.z(), dir.z()),
        ] {
            let adinv = 1.0 / d;
            let mut t0 = (slab.min - o) * adinv;
            let mut t1 = (slab.max - o) * adinv;
            if adinv < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }
            ray_t.min = t0.max(ray_t.min);
            ray_t.max = t1.min(ray_t.max);
            if ray_t.max < ray_t.min {
                return false;
            }
        }

        true
    }

    /// Pad intervals to avoid zero-width AABBs (flat polygons, planes).
    fn pad_to_minimums(&mut self) {
        let delta = 0.0001;
        if self.x.size() < delta {
            self.x = self.x.expand(delta);
        }
        if self.y.size() < delta {
            self.y = self.y.expand(delta);
        }
        if self.z.size() < delta {
            self.z = self.z.expand(delta);
        }
    }

    pub const EMPTY: Aabb = Aabb {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };
}
