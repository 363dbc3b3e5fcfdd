use crate::{align_zero, MathResult, Point, Vector};

/// A ray in 3D space with an origin and a unit direction.
///
/// The direction is normalized on construction, so every `Ray` in the
/// renderer satisfies `|direction| == 1`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Point,
    direction: Vector,
}

impl Ray {
    /// Distance a secondary ray's origin is pushed off the surface it
    /// leaves, to keep it from re-hitting that surface.
    pub const DELTA: f64 = 0.1;

    /// Create a new ray, normalizing `direction`.
    pub fn new(origin: Point, direction: Vector) -> MathResult<Self> {
        Ok(Self {
            origin,
            direction: direction.normalize()?,
        })
    }

    /// Create a ray leaving a surface at `point`, moved [`Ray::DELTA`] along
    /// the unit `normal` towards the side `direction` heads into.
    ///
    /// When `direction` is perpendicular to `normal` the origin stays at
    /// `point`.
    pub fn offset(point: Point, direction: Vector, normal: Vector) -> MathResult<Self> {
        let nd = align_zero(normal.dot(direction));
        let origin = if nd == 0.0 {
            point
        } else if nd > 0.0 {
            point + normal.scale(Self::DELTA)
        } else {
            point - normal.scale(Self::DELTA)
        };
        Self::new(origin, direction)
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Vector {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Point {
        self.origin + self.direction.scale(t)
    }

    /// Pick the candidate closest to the ray origin.
    ///
    /// `point_of` extracts the location of each candidate. Returns `None`
    /// for an empty candidate set.
    pub fn closest_by<T, I, F>(&self, candidates: I, point_of: F) -> Option<T>
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> Point,
    {
        candidates
            .into_iter()
            .map(|c| (self.origin.distance_squared(point_of(&c)), c))
            .min_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(_, c)| c)
    }
}
