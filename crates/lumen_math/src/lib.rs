//! Lumen math primitives.
//!
//! Points, vectors, colors and coefficient triples are thin wrappers over
//! `glam::DVec3`. Keeping them as distinct types means `Point - Point`
//! yields a `Vector`, and a color can never be passed where a direction is
//! expected.

// Re-export glam for convenience
pub use glam;
pub use glam::DVec3;

mod aabb;
mod coeff;
mod color;
mod error;
mod interval;
mod point;
mod ray;
mod util;
mod vector;

pub use aabb::Aabb;
pub use coeff::Coeff3;
pub use color::Color;
pub use error::{MathError, MathResult};
pub use interval::Interval;
pub use point::Point;
pub use ray::Ray;
pub use util::{align_zero, is_zero, ALIGN_EPSILON};
pub use vector::Vector;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_minus_point_is_vector() {
        let a = Point::new(1.0, 2.0, 3.0);
        let b = Point::new(4.0, 6.0, 3.0);
        let v: Vector = b - a;
        assert_eq!(v, Vector::new(3.0, 4.0, 0.0));
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    fn test_point_plus_vector_is_point() {
        let p = Point::new(1.0, 1.0, 1.0) + Vector::new(0.0, 2.0, -1.0);
        assert_eq!(p, Point::new(1.0, 3.0, 0.0));
    }
}
