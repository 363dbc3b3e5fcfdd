//! Coefficient triples (k) for material weights and accumulated attenuation.

use std::ops::{Add, Mul};

use glam::DVec3;

/// Three coefficients, each clamped to `[0, 1]`.
///
/// Used for the diffuse/specular/reflective/transparent weights of a
/// material and for the running attenuation product of the recursive
/// tracer. Every constructor and arithmetic result is clamped, so a
/// `Coeff3` never leaves the unit cube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coeff3(DVec3);

impl Coeff3 {
    pub const ZERO: Coeff3 = Coeff3(DVec3::ZERO);
    pub const ONE: Coeff3 = Coeff3(DVec3::ONE);

    /// Create a new triple, clamping each component to `[0, 1]`.
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self::clamped(DVec3::new(a, b, c))
    }

    /// Create a triple with all three components equal to `k`.
    pub fn splat(k: f64) -> Self {
        Self::clamped(DVec3::splat(k))
    }

    fn clamped(v: DVec3) -> Self {
        Self(v.clamp(DVec3::ZERO, DVec3::ONE))
    }

    #[inline]
    pub fn as_dvec3(self) -> DVec3 {
        self.0
    }

    /// Multiply every component by `s`.
    pub fn scale(self, s: f64) -> Coeff3 {
        Self::clamped(self.0 * s)
    }

    /// Component-wise product.
    pub fn product(self, other: Coeff3) -> Coeff3 {
        Self::clamped(self.0 * other.0)
    }

    /// Returns true if every component is strictly below `threshold`.
    pub fn lower_than(self, threshold: f64) -> bool {
        self.0.cmplt(DVec3::splat(threshold)).all()
    }

    /// Returns true if all three components are exactly zero.
    pub fn is_zero(self) -> bool {
        self.0 == DVec3::ZERO
    }
}

impl Default for Coeff3 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f64> for Coeff3 {
    fn from(k: f64) -> Self {
        Self::splat(k)
    }
}

impl From<[f64; 3]> for Coeff3 {
    fn from([a, b, c]: [f64; 3]) -> Self {
        Self::new(a, b, c)
    }
}

impl Add for Coeff3 {
    type Output = Coeff3;

    fn add(self, rhs: Coeff3) -> Coeff3 {
        Self::clamped(self.0 + rhs.0)
    }
}

impl Mul for Coeff3 {
    type Output = Coeff3;

    fn mul(self, rhs: Coeff3) -> Coeff3 {
        self.product(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_are_clamped() {
        let k = Coeff3::new(-0.5, 0.5, 1.5);
        assert_eq!(k.as_dvec3(), DVec3::new(0.0, 0.5, 1.0));
        assert_eq!(Coeff3::splat(0.7) + Coeff3::splat(0.7), Coeff3::ONE);
    }

    #[test]
    fn test_product() {
        let k = Coeff3::new(0.5, 0.2, 1.0) * Coeff3::new(0.5, 0.5, 0.1);
        assert!((k.as_dvec3() - DVec3::new(0.25, 0.1, 0.1)).length() < 1e-12);
    }

    #[test]
    fn test_lower_than_needs_every_component() {
        assert!(Coeff3::splat(0.0005).lower_than(0.001));
        assert!(!Coeff3::new(0.0005, 0.0005, 0.002).lower_than(0.001));
        assert!(!Coeff3::splat(0.001).lower_than(0.001));
    }

    #[test]
    fn test_is_zero() {
        assert!(Coeff3::ZERO.is_zero());
        assert!(Coeff3::default().is_zero());
        assert!(!Coeff3::new(0.0, 0.0, 0.01).is_zero());
    }

    #[test]
    fn test_from_scalar() {
        let k: Coeff3 = 0.3.into();
        assert_eq!(k, Coeff3::new(0.3, 0.3, 0.3));
    }
}
