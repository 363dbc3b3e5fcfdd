//! RGB color in the 0..255 intensity scale.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use glam::DVec3;

use crate::{Coeff3, Interval};

/// An RGB color with non-negative real channels.
///
/// Channels use the 0..255 scale of light intensities but are not clamped
/// while light is accumulated; a bright light may push a channel far above
/// 255. Clamping happens only in [`Color::to_rgb8`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color(DVec3);

impl Color {
    pub const BLACK: Color = Color(DVec3::ZERO);
    pub const WHITE: Color = Color(DVec3::splat(255.0));

    /// Create a new color. Negative channels are raised to zero.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self(DVec3::new(r, g, b).max(DVec3::ZERO))
    }

    #[inline]
    pub fn r(self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn g(self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn b(self) -> f64 {
        self.0.z
    }

    #[inline]
    pub fn as_dvec3(self) -> DVec3 {
        self.0
    }

    /// Scale every channel by a non-negative scalar.
    pub fn scale(self, s: f64) -> Color {
        Color::from_raw(self.0 * s)
    }

    /// Scale each channel by the matching coefficient.
    pub fn scale_by(self, k: Coeff3) -> Color {
        Color(self.0 * k.as_dvec3())
    }

    /// Divide every channel by `n` (used to average samples).
    pub fn reduce(self, n: f64) -> Color {
        Color::from_raw(self.0 / n)
    }

    fn from_raw(v: DVec3) -> Color {
        Color(v.max(DVec3::ZERO))
    }

    /// Convert to 8-bit RGB, clamping each channel to `[0, 255]`.
    pub fn to_rgb8(self) -> [u8; 3] {
        let range = Interval::new(0.0, 255.0);
        [
            range.clamp(self.0.x) as u8,
            range.clamp(self.0.y) as u8,
            range.clamp(self.0.z) as u8,
        ]
    }
}

impl Add for Color {
    type Output = Color;

    #[inline]
    fn add(self, rhs: Color) -> Color {
        Color(self.0 + rhs.0)
    }
}

impl AddAssign for Color {
    #[inline]
    fn add_assign(&mut self, rhs: Color) {
        self.0 += rhs.0;
    }
}

impl Mul<Coeff3> for Color {
    type Output = Color;

    #[inline]
    fn mul(self, rhs: Coeff3) -> Color {
        self.scale_by(rhs)
    }
}

impl Sum for Color {
    fn sum<I: Iterator<Item = Color>>(iter: I) -> Color {
        iter.fold(Color::BLACK, |acc, c| acc + c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_stay_unclamped_until_output() {
        let c = Color::new(200.0, 10.0, 0.0) + Color::new(200.0, 10.0, 0.0);
        assert_eq!(c.r(), 400.0);
        assert_eq!(c.to_rgb8(), [255, 20, 0]);
    }

    #[test]
    fn test_negative_channels_raised_to_zero() {
        let c = Color::new(-5.0, 1.0, 2.0);
        assert_eq!(c.r(), 0.0);
    }

    #[test]
    fn test_scale_by_coefficients() {
        let c = Color::new(100.0, 100.0, 100.0) * Coeff3::new(0.5, 0.25, 0.0);
        assert_eq!(c, Color::new(50.0, 25.0, 0.0));
    }

    #[test]
    fn test_average_with_sum_and_reduce() {
        let samples = [Color::new(10.0, 0.0, 0.0), Color::new(30.0, 20.0, 0.0)];
        let avg = samples.iter().copied().sum::<Color>().reduce(samples.len() as f64);
        assert_eq!(avg, Color::new(20.0, 10.0, 0.0));
    }
}
