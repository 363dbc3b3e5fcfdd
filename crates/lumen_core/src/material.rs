//! Surface material for local and global shading.

use crate::error::{MaterialError, MaterialResult};
use lumen_math::Coeff3;

/// Phong-style material with reflection and transparency weights.
///
/// Every coefficient defaults to zero: a default material reflects no
/// light, casts a full shadow, and only shows its geometry's emission.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Material {
    /// Diffuse coefficient
    pub kd: Coeff3,
    /// Specular coefficient
    pub ks: Coeff3,
    /// Reflectivity (mirror rays)
    pub kr: Coeff3,
    /// Transparency (refracted rays, shadow pass-through)
    pub kt: Coeff3,
    /// Specular exponent
    pub shininess: f64,
}

impl Material {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kd(mut self, kd: impl Into<Coeff3>) -> Self {
        self.kd = kd.into();
        self
    }

    pub fn with_ks(mut self, ks: impl Into<Coeff3>) -> Self {
        self.ks = ks.into();
        self
    }

    pub fn with_kr(mut self, kr: impl Into<Coeff3>) -> Self {
        self.kr = kr.into();
        self
    }

    pub fn with_kt(mut self, kt: impl Into<Coeff3>) -> Self {
        self.kt = kt.into();
        self
    }

    /// Set the specular exponent; negative or non-finite values are rejected.
    pub fn with_shininess(mut self, shininess: f64) -> MaterialResult<Self> {
        if !(shininess >= 0.0 && shininess.is_finite()) {
            return Err(MaterialError::InvalidShininess(shininess));
        }
        self.shininess = shininess;
        Ok(self)
    }

    /// A surface with zero transparency in every channel blocks light fully.
    pub fn is_opaque(&self) -> bool {
        self.kt.is_zero()
    }
}
