//! Light sources.
//!
//! The ambient term is a scene-wide constant; every other light is a
//! [`LightSource`] that can be queried at a surface point for its
//! intensity, its direction and its distance.

use lumen_math::{Coeff3, Color, Point, Vector};

use crate::{LightError, LightResult};

/// Uniform ambient light: `intensity = iA * kA`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    intensity: Color,
}

impl AmbientLight {
    /// No ambient light.
    pub const NONE: AmbientLight = AmbientLight {
        intensity: Color::BLACK,
    };

    pub fn new(ia: Color, ka: impl Into<Coeff3>) -> Self {
        Self {
            intensity: ia * ka.into(),
        }
    }

    pub fn intensity(&self) -> Color {
        self.intensity
    }
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self::NONE
    }
}

/// Light arriving from infinitely far away along one direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    intensity: Color,
    direction: Vector,
}

impl DirectionalLight {
    pub fn new(intensity: Color, direction: Vector) -> LightResult<Self> {
        Ok(Self {
            intensity,
            direction: direction.normalize()?,
        })
    }
}

/// Omnidirectional light at a position, attenuated with distance as
/// `I0 / (kC + kL·d + kQ·d²)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    intensity: Color,
    position: Point,
    kc: f64,
    kl: f64,
    kq: f64,
}

impl PointLight {
    /// Create an unattenuated point light (`kC = 1`, `kL = kQ = 0`).
    pub fn new(intensity: Color, position: Point) -> Self {
        Self {
            intensity,
            position,
            kc: 1.0,
            kl: 0.0,
            kq: 0.0,
        }
    }

    /// Set the constant, linear and quadratic attenuation factors.
    pub fn with_attenuation(mut self, kc: f64, kl: f64, kq: f64) -> LightResult<Self> {
        let valid = [kc, kl, kq].iter().all(|k| *k >= 0.0 && k.is_finite());
        if !valid || kc + kl + kq == 0.0 {
            return Err(LightError::InvalidAttenuation { kc, kl, kq });
        }
        self.kc = kc;
        self.kl = kl;
        self.kq = kq;
        Ok(self)
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn intensity_at(&self, p: Point) -> Color {
        let d = self.position.distance(p);
        let attenuation = self.kc + self.kl * d + self.kq * d * d;
        self.intensity.scale(1.0 / attenuation)
    }

    /// Unit vector from the light to `p`; `None` when `p` is the light's
    /// own position.
    pub fn direction_at(&self, p: Point) -> Option<Vector> {
        (p - self.position).normalize().ok()
    }

    pub fn distance_to(&self, p: Point) -> f64 {
        self.position.distance(p)
    }
}

/// A point light emitting mainly along an axis.
///
/// Intensity is the point-light intensity scaled by
/// `max(0, axis·l)^narrow_beam`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    light: PointLight,
    direction: Vector,
    narrow_beam: f64,
}

impl SpotLight {
    pub fn new(intensity: Color, position: Point, direction: Vector) -> LightResult<Self> {
        Ok(Self {
            light: PointLight::new(intensity, position),
            direction: direction.normalize()?,
            narrow_beam: 1.0,
        })
    }

    pub fn with_attenuation(mut self, kc: f64, kl: f64, kq: f64) -> LightResult<Self> {
        self.light = self.light.with_attenuation(kc, kl, kq)?;
        Ok(self)
    }

    /// Tighten (> 1) or widen (< 1) the beam. 0 lights every direction in
    /// front of the spot evenly.
    pub fn with_narrow_beam(mut self, narrow_beam: f64) -> LightResult<Self> {
        if !(narrow_beam >= 0.0 && narrow_beam.is_finite()) {
            return Err(LightError::InvalidNarrowBeam(narrow_beam));
        }
        self.narrow_beam = narrow_beam;
        Ok(self)
    }

    pub fn intensity_at(&self, p: Point) -> Color {
        let base = self.light.intensity_at(p);
        match self.light.direction_at(p) {
            Some(l) => base.scale(self.direction.dot(l).max(0.0).powf(self.narrow_beam)),
            None => base,
        }
    }
}

/// A light that contributes diffuse and specular shading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightSource {
    Directional(DirectionalLight),
    Point(PointLight),
    Spot(SpotLight),
}

impl LightSource {
    /// Light intensity arriving at `p`.
    pub fn intensity_at(&self, p: Point) -> Color {
        match self {
            LightSource::Directional(l) => l.intensity,
            LightSource::Point(l) => l.intensity_at(p),
            LightSource::Spot(l) => l.intensity_at(p),
        }
    }

    /// Unit direction in which light travels when it reaches `p`.
    ///
    /// `None` when undefined (`p` sits exactly on a positional light).
    pub fn direction_at(&self, p: Point) -> Option<Vector> {
        match self {
            LightSource::Directional(l) => Some(l.direction),
            LightSource::Point(l) => l.direction_at(p),
            LightSource::Spot(l) => l.light.direction_at(p),
        }
    }

    /// Distance from the light to `p`; infinite for directional lights.
    pub fn distance_to(&self, p: Point) -> f64 {
        match self {
            LightSource::Directional(_) => f64::INFINITY,
            LightSource::Point(l) => l.distance_to(p),
            LightSource::Spot(l) => l.light.distance_to(p),
        }
    }
}

impl From<DirectionalLight> for LightSource {
    fn from(l: DirectionalLight) -> Self {
        LightSource::Directional(l)
    }
}

impl From<PointLight> for LightSource {
    fn from(l: PointLight) -> Self {
        LightSource::Point(l)
    }
}

impl From<SpotLight> for LightSource {
    fn from(l: SpotLight) -> Self {
        LightSource::Spot(l)
    }
}
