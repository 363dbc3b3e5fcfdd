//! Recursive Whitted-style color computation.
//!
//! The color seen along a ray is the local Phong shading at the nearest hit
//! plus light arriving by reflection and refraction, each traced
//! recursively. Recursion stops at a fixed depth or once the accumulated
//! attenuation falls below visibility.

use lumen_core::{GeoPoint, Intersectable, LightSource, Material, Scene};
use lumen_math::{align_zero, is_zero, Coeff3, Color, MathResult, Point, Ray, Vector};

/// Maximum recursion level for color calculation.
pub const MAX_CALC_COLOR_LEVEL: u32 = 10;

/// Attenuation below which a reflection/refraction branch is dropped.
pub const MIN_CALC_COLOR_K: f64 = 0.001;

const INITIAL_K: Coeff3 = Coeff3::ONE;

/// Counters collected while tracing one primary ray.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceStats {
    /// Number of shaded hits (calls to the recursive color computation)
    pub calls: usize,
    /// Deepest recursion level reached, 1 being the primary hit
    pub deepest: u32,
}

/// Ray tracer over an immutable scene.
///
/// Holds only a shared reference to the scene, so one tracer can serve
/// every render worker.
#[derive(Debug, Clone, Copy)]
pub struct RayTracer<'s> {
    scene: &'s Scene,
    max_level: u32,
    min_k: f64,
}

impl<'s> RayTracer<'s> {
    pub fn new(scene: &'s Scene) -> Self {
        Self {
            scene,
            max_level: MAX_CALC_COLOR_LEVEL,
            min_k: MIN_CALC_COLOR_K,
        }
    }

    /// Set the recursion cap. A level of 1 disables reflection/refraction.
    pub fn with_max_level(mut self, max_level: u32) -> Self {
        self.max_level = max_level.max(1);
        self
    }

    /// Set the attenuation threshold below which branches are dropped.
    pub fn with_min_k(mut self, min_k: f64) -> Self {
        self.min_k = min_k;
        self
    }

    pub fn scene(&self) -> &'s Scene {
        self.scene
    }

    /// Color seen along `ray`.
    pub fn trace_ray(&self, ray: &Ray) -> MathResult<Color> {
        let mut stats = TraceStats::default();
        self.trace(ray, &mut stats)
    }

    /// Color seen along `ray`, together with recursion counters.
    pub fn trace_ray_with_stats(&self, ray: &Ray) -> MathResult<(Color, TraceStats)> {
        let mut stats = TraceStats::default();
        let color = self.trace(ray, &mut stats)?;
        Ok((color, stats))
    }

    fn trace(&self, ray: &Ray, stats: &mut TraceStats) -> MathResult<Color> {
        match self.scene.find_closest_intersection(ray) {
            None => Ok(self.scene.background()),
            Some(gp) => {
                let color = self.calc_color(&gp, ray, self.max_level, INITIAL_K, stats)?;
                // Ambient light is added once, never through the recursion
                Ok(color + self.scene.ambient_light().intensity())
            }
        }
    }

    fn calc_color(
        &self,
        gp: &GeoPoint<'_>,
        ray: &Ray,
        level: u32,
        k: Coeff3,
        stats: &mut TraceStats,
    ) -> MathResult<Color> {
        stats.calls += 1;
        stats.deepest = stats.deepest.max(self.max_level - level + 1);

        let color = self.calc_local_effects(gp, ray)?;
        if level == 1 {
            return Ok(color);
        }
        Ok(color + self.calc_global_effects(gp, ray, level, k, stats)?)
    }

    fn calc_global_effects(
        &self,
        gp: &GeoPoint<'_>,
        ray: &Ray,
        level: u32,
        k: Coeff3,
        stats: &mut TraceStats,
    ) -> MathResult<Color> {
        let v = ray.direction();
        let n = gp.normal()?;
        let material = gp.geometry.material();

        let reflected = construct_reflected_ray(gp.point, v, n)?;
        let refracted = construct_refracted_ray(gp.point, v, n)?;

        Ok(self.calc_global_effect(&reflected, level, k, material.kr, stats)?
            + self.calc_global_effect(&refracted, level, k, material.kt, stats)?)
    }

    /// One reflection or refraction branch with coefficient `kx`.
    fn calc_global_effect(
        &self,
        ray: &Ray,
        level: u32,
        k: Coeff3,
        kx: Coeff3,
        stats: &mut TraceStats,
    ) -> MathResult<Color> {
        let kkx = k * kx;
        if kkx.lower_than(self.min_k) {
            return Ok(Color::BLACK);
        }

        let Some(gp) = self.scene.find_closest_intersection(ray) else {
            return Ok(self.scene.background() * kx);
        };

        // Grazing hit: no stable shading at a tangent
        if is_zero(gp.normal()?.dot(ray.direction())) {
            return Ok(Color::BLACK);
        }

        Ok(self.calc_color(&gp, ray, level - 1, kkx, stats)? * kx)
    }

    /// Emission plus diffuse and specular light from every unshaded source.
    fn calc_local_effects(&self, gp: &GeoPoint<'_>, ray: &Ray) -> MathResult<Color> {
        let mut color = gp.geometry.emission();

        let v = ray.direction();
        let n = gp.normal()?;
        let nv = align_zero(n.dot(v));
        if nv == 0.0 {
            return Ok(color);
        }

        let material = gp.geometry.material();
        for light in self.scene.lights() {
            let Some(l) = light.direction_at(gp.point) else {
                log::trace!("Skipping light that coincides with {:?}", gp.point);
                continue;
            };

            let nl = align_zero(n.dot(l));
            // sign(nl) == sign(nv): light and viewer on the same side
            if nl * nv > 0.0 && self.unshaded(gp, light, l, n)? {
                let il = light.intensity_at(gp.point);
                color += il * diffuse(material, nl) + il * specular(material, n, l, v);
            }
        }

        Ok(color)
    }

    /// True unless a fully opaque surface lies between `gp` and the light.
    ///
    /// Surfaces with any transparency do not block the light at all.
    fn unshaded(
        &self,
        gp: &GeoPoint<'_>,
        light: &LightSource,
        l: Vector,
        n: Vector,
    ) -> MathResult<bool> {
        let light_ray = Ray::offset(gp.point, -l, n)?;
        let distance = light.distance_to(light_ray.origin());

        let blocked = self
            .scene
            .geometries()
            .find_intersections(&light_ray, distance)
            .iter()
            .any(|hit| hit.geometry.material().is_opaque());

        Ok(!blocked)
    }
}

fn diffuse(material: &Material, nl: f64) -> Coeff3 {
    material.kd.scale(nl.abs())
}

fn specular(material: &Material, n: Vector, l: Vector, v: Vector) -> Coeff3 {
    let r = l.reflect(n);
    let minus_vr = -align_zero(r.dot(v));
    if minus_vr <= 0.0 {
        // Viewer on the far side of the reflected light
        return Coeff3::ZERO;
    }
    material.ks.scale(minus_vr.powf(material.shininess))
}

/// Mirror ray `v - 2(v·n)n`, leaving the surface on the reflected side.
fn construct_reflected_ray(p: Point, v: Vector, n: Vector) -> MathResult<Ray> {
    Ray::offset(p, v.reflect(n), n)
}

/// Transmitted ray: continues along `v`, leaving on the far side.
fn construct_refracted_ray(p: Point, v: Vector, n: Vector) -> MathResult<Ray> {
    Ray::offset(p, v, n)
}
