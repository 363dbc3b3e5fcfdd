//! Scene snapshot and builder.
//!
//! A `SceneBuilder` collects geometries and lights during setup; `build()`
//! freezes them into a `Scene` that is only ever read during rendering, so
//! render workers can share it without locks.

use lumen_math::{Color, Ray};

use crate::geometry::{GeoPoint, Geometries, GeometryNode, Intersectable};
use crate::light::{AmbientLight, LightSource};

/// An immutable scene: geometry, lights, ambient term and background.
#[derive(Debug, Clone)]
pub struct Scene {
    name: String,
    geometries: Geometries,
    lights: Vec<LightSource>,
    ambient_light: AmbientLight,
    background: Color,
}

impl Scene {
    /// Start building a scene.
    pub fn builder(name: impl Into<String>) -> SceneBuilder {
        SceneBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn geometries(&self) -> &Geometries {
        &self.geometries
    }

    pub fn lights(&self) -> &[LightSource] {
        &self.lights
    }

    pub fn ambient_light(&self) -> &AmbientLight {
        &self.ambient_light
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// All intersections with `t` in `(0, max_distance]`.
    pub fn find_intersections(&self, ray: &Ray, max_distance: f64) -> Vec<GeoPoint<'_>> {
        self.geometries.find_intersections(ray, max_distance)
    }

    /// The intersection nearest to the ray origin, if any.
    pub fn find_closest_intersection(&self, ray: &Ray) -> Option<GeoPoint<'_>> {
        ray.closest_by(self.geometries.find_all_intersections(ray), |gp| gp.point)
    }
}

/// Mutable builder producing an immutable [`Scene`].
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    name: String,
    geometries: Geometries,
    lights: Vec<LightSource>,
    ambient_light: AmbientLight,
    background: Color,
}

impl SceneBuilder {
    /// Create a builder with no geometry, no lights, no ambient light and a
    /// black background.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            geometries: Geometries::new(),
            lights: Vec::new(),
            ambient_light: AmbientLight::NONE,
            background: Color::BLACK,
        }
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_ambient_light(mut self, ambient_light: AmbientLight) -> Self {
        self.ambient_light = ambient_light;
        self
    }

    /// Add a surface or a group of surfaces.
    pub fn add_geometry(mut self, geometry: impl Into<GeometryNode>) -> Self {
        self.geometries.add(geometry);
        self
    }

    pub fn add_light(mut self, light: impl Into<LightSource>) -> Self {
        self.lights.push(light.into());
        self
    }

    /// Freeze the builder into a scene.
    pub fn build(self) -> Scene {
        log::debug!(
            "Built scene '{}': {} surfaces, {} lights",
            self.name,
            self.geometries.surfaces().len(),
            self.lights.len()
        );

        Scene {
            name: self.name,
            geometries: self.geometries,
            lights: self.lights,
            ambient_light: self.ambient_light,
            background: self.background,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Geometry, PointLight};
    use lumen_math::{Point, Vector};

    fn sample_scene() -> Scene {
        Scene::builder("sample")
            .with_background(Color::new(10.0, 20.0, 30.0))
            .with_ambient_light(AmbientLight::new(Color::WHITE, 0.1))
            .add_geometry(Geometry::sphere(Point::new(0.0, 0.0, -10.0), 1.0).unwrap())
            .add_geometry(Geometry::sphere(Point::new(0.0, 0.0, -5.0), 1.0).unwrap())
            .add_light(PointLight::new(Color::WHITE, Point::new(0.0, 10.0, 0.0)))
            .build()
    }

    #[test]
    fn test_builder() {
        let _ = env_logger::builder().is_test(true).try_init();

        let scene = sample_scene();
        assert_eq!(scene.name(), "sample");
        assert_eq!(scene.background(), Color::new(10.0, 20.0, 30.0));
        assert_eq!(scene.geometries().len(), 2);
        assert_eq!(scene.lights().len(), 1);
        assert!(scene.ambient_light().intensity().r() > 0.0);
    }

    #[test]
    fn test_defaults() {
        let scene = SceneBuilder::new("empty").build();
        assert_eq!(scene.background(), Color::BLACK);
        assert_eq!(scene.ambient_light().intensity(), Color::BLACK);
        assert!(scene.geometries().is_empty());
        assert!(scene.lights().is_empty());
    }

    #[test]
    fn test_find_closest_intersection() {
        let scene = sample_scene();
        let ray = Ray::new(Point::ZERO, -Vector::Z).unwrap();

        let closest = scene.find_closest_intersection(&ray).unwrap();
        assert_eq!(closest.point, Point::new(0.0, 0.0, -4.0));
        assert_eq!(scene.find_intersections(&ray, f64::INFINITY).len(), 4);
    }

    #[test]
    fn test_no_intersection_is_none() {
        let scene = sample_scene();
        let ray = Ray::new(Point::ZERO, Vector::Z).unwrap();
        assert!(scene.find_closest_intersection(&ray).is_none());
    }

    #[test]
    fn test_scene_is_shareable_across_threads() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<Scene>();
    }
}
