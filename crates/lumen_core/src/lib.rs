//! Lumen Core - Scene description types for the Lumen ray tracer.
//!
//! This crate provides:
//!
//! - **Materials**: Phong-style diffuse/specular weights plus reflectivity
//!   and transparency for the recursive tracer
//! - **Geometry**: spheres, planes, polygons, tubes and cylinders, grouped
//!   into composite `Geometries`
//! - **Lights**: ambient, directional, point and spot light sources
//! - **Scene**: an immutable snapshot built with `SceneBuilder`
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::{Geometry, Material, PointLight, Scene};
//! use lumen_math::{Color, Point};
//!
//! let scene = Scene::builder("demo")
//!     .add_geometry(
//!         Geometry::sphere(Point::new(0.0, 0.0, -100.0), 50.0)?
//!             .with_material(Material::new().with_kd(0.5)),
//!     )
//!     .add_light(PointLight::new(Color::new(500.0, 300.0, 0.0), Point::ZERO))
//!     .build();
//! ```

pub mod error;
pub mod geometry;
pub mod light;
pub mod material;
pub mod scene;

// Re-export commonly used types
pub use error::{
    GeometryError, GeometryResult, LightError, LightResult, MaterialError, MaterialResult,
};
pub use geometry::{
    Cylinder, GeoPoint, Geometries, Geometry, GeometryNode, Intersectable, Plane, Polygon, Shape,
    Sphere, Tube,
};
pub use light::{AmbientLight, DirectionalLight, LightSource, PointLight, SpotLight};
pub use material::Material;
pub use scene::{Scene, SceneBuilder};
