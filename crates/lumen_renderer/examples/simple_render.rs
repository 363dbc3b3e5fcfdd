//! Simple Whitted ray tracer example.
//!
//! Renders a glass sphere with a colored core in front of a mirror, lit by
//! a spot light and a point light, and saves it to `images/simple_render.png`.
//!
//! Run with: RUST_LOG=info cargo run --release --example simple_render

use anyhow::Result;
use lumen_core::{
    AmbientLight, DirectionalLight, Geometries, Geometry, Material, PointLight, Scene, SpotLight,
};
use lumen_renderer::{render, Camera, Color, ImageWriter, PixelSink, Point, RenderConfig, Vector};

fn main() -> Result<()> {
    env_logger::init();

    let start = std::time::Instant::now();
    let scene = build_scene()?;
    log::info!("Scene built in {:?}", start.elapsed());

    let camera = Camera::new(Point::new(0.0, 0.0, 1000.0), -Vector::Z, Vector::Y)?
        .with_view_plane(150.0, 150.0, 1000.0)
        .with_resolution(500, 500)
        .with_anti_aliasing(3);

    let mut writer = ImageWriter::new("simple_render", 500, 500);
    render(&camera, &scene, &mut writer, &RenderConfig::default())?;
    writer.flush()?;

    println!("Saved to {}", writer.output_path().display());
    Ok(())
}

fn build_scene() -> Result<Scene> {
    // Glass shell around a diffuse core
    let glass = Geometry::sphere(Point::new(0.0, 0.0, -50.0), 50.0)?
        .with_emission(Color::new(0.0, 0.0, 60.0))
        .with_material(
            Material::new()
                .with_kd(0.4)
                .with_ks(0.3)
                .with_shininess(100.0)?
                .with_kt(0.3),
        );
    let core = Geometry::sphere(Point::new(0.0, 0.0, -50.0), 25.0)?
        .with_emission(Color::new(100.0, 20.0, 20.0))
        .with_material(
            Material::new()
                .with_kd(0.5)
                .with_ks(0.5)
                .with_shininess(100.0)?,
        );

    // Two mirror triangles behind the spheres
    let mirror = Material::new().with_kr(0.8);
    let mirrors: Geometries = [
        Geometry::triangle(
            Point::new(-150.0, -150.0, -115.0),
            Point::new(150.0, -150.0, -135.0),
            Point::new(75.0, 75.0, -150.0),
        )?,
        Geometry::triangle(
            Point::new(-150.0, -150.0, -115.0),
            Point::new(-70.0, 70.0, -140.0),
            Point::new(75.0, 75.0, -150.0),
        )?,
    ]
    .into_iter()
    .map(|g| g.with_material(mirror).with_emission(Color::new(20.0, 20.0, 20.0)))
    .collect();

    let pillar = Geometry::cylinder(
        lumen_renderer::Ray::new(Point::new(90.0, -100.0, -80.0), Vector::Y)?,
        12.0,
        120.0,
    )?
    .with_emission(Color::new(30.0, 60.0, 30.0))
    .with_material(
        Material::new()
            .with_kd(0.6)
            .with_ks(0.2)
            .with_shininess(20.0)?,
    );

    let scene = Scene::builder("simple_render")
        .with_background(Color::new(10.0, 10.0, 25.0))
        .with_ambient_light(AmbientLight::new(Color::new(255.0, 191.0, 191.0), 0.1))
        .add_geometry(glass)
        .add_geometry(core)
        .add_geometry(mirrors)
        .add_geometry(pillar)
        .add_light(
            SpotLight::new(
                Color::new(700.0, 400.0, 400.0),
                Point::new(60.0, 50.0, 0.0),
                Vector::new(0.0, 0.0, -1.0),
            )?
            .with_attenuation(1.0, 4e-5, 2e-7)?
            .with_narrow_beam(2.0)?,
        )
        .add_light(
            PointLight::new(Color::new(300.0, 300.0, 300.0), Point::new(-100.0, 100.0, 200.0))
                .with_attenuation(1.0, 1e-4, 1e-6)?,
        )
        .add_light(DirectionalLight::new(
            Color::new(40.0, 40.0, 60.0),
            Vector::new(1.0, -1.0, -1.0),
        )?)
        .build();

    Ok(scene)
}
