//! Render driver: camera rays in, pixels out.
//!
//! Buckets are traced in parallel against the shared scene; their pixels
//! are written to the sink sequentially once every bucket has finished.

use std::time::Instant;

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::{Camera, PixelSink, RayTracer, RenderError, RenderResult};
use crate::{MAX_CALC_COLOR_LEVEL, MIN_CALC_COLOR_K};
use lumen_core::Scene;
use lumen_math::Color;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Maximum recursion level for reflection/refraction
    pub max_level: u32,
    /// Attenuation below which a branch is no longer traced
    pub min_k: f64,
    /// Bucket edge length in pixels
    pub bucket_size: u32,
    /// Worker threads; `None` uses rayon's global pool
    pub threads: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_level: MAX_CALC_COLOR_LEVEL,
            min_k: MIN_CALC_COLOR_K,
            bucket_size: DEFAULT_BUCKET_SIZE,
            threads: None,
        }
    }
}

/// Color of pixel `(x, y)`: the average over the camera's rays.
///
/// Jittered samples come from a generator seeded with the pixel index, so
/// a render is reproducible regardless of thread scheduling.
pub fn render_pixel(
    camera: &Camera,
    tracer: &RayTracer<'_>,
    x: u32,
    y: u32,
) -> RenderResult<Color> {
    let seed = y as u64 * camera.image_width as u64 + x as u64;
    let mut rng = StdRng::seed_from_u64(seed);

    let rays = camera.construct_rays(x, y, &mut rng)?;
    let count = rays.len() as f64;

    let mut pixel_color = Color::BLACK;
    for ray in &rays {
        pixel_color += tracer.trace_ray(ray)?;
    }

    Ok(pixel_color.reduce(count))
}

/// Render `scene` through `camera` into `sink`.
///
/// Every pixel of the sink is written exactly once. The sink is not
/// flushed; that is left to the caller.
pub fn render<S: PixelSink + ?Sized>(
    camera: &Camera,
    scene: &Scene,
    sink: &mut S,
    config: &RenderConfig,
) -> RenderResult<()> {
    camera.validate()?;
    if sink.width() != camera.image_width || sink.height() != camera.image_height {
        return Err(RenderError::ResolutionMismatch {
            width: camera.image_width,
            height: camera.image_height,
            sink_width: sink.width(),
            sink_height: sink.height(),
        });
    }

    let tracer = RayTracer::new(scene)
        .with_max_level(config.max_level)
        .with_min_k(config.min_k);
    let buckets = generate_buckets(camera.image_width, camera.image_height, config.bucket_size);

    log::info!(
        "Rendering '{}' at {}x{} ({} samples/pixel, {} buckets)",
        scene.name(),
        camera.image_width,
        camera.image_height,
        camera.samples_per_pixel(),
        buckets.len()
    );
    let start = Instant::now();

    let trace_all = || {
        buckets
            .par_iter()
            .map(|bucket| render_bucket(bucket, camera, &tracer))
            .collect::<RenderResult<Vec<BucketResult>>>()
    };

    let results = match config.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?
            .install(trace_all)?,
        None => trace_all()?,
    };

    for result in &results {
        for ((x, y), color) in result.iter() {
            sink.write_pixel(x, y, color)?;
        }
    }

    log::info!(
        "Rendered {} pixels in {:.2?}",
        camera.image_width as u64 * camera.image_height as u64,
        start.elapsed()
    );
    Ok(())
}
