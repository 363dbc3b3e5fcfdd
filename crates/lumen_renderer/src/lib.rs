//! Lumen Renderer - recursive ray tracing on the CPU.
//!
//! Traces one or more primary rays per pixel through an immutable
//! [`Scene`](lumen_core::Scene), combining Phong local shading, binary
//! shadows and recursive reflection/refraction. Recursion stops at a fixed
//! depth or once the accumulated attenuation becomes invisible, whichever
//! comes first.

mod bucket;
mod camera;
mod error;
mod image_writer;
mod renderer;
mod tracer;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use error::{RenderError, RenderResult};
pub use image_writer::{ImageWriter, PixelSink};
pub use renderer::{render, render_pixel, RenderConfig};
pub use tracer::{RayTracer, TraceStats, MAX_CALC_COLOR_LEVEL, MIN_CALC_COLOR_K};

/// Re-export common math types from lumen_math
pub use lumen_math::{Color, Point, Ray, Vector};
