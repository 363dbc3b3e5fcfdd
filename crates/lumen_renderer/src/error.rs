use std::path::PathBuf;

use lumen_math::MathError;
use thiserror::Error;

/// Errors that can occur while setting up or running a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Math error: {0}")]
    Math(#[from] MathError),

    #[error("Invalid camera: {0}")]
    InvalidCamera(String),

    #[error("Pixel ({x}, {y}) is outside the {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("Sink is {sink_width}x{sink_height} but the camera renders {width}x{height}")]
    ResolutionMismatch {
        width: u32,
        height: u32,
        sink_width: u32,
        sink_height: u32,
    },

    #[error("Failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

pub type RenderResult<T> = Result<T, RenderError>;
