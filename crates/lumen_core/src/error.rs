//! Construction-time errors for scene entities.
//!
//! Malformed shapes and lights are rejected when they are built, so a
//! `Scene` never holds an entity that could fail during rendering.

use lumen_math::MathError;
use thiserror::Error;

/// Errors that can occur while constructing geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("Height must be positive and finite, got {0}")]
    InvalidHeight(f64),

    #[error("A polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("The first three vertices are collinear or coincident")]
    DegenerateVertices,

    #[error("Vertex {0} does not lie in the polygon's plane")]
    NotCoplanar(usize),

    #[error("Polygon is not convex or its vertex order is mixed at vertex {0}")]
    NotConvex(usize),

    #[error("Math error: {0}")]
    Math(#[from] MathError),
}

pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors that can occur while constructing light sources.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LightError {
    #[error(
        "Attenuation factors must be non-negative and not all zero (kC={kc}, kL={kl}, kQ={kq})"
    )]
    InvalidAttenuation { kc: f64, kl: f64, kq: f64 },

    #[error("Narrow-beam exponent must be non-negative and finite, got {0}")]
    InvalidNarrowBeam(f64),

    #[error("Math error: {0}")]
    Math(#[from] MathError),
}

pub type LightResult<T> = Result<T, LightError>;

/// Errors that can occur while constructing materials.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MaterialError {
    #[error("Shininess must be non-negative and finite, got {0}")]
    InvalidShininess(f64),
}

pub type MaterialResult<T> = Result<T, MaterialError>;
