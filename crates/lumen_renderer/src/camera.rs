//! Pinhole camera for primary ray generation.

use crate::{RenderError, RenderResult};
use lumen_math::{is_zero, Point, Ray, Vector};
use rand::Rng;

/// Pinhole camera with a rectangular view plane in front of it.
///
/// Directions are normalized at construction and must be orthogonal; the
/// third axis is `right = to × up`.
#[derive(Debug, Clone)]
pub struct Camera {
    // Positioning
    position: Point,
    to: Vector,
    up: Vector,
    right: Vector,

    // View plane
    width: f64,
    height: f64,
    distance: f64,

    // Image settings
    pub image_width: u32,
    pub image_height: u32,
    /// Samples per pixel side: each pixel traces `grid * grid` rays
    pub grid: u32,
}

impl Camera {
    /// Create a camera at `position` looking along `to` with `up` as the
    /// vertical axis.
    pub fn new(position: Point, to: Vector, up: Vector) -> RenderResult<Self> {
        let to = to.normalize()?;
        let up = up.normalize()?;
        if !is_zero(to.dot(up)) {
            return Err(RenderError::InvalidCamera(
                "'to' and 'up' directions must be orthogonal".to_string(),
            ));
        }

        Ok(Self {
            position,
            to,
            up,
            right: to.cross(up),
            width: 1.0,
            height: 1.0,
            distance: 1.0,
            image_width: 100,
            image_height: 100,
            grid: 1,
        })
    }

    /// Set view plane size and its distance from the camera.
    pub fn with_view_plane(mut self, width: f64, height: f64, distance: f64) -> Self {
        self.width = width;
        self.height = height;
        self.distance = distance;
        self
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Trace an `n × n` jittered grid per pixel. 1 traces the pixel center.
    pub fn with_anti_aliasing(mut self, grid: u32) -> Self {
        self.grid = grid;
        self
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn to(&self) -> Vector {
        self.to
    }

    pub fn up(&self) -> Vector {
        self.up
    }

    pub fn right(&self) -> Vector {
        self.right
    }

    /// Check the settings can produce rays.
    pub fn validate(&self) -> RenderResult<()> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(RenderError::InvalidCamera(format!(
                "resolution {}x{} has no pixels",
                self.image_width, self.image_height
            )));
        }
        if !(self.width > 0.0 && self.height > 0.0 && self.distance > 0.0) {
            return Err(RenderError::InvalidCamera(format!(
                "view plane {}x{} at distance {} is degenerate",
                self.width, self.height, self.distance
            )));
        }
        if self.grid == 0 {
            return Err(RenderError::InvalidCamera(
                "anti-aliasing grid must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of rays traced per pixel.
    pub fn samples_per_pixel(&self) -> u32 {
        self.grid * self.grid
    }

    /// Ray through the center of pixel `(x, y)`, `y` counting rows downwards.
    pub fn construct_ray(&self, x: u32, y: u32) -> RenderResult<Ray> {
        self.ray_through(x as f64, y as f64)
    }

    /// Rays through a jittered `grid × grid` subdivision of pixel `(x, y)`.
    ///
    /// With a grid of 1 this is the single pixel-center ray.
    pub fn construct_rays<R: Rng + ?Sized>(
        &self,
        x: u32,
        y: u32,
        rng: &mut R,
    ) -> RenderResult<Vec<Ray>> {
        if self.grid <= 1 {
            return Ok(vec![self.construct_ray(x, y)?]);
        }

        let n = self.grid as f64;
        let mut rays = Vec::with_capacity(self.samples_per_pixel() as usize);
        for i in 0..self.grid {
            for j in 0..self.grid {
                // Sub-cell offsets within [-0.5, 0.5) of the pixel
                let dx = (j as f64 + rng.gen::<f64>()) / n - 0.5;
                let dy = (i as f64 + rng.gen::<f64>()) / n - 0.5;
                rays.push(self.ray_through(x as f64 + dx, y as f64 + dy)?);
            }
        }
        Ok(rays)
    }

    fn ray_through(&self, x: f64, y: f64) -> RenderResult<Ray> {
        let nx = self.image_width as f64;
        let ny = self.image_height as f64;
        let rx = self.width / nx;
        let ry = self.height / ny;

        let xj = (x - (nx - 1.0) / 2.0) * rx;
        let yi = -(y - (ny - 1.0) / 2.0) * ry;

        let center = self.position + self.to.scale(self.distance);
        let mut pij = center;
        if !is_zero(xj) {
            pij = pij + self.right.scale(xj);
        }
        if !is_zero(yi) {
            pij = pij + self.up.scale(yi);
        }

        Ok(Ray::new(self.position, pij - self.position)?)
    }
}
