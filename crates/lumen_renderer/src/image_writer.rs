//! Pixel sinks: where rendered colors end up.

use std::path::{Path, PathBuf};

use crate::{RenderError, RenderResult};
use image::{Rgb, RgbImage};
use lumen_math::Color;

/// Destination for rendered pixels.
///
/// The renderer writes every pixel exactly once, then the caller flushes.
pub trait PixelSink {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Store the color of pixel `(x, y)`.
    fn write_pixel(&mut self, x: u32, y: u32, color: Color) -> RenderResult<()>;

    /// Emit everything written so far.
    fn flush(&mut self) -> RenderResult<()>;
}

/// Directory images are written to unless overridden.
const DEFAULT_OUTPUT_DIR: &str = "images";

/// In-memory color buffer that encodes to `<output_dir>/<name>.png`.
#[derive(Debug, Clone)]
pub struct ImageWriter {
    name: String,
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    output_dir: PathBuf,
}

impl ImageWriter {
    /// Create a writer with every pixel black.
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path `flush` writes to.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.png", self.name))
    }

    /// Unclamped color stored at `(x, y)`.
    pub fn color(&self, x: u32, y: u32) -> RenderResult<Color> {
        let index = self.index(x, y)?;
        Ok(self.pixels[index])
    }

    /// The 8-bit RGB value the encoder will write for `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> RenderResult<[u8; 3]> {
        Ok(self.color(x, y)?.to_rgb8())
    }

    /// Encode the buffer as PNG into `dir`, creating it when missing.
    pub fn write_to_file(&self, dir: &Path) -> RenderResult<PathBuf> {
        std::fs::create_dir_all(dir).map_err(|source| RenderError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = dir.join(format!("{}.png", self.name));
        self.to_image().save(&path)?;

        log::info!("Wrote {}x{} image to {}", self.width, self.height, path.display());
        Ok(path)
    }

    fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            Rgb(self.pixels[(y * self.width + x) as usize].to_rgb8())
        })
    }

    fn index(&self, x: u32, y: u32) -> RenderResult<usize> {
        if x >= self.width || y >= self.height {
            return Err(RenderError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }
}

impl PixelSink for ImageWriter {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn write_pixel(&mut self, x: u32, y: u32, color: Color) -> RenderResult<()> {
        let index = self.index(x, y)?;
        self.pixels[index] = color;
        Ok(())
    }

    fn flush(&mut self) -> RenderResult<()> {
        let dir = self.output_dir.clone();
        self.write_to_file(&dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_writer_is_black() {
        let writer = ImageWriter::new("black", 4, 3);
        assert_eq!(writer.width(), 4);
        assert_eq!(writer.height(), 3);
        assert_eq!(writer.pixel(3, 2).unwrap(), [0, 0, 0]);
    }

    #[test]
    fn test_write_then_read_back() {
        let mut writer = ImageWriter::new("readback", 2, 2);
        writer.write_pixel(1, 0, Color::new(10.0, 127.6, 254.2)).unwrap();

        assert_eq!(writer.color(1, 0).unwrap(), Color::new(10.0, 127.6, 254.2));
        assert_eq!(writer.pixel(1, 0).unwrap(), Color::new(10.0, 127.6, 254.2).to_rgb8());
        assert_eq!(writer.pixel(0, 0).unwrap(), [0, 0, 0]);
    }

    #[test]
    fn test_bright_colors_clamp_on_readback() {
        let mut writer = ImageWriter::new("bright", 1, 1);
        writer.write_pixel(0, 0, Color::new(300.0, 1000.0, 255.0)).unwrap();

        assert_eq!(writer.pixel(0, 0).unwrap(), [255, 255, 255]);
        // The stored color stays unclamped
        assert_eq!(writer.color(0, 0).unwrap().g(), 1000.0);
    }

    #[test]
    fn test_out_of_range_write_is_an_error() {
        let mut writer = ImageWriter::new("bounds", 2, 2);
        let result = writer.write_pixel(2, 0, Color::WHITE);

        assert!(matches!(
            result,
            Err(RenderError::OutOfBounds { x: 2, y: 0, width: 2, height: 2 })
        ));
        assert!(writer.pixel(0, 5).is_err());
    }

    #[test]
    fn test_flush_writes_png() {
        let dir = std::env::temp_dir().join(format!("lumen_writer_{}", std::process::id()));
        let mut writer = ImageWriter::new("flushed", 3, 2).with_output_dir(&dir);
        writer.write_pixel(2, 1, Color::new(255.0, 0.0, 0.0)).unwrap();
        writer.flush().unwrap();

        let path = writer.output_path();
        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(2, 1).0, [255, 0, 0]);
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0]);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
