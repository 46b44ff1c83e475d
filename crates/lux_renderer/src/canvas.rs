//! Output pixel buffers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{RenderError, RenderResult};
use lux_math::Colour;
use rayon::prelude::*;

/// Longest line a PPM writer should emit.
const PPM_MAX_LINE: usize = 70;

/// Anything a renderer can write pixels into.
pub trait RenderTarget {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn write_pixel(&mut self, x: u32, y: u32, colour: Colour) -> RenderResult<()>;
}

/// A row-major grid of colours, black when created.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Colour>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Colour::BLACK; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> RenderResult<usize> {
        if x >= self.width || y >= self.height {
            return Err(RenderError::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }

    pub fn pixel_at(&self, x: u32, y: u32) -> RenderResult<Colour> {
        let index = self.index(x, y)?;
        Ok(self.pixels[index])
    }

    /// All pixels, row by row.
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    fn band_len(&self, band_height: u32) -> usize {
        band_height.max(1) as usize * self.width.max(1) as usize
    }

    /// Disjoint mutable slices of `band_height` full rows each (the last
    /// one may be shorter).
    pub fn rows_mut(&mut self, band_height: u32) -> std::slice::ChunksMut<'_, Colour> {
        let len = self.band_len(band_height);
        self.pixels.chunks_mut(len)
    }

    /// Parallel version of [`rows_mut`](Self::rows_mut).
    pub fn par_rows_mut(&mut self, band_height: u32) -> rayon::slice::ChunksMut<'_, Colour> {
        let len = self.band_len(band_height);
        self.pixels.par_chunks_mut(len)
    }

    /// Write as plain PPM (P3). Colours are clamped to [0, 1] and scaled to
    /// 0..=255; no line is longer than 70 characters.
    pub fn write_ppm<W: Write>(&self, writer: &mut W) -> RenderResult<()> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", self.width, self.height)?;
        writeln!(writer, "255")?;

        let mut line = String::with_capacity(PPM_MAX_LINE);
        for row in self.pixels.chunks(self.width.max(1) as usize) {
            for colour in row {
                for value in colour.to_rgb8() {
                    let token = value.to_string();
                    if !line.is_empty() && line.len() + 1 + token.len() > PPM_MAX_LINE {
                        writeln!(writer, "{line}")?;
                        line.clear();
                    }
                    if !line.is_empty() {
                        line.push(' ');
                    }
                    line.push_str(&token);
                }
            }
            writeln!(writer, "{line}")?;
            line.clear();
        }

        Ok(())
    }

    /// Convert to an 8-bit RGB image.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        let width = self.width as usize;
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            image::Rgb(self.pixels[y as usize * width + x as usize].to_rgb8())
        })
    }

    /// Save to disk, picking PPM or PNG from the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("ppm") => {
                let mut writer = BufWriter::new(File::create(path)?);
                self.write_ppm(&mut writer)?;
                writer.flush()?;
            }
            Some("png") => self.to_rgb_image().save(path)?,
            _ => return Err(RenderError::UnsupportedFormat(path.display().to_string())),
        }

        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

impl RenderTarget for Canvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn write_pixel(&mut self, x: u32, y: u32, colour: Colour) -> RenderResult<()> {
        let index = self.index(x, y)?;
        self.pixels[index] = colour;
        Ok(())
    }
}
