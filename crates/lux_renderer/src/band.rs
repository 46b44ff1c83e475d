//! Scan-line band scheduling.
//!
//! The image is cut into horizontal bands of full rows. Bands never overlap,
//! so each can be rendered on its own thread straight into its slice of the
//! canvas without any locking.

use crate::renderer::render_pixel;
use crate::{Camera, RenderResult, World};
use lux_math::Colour;

/// A run of full image rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    /// First row of the band
    pub y: u32,
    /// Number of rows (the last band may be shorter)
    pub height: u32,
    /// Position of this band in top-to-bottom order
    pub index: usize,
}

impl Band {
    pub fn new(y: u32, height: u32, index: usize) -> Self {
        Self { y, height, index }
    }

    /// Number of pixels in this band for an image `width` pixels wide.
    pub fn pixel_count(&self, width: u32) -> usize {
        self.height as usize * width as usize
    }
}

/// Split `height` rows into bands of `band_height` rows, top to bottom.
///
/// Every row belongs to exactly one band. A `band_height` of 0 is treated
/// as 1.
pub fn generate_bands(height: u32, band_height: u32) -> Vec<Band> {
    let band_height = band_height.max(1);
    (0..height)
        .step_by(band_height as usize)
        .enumerate()
        .map(|(index, y)| Band::new(y, band_height.min(height - y), index))
        .collect()
}

/// Render every pixel of `band` into `out`, row-major.
///
/// `out` must hold exactly the band's pixels.
pub fn render_band(
    band: &Band,
    camera: &Camera,
    world: &World,
    depth: u32,
    out: &mut [Colour],
) -> RenderResult<()> {
    let width = camera.hsize();
    debug_assert_eq!(out.len(), band.pixel_count(width));

    for (offset, pixel) in out.iter_mut().enumerate() {
        let x = (offset % width as usize) as u32;
        let y = band.y + (offset / width as usize) as u32;
        *pixel = render_pixel(camera, world, x, y, depth)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_bands_exact_fit() {
        let bands = generate_bands(128, 32);
        assert_eq!(bands.len(), 4);

        let total_rows: u32 = bands.iter().map(|b| b.height).sum();
        assert_eq!(total_rows, 128);
    }

    #[test]
    fn test_generate_bands_partial_fit() {
        let bands = generate_bands(100, 32);
        assert_eq!(bands.len(), 4);
        assert_eq!(bands[3], Band::new(96, 4, 3));

        let total_pixels: usize = bands.iter().map(|b| b.pixel_count(50)).sum();
        assert_eq!(total_pixels, 100 * 50);
    }

    #[test]
    fn test_bands_are_contiguous() {
        let bands = generate_bands(37, 5);
        let mut next = 0;
        for (i, band) in bands.iter().enumerate() {
            assert_eq!(band.index, i);
            assert_eq!(band.y, next);
            next += band.height;
        }
        assert_eq!(next, 37);
    }

    #[test]
    fn test_single_row_bands() {
        let bands = generate_bands(3, 1);
        assert_eq!(bands, vec![Band::new(0, 1, 0), Band::new(1, 1, 1), Band::new(2, 1, 2)]);
    }

    #[test]
    fn test_zero_band_height() {
        assert_eq!(generate_bands(3, 0).len(), 3);
        assert!(generate_bands(0, 4).is_empty());
    }

    #[test]
    fn test_render_band_matches_pixels() {
        use lux_math::{view_transform, Tuple};
        use std::f64::consts::PI;

        let world = crate::test_scenes::default_world();
        let camera = Camera::new(11, 11, PI / 2.0).with_transform(
            view_transform(
                Tuple::point(0.0, 0.0, -5.0),
                Tuple::ORIGIN,
                Tuple::vector(0.0, 1.0, 0.0),
            )
            .unwrap(),
        );

        let band = Band::new(4, 3, 0);
        let mut out = vec![Colour::BLACK; band.pixel_count(11)];
        render_band(&band, &camera, &world, 5, &mut out).unwrap();

        // Row 5, column 5 is the image centre
        assert_eq!(out[11 + 5], Colour::new(0.38066, 0.47583, 0.2855));
        assert_eq!(out[0], render_pixel(&camera, &world, 0, 4, 5).unwrap());
    }
}
