//! Render driver.
//!
//! Traces one ray per pixel through the pixel centre. The parallel path
//! splits the canvas into scan-line bands and hands each band's disjoint
//! slice to rayon; the end of the parallel iterator is the only
//! synchronisation point.

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::band::{generate_bands, render_band};
use crate::world::DEFAULT_MAX_DEPTH;
use crate::{Camera, Canvas, RenderResult, RenderTarget, World};
use lux_math::Colour;

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Maximum reflection/refraction bounce depth
    pub max_depth: u32,
    /// Rows per parallel work item
    pub band_height: u32,
    /// Render bands on the rayon thread pool
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            band_height: 1,
            parallel: true,
        }
    }
}

impl RenderConfig {
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_band_height(mut self, band_height: u32) -> Self {
        self.band_height = band_height;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Colour of a single pixel.
pub fn render_pixel(camera: &Camera, world: &World, x: u32, y: u32, depth: u32) -> RenderResult<Colour> {
    let ray = camera.ray_for_pixel(x, y);
    world.colour_at(&ray, depth)
}

/// Render the scene into any [`RenderTarget`] on the calling thread.
///
/// Pixels outside the target are skipped; pixels outside the camera's image
/// are never written.
pub fn render_into<T: RenderTarget>(
    target: &mut T,
    camera: &Camera,
    world: &World,
    config: &RenderConfig,
) -> RenderResult<()> {
    world.validate()?;

    let width = camera.hsize().min(target.width());
    let height = camera.vsize().min(target.height());
    log::debug!("Rendering {}x{} single-threaded, max depth {}", width, height, config.max_depth);

    let start = Instant::now();
    for y in 0..height {
        for x in 0..width {
            let colour = render_pixel(camera, world, x, y, config.max_depth)?;
            target.write_pixel(x, y, colour)?;
        }
    }

    log::info!("Rendered {}x{} in {:.2?}", width, height, start.elapsed());
    Ok(())
}

/// Render the scene to a new canvas, one band per rayon task.
pub fn render_parallel(camera: &Camera, world: &World, config: &RenderConfig) -> RenderResult<Canvas> {
    world.validate()?;

    let (width, height) = (camera.hsize(), camera.vsize());
    let bands = generate_bands(height, config.band_height);
    log::debug!(
        "Rendering {}x{} in {} bands of {} rows, max depth {}",
        width,
        height,
        bands.len(),
        config.band_height.max(1),
        config.max_depth
    );

    let start = Instant::now();
    let mut canvas = Canvas::new(width, height);
    canvas
        .par_rows_mut(config.band_height)
        .zip(bands.par_iter())
        .try_for_each(|(out, band)| render_band(band, camera, world, config.max_depth, out))?;

    log::info!("Rendered {}x{} in {:.2?}", width, height, start.elapsed());
    Ok(canvas)
}

/// Render the scene to a new canvas, in parallel or not per `config`.
pub fn render(camera: &Camera, world: &World, config: &RenderConfig) -> RenderResult<Canvas> {
    if config.parallel {
        render_parallel(camera, world, config)
    } else {
        let mut canvas = Canvas::new(camera.hsize(), camera.vsize());
        render_into(&mut canvas, camera, world, config)?;
        Ok(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_scenes::default_world;
    use crate::{PointLight, RenderError};
    use lux_math::{view_transform, Tuple};
    use std::f64::consts::PI;

    fn camera(hsize: u32, vsize: u32) -> Camera {
        Camera::new(hsize, vsize, PI / 2.0).with_transform(
            view_transform(
                Tuple::point(0.0, 0.0, -5.0),
                Tuple::ORIGIN,
                Tuple::vector(0.0, 1.0, 0.0),
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.band_height, 1);
        assert!(config.parallel);
    }

    #[test]
    fn test_config_builders() {
        let config = RenderConfig::default()
            .with_max_depth(2)
            .with_band_height(8)
            .with_parallel(false);
        assert_eq!(
            config,
            RenderConfig {
                max_depth: 2,
                band_height: 8,
                parallel: false
            }
        );
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: RenderConfig = serde_json::from_str(r#"{ "band_height": 4 }"#).unwrap();
        assert_eq!(config, RenderConfig::default().with_band_height(4));
    }

    #[test]
    fn test_render_world_with_camera() {
        let world = default_world();
        let canvas = render(&camera(11, 11), &world, &RenderConfig::default()).unwrap();
        assert_eq!(canvas.pixel_at(5, 5).unwrap(), Colour::new(0.38066, 0.47583, 0.2855));
    }

    #[test]
    fn test_render_into_target() {
        let world = default_world();
        let mut canvas = Canvas::new(11, 11);
        render_into(&mut canvas, &camera(11, 11), &world, &RenderConfig::default()).unwrap();
        assert_eq!(canvas.pixel_at(5, 5).unwrap(), Colour::new(0.38066, 0.47583, 0.2855));
    }

    #[test]
    fn test_render_into_smaller_target() {
        let world = default_world();
        let mut canvas = Canvas::new(4, 3);
        render_into(&mut canvas, &camera(11, 11), &world, &RenderConfig::default()).unwrap();
        assert_eq!(canvas.pixel_at(3, 2).unwrap(), render_pixel(&camera(11, 11), &world, 3, 2, 5).unwrap());
    }

    #[test]
    fn test_parallel_matches_serial() {
        let world = default_world();
        let camera = camera(21, 13);
        let serial = render(&camera, &world, &RenderConfig::default().with_parallel(false)).unwrap();

        for band_height in [1, 4, 13, 50] {
            let config = RenderConfig::default().with_band_height(band_height);
            let parallel = render_parallel(&camera, &world, &config).unwrap();
            assert_eq!(parallel, serial, "band height {band_height}");
        }
    }

    #[test]
    fn test_render_rejects_multiple_lights() {
        let mut world = default_world();
        world.add_light(PointLight::new(Tuple::point(5.0, 5.0, -5.0), Colour::WHITE));

        let serial = render(&camera(3, 3), &world, &RenderConfig::default().with_parallel(false));
        let parallel = render(&camera(3, 3), &world, &RenderConfig::default());
        assert!(matches!(serial, Err(RenderError::UnsupportedLightCount(2))));
        assert!(matches!(parallel, Err(RenderError::UnsupportedLightCount(2))));
    }
}
