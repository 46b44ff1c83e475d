//! Pinhole camera for ray generation.

use lux_math::{Matrix4, Ray, Tuple};

/// A pinhole camera looking down -z in its own space, with the film plane at
/// z = -1. Place it in the world with a view transform.
#[derive(Debug, Clone)]
pub struct Camera {
    hsize: u32,
    vsize: u32,
    field_of_view: f64,
    transform: Matrix4,

    // Cached computed values
    inverse: Matrix4,
    half_width: f64,
    half_height: f64,
    pixel_size: f64,
}

impl Camera {
    /// Create a camera for an `hsize` x `vsize` image.
    ///
    /// `field_of_view` (radians) spans the longer image side.
    pub fn new(hsize: u32, vsize: u32, field_of_view: f64) -> Self {
        let half_view = (field_of_view / 2.0).tan();
        let aspect = hsize as f64 / vsize as f64;

        let (half_width, half_height) = if aspect >= 1.0 {
            (half_view, half_view / aspect)
        } else {
            (half_view * aspect, half_view)
        };

        Self {
            hsize,
            vsize,
            field_of_view,
            transform: Matrix4::identity(),
            inverse: Matrix4::identity(),
            half_width,
            half_height,
            pixel_size: half_width * 2.0 / hsize as f64,
        }
    }

    /// Set the view transform (builder style).
    pub fn with_transform(mut self, transform: Matrix4) -> Self {
        self.set_transform(transform);
        self
    }

    pub fn set_transform(&mut self, transform: Matrix4) {
        if !transform.is_invertible() {
            log::warn!("Camera given a non-invertible view transform");
        }
        self.transform = transform;
        self.inverse = transform.inverse();
    }

    #[inline]
    pub fn hsize(&self) -> u32 {
        self.hsize
    }

    #[inline]
    pub fn vsize(&self) -> u32 {
        self.vsize
    }

    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    pub fn transform(&self) -> &Matrix4 {
        &self.transform
    }

    /// World-space size of one pixel on the film plane.
    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    /// Ray from the camera through the centre of pixel (x, y).
    pub fn ray_for_pixel(&self, x: u32, y: u32) -> Ray {
        let x_offset = (x as f64 + 0.5) * self.pixel_size;
        let y_offset = (y as f64 + 0.5) * self.pixel_size;

        // Camera looks toward -z, so +x is to the left
        let world_x = self.half_width - x_offset;
        let world_y = self.half_height - y_offset;

        let pixel = self.inverse * Tuple::point(world_x, world_y, -1.0);
        let origin = self.inverse * Tuple::ORIGIN;
        let direction = (pixel - origin).normalize();

        Ray::new(origin, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lux_math::{approx_eq, rotation_y, translation};
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    #[test]
    fn test_camera_construction() {
        let camera = Camera::new(160, 120, PI / 2.0);
        assert_eq!(camera.hsize(), 160);
        assert_eq!(camera.vsize(), 120);
        assert_eq!(camera.field_of_view(), PI / 2.0);
        assert_eq!(*camera.transform(), Matrix4::identity());
    }

    #[test]
    fn test_pixel_size_horizontal_canvas() {
        let camera = Camera::new(200, 125, PI / 2.0);
        assert!(approx_eq(camera.pixel_size(), 0.01));
    }

    #[test]
    fn test_pixel_size_vertical_canvas() {
        let camera = Camera::new(125, 200, PI / 2.0);
        assert!(approx_eq(camera.pixel_size(), 0.01));
    }

    #[test]
    fn test_ray_through_centre() {
        let camera = Camera::new(201, 101, PI / 2.0);
        let ray = camera.ray_for_pixel(100, 50);
        assert_eq!(ray.origin(), Tuple::ORIGIN);
        assert_eq!(ray.direction(), Tuple::vector(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_ray_through_corner() {
        let camera = Camera::new(201, 101, PI / 2.0);
        let ray = camera.ray_for_pixel(0, 0);
        assert_eq!(ray.origin(), Tuple::ORIGIN);
        assert_eq!(ray.direction(), Tuple::vector(0.66519, 0.33259, -0.66851));
    }

    #[test]
    fn test_ray_with_transformed_camera() {
        let camera =
            Camera::new(201, 101, PI / 2.0).with_transform(rotation_y(PI / 4.0) * translation(0.0, -2.0, 5.0));
        let ray = camera.ray_for_pixel(100, 50);
        assert_eq!(ray.origin(), Tuple::point(0.0, 2.0, -5.0));
        assert_eq!(ray.direction(), Tuple::vector(FRAC_1_SQRT_2, 0.0, -FRAC_1_SQRT_2));
    }
}
