//! Unit sphere primitive for ray tracing.

use crate::shape::Geometry;
use lux_math::{Ray, Tuple};

/// A sphere of radius 1 centred on the local origin.
///
/// Size and placement come from the owning [`Shape`](crate::Shape)'s transform.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sphere;

impl Sphere {
    pub const CENTRE: Tuple = Tuple::ORIGIN;
}

impl Geometry for Sphere {
    fn local_intersect(&self, ray: &Ray) -> Vec<f64> {
        let to_ray = ray.origin() - Self::CENTRE;
        let direction = ray.direction();

        let a = direction.dot(&direction);
        let b = 2.0 * direction.dot(&to_ray);
        let c = to_ray.dot(&to_ray) - 1.0;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return Vec::new();
        }

        let sqrtd = discriminant.sqrt();
        let t1 = (-b - sqrtd) / (2.0 * a);
        let t2 = (-b + sqrtd) / (2.0 * a);
        vec![t1, t2]
    }

    fn local_normal_at(&self, point: Tuple) -> Tuple {
        point - Self::CENTRE
    }
}
