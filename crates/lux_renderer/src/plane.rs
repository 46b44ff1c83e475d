use crate::shape::Geometry;
use lux_math::{Ray, Tuple, EPSILON};

/// The infinite xz plane through the local origin, normal +y.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Plane;

impl Geometry for Plane {
    fn local_intersect(&self, ray: &Ray) -> Vec<f64> {
        // Parallel and coplanar rays both count as a miss
        if ray.direction().y().abs() < EPSILON {
            return Vec::new();
        }
        vec![-ray.origin().y() / ray.direction().y()]
    }

    fn local_normal_at(&self, _point: Tuple) -> Tuple {
        Tuple::vector(0.0, 1.0, 0.0)
    }
}
