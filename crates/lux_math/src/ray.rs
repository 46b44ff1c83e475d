use crate::{Matrix4, Tuple};

/// A ray in 3D space with an origin point and a direction vector.
///
/// The direction is not required to be normalized; `t` values are measured in
/// units of the direction's length. This is what lets shapes intersect an
/// inverse-transformed ray and hand back `t` values that are valid for the
/// untransformed world-space ray.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Tuple,
    direction: Tuple,
}

impl Ray {
    /// Create a new ray. `origin` should be a point, `direction` a vector.
    pub fn new(origin: Tuple, direction: Tuple) -> Self {
        Self { origin, direction }
    }

    #[inline]
    pub fn origin(&self) -> Tuple {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Tuple {
        self.direction
    }

    /// True when the origin is a point and the direction a vector.
    pub fn is_valid(&self) -> bool {
        self.origin.is_point() && self.direction.is_vector()
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + direction * t
    #[inline]
    pub fn position_at(&self, t: f64) -> Tuple {
        self.origin + self.direction * t
    }

    /// Apply `matrix` to both origin and direction.
    pub fn transform(&self, matrix: &Matrix4) -> Ray {
        Ray::new(*matrix * self.origin, *matrix * self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rotation_y, scaling, translation};

    #[test]
    fn test_ray_creation() {
        let origin = Tuple::point(1.0, 2.0, 3.0);
        let direction = Tuple::vector(4.0, 5.0, 6.0);
        let ray = Ray::new(origin, direction);

        assert_eq!(ray.origin(), origin);
        assert_eq!(ray.direction(), direction);
        assert!(ray.is_valid());
    }

    #[test]
    fn test_ray_validity() {
        let swapped = Ray::new(Tuple::vector(1.0, 2.0, 3.0), Tuple::point(4.0, 5.0, 6.0));
        assert!(!swapped.is_valid());
    }

    #[test]
    fn test_position_at() {
        let ray = Ray::new(Tuple::point(2.0, 3.0, 4.0), Tuple::vector(1.0, 0.0, 0.0));

        assert_eq!(ray.position_at(0.0), Tuple::point(2.0, 3.0, 4.0));
        assert_eq!(ray.position_at(1.0), Tuple::point(3.0, 3.0, 4.0));
        assert_eq!(ray.position_at(-1.0), Tuple::point(1.0, 3.0, 4.0));
        assert_eq!(ray.position_at(2.5), Tuple::point(4.5, 3.0, 4.0));
    }

    #[test]
    fn test_translate_ray() {
        let ray = Ray::new(Tuple::point(1.0, 2.0, 3.0), Tuple::vector(0.0, 1.0, 0.0));
        let moved = ray.transform(&translation(3.0, 4.0, 5.0));

        assert_eq!(moved.origin(), Tuple::point(4.0, 6.0, 8.0));
        assert_eq!(moved.direction(), Tuple::vector(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_scale_ray() {
        let ray = Ray::new(Tuple::point(1.0, 2.0, 3.0), Tuple::vector(0.0, 1.0, 0.0));
        let scaled = ray.transform(&scaling(2.0, 3.0, 4.0));

        assert_eq!(scaled.origin(), Tuple::point(2.0, 6.0, 12.0));
        assert_eq!(scaled.direction(), Tuple::vector(0.0, 3.0, 0.0));
    }

    #[test]
    fn test_transform_round_trip() {
        let ray = Ray::new(Tuple::point(1.0, -2.0, 3.0), Tuple::vector(0.3, 1.0, -0.5));
        let m = translation(1.0, 2.0, 3.0) * rotation_y(0.7) * scaling(2.0, 0.5, 3.0);

        let back = ray.transform(&m).transform(&m.inverse());
        assert_eq!(back.origin(), ray.origin());
        assert_eq!(back.direction(), ray.direction());
    }
}
