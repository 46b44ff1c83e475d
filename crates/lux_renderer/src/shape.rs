//! Shapes: a local-space geometry placed in the world by a transform.
//!
//! Geometry is always defined in its own canonical space (unit sphere at the
//! origin, the xz plane). `Shape` carries it into world space: rays are pulled
//! into local space by the inverse transform, and normals are pushed back out
//! by the inverse-transpose so they stay perpendicular under non-uniform scale.

use std::fmt;

use lux_math::{Matrix4, Ray, Tuple};

use crate::{Intersection, Material, Plane, Sphere};

/// Local-space geometry of a shape.
pub trait Geometry: Send + Sync + fmt::Debug {
    /// All `t` values where `ray` (already in local space) meets the surface,
    /// in ascending order. Negative values are included.
    fn local_intersect(&self, ray: &Ray) -> Vec<f64>;

    /// Surface normal at a local-space point on the surface (not normalized).
    fn local_normal_at(&self, point: Tuple) -> Tuple;
}

/// Stable handle to a shape owned by a [`World`](crate::World).
///
/// Intersections refer to shapes through this handle instead of borrowing
/// them, so they can be collected, sorted and passed around freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ShapeId(pub(crate) usize);

impl ShapeId {
    /// Position of the shape in its world's shape list.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A geometry with a transform and a material.
#[derive(Debug)]
pub struct Shape {
    id: ShapeId,
    geometry: Box<dyn Geometry>,
    transform: Matrix4,
    // Cached on every transform change; every ray and normal query needs them.
    inverse: Matrix4,
    inverse_transpose: Matrix4,
    material: Material,
}

impl Shape {
    /// Create a shape with identity transform and default material.
    pub fn new(geometry: impl Geometry + 'static) -> Self {
        Self {
            id: ShapeId::default(),
            geometry: Box::new(geometry),
            transform: Matrix4::identity(),
            inverse: Matrix4::identity(),
            inverse_transpose: Matrix4::identity(),
            material: Material::default(),
        }
    }

    /// A unit sphere centred on the origin.
    pub fn sphere() -> Self {
        Self::new(Sphere)
    }

    /// The xz plane through the origin.
    pub fn plane() -> Self {
        Self::new(Plane)
    }

    /// Set the transform (builder style).
    pub fn with_transform(mut self, transform: Matrix4) -> Self {
        self.set_transform(transform);
        self
    }

    /// Set the material (builder style).
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Handle of this shape. Only meaningful once the shape is in a world.
    #[inline]
    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: ShapeId) {
        self.id = id;
    }

    pub fn geometry(&self) -> &dyn Geometry {
        self.geometry.as_ref()
    }

    #[inline]
    pub fn transform(&self) -> &Matrix4 {
        &self.transform
    }

    /// Inverse of the object-to-world transform.
    #[inline]
    pub fn inverse_transform(&self) -> &Matrix4 {
        &self.inverse
    }

    pub fn set_transform(&mut self, transform: Matrix4) {
        if !transform.is_invertible() {
            log::warn!("Shape {:?} given a non-invertible transform", self.id);
        }
        self.transform = transform;
        self.inverse = transform.inverse();
        self.inverse_transpose = self.inverse.transpose();
    }

    #[inline]
    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn material_mut(&mut self) -> &mut Material {
        &mut self.material
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    /// Convert a world-space point to this shape's local space.
    #[inline]
    pub fn world_to_object(&self, point: Tuple) -> Tuple {
        self.inverse * point
    }

    /// Intersect a world-space ray with this shape.
    ///
    /// The `t` values returned by the geometry are valid for the world ray
    /// unchanged, since the local ray is the same line reparametrized by a
    /// linear map.
    pub fn intersects(&self, ray: &Ray) -> Vec<Intersection> {
        let local_ray = ray.transform(&self.inverse);
        self.geometry
            .local_intersect(&local_ray)
            .into_iter()
            .map(|t| Intersection::new(self.id, t))
            .collect()
    }

    /// Unit surface normal at a world-space point.
    pub fn normal_at(&self, point: Tuple) -> Tuple {
        let local_point = self.world_to_object(point);
        let local_normal = self.geometry.local_normal_at(local_point);
        let world_normal = self.inverse_transpose * local_normal;
        world_normal.as_vector().normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lux_math::{rotation_z, scaling, translation};
    use std::f64::consts::PI;

    #[test]
    fn test_default_transform_and_material() {
        let shape = Shape::sphere();
        assert_eq!(*shape.transform(), Matrix4::identity());
        assert_eq!(shape.material(), &Material::default());
    }

    #[test]
    fn test_set_transform_caches_inverse() {
        let mut shape = Shape::sphere();
        shape.set_transform(translation(2.0, 3.0, 4.0));
        assert_eq!(*shape.transform(), translation(2.0, 3.0, 4.0));
        assert_eq!(*shape.inverse_transform(), translation(-2.0, -3.0, -4.0));
    }

    #[test]
    fn test_set_material() {
        let mut shape = Shape::sphere();
        let mut material = Material::default();
        material.ambient = 1.0;
        shape.set_material(material.clone());
        assert_eq!(shape.material(), &material);
    }

    #[test]
    fn test_intersect_scaled_shape() {
        let shape = Shape::sphere().with_transform(scaling(2.0, 2.0, 2.0));
        let ray = Ray::new(Tuple::point(0.0, 0.0, -5.0), Tuple::vector(0.0, 0.0, 1.0));

        let xs = shape.intersects(&ray);
        assert_eq!(xs.len(), 2);
        assert_eq!(xs[0].t, 3.0);
        assert_eq!(xs[1].t, 7.0);
        assert_eq!(xs[0].shape, shape.id());
    }

    #[test]
    fn test_intersect_translated_shape() {
        let shape = Shape::sphere().with_transform(translation(5.0, 0.0, 0.0));
        let ray = Ray::new(Tuple::point(0.0, 0.0, -5.0), Tuple::vector(0.0, 0.0, 1.0));
        assert!(shape.intersects(&ray).is_empty());
    }

    #[test]
    fn test_normal_on_translated_shape() {
        let shape = Shape::sphere().with_transform(translation(0.0, 1.0, 0.0));
        let n = shape.normal_at(Tuple::point(0.0, 1.70711, -0.70711));
        assert_eq!(n, Tuple::vector(0.0, 0.70711, -0.70711));
    }

    #[test]
    fn test_normal_on_transformed_shape() {
        let shape = Shape::sphere().with_transform(scaling(1.0, 0.5, 1.0) * rotation_z(PI / 5.0));
        let half = 2f64.sqrt() / 2.0;
        let n = shape.normal_at(Tuple::point(0.0, half, -half));
        assert_eq!(n, Tuple::vector(0.0, 0.97014, -0.24254));
        assert_eq!(n.w(), 0.0);
    }

    #[test]
    fn test_normal_on_transformed_plane() {
        let shape = Shape::plane().with_transform(rotation_z(PI / 2.0));
        let n = shape.normal_at(Tuple::point(3.0, 1.0, 2.0));
        assert_eq!(n, Tuple::vector(-1.0, 0.0, 0.0));
    }
}
