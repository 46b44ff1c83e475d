//! The scene and its recursive shading integrator.
//!
//! `colour_at` finds the nearest hit along a ray and shades it. Shading adds
//! the Phong surface term to the colours seen along the reflected and
//! refracted rays, each of which is traced with one less unit of depth. When
//! the depth reaches zero the secondary terms are black, so recursion always
//! terminates, even between facing mirrors.

use crate::intersection::{first_hit, sort_intersections};
use crate::{
    Intersection, IntersectionValues, PointLight, RenderError, RenderResult, Shape, ShapeId,
};
use lux_math::{Colour, Ray, Tuple};

/// Bounce budget used when none is configured.
pub const DEFAULT_MAX_DEPTH: u32 = 5;

/// A collection of shapes and lights.
///
/// Only a single light is supported: shading fails with
/// [`RenderError::UnsupportedLightCount`] when more than one is present.
/// With no light the surface term of every hit is black.
#[derive(Debug, Default)]
pub struct World {
    shapes: Vec<Shape>,
    lights: Vec<PointLight>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape, returning the handle intersections will refer to it by.
    pub fn add_shape(&mut self, mut shape: Shape) -> ShapeId {
        let id = ShapeId(self.shapes.len());
        shape.set_id(id);
        self.shapes.push(shape);
        id
    }

    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Shapes can be edited in place but not added or removed this way, so
    /// existing ids stay valid.
    pub fn shapes_mut(&mut self) -> &mut [Shape] {
        &mut self.shapes
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id.index())
    }

    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(id.index())
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    pub fn lights_mut(&mut self) -> &mut Vec<PointLight> {
        &mut self.lights
    }

    /// The scene light, if any. Errors when there is more than one.
    pub fn light(&self) -> RenderResult<Option<&PointLight>> {
        match self.lights.as_slice() {
            [] => Ok(None),
            [light] => Ok(Some(light)),
            lights => Err(RenderError::UnsupportedLightCount(lights.len())),
        }
    }

    /// Check the scene can be rendered.
    pub fn validate(&self) -> RenderResult<()> {
        self.light().map(|_| ())
    }

    /// All intersections of `ray` with every shape, sorted by `t`.
    pub fn intersects(&self, ray: &Ray) -> Vec<Intersection> {
        let mut xs: Vec<Intersection> = self.shapes.iter().flat_map(|shape| shape.intersects(ray)).collect();
        sort_intersections(&mut xs);
        xs
    }

    /// Colour seen along `ray`, with `depth` bounces left for reflection and
    /// refraction. Black when nothing is hit.
    pub fn colour_at(&self, ray: &Ray, depth: u32) -> RenderResult<Colour> {
        let xs = self.intersects(ray);
        match first_hit(&xs) {
            Some(hit) => {
                let values = IntersectionValues::new(hit, ray, &self.shapes, &xs)?;
                self.shade_hit(&values, depth)
            }
            None => Ok(Colour::BLACK),
        }
    }

    /// Colour at a precomputed hit.
    ///
    /// Materials that both reflect and refract are blended by their Schlick
    /// reflectance; otherwise the terms are summed.
    pub fn shade_hit(&self, values: &IntersectionValues<'_>, depth: u32) -> RenderResult<Colour> {
        let surface = match self.light()? {
            Some(light) => {
                let in_shadow = self.is_shadowed(values.over_point)?;
                light.light_point(values.shape, values.point, values.eye, values.normal, in_shadow)
            }
            None => Colour::BLACK,
        };

        let reflected = self.reflected_colour_at(values, depth)?;
        let refracted = self.refracted_colour_at(values, depth)?;

        let material = values.shape.material();
        if material.reflective > 0.0 && material.transparency > 0.0 {
            let reflectance = values.schlick_reflectance();
            Ok(surface + reflected * reflectance + refracted * (1.0 - reflectance))
        } else {
            Ok(surface + reflected + refracted)
        }
    }

    /// Colour arriving along the mirror direction, scaled by reflectivity.
    pub fn reflected_colour_at(&self, values: &IntersectionValues<'_>, depth: u32) -> RenderResult<Colour> {
        let reflective = values.shape.material().reflective;
        if depth == 0 || reflective == 0.0 {
            return Ok(Colour::BLACK);
        }

        let ray = Ray::new(values.over_point, values.reflection);
        Ok(self.colour_at(&ray, depth - 1)? * reflective)
    }

    /// Colour arriving through the surface, scaled by transparency.
    ///
    /// Black under total internal reflection.
    pub fn refracted_colour_at(&self, values: &IntersectionValues<'_>, depth: u32) -> RenderResult<Colour> {
        let transparency = values.shape.material().transparency;
        if depth == 0 || transparency == 0.0 {
            return Ok(Colour::BLACK);
        }

        // Snell's law
        let n_ratio = values.n1 / values.n2;
        let cos_i = values.eye.dot(&values.normal);
        let sin2_t = n_ratio * n_ratio * (1.0 - cos_i * cos_i);
        if sin2_t > 1.0 {
            return Ok(Colour::BLACK);
        }

        let cos_t = (1.0 - sin2_t).sqrt();
        let direction = values.normal * (n_ratio * cos_i - cos_t) - values.eye * n_ratio;
        let ray = Ray::new(values.under_point, direction);
        Ok(self.colour_at(&ray, depth - 1)? * transparency)
    }

    /// Whether something lies between `point` and the light.
    ///
    /// Never shadowed without a light.
    pub fn is_shadowed(&self, point: Tuple) -> RenderResult<bool> {
        let Some(light) = self.light()? else {
            return Ok(false);
        };

        let to_light = light.position - point;
        let distance = to_light.magnitude();
        let ray = Ray::new(point, to_light.normalize());

        let xs = self.intersects(&ray);
        Ok(first_hit(&xs).is_some_and(|hit| hit.t < distance))
    }
}
