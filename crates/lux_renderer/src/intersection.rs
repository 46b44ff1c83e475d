//! Ray/shape intersections and the values precomputed for shading a hit.

use crate::material::refractive_index;
use crate::{RenderError, RenderResult, Shape, ShapeId};
use lux_math::{Ray, Tuple};

/// Offset applied along the normal before casting secondary rays, so they do
/// not immediately re-hit the surface they start on.
pub const SURFACE_OFFSET: f64 = 1e-7;

/// A ray hit on a shape at parameter `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub shape: ShapeId,
    pub t: f64,
}

impl Intersection {
    pub fn new(shape: ShapeId, t: f64) -> Self {
        Self { shape, t }
    }
}

/// The visible hit: the smallest non-negative `t`.
///
/// Intersections behind the ray origin are never selected.
pub fn first_hit(intersections: &[Intersection]) -> Option<Intersection> {
    intersections
        .iter()
        .filter(|i| i.t >= 0.0)
        .min_by(|a, b| a.t.total_cmp(&b.t))
        .copied()
}

/// Stable ascending sort by `t`.
pub fn sort_intersections(intersections: &mut [Intersection]) {
    intersections.sort_by(|a, b| a.t.total_cmp(&b.t));
}

fn lookup(shapes: &[Shape], id: ShapeId) -> RenderResult<&Shape> {
    shapes.get(id.index()).ok_or(RenderError::UnknownShape(id))
}

/// Everything the shader needs to know about a single hit.
#[derive(Debug, Clone)]
pub struct IntersectionValues<'a> {
    pub hit: Intersection,
    pub shape: &'a Shape,
    pub point: Tuple,
    /// Points back towards the ray origin.
    pub eye: Tuple,
    /// Always faces the eye; flipped when the hit is from inside.
    pub normal: Tuple,
    pub inside: bool,
    /// Origin for shadow and reflection rays.
    pub over_point: Tuple,
    /// Origin for refraction rays.
    pub under_point: Tuple,
    pub reflection: Tuple,
    /// Refractive index of the medium being left.
    pub n1: f64,
    /// Refractive index of the medium being entered.
    pub n2: f64,
}

impl<'a> IntersectionValues<'a> {
    /// Precompute shading values for `hit`.
    ///
    /// `intersections` is the full sorted list for `ray`; it is walked up to
    /// `hit` to work out which transparent shapes the ray is currently inside,
    /// which gives `n1` and `n2`. Shapes are looked up by id in `shapes`.
    pub fn new(
        hit: Intersection,
        ray: &Ray,
        shapes: &'a [Shape],
        intersections: &[Intersection],
    ) -> RenderResult<Self> {
        let shape = lookup(shapes, hit.shape)?;

        let point = ray.position_at(hit.t);
        let eye = -ray.direction();
        let mut normal = shape.normal_at(point);
        let inside = eye.dot(&normal) < 0.0;
        if inside {
            normal = -normal;
        }

        let offset = normal * SURFACE_OFFSET;
        let (n1, n2) = refractive_indices(hit, shapes, intersections)?;

        Ok(Self {
            hit,
            shape,
            point,
            eye,
            normal,
            inside,
            over_point: point + offset,
            under_point: point - offset,
            reflection: ray.direction().reflect(&normal),
            n1,
            n2,
        })
    }

    /// Schlick's approximation of the Fresnel reflectance at this hit.
    ///
    /// Returns exactly 1.0 under total internal reflection.
    pub fn schlick_reflectance(&self) -> f64 {
        let mut cos = self.eye.dot(&self.normal);

        if self.n1 > self.n2 {
            let ratio = self.n1 / self.n2;
            let sin2_t = ratio * ratio * (1.0 - cos * cos);
            if sin2_t > 1.0 {
                return 1.0;
            }
            cos = (1.0 - sin2_t).sqrt();
        }

        let r0 = ((self.n1 - self.n2) / (self.n1 + self.n2)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cos).powi(5)
    }
}

// Walk the hits in order, tracking the shapes the ray is inside. A shape is
// entered on its first hit and left on its second.
//
// Re-entering a shape that was never exited (self-overlapping geometry) is not
// handled; the second entry is treated as an exit.
fn refractive_indices(
    hit: Intersection,
    shapes: &[Shape],
    intersections: &[Intersection],
) -> RenderResult<(f64, f64)> {
    let top_index = |containers: &[ShapeId]| -> RenderResult<f64> {
        match containers.last() {
            Some(&id) => Ok(lookup(shapes, id)?.material().refractive_index),
            None => Ok(refractive_index::VACUUM),
        }
    };
    let toggle = |containers: &mut Vec<ShapeId>, id: ShapeId| {
        match containers.iter().position(|&c| c == id) {
            Some(pos) => {
                containers.remove(pos);
            }
            None => containers.push(id),
        }
    };

    let mut containers: Vec<ShapeId> = Vec::new();
    for &current in intersections {
        if current == hit {
            let n1 = top_index(&containers)?;
            toggle(&mut containers, current.shape);
            return Ok((n1, top_index(&containers)?));
        }
        toggle(&mut containers, current.shape);
    }

    Ok((refractive_index::VACUUM, refractive_index::VACUUM))
}
