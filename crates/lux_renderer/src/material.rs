//! Phong surface materials.

use std::sync::Arc;

use crate::{Pattern, Shape};
use lux_math::{Colour, Tuple};

/// Common refractive indices.
pub mod refractive_index {
    pub const VACUUM: f64 = 1.0;
    pub const AIR: f64 = 1.00029;
    pub const WATER: f64 = 1.333;
    pub const GLASS: f64 = 1.52;
    pub const DIAMOND: f64 = 2.417;
}

/// Surface properties used by the Phong model and by secondary rays.
///
/// Patterns are shared behind an `Arc` so several materials (and every render
/// thread) can reference the same pattern without copying it.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub colour: Colour,
    pub pattern: Option<Arc<Pattern>>,
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub shininess: f64,
    /// 0 = matte, 1 = perfect mirror.
    pub reflective: f64,
    /// 0 = opaque, 1 = fully transparent.
    pub transparency: f64,
    pub refractive_index: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            colour: Colour::WHITE,
            pattern: None,
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.0,
            reflective: 0.0,
            transparency: 0.0,
            refractive_index: refractive_index::VACUUM,
        }
    }
}

impl Material {
    /// A clear glass material.
    pub fn glass() -> Self {
        Self {
            transparency: 1.0,
            refractive_index: refractive_index::GLASS,
            ..Self::default()
        }
    }

    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(Arc::new(pattern));
        self
    }

    /// Surface colour of `shape` at a world-space point.
    pub fn colour_at(&self, shape: &Shape, point: Tuple) -> Colour {
        match &self.pattern {
            Some(pattern) => pattern.colour_at(shape, point),
            None => self.colour,
        }
    }
}
