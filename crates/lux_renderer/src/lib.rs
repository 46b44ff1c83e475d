//! Lux renderer - recursive Whitted-style ray tracing
//!
//! Traces one ray per pixel through a scene of implicit surfaces lit by a
//! single point light, with Phong shading, hard shadows, reflection and
//! refraction. Rendering can run on the calling thread or across rayon's
//! thread pool in scan-line bands.

mod band;
mod camera;
mod canvas;
mod error;
mod intersection;
mod light;
mod material;
mod pattern;
mod plane;
mod renderer;
mod shape;
mod sphere;
mod world;

pub use band::{generate_bands, render_band, Band};
pub use camera::Camera;
pub use canvas::{Canvas, RenderTarget};
pub use error::{RenderError, RenderResult};
pub use intersection::{first_hit, sort_intersections, Intersection, IntersectionValues, SURFACE_OFFSET};
pub use light::PointLight;
pub use material::{refractive_index, Material};
pub use pattern::{Pattern, PatternKind};
pub use plane::Plane;
pub use renderer::{render, render_into, render_parallel, render_pixel, RenderConfig};
pub use shape::{Geometry, Shape, ShapeId};
pub use sphere::Sphere;
pub use world::{World, DEFAULT_MAX_DEPTH};

/// Re-export the math types scenes are built from
pub use lux_math::{Colour, Matrix4, Ray, Tuple};

#[cfg(test)]
pub(crate) mod test_scenes {
    use super::*;
    use lux_math::scaling;

    /// Two concentric spheres lit from the upper left.
    pub fn default_world() -> World {
        let mut world = World::new();
        world.add_light(PointLight::new(Tuple::point(-10.0, 10.0, -10.0), Colour::WHITE));

        world.add_shape(Shape::sphere().with_material(Material {
            colour: Colour::new(0.8, 1.0, 0.6),
            diffuse: 0.7,
            specular: 0.2,
            ..Material::default()
        }));
        world.add_shape(Shape::sphere().with_transform(scaling(0.5, 0.5, 0.5)));

        world
    }
}
