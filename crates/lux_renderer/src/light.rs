//! Point light and Phong illumination.

use crate::Shape;
use lux_math::{Colour, Tuple};

/// A point light with no size; casts hard shadows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Tuple,
    pub intensity: Colour,
}

impl PointLight {
    pub fn new(position: Tuple, intensity: Colour) -> Self {
        Self { position, intensity }
    }

    /// Phong illumination of `shape` at `point` as seen along `eye`.
    ///
    /// The ambient term is always present. In shadow nothing else is added.
    /// The result is not clamped.
    pub fn light_point(
        &self,
        shape: &Shape,
        point: Tuple,
        eye: Tuple,
        normal: Tuple,
        in_shadow: bool,
    ) -> Colour {
        let material = shape.material();
        let effective = material.colour_at(shape, point) * self.intensity;
        let ambient = effective * material.ambient;

        if in_shadow {
            return ambient;
        }

        let light_vector = (self.position - point).normalize();
        let light_dot_normal = light_vector.dot(&normal);
        if light_dot_normal < 0.0 {
            // Light is on the other side of the surface
            return ambient;
        }

        let diffuse = effective * material.diffuse * light_dot_normal;

        let reflect_v = (-light_vector).reflect(&normal);
        let reflect_dot_eye = reflect_v.dot(&eye);
        let specular = if reflect_dot_eye <= 0.0 {
            Colour::BLACK
        } else {
            self.intensity * material.specular * reflect_dot_eye.powf(material.shininess)
        };

        ambient + diffuse + specular
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Pattern};

    fn setup() -> (Shape, Tuple) {
        (Shape::sphere(), Tuple::ORIGIN)
    }

    fn white_light_at(x: f64, y: f64, z: f64) -> PointLight {
        PointLight::new(Tuple::point(x, y, z), Colour::WHITE)
    }

    #[test]
    fn test_eye_between_light_and_surface() {
        let (shape, position) = setup();
        let light = white_light_at(0.0, 0.0, -10.0);
        let result = light.light_point(
            &shape,
            position,
            Tuple::vector(0.0, 0.0, -1.0),
            Tuple::vector(0.0, 0.0, -1.0),
            false,
        );
        assert_eq!(result, Colour::new(1.9, 1.9, 1.9));
    }

    #[test]
    fn test_eye_offset_45_degrees() {
        let (shape, position) = setup();
        let half = 2f64.sqrt() / 2.0;
        let light = white_light_at(0.0, 0.0, -10.0);
        let result = light.light_point(
            &shape,
            position,
            Tuple::vector(0.0, half, -half),
            Tuple::vector(0.0, 0.0, -1.0),
            false,
        );
        assert_eq!(result, Colour::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_light_offset_45_degrees() {
        let (shape, position) = setup();
        let light = white_light_at(0.0, 10.0, -10.0);
        let result = light.light_point(
            &shape,
            position,
            Tuple::vector(0.0, 0.0, -1.0),
            Tuple::vector(0.0, 0.0, -1.0),
            false,
        );
        assert_eq!(result, Colour::new(0.736396, 0.736396, 0.736396));
    }

    #[test]
    fn test_eye_in_reflection_path() {
        let (shape, position) = setup();
        let half = 2f64.sqrt() / 2.0;
        let light = white_light_at(0.0, 10.0, -10.0);
        let result = light.light_point(
            &shape,
            position,
            Tuple::vector(0.0, -half, -half),
            Tuple::vector(0.0, 0.0, -1.0),
            false,
        );
        assert_eq!(result, Colour::new(1.636396, 1.636396, 1.636396));
    }

    #[test]
    fn test_light_behind_surface() {
        let (shape, position) = setup();
        let light = white_light_at(0.0, 0.0, 10.0);
        let result = light.light_point(
            &shape,
            position,
            Tuple::vector(0.0, 0.0, -1.0),
            Tuple::vector(0.0, 0.0, -1.0),
            false,
        );
        assert_eq!(result, Colour::new(0.1, 0.1, 0.1));
    }

    #[test]
    fn test_surface_in_shadow() {
        let (shape, position) = setup();
        let light = white_light_at(0.0, 0.0, -10.0);
        let result = light.light_point(
            &shape,
            position,
            Tuple::vector(0.0, 0.0, -1.0),
            Tuple::vector(0.0, 0.0, -1.0),
            true,
        );
        assert_eq!(result, Colour::new(0.1, 0.1, 0.1));
    }

    #[test]
    fn test_lighting_with_pattern() {
        let mut material = Material::default().with_pattern(Pattern::stripe(Colour::WHITE, Colour::BLACK));
        material.ambient = 1.0;
        material.diffuse = 0.0;
        material.specular = 0.0;
        let shape = Shape::sphere().with_material(material);

        let light = white_light_at(0.0, 0.0, -10.0);
        let eye = Tuple::vector(0.0, 0.0, -1.0);
        let normal = Tuple::vector(0.0, 0.0, -1.0);

        let c1 = light.light_point(&shape, Tuple::point(0.9, 0.0, 0.0), eye, normal, false);
        let c2 = light.light_point(&shape, Tuple::point(1.1, 0.0, 0.0), eye, normal, false);
        assert_eq!(c1, Colour::WHITE);
        assert_eq!(c2, Colour::BLACK);
    }

    #[test]
    fn test_light_intensity_tints_result() {
        let (shape, position) = setup();
        let light = PointLight::new(Tuple::point(0.0, 0.0, -10.0), Colour::new(0.5, 0.0, 1.0));
        let result = light.light_point(
            &shape,
            position,
            Tuple::vector(0.0, 0.0, -1.0),
            Tuple::vector(0.0, 0.0, -1.0),
            true,
        );
        assert_eq!(result, Colour::new(0.05, 0.0, 0.1));
    }
}
