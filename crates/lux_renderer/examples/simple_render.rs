//! Simple ray tracer example.
//!
//! Renders three spheres between two walls over a mirrored floor, once on a
//! single thread and once in parallel, and saves the result.
//!
//! Usage: `simple_render [config.json] [output.ppm|output.png]`

use std::f64::consts::PI;
use std::time::Instant;

use anyhow::{Context, Result};
use lux_math::{rotation_x, rotation_y, scaling, translation, view_transform};
use lux_renderer::{
    render, Camera, Colour, Material, Pattern, PointLight, RenderConfig, Shape, Tuple, World,
};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("Failed to read {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("Invalid render config in {path}"))?
        }
        None => RenderConfig::default(),
    };
    let output = args.next().unwrap_or_else(|| "output.ppm".to_string());

    println!("Lux Ray Tracer - Simple Example");
    println!("===============================");

    let start = Instant::now();
    let world = build_scene();
    println!("Scene built in {:?} ({} shapes)", start.elapsed(), world.shapes().len());

    let camera = Camera::new(1000, 500, PI / 3.0).with_transform(view_transform(
        Tuple::point(0.0, 1.5, -5.0),
        Tuple::point(0.0, 1.0, 0.0),
        Tuple::vector(0.0, 1.0, 0.0),
    )?);

    println!("Rendering {}x{}, max depth {}", camera.hsize(), camera.vsize(), config.max_depth);

    let start = Instant::now();
    render(&camera, &world, &config.with_parallel(false))?;
    println!("Single thread: {:?}", start.elapsed());

    let start = Instant::now();
    let canvas = render(&camera, &world, &config.with_parallel(true))?;
    println!("Multi thread:  {:?}", start.elapsed());

    canvas.save(&output)?;
    println!("Saved to {output}");

    Ok(())
}

fn build_scene() -> World {
    let mut world = World::new();

    let floor_material = Material {
        colour: Colour::new(1.0, 0.9, 0.9),
        specular: 0.0,
        reflective: 0.5,
        ..Material::default()
    };
    world.add_shape(Shape::plane().with_material(floor_material.clone()));

    world.add_shape(
        Shape::plane()
            .with_transform(translation(0.0, 0.0, 5.0) * rotation_y(-PI / 4.0) * rotation_x(PI / 2.0))
            .with_material(floor_material),
    );

    world.add_shape(
        Shape::plane()
            .with_transform(translation(0.0, 0.0, 5.0) * rotation_y(PI / 4.0) * rotation_x(PI / 2.0))
            .with_material(Material {
                colour: Colour::new(0.0, 0.3, 0.9),
                specular: 0.0,
                ..Material::default()
            }),
    );

    // Middle sphere with fine stripes
    let stripes = Pattern::stripe(Colour::WHITE, Colour::BLACK).with_transform(scaling(0.1, 0.1, 0.1));
    world.add_shape(
        Shape::sphere()
            .with_transform(translation(-0.5, 1.0, 0.5))
            .with_material(
                Material {
                    colour: Colour::new(0.1, 1.0, 0.5),
                    diffuse: 0.7,
                    specular: 0.3,
                    ..Material::default()
                }
                .with_pattern(stripes),
            ),
    );

    world.add_shape(
        Shape::sphere()
            .with_transform(translation(1.5, 0.5, -0.5) * scaling(0.5, 0.5, 0.5))
            .with_material(Material {
                colour: Colour::new(0.5, 1.0, 0.1),
                diffuse: 0.7,
                specular: 0.3,
                ..Material::default()
            }),
    );

    world.add_shape(
        Shape::sphere()
            .with_transform(translation(-1.5, 0.33, -0.75) * scaling(0.33, 0.33, 0.33))
            .with_material(Material {
                colour: Colour::new(1.0, 0.8, 0.1),
                diffuse: 0.7,
                specular: 0.3,
                ..Material::default()
            }),
    );

    world.add_light(PointLight::new(Tuple::point(-10.0, 10.0, -10.0), Colour::WHITE));

    world
}
