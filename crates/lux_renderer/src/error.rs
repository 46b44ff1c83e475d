use crate::ShapeId;
use lux_math::MathError;
use thiserror::Error;

/// Errors that can occur while configuring or running a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Pixel ({x}, {y}) is out of bounds for a {width}x{height} canvas")]
    PixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("Unsupported configuration: exactly one light is supported, found {0}")]
    UnsupportedLightCount(usize),

    #[error("Shape {0:?} does not belong to this world")]
    UnknownShape(ShapeId),

    #[error("Math error: {0}")]
    Math(#[from] MathError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

pub type RenderResult<T> = Result<T, RenderError>;
