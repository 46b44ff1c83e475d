//! Lux math - homogeneous tuples, colours, matrices and rays.
//!
//! Everything here is a plain `Copy` value type. Equality on [`Tuple`],
//! [`Colour`] and [`Matrix`] is epsilon-based (see [`EPSILON`]) so results of
//! floating point arithmetic can be compared directly.

// Re-export glam for convenience
pub use glam;

mod colour;
mod error;
mod matrix;
mod ray;
mod transform;
mod tuple;

pub use colour::Colour;
pub use error::{MathError, MathResult};
pub use matrix::{Matrix, Matrix2, Matrix3, Matrix4};
pub use ray::Ray;
pub use transform::{
    rotation_x, rotation_y, rotation_z, scaling, shearing, translation, view_transform,
};
pub use tuple::Tuple;

/// Tolerance used by every approximate comparison in Lux.
pub const EPSILON: f64 = 1e-5;

/// Compare two reals within [`EPSILON`].
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
