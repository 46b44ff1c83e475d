// Transformation constructors for Matrix4
//
// All angles are in radians. Chain transforms right-to-left:
// `translation(..) * scaling(..)` scales first, then translates.

use crate::{MathResult, Matrix4, Tuple};

pub fn translation(x: f64, y: f64, z: f64) -> Matrix4 {
    let mut m = Matrix4::identity();
    m.set(0, 3, x);
    m.set(1, 3, y);
    m.set(2, 3, z);
    m
}

pub fn scaling(x: f64, y: f64, z: f64) -> Matrix4 {
    let mut m = Matrix4::identity();
    m.set(0, 0, x);
    m.set(1, 1, y);
    m.set(2, 2, z);
    m
}

pub fn rotation_x(angle: f64) -> Matrix4 {
    let (sin, cos) = angle.sin_cos();
    Matrix4::new([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, cos, -sin, 0.0],
        [0.0, sin, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn rotation_y(angle: f64) -> Matrix4 {
    let (sin, cos) = angle.sin_cos();
    Matrix4::new([
        [cos, 0.0, sin, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-sin, 0.0, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn rotation_z(angle: f64) -> Matrix4 {
    let (sin, cos) = angle.sin_cos();
    Matrix4::new([
        [cos, -sin, 0.0, 0.0],
        [sin, cos, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Shear: each component moves in proportion to the other two.
/// `xy` is "x in proportion to y", and so on.
pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Matrix4 {
    Matrix4::new([
        [1.0, xy, xz, 0.0],
        [yx, 1.0, yz, 0.0],
        [zx, zy, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// World-to-camera transform for an eye at `from` looking at `to`.
///
/// `up` only needs to point roughly upward; it is re-orthogonalized here.
/// Fails if `from`/`to` are not points or `up` is not a vector, since the
/// basis is built with cross products.
pub fn view_transform(from: Tuple, to: Tuple, up: Tuple) -> MathResult<Matrix4> {
    let forward = (to - from).normalize();
    let left = forward.cross(&up.normalize())?;
    let true_up = left.cross(&forward)?;

    let orientation = Matrix4::new([
        [left.x(), left.y(), left.z(), 0.0],
        [true_up.x(), true_up.y(), true_up.z(), 0.0],
        [-forward.x(), -forward.y(), -forward.z(), 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    Ok(orientation * translation(-from.x(), -from.y(), -from.z()))
}
