//! Homogeneous point/vector type.
//!
//! A [`Tuple`] with `w = 1` is a point, with `w = 0` a vector. The split matters
//! for transforms: translations move points but leave vectors untouched.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::DVec4;

use crate::{MathError, MathResult, EPSILON};

/// A homogeneous 4-component tuple backed by a `glam::DVec4`.
#[derive(Clone, Copy, Default)]
pub struct Tuple(DVec4);

impl Tuple {
    /// Create a tuple from raw components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self(DVec4::new(x, y, z, w))
    }

    /// Create a point (w = 1).
    #[inline]
    pub const fn point(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Create a vector (w = 0).
    #[inline]
    pub const fn vector(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.0)
    }

    /// The origin point.
    pub const ORIGIN: Tuple = Tuple::point(0.0, 0.0, 0.0);

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    #[inline]
    pub fn w(&self) -> f64 {
        self.0.w
    }

    /// Component by index (0 = x .. 3 = w).
    #[inline]
    pub fn component(&self, index: usize) -> f64 {
        self.0[index]
    }

    pub fn is_point(&self) -> bool {
        self.0.w == 1.0
    }

    pub fn is_vector(&self) -> bool {
        self.0.w == 0.0
    }

    /// Same x, y, z with w forced to 0.
    #[inline]
    pub fn as_vector(&self) -> Tuple {
        Self(self.0.truncate().extend(0.0))
    }

    /// Euclidean length over all four components.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.0.length()
    }

    /// Divide by the magnitude.
    #[inline]
    pub fn normalize(&self) -> Tuple {
        *self / self.magnitude()
    }

    #[inline]
    pub fn dot(&self, other: &Tuple) -> f64 {
        self.0.dot(other.0)
    }

    /// 3-component cross product.
    ///
    /// Only defined for vectors; a point operand is reported as
    /// [`MathError::UnsupportedOperation`] rather than silently coerced.
    pub fn cross(&self, other: &Tuple) -> MathResult<Tuple> {
        if self.0.w != 0.0 || other.0.w != 0.0 {
            return Err(MathError::UnsupportedOperation {
                operation: "cross product",
                lhs_w: self.0.w,
                rhs_w: other.0.w,
            });
        }

        let crossed = self.0.truncate().cross(other.0.truncate());
        Ok(Self(crossed.extend(0.0)))
    }

    /// Reflect `self` about `normal`: `v - n * 2 * dot(v, n)`.
    #[inline]
    pub fn reflect(&self, normal: &Tuple) -> Tuple {
        *self - *normal * (2.0 * self.dot(normal))
    }
}

impl PartialEq for Tuple {
    fn eq(&self, other: &Self) -> bool {
        (self.0 - other.0).abs().max_element() < EPSILON
    }
}

impl fmt::Debug for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tuple({}, {}, {}, {})",
            self.0.x, self.0.y, self.0.z, self.0.w
        )
    }
}

impl From<DVec4> for Tuple {
    fn from(v: DVec4) -> Self {
        Self(v)
    }
}

impl From<Tuple> for DVec4 {
    fn from(t: Tuple) -> Self {
        t.0
    }
}

impl Add for Tuple {
    type Output = Tuple;

    #[inline]
    fn add(self, rhs: Tuple) -> Tuple {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Tuple {
    type Output = Tuple;

    #[inline]
    fn sub(self, rhs: Tuple) -> Tuple {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Tuple {
    type Output = Tuple;

    #[inline]
    fn neg(self) -> Tuple {
        Self(-self.0)
    }
}

impl Mul<f64> for Tuple {
    type Output = Tuple;

    #[inline]
    fn mul(self, rhs: f64) -> Tuple {
        Self(self.0 * rhs)
    }
}

impl Div<f64> for Tuple {
    type Output = Tuple;

    #[inline]
    fn div(self, rhs: f64) -> Tuple {
        Self(self.0 / rhs)
    }
}
