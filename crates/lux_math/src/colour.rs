use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

use glam::DVec3;

use crate::EPSILON;

/// Linear RGB colour. Components are unclamped until serialization.
#[derive(Clone, Copy, Default)]
pub struct Colour(DVec3);

impl Colour {
    pub const BLACK: Colour = Colour::new(0.0, 0.0, 0.0);
    pub const WHITE: Colour = Colour::new(1.0, 1.0, 1.0);

    #[inline]
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self(DVec3::new(red, green, blue))
    }

    #[inline]
    pub fn red(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn green(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn blue(&self) -> f64 {
        self.0.z
    }

    /// Clamp to [0, 1] and quantize to 8 bits per channel.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let quantize = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [quantize(self.0.x), quantize(self.0.y), quantize(self.0.z)]
    }
}

impl PartialEq for Colour {
    fn eq(&self, other: &Self) -> bool {
        (self.0 - other.0).abs().max_element() < EPSILON
    }
}

impl fmt::Debug for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Colour({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}

impl Add for Colour {
    type Output = Colour;

    #[inline]
    fn add(self, rhs: Colour) -> Colour {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Colour {
    #[inline]
    fn add_assign(&mut self, rhs: Colour) {
        self.0 += rhs.0;
    }
}

impl Sub for Colour {
    type Output = Colour;

    #[inline]
    fn sub(self, rhs: Colour) -> Colour {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f64> for Colour {
    type Output = Colour;

    #[inline]
    fn mul(self, rhs: f64) -> Colour {
        Self(self.0 * rhs)
    }
}

/// Hadamard (componentwise) product, used to tint light by surface colour.
impl Mul for Colour {
    type Output = Colour;

    #[inline]
    fn mul(self, rhs: Colour) -> Colour {
        Self(self.0 * rhs.0)
    }
}
