//! Procedural colour patterns.
//!
//! A pattern is evaluated in its own space: world point → shape space (shape
//! inverse) → pattern space (pattern inverse). This way a pattern follows the
//! shape it is attached to and can additionally be scaled, rotated or moved
//! relative to it.

use crate::Shape;
use lux_math::{Colour, Matrix4, Tuple};

/// The rule a [`Pattern`] uses to pick between its two colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Alternates every unit along x.
    Stripe,
    /// Linear blend from `a` to `b` across each unit of x.
    Gradient,
    /// Concentric rings in the xz plane.
    Ring,
    /// Alternates on the parity of `floor(|x| + |y| + |z|)`.
    Checker,
}

/// A two-colour procedural pattern with its own transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    kind: PatternKind,
    a: Colour,
    b: Colour,
    transform: Matrix4,
    inverse: Matrix4,
}

impl Pattern {
    pub fn new(kind: PatternKind, a: Colour, b: Colour) -> Self {
        Self {
            kind,
            a,
            b,
            transform: Matrix4::identity(),
            inverse: Matrix4::identity(),
        }
    }

    pub fn stripe(a: Colour, b: Colour) -> Self {
        Self::new(PatternKind::Stripe, a, b)
    }

    pub fn gradient(a: Colour, b: Colour) -> Self {
        Self::new(PatternKind::Gradient, a, b)
    }

    pub fn ring(a: Colour, b: Colour) -> Self {
        Self::new(PatternKind::Ring, a, b)
    }

    pub fn checker(a: Colour, b: Colour) -> Self {
        Self::new(PatternKind::Checker, a, b)
    }

    pub fn with_transform(mut self, transform: Matrix4) -> Self {
        self.set_transform(transform);
        self
    }

    pub fn set_transform(&mut self, transform: Matrix4) {
        if !transform.is_invertible() {
            log::warn!("{:?} pattern given a non-invertible transform", self.kind);
        }
        self.transform = transform;
        self.inverse = transform.inverse();
    }

    #[inline]
    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    #[inline]
    pub fn transform(&self) -> &Matrix4 {
        &self.transform
    }

    pub fn colours(&self) -> (Colour, Colour) {
        (self.a, self.b)
    }

    /// Colour of this pattern on `shape` at a world-space point.
    pub fn colour_at(&self, shape: &Shape, world_point: Tuple) -> Colour {
        let object_point = shape.world_to_object(world_point);
        let pattern_point = self.inverse * object_point;
        self.colour_at_local(pattern_point)
    }

    /// Colour at a point already in pattern space.
    pub fn colour_at_local(&self, point: Tuple) -> Colour {
        match self.kind {
            PatternKind::Stripe => self.pick(point.x().floor()),
            PatternKind::Gradient => {
                let fraction = point.x() - point.x().floor();
                self.a + (self.b - self.a) * fraction
            }
            PatternKind::Ring => {
                let distance = (point.x() * point.x() + point.z() * point.z()).sqrt();
                self.pick(distance.floor())
            }
            PatternKind::Checker => {
                let sum = point.x().abs() + point.y().abs() + point.z().abs();
                self.pick(sum.floor())
            }
        }
    }

    // `a` on even cells, `b` on odd ones (negative cells included).
    fn pick(&self, cell: f64) -> Colour {
        if cell.rem_euclid(2.0) == 0.0 {
            self.a
        } else {
            self.b
        }
    }
}
