//! Mutable 2D vector used by the physics core
//!
//! Mutators return `&mut Self` so calls can be chained in place:
//! `v.subtract(a).normalize().multiply(2.0)`. Length, dot and perpendicular
//! math delegate to `glam`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::PhysicsError;

/// A 2D vector with public components
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// Unit x axis, the fallback separation direction for coincident bodies
    pub const X: Self = Self::new(1.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Overwrite both components
    pub fn set(&mut self, v: impl Into<Vector2>) -> &mut Self {
        let v = v.into();
        self.x = v.x;
        self.y = v.y;
        self
    }

    pub fn add(&mut self, v: impl Into<Vector2>) -> &mut Self {
        let v = v.into();
        self.x += v.x;
        self.y += v.y;
        self
    }

    pub fn subtract(&mut self, v: impl Into<Vector2>) -> &mut Self {
        let v = v.into();
        self.x -= v.x;
        self.y -= v.y;
        self
    }

    /// Scale both components by `s`
    pub fn multiply(&mut self, s: f32) -> &mut Self {
        self.x *= s;
        self.y *= s;
        self
    }

    /// Euclidean length
    #[inline]
    pub fn normal(&self) -> f32 {
        self.as_glam().length()
    }

    /// Scale to unit length. A zero vector is left untouched (never NaN).
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.normal();
        if len == 0.0 {
            return self;
        }
        self.multiply(1.0 / len)
    }

    /// Rotate by 90 degrees in place.
    ///
    /// Counter-clockwise gives `(-y, x)`, clockwise gives `(y, -x)`.
    pub fn perpendicular(&mut self, counter_clockwise: bool) -> &mut Self {
        let p = self.as_glam().perp();
        let p = if counter_clockwise { p } else { -p };
        self.set(p)
    }

    #[inline]
    pub fn dot(&self, v: Vector2) -> f32 {
        self.as_glam().dot(v.as_glam())
    }

    /// 2D cross product with the sign convention `-x * v.y + y * v.x`
    #[inline]
    pub fn cross(&self, v: Vector2) -> f32 {
        -self.as_glam().perp_dot(v.as_glam())
    }

    /// Scalar projection of `self` onto `v`: `dot(v) / |v|`
    pub fn project(&self, v: Vector2) -> Result<f32, PhysicsError> {
        let len = v.normal();
        if len == 0.0 {
            return Err(PhysicsError::DivisionByZero);
        }
        Ok(self.dot(v) / len)
    }

    /// Same as `==`, kept for call sites that read better as a method
    #[inline]
    pub fn equals(&self, v: Vector2) -> bool {
        *self == v
    }

    #[inline]
    pub fn as_glam(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vec2> for Vector2 {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for Vec2 {
    fn from(v: Vector2) -> Self {
        v.as_glam()
    }
}

impl std::ops::Add for Vector2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vector2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f32> for Vector2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl std::ops::Neg for Vector2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}
