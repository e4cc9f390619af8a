//! Collision shapes

use serde::{Deserialize, Serialize};

/// Shape used for overlap tests
///
/// New kinds are added here; the detector matches on every pair of kinds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Geometry {
    Circle(Circle),
}

/// A circle centered on its body's position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Not validated: zero gives a point, negative values are used as-is
    pub radius: f32,
}

impl Circle {
    pub const DEFAULT_RADIUS: f32 = 1.0;

    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RADIUS)
    }
}

impl From<Circle> for Geometry {
    fn from(c: Circle) -> Self {
        Geometry::Circle(c)
    }
}
