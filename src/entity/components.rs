//! Component data the physics core reads and writes
//!
//! Field names follow the serialized contract (`linearVelocity`, ...), so
//! blueprints written for the entity store deserialize directly.

use serde::{Deserialize, Serialize};

use crate::physics::{Circle, Geometry};
use crate::vector2::Vector2;

/// Where an entity is in the world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spatial {
    pub position: Vector2,
    pub scale: Vector2,
    /// Rotation in radians
    pub rotation: f32,
}

impl Default for Spatial {
    fn default() -> Self {
        Self {
            position: Vector2::ZERO,
            scale: Vector2::new(1.0, 1.0),
            rotation: 0.0,
        }
    }
}

impl Spatial {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vector2::new(x, y),
            ..Default::default()
        }
    }
}

/// Linear motion state of a simulated entity
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RigidBodyComponent {
    pub linear_velocity: Vector2,
    /// Fraction of velocity removed per integration, per axis, in [0, 1]
    pub linear_damping: Vector2,
    /// Stored for consumers; collision response ignores it
    pub angular_speed: f32,
}

impl RigidBodyComponent {
    pub fn with_velocity(x: f32, y: f32) -> Self {
        Self {
            linear_velocity: Vector2::new(x, y),
            ..Default::default()
        }
    }

    pub fn damped(mut self, x: f32, y: f32) -> Self {
        self.linear_damping = Vector2::new(x, y);
        self
    }
}

/// One entry of a collision-shapes list, as authored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,
}

impl ShapeDescriptor {
    pub fn circle(radius: f32) -> Self {
        Self {
            kind: "circle".to_string(),
            radius: Some(radius),
        }
    }

    /// The geometry this descriptor stands for, if its kind is supported
    pub fn to_geometry(&self) -> Option<Geometry> {
        match self.kind.as_str() {
            "circle" => Some(Geometry::Circle(
                self.radius.map(Circle::new).unwrap_or_default(),
            )),
            _ => None,
        }
    }
}

/// Ordered list of shapes attached to an entity
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CollisionShapes {
    pub shapes: Vec<ShapeDescriptor>,
}

impl CollisionShapes {
    pub fn circle(radius: f32) -> Self {
        Self {
            shapes: vec![ShapeDescriptor::circle(radius)],
        }
    }

    /// Resolve the list to a single geometry.
    ///
    /// Entries apply in order, so the last one decides. An unsupported kind
    /// there leaves no geometry, even after a circle.
    pub fn geometry(&self) -> Option<Geometry> {
        self.shapes.last().and_then(ShapeDescriptor::to_geometry)
    }
}

/// Any component the store can hold
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Spatial(Spatial),
    RigidBody(RigidBodyComponent),
    CollisionShapes(CollisionShapes),
}

impl From<Spatial> for Component {
    fn from(c: Spatial) -> Self {
        Component::Spatial(c)
    }
}

impl From<RigidBodyComponent> for Component {
    fn from(c: RigidBodyComponent) -> Self {
        Component::RigidBody(c)
    }
}

impl From<CollisionShapes> for Component {
    fn from(c: CollisionShapes) -> Self {
        Component::CollisionShapes(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rigid_body_component_from_json() {
        let json = r#"{"linearVelocity":{"x":10,"y":0},"linearDamping":{"x":0.1,"y":0}}"#;
        let body: RigidBodyComponent = serde_json::from_str(json).unwrap();
        assert_eq!(body.linear_velocity, Vector2::new(10.0, 0.0));
        assert_eq!(body.linear_damping, Vector2::new(0.1, 0.0));
        assert_eq!(body.angular_speed, 0.0);
    }

    #[test]
    fn test_spatial_defaults_scale_to_one() {
        let spatial: Spatial = serde_json::from_str(r#"{"position":{"x":1,"y":2}}"#).unwrap();
        assert_eq!(spatial.position, Vector2::new(1.0, 2.0));
        assert_eq!(spatial.scale, Vector2::new(1.0, 1.0));
    }

    #[test]
    fn test_shape_descriptors() {
        let shapes: CollisionShapes = serde_json::from_str(
            r#"{"shapes":[{"type":"circle","radius":2},{"type":"box"},{"type":"circle"}]}"#,
        )
        .unwrap();
        assert_eq!(shapes.shapes[1].to_geometry(), None);
        // Last entry wins; a missing radius falls back to 1.0
        assert_eq!(shapes.geometry(), Some(Geometry::Circle(Circle::new(1.0))));

        let only_box = CollisionShapes {
            shapes: vec![ShapeDescriptor {
                kind: "box".to_string(),
                radius: None,
            }],
        };
        assert_eq!(only_box.geometry(), None);
    }

    #[test]
    fn test_trailing_unsupported_shape_clears_geometry() {
        let shapes: CollisionShapes =
            serde_json::from_str(r#"{"shapes":[{"type":"circle","radius":2},{"type":"box"}]}"#)
                .unwrap();
        assert_eq!(shapes.geometry(), None);
        assert_eq!(CollisionShapes::default().geometry(), None);
    }

    #[test]
    fn test_zero_radius_is_kept() {
        assert_eq!(
            ShapeDescriptor::circle(0.0).to_geometry(),
            Some(Geometry::Circle(Circle::new(0.0)))
        );
    }
}
