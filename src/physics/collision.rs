//! Narrow-phase collision detection
//!
//! Exhaustive: every unordered pair of bodies is tested once per pass. There
//! is no broad phase and nothing is cached between passes.

use std::collections::HashSet;

use super::body::{BodyId, RigidBody};
use super::geometry::Geometry;
use crate::entity::BodyStore;
use crate::error::PhysicsError;
use crate::vector2::Vector2;

/// Contact between two overlapping bodies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    pub body1: RigidBody,
    pub body2: RigidBody,
    /// Unit direction from body1 toward body2
    pub normalized: Vector2,
    /// `normalized * penetration depth`, the push-apart vector
    pub transit: Vector2,
    /// Approximate contact offset from body1's center
    pub position: Vector2,
}

/// Signed gap between two circles: negative or zero means they touch
#[inline]
pub fn circle_overlap(pos1: Vector2, radius1: f32, pos2: Vector2, radius2: f32) -> f32 {
    (pos2 - pos1).normal() - (radius1 + radius2)
}

#[derive(Debug, Clone, Default)]
pub struct CollisionDetector;

impl CollisionDetector {
    pub fn new() -> Self {
        Self
    }

    /// Test one pair of bodies
    pub fn check_collision<S: BodyStore + ?Sized>(
        &self,
        store: &S,
        body1: &RigidBody,
        body2: &RigidBody,
    ) -> Result<Option<Collision>, PhysicsError> {
        let pos1 = body1.spatial(store)?.position;
        let pos2 = body2.spatial(store)?.position;

        let contact = match (body1.geometry()?, body2.geometry()?) {
            (Geometry::Circle(c1), Geometry::Circle(c2)) => {
                circle_circle(pos1, c1.radius, pos2, c2.radius)
            }
        };

        Ok(contact.map(|(normalized, transit, position)| Collision {
            body1: *body1,
            body2: *body2,
            normalized,
            transit,
            position,
        }))
    }

    /// Test every unordered pair in `bodies`, in list order.
    ///
    /// The pair memo lives only for this call.
    pub fn check_collisions<S: BodyStore + ?Sized>(
        &self,
        store: &S,
        bodies: &[RigidBody],
    ) -> Result<Vec<Collision>, PhysicsError> {
        let mut visited: HashSet<(BodyId, BodyId)> = HashSet::new();
        let mut collisions = Vec::new();

        for (i, body1) in bodies.iter().enumerate() {
            for (j, body2) in bodies.iter().enumerate() {
                if i == j || visited.contains(&(body1.id, body2.id)) {
                    continue;
                }

                let result = self.check_collision(store, body1, body2)?;
                visited.insert((body1.id, body2.id));
                visited.insert((body2.id, body1.id));
                if let Some(collision) = result {
                    collisions.push(collision);
                }
            }
        }

        Ok(collisions)
    }
}

/// Returns `(normalized, transit, position)` when the circles touch
fn circle_circle(
    pos1: Vector2,
    radius1: f32,
    pos2: Vector2,
    radius2: f32,
) -> Option<(Vector2, Vector2, Vector2)> {
    let mut direction = pos2 - pos1;
    let overlap = circle_overlap(pos1, radius1, pos2, radius2);

    // Coincident centers: pick a fixed axis, but keep the true overlap
    if direction.equals(Vector2::ZERO) {
        direction = Vector2::X;
    }

    if overlap > 0.0 {
        return None;
    }

    let normalized = *direction.normalize();
    let transit = normalized * -overlap;
    let position = normalized * -radius1;
    Some((normalized, transit, position))
}
