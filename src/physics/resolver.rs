//! Impulse-based collision response
//!
//! Both bodies are treated as unit, equal mass: the impulse is split equally
//! and opposite, whatever the radii. Rotation is not integrated.

use super::collision::Collision;
use crate::entity::BodyStore;
use crate::error::PhysicsError;
use crate::vector2::Vector2;

#[derive(Debug, Clone, Default)]
pub struct CollisionResolver;

impl CollisionResolver {
    pub fn new() -> Self {
        Self
    }

    /// Apply the impulse for one collision.
    ///
    /// Returns `Ok(false)` without touching either body when they are already
    /// separating along the normal.
    pub fn resolve_single<S: BodyStore + ?Sized>(
        &self,
        store: &mut S,
        collision: &Collision,
    ) -> Result<bool, PhysicsError> {
        let normal = collision.normalized;
        let perpendicular = rotated_ccw(normal);

        let pos1 = collision.body1.spatial(&*store)?.position;
        let pos2 = collision.body2.spatial(&*store)?.position;
        let vel1 = collision.body1.body(&*store)?.linear_velocity;
        let vel2 = collision.body2.body(&*store)?.linear_velocity;

        // Contact offsets relative to each body's center
        let collide1 = collision.position;
        let mut collide2 = collision.position;
        collide2.add(pos1).subtract(pos2);

        let mut velocity_to2 = vel2;
        velocity_to2
            .add(rotated_ccw(collide2))
            .subtract(vel1)
            .subtract(rotated_ccw(collide1));

        let perp1 = collide1.project(perpendicular)?;
        let perp2 = collide2.project(perpendicular)?;
        let proj = velocity_to2.project(normal)?;

        if proj >= 0.0 {
            return Ok(false);
        }

        let magnitude = -proj / (1.0 + perp1 * perp1 + perp2 * perp2);
        let impulse = normal * magnitude;

        collision.body2.body_mut(store)?.linear_velocity.add(impulse);
        collision.body1.body_mut(store)?.linear_velocity.subtract(impulse);
        Ok(true)
    }

    /// Resolve collisions in list order; each sees the velocities left by the
    /// ones before it. Returns how many applied an impulse.
    pub fn resolve<S: BodyStore + ?Sized>(
        &self,
        store: &mut S,
        collisions: &[Collision],
    ) -> Result<usize, PhysicsError> {
        let mut applied = 0;
        for collision in collisions {
            if self.resolve_single(store, collision)? {
                applied += 1;
            }
        }
        Ok(applied)
    }
}

fn rotated_ccw(mut v: Vector2) -> Vector2 {
    *v.perpendicular(true)
}
