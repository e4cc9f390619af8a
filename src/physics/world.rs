//! Body list and time stepping

use super::body::{BodyId, BodyIdAllocator, RigidBody};
use super::collision::CollisionDetector;
use super::geometry::Geometry;
use super::resolver::CollisionResolver;
use crate::consts::MS_PER_SECOND;
use crate::entity::{BodyStore, EntityId};
use crate::error::PhysicsError;
use crate::settings::WorldSettings;

/// The set of simulated bodies and the pipeline that advances them
#[derive(Debug, Clone)]
pub struct World {
    /// Insertion order is iteration order
    bodies: Vec<RigidBody>,
    detector: CollisionDetector,
    resolver: CollisionResolver,
    ids: BodyIdAllocator,
    steps: u32,
}

impl Default for World {
    fn default() -> Self {
        Self::new(WorldSettings::default())
    }
}

impl World {
    pub fn new(settings: WorldSettings) -> Self {
        Self {
            bodies: Vec::new(),
            detector: CollisionDetector::new(),
            resolver: CollisionResolver::new(),
            ids: BodyIdAllocator::new(),
            steps: settings.effective_steps(),
        }
    }

    /// World with `steps` sub-steps per [`World::step`]; zero means one
    pub fn with_steps(steps: u32) -> Self {
        Self::new(WorldSettings { steps })
    }

    /// Make a body handle with a fresh id. It is not added to the world.
    pub fn create_body(&mut self, entity: EntityId, geometry: Option<Geometry>) -> RigidBody {
        RigidBody::new(self.ids.allocate(), entity, geometry)
    }

    /// Add a body; a body already present is left where it is
    pub fn add(&mut self, body: RigidBody) {
        if self.contains(body.id) {
            return;
        }
        log::debug!("World: added body {} for {}", body.id, body.entity);
        self.bodies.push(body);
    }

    /// Remove a body by id, returning it if it was present
    pub fn remove(&mut self, id: BodyId) -> Option<RigidBody> {
        let index = self.bodies.iter().position(|b| b.id == id)?;
        log::debug!("World: removed body {}", id);
        Some(self.bodies.remove(index))
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.bodies.iter().any(|b| b.id == id)
    }

    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Advance the simulation by `dt` milliseconds.
    ///
    /// For each sub-step, every body in turn triggers a full detect/resolve
    /// pass over all bodies, then has its own position integrated and its
    /// velocity damped. Returns the number of impulses applied.
    pub fn step<S: BodyStore + ?Sized>(
        &self,
        store: &mut S,
        dt: f32,
    ) -> Result<usize, PhysicsError> {
        let steps = self.steps as f32;
        let mut impulses = 0;

        for _ in 0..self.steps {
            for body in &self.bodies {
                // TODO: detect once per sub-step instead of once per body; this
                // changes trajectories, so it needs its own parity tests
                let collisions = self.detector.check_collisions(&*store, &self.bodies)?;
                impulses += self.resolver.resolve(store, &collisions)?;

                let velocity = body.body(&*store)?.linear_velocity;
                let position = &mut body.spatial_mut(store)?.position;
                position.x += velocity.x * dt / MS_PER_SECOND / steps;
                position.y += velocity.y * dt / MS_PER_SECOND / steps;

                let rigid = body.body_mut(store)?;
                rigid.linear_velocity.x *= 1.0 - rigid.linear_damping.x;
                rigid.linear_velocity.y *= 1.0 - rigid.linear_damping.y;
            }
        }

        log::trace!(
            "World: stepped {} bodies by {}ms, {} impulses",
            self.bodies.len(),
            dt,
            impulses
        );
        Ok(impulses)
    }
}
