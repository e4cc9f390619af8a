//! Adapter between an entity store and the physics [`World`]

use std::collections::BTreeMap;

use super::body::RigidBody;
use super::world::World;
use crate::entity::{ComponentKind, EntityId, EntityStore};
use crate::error::PhysicsError;

/// Keeps one rigid body per entity carrying a rigid-body component and
/// steps the world once per update
#[derive(Debug, Clone, Default)]
pub struct PhysicsSystem {
    world: World,
    entity_bodies: BTreeMap<EntityId, Vec<RigidBody>>,
}

impl PhysicsSystem {
    pub fn new(world: World) -> Self {
        Self {
            world,
            entity_bodies: BTreeMap::new(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Bodies registered for `entity` (empty if none)
    pub fn bodies_for(&self, entity: EntityId) -> &[RigidBody] {
        self.entity_bodies
            .get(&entity)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn registered_entities(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entity_bodies.keys().copied()
    }

    /// Sync bodies with the store, then advance the world by `dt` ms.
    /// Returns the number of impulses applied.
    pub fn update<S: EntityStore + ?Sized>(
        &mut self,
        store: &mut S,
        dt: f32,
    ) -> Result<usize, PhysicsError> {
        let set = store.query(ComponentKind::RigidBody);
        set.each_added(|entity| self.add_body(&*store, entity));
        set.each_removed(|entity| self.remove_bodies(entity));

        self.world.step(store, dt)
    }

    fn add_body<S: EntityStore + ?Sized>(&mut self, store: &S, entity: EntityId) {
        if store.rigid_body(entity).is_none() {
            return;
        }

        let geometry = store.collision_shapes(entity).and_then(|c| c.geometry());
        if geometry.is_none() {
            log::warn!("PhysicsSystem: {} has no supported collision shape", entity);
        }

        let body = self.world.create_body(entity, geometry);
        log::debug!("PhysicsSystem: registered body {} for {}", body.id, entity);
        self.entity_bodies.entry(entity).or_default().push(body);
        self.world.add(body);
    }

    fn remove_bodies(&mut self, entity: EntityId) {
        let Some(bodies) = self.entity_bodies.remove(&entity) else {
            return;
        };
        for body in bodies {
            self.world.remove(body.id);
        }
        log::debug!("PhysicsSystem: released bodies for {}", entity);
    }
}
