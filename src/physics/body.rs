//! Rigid body handles

use std::fmt;

use serde::{Deserialize, Serialize};

use super::geometry::Geometry;
use crate::entity::{BodyStore, ComponentKind, EntityId, RigidBodyComponent, Spatial};
use crate::error::PhysicsError;

/// Identifier of a rigid body, unique within the [`World`](super::World) that
/// allocated it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u32);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic id source; ids are never handed out twice
#[derive(Debug, Clone, Default)]
pub struct BodyIdAllocator {
    next: u32,
}

impl BodyIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// Once `u32::MAX` ids have been handed out, rather than wrapping around
    /// to an id already in use.
    pub fn allocate(&mut self) -> BodyId {
        let id = BodyId(self.next);
        self.next = match self.next.checked_add(1) {
            Some(next) => next,
            None => panic!("BodyIdAllocator: body ids exhausted"),
        };
        id
    }
}

/// Physics-facing handle onto an entity.
///
/// Spatial and rigid-body data stay in the entity store; the body only
/// remembers which entity to read them from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidBody {
    pub id: BodyId,
    pub entity: EntityId,
    pub geometry: Option<Geometry>,
}

impl RigidBody {
    pub fn new(id: BodyId, entity: EntityId, geometry: Option<Geometry>) -> Self {
        Self {
            id,
            entity,
            geometry,
        }
    }

    pub fn geometry(&self) -> Result<Geometry, PhysicsError> {
        self.geometry.ok_or(PhysicsError::UnspecifiedGeometry(self.id))
    }

    pub fn spatial<'s, S: BodyStore + ?Sized>(
        &self,
        store: &'s S,
    ) -> Result<&'s Spatial, PhysicsError> {
        store
            .spatial(self.entity)
            .ok_or_else(|| self.missing(ComponentKind::Spatial))
    }

    pub fn spatial_mut<'s, S: BodyStore + ?Sized>(
        &self,
        store: &'s mut S,
    ) -> Result<&'s mut Spatial, PhysicsError> {
        store
            .spatial_mut(self.entity)
            .ok_or_else(|| self.missing(ComponentKind::Spatial))
    }

    pub fn body<'s, S: BodyStore + ?Sized>(
        &self,
        store: &'s S,
    ) -> Result<&'s RigidBodyComponent, PhysicsError> {
        store
            .rigid_body(self.entity)
            .ok_or_else(|| self.missing(ComponentKind::RigidBody))
    }

    pub fn body_mut<'s, S: BodyStore + ?Sized>(
        &self,
        store: &'s mut S,
    ) -> Result<&'s mut RigidBodyComponent, PhysicsError> {
        store
            .rigid_body_mut(self.entity)
            .ok_or_else(|| self.missing(ComponentKind::RigidBody))
    }

    fn missing(&self, component: ComponentKind) -> PhysicsError {
        PhysicsError::MissingComponent {
            entity: self.entity,
            component,
        }
    }
}
