//! Entity store interface consumed by the physics core
//!
//! The physics core never owns entity data. It reaches spatial and rigid-body
//! components through [`BodyStore`] using an [`EntityId`] handle, and discovers
//! new and removed entities through [`EntityStore::query`].
//!
//! [`Entities`] is a small in-memory store implementing both traits.

pub mod components;
pub mod store;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use components::{CollisionShapes, Component, RigidBodyComponent, ShapeDescriptor, Spatial};
pub use store::Entities;

/// Handle to an entity owned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity{}", self.0)
    }
}

/// Named component types an entity can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    Spatial,
    RigidBody,
    CollisionShapes,
}

impl ComponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Spatial => "SpatialComponent",
            ComponentKind::RigidBody => "RigidBodyComponent",
            ComponentKind::CollisionShapes => "CollisionShapesComponent",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read/write access to the data a rigid body integrates
pub trait BodyStore {
    fn spatial(&self, entity: EntityId) -> Option<&Spatial>;
    fn spatial_mut(&mut self, entity: EntityId) -> Option<&mut Spatial>;
    fn rigid_body(&self, entity: EntityId) -> Option<&RigidBodyComponent>;
    fn rigid_body_mut(&mut self, entity: EntityId) -> Option<&mut RigidBodyComponent>;
}

/// Entity queries with per-kind incremental diffing
pub trait EntityStore: BodyStore {
    /// Entities carrying `kind`, split by what changed since the previous
    /// query of the same kind
    fn query(&mut self, kind: ComponentKind) -> EntitySet;

    fn collision_shapes(&self, entity: EntityId) -> Option<&CollisionShapes>;
}

/// Result of an [`EntityStore::query`]. Each list is in ascending id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntitySet {
    pub added: Vec<EntityId>,
    pub removed: Vec<EntityId>,
    pub unchanged: Vec<EntityId>,
}

impl EntitySet {
    pub fn each_added(&self, f: impl FnMut(EntityId)) {
        self.added.iter().copied().for_each(f);
    }

    pub fn each_removed(&self, f: impl FnMut(EntityId)) {
        self.removed.iter().copied().for_each(f);
    }

    /// Every entity currently carrying the component, added or not
    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        let mut present: Vec<EntityId> =
            self.added.iter().chain(&self.unchanged).copied().collect();
        present.sort();
        present.into_iter()
    }

    /// Number of entities currently carrying the component
    pub fn len(&self) -> usize {
        self.added.len() + self.unchanged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
