//! In-memory entity store

use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::components::{CollisionShapes, Component, RigidBodyComponent, Spatial};
use super::{BodyStore, ComponentKind, EntityId, EntitySet, EntityStore};

#[derive(Debug, Clone, Default)]
struct EntityRecord {
    name: String,
    spatial: Option<Spatial>,
    rigid_body: Option<RigidBodyComponent>,
    collision_shapes: Option<CollisionShapes>,
}

impl EntityRecord {
    fn has(&self, kind: ComponentKind) -> bool {
        match kind {
            ComponentKind::Spatial => self.spatial.is_some(),
            ComponentKind::RigidBody => self.rigid_body.is_some(),
            ComponentKind::CollisionShapes => self.collision_shapes.is_some(),
        }
    }
}

/// Entities and their components, keyed by id
#[derive(Debug, Clone)]
pub struct Entities {
    entities: BTreeMap<EntityId, EntityRecord>,
    /// Membership seen by the previous query of each kind
    seen: HashMap<ComponentKind, BTreeSet<EntityId>>,
    next_id: u32,
}

impl Default for Entities {
    fn default() -> Self {
        Self::new()
    }
}

impl Entities {
    pub fn new() -> Self {
        Self {
            entities: BTreeMap::new(),
            seen: HashMap::new(),
            next_id: 1,
        }
    }

    /// Create an empty entity
    pub fn spawn(&mut self) -> EntityId {
        self.spawn_named("")
    }

    /// # Panics
    ///
    /// Once `u32::MAX - 1` entities have been spawned; ids are never reused.
    pub fn spawn_named(&mut self, name: &str) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id = match self.next_id.checked_add(1) {
            Some(next) => next,
            None => panic!("Entities: entity ids exhausted"),
        };
        self.entities.insert(
            id,
            EntityRecord {
                name: name.to_string(),
                ..Default::default()
            },
        );
        id
    }

    /// Drop an entity and all its components. Returns false if it didn't exist.
    pub fn despawn(&mut self, entity: EntityId) -> bool {
        self.entities.remove(&entity).is_some()
    }

    /// Attach (or replace) a component. Returns false for an unknown entity.
    pub fn insert(&mut self, entity: EntityId, component: impl Into<Component>) -> bool {
        let Some(record) = self.entities.get_mut(&entity) else {
            return false;
        };
        match component.into() {
            Component::Spatial(c) => record.spatial = Some(c),
            Component::RigidBody(c) => record.rigid_body = Some(c),
            Component::CollisionShapes(c) => record.collision_shapes = Some(c),
        }
        true
    }

    /// Detach a component, returning it if it was present
    pub fn remove(&mut self, entity: EntityId, kind: ComponentKind) -> Option<Component> {
        let record = self.entities.get_mut(&entity)?;
        match kind {
            ComponentKind::Spatial => record.spatial.take().map(Component::Spatial),
            ComponentKind::RigidBody => record.rigid_body.take().map(Component::RigidBody),
            ComponentKind::CollisionShapes => record
                .collision_shapes
                .take()
                .map(Component::CollisionShapes),
        }
    }

    pub fn contains(&self, entity: EntityId) -> bool {
        self.entities.contains_key(&entity)
    }

    pub fn name(&self, entity: EntityId) -> Option<&str> {
        self.entities.get(&entity).map(|r| r.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// All entity ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.keys().copied()
    }
}

impl BodyStore for Entities {
    fn spatial(&self, entity: EntityId) -> Option<&Spatial> {
        self.entities.get(&entity)?.spatial.as_ref()
    }

    fn spatial_mut(&mut self, entity: EntityId) -> Option<&mut Spatial> {
        self.entities.get_mut(&entity)?.spatial.as_mut()
    }

    fn rigid_body(&self, entity: EntityId) -> Option<&RigidBodyComponent> {
        self.entities.get(&entity)?.rigid_body.as_ref()
    }

    fn rigid_body_mut(&mut self, entity: EntityId) -> Option<&mut RigidBodyComponent> {
        self.entities.get_mut(&entity)?.rigid_body.as_mut()
    }
}

impl EntityStore for Entities {
    fn query(&mut self, kind: ComponentKind) -> EntitySet {
        let current: BTreeSet<EntityId> = self
            .entities
            .iter()
            .filter(|(_, record)| record.has(kind))
            .map(|(id, _)| *id)
            .collect();
        let previous = self.seen.insert(kind, current.clone()).unwrap_or_default();

        EntitySet {
            added: current.difference(&previous).copied().collect(),
            removed: previous.difference(&current).copied().collect(),
            unchanged: current.intersection(&previous).copied().collect(),
        }
    }

    fn collision_shapes(&self, entity: EntityId) -> Option<&CollisionShapes> {
        self.entities.get(&entity)?.collision_shapes.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_diffs_between_calls() {
        let mut entities = Entities::new();
        let a = entities.spawn();
        let b = entities.spawn();
        entities.insert(a, RigidBodyComponent::default());
        entities.insert(b, RigidBodyComponent::default());

        let set = entities.query(ComponentKind::RigidBody);
        assert_eq!(set.added, vec![a, b]);
        assert!(set.removed.is_empty());

        let set = entities.query(ComponentKind::RigidBody);
        assert!(set.added.is_empty());
        assert_eq!(set.unchanged, vec![a, b]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![a, b]);

        entities.remove(a, ComponentKind::RigidBody);
        entities.despawn(b);
        let c = entities.spawn();
        entities.insert(c, RigidBodyComponent::default());

        let set = entities.query(ComponentKind::RigidBody);
        assert_eq!(set.added, vec![c]);
        assert_eq!(set.removed, vec![a, b]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_queries_are_tracked_per_kind() {
        let mut entities = Entities::new();
        let a = entities.spawn();
        entities.insert(a, Spatial::at(1.0, 2.0));

        assert_eq!(entities.query(ComponentKind::Spatial).added, vec![a]);
        assert!(entities.query(ComponentKind::RigidBody).is_empty());
        assert!(entities.query(ComponentKind::Spatial).added.is_empty());
    }

    #[test]
    #[should_panic(expected = "entity ids exhausted")]
    fn test_entity_ids_never_wrap() {
        let mut entities = Entities::new();
        entities.next_id = u32::MAX - 1;
        assert_eq!(entities.spawn(), EntityId(u32::MAX - 1));
        entities.spawn();
    }

    #[test]
    fn test_insert_on_unknown_entity() {
        let mut entities = Entities::new();
        assert!(!entities.insert(EntityId(42), Spatial::default()));
        assert!(entities.remove(EntityId(42), ComponentKind::Spatial).is_none());
        assert!(!entities.despawn(EntityId(42)));
    }

    #[test]
    fn test_component_access() {
        let mut entities = Entities::new();
        let a = entities.spawn_named("ball");
        entities.insert(a, Spatial::at(3.0, 4.0));
        entities.insert(a, CollisionShapes::circle(2.0));

        assert_eq!(entities.name(a), Some("ball"));
        entities.spatial_mut(a).unwrap().position.x = 5.0;
        assert_eq!(entities.spatial(a).unwrap().position.x, 5.0);
        assert!(entities.rigid_body(a).is_none());
        assert!(entities.collision_shapes(a).is_some());
    }
}
