//! End-to-end scenarios through the public API

use disc_physics::entity::{CollisionShapes, ComponentKind, RigidBodyComponent, Spatial};
use disc_physics::physics::{Circle, CollisionDetector, RigidBody};
use disc_physics::{BodyStore, Entities, EntityId, PhysicsSystem, Vector2, World};

fn circle_body(entities: &mut Entities, world: &mut World, x: f32, y: f32, r: f32) -> RigidBody {
    let e = entities.spawn();
    entities.insert(e, Spatial::at(x, y));
    entities.insert(e, RigidBodyComponent::default());
    let body = world.create_body(e, Some(Circle::new(r).into()));
    world.add(body);
    body
}

#[test]
fn scenario_overlapping_unit_circles() {
    let mut entities = Entities::new();
    let mut world = World::default();
    let a = circle_body(&mut entities, &mut world, 0.0, 0.0, 1.0);
    let b = circle_body(&mut entities, &mut world, 1.0, 0.0, 1.0);

    let collision = CollisionDetector::new()
        .check_collision(&entities, &a, &b)
        .unwrap()
        .expect("overlap of -1 collides");
    assert_eq!(collision.normalized, Vector2::new(1.0, 0.0));
    assert_eq!(collision.transit, Vector2::new(1.0, 0.0));
    assert_eq!(collision.position, Vector2::new(-1.0, 0.0));
}

#[test]
fn scenario_separated_unit_circles() {
    let mut entities = Entities::new();
    let mut world = World::default();
    let a = circle_body(&mut entities, &mut world, 0.0, 0.0, 1.0);
    let b = circle_body(&mut entities, &mut world, 3.0, 0.0, 1.0);

    let result = CollisionDetector::new()
        .check_collision(&entities, &a, &b)
        .unwrap();
    assert!(result.is_none());
    assert!(
        CollisionDetector::new()
            .check_collisions(&entities, world.bodies())
            .unwrap()
            .is_empty()
    );
}

#[test]
fn scenario_single_body_one_second() {
    let mut entities = Entities::new();
    let mut world = World::with_steps(1);
    let e = entities.spawn();
    entities.insert(e, Spatial::at(0.0, 0.0));
    entities.insert(e, RigidBodyComponent::with_velocity(10.0, 0.0).damped(0.1, 0.0));
    let body = world.create_body(e, Some(Circle::default().into()));
    world.add(body);

    world.step(&mut entities, 1000.0).unwrap();

    let position = entities.spatial(e).unwrap().position;
    let velocity = entities.rigid_body(e).unwrap().linear_velocity;
    assert!((position.x - 10.0).abs() < 1e-4, "position {:?}", position);
    assert_eq!(position.y, 0.0);
    assert!((velocity.x - 9.0).abs() < 1e-4, "velocity {:?}", velocity);
    assert_eq!(velocity.y, 0.0);
}

#[test]
fn scenario_system_tracks_entity_lifecycle() {
    let mut entities = Entities::new();
    let mut system = PhysicsSystem::default();

    let e: EntityId = entities.spawn_named("ball");
    entities.insert(e, Spatial::default());
    entities.insert(e, RigidBodyComponent::default());
    let shapes: CollisionShapes =
        serde_json::from_str(r#"{"shapes":[{"type":"circle","radius":1}]}"#).unwrap();
    entities.insert(e, shapes);

    system.update(&mut entities, 16.0).unwrap();
    assert_eq!(system.bodies_for(e).len(), 1);
    assert_eq!(system.world().len(), 1);

    entities.remove(e, ComponentKind::RigidBody);
    system.update(&mut entities, 16.0).unwrap();
    assert!(system.bodies_for(e).is_empty());
    assert!(system.world().is_empty());
}

#[test]
fn head_on_collision_through_system() {
    let mut entities = Entities::new();
    let mut system = PhysicsSystem::default();

    let mut spawn = |x: f32, vx: f32| {
        let e = entities.spawn();
        entities.insert(e, Spatial::at(x, 0.0));
        entities.insert(e, RigidBodyComponent::with_velocity(vx, 0.0));
        entities.insert(e, CollisionShapes::circle(1.0));
        e
    };
    let left = spawn(-1.5, 4.0);
    let right = spawn(1.5, -4.0);

    // Approach until they touch, then bounce; total momentum stays zero
    for _ in 0..60 {
        system.update(&mut entities, 16.0).unwrap();
        let v1 = entities.rigid_body(left).unwrap().linear_velocity;
        let v2 = entities.rigid_body(right).unwrap().linear_velocity;
        assert!((v1.x + v2.x).abs() < 1e-4);
    }
    assert!(entities.rigid_body(left).unwrap().linear_velocity.x < 0.0);
    assert!(entities.rigid_body(right).unwrap().linear_velocity.x > 0.0);
}
