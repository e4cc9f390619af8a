//! Circle rigid-body simulation
//!
//! Per tick: [`PhysicsSystem`] diffs the entity store, adds/removes
//! [`RigidBody`] handles in the [`World`], then calls [`World::step`], which
//! detects, resolves and integrates. The pipeline is single-threaded and
//! order-dependent:
//! - Bodies are visited in insertion order
//! - Collisions are resolved in detection order, each seeing earlier impulses

pub mod body;
pub mod collision;
pub mod geometry;
pub mod resolver;
pub mod system;
pub mod world;

pub use body::{BodyId, BodyIdAllocator, RigidBody};
pub use collision::{Collision, CollisionDetector, circle_overlap};
pub use geometry::{Circle, Geometry};
pub use resolver::CollisionResolver;
pub use system::PhysicsSystem;
pub use world::World;
