//! Disc Physics - 2D circle rigid-body simulation
//!
//! Core modules:
//! - `vector2`: Mutable 2D vector math
//! - `physics`: Collision detection, impulse resolution, world stepping
//! - `entity`: Component data and the entity store interface
//! - `settings`: World and demo configuration
//! - `error`: Simulation errors

pub mod entity;
pub mod error;
pub mod physics;
pub mod settings;
pub mod vector2;

pub use entity::{BodyStore, Entities, EntityId, EntityStore};
pub use error::PhysicsError;
pub use physics::{PhysicsSystem, RigidBody, World};
pub use settings::{DemoSettings, WorldSettings};
pub use vector2::Vector2;

/// Simulation constants
pub mod consts {
    /// Sub-steps per world step when none are configured
    pub const DEFAULT_STEPS: u32 = 1;
    /// `dt` is given in milliseconds
    pub const MS_PER_SECOND: f32 = 1000.0;
}
