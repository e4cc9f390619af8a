//! Errors raised by the simulation math and the world step

use crate::entity::{ComponentKind, EntityId};
use crate::physics::BodyId;

/// Failures that abort a detection, resolution or integration pass.
///
/// Nothing here is retried: a failed `World::step` leaves already-applied
/// velocity and position writes in place and the tick is lost.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PhysicsError {
    /// Detection was attempted on a body whose shape was never assigned
    #[error("body {0} has no collision geometry")]
    UnspecifiedGeometry(BodyId),
    /// Scalar projection onto a zero-length vector
    #[error("cannot project onto a zero-length vector")]
    DivisionByZero,
    /// A body handle points at entity data that no longer exists
    #[error("entity {entity} has no {component} component")]
    MissingComponent {
        entity: EntityId,
        component: ComponentKind,
    },
}
