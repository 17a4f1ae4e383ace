//! Identity generation boundary contract.

use crate::types::EntityId;

/// Supplies a unique opaque identifier on each call.
///
/// Implementations must never repeat an id within a session's lifetime;
/// consumers do not defend against collisions.
pub trait IdSource {
    fn next_id(&mut self) -> EntityId;
}
