//! Identity generation: UUIDs in production, a counter for tests.

use eventdesk_core::id::IdSource;
use eventdesk_core::types::EntityId;
use uuid::Uuid;

/// Random v4 UUIDs; collision-free for any realistic session length.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&mut self) -> EntityId {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `<prefix>-1`, `<prefix>-2`, … ids for tests.
#[derive(Debug)]
pub struct SequentialIdSource {
    prefix: &'static str,
    counter: u64,
}

impl SequentialIdSource {
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix, counter: 0 }
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&mut self) -> EntityId {
        self.counter += 1;
        format!("{}-{}", self.prefix, self.counter)
    }
}
