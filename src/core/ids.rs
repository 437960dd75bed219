//! Identifier generation.
//!
//! The ledger takes its id source as a type parameter so tests can use
//! predictable ids while the binary uses time-ordered UUIDs.

use crate::entities::RecordId;
use uuid::Uuid;

/// Source of fresh, never-repeating record ids.
pub trait IdGenerator {
    /// Returns an id that has not been handed out before.
    fn next_id(&mut self) -> RecordId;
}

/// Monotonic counter producing `"1"`, `"2"`, `"3"`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Starts counting at 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> RecordId {
        let id = self.next;
        self.next += 1;
        RecordId::new(id.to_string())
    }
}

/// UUIDv7 ids (time-ordered).
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> RecordId {
        RecordId::new(Uuid::now_v7().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids_are_monotonic() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_id().as_str(), "1");
        assert_eq!(ids.next_id().as_str(), "2");
    }

    #[test]
    fn test_uuid_ids_are_unique() {
        let mut ids = UuidIds;
        let generated: HashSet<RecordId> = (0..100).map(|_| ids.next_id()).collect();
        assert_eq!(generated.len(), 100);
    }
}
