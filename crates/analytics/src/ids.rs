// In crates/analytics/src/ids.rs

use core_types::TradeId;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of fresh record identifiers.
///
/// Implementations must never hand out the same id twice within a process.
pub trait IdGenerator: Send + Sync + fmt::Debug {
    fn next_id(&self) -> TradeId;
}

/// Random v4 UUIDs. The default for interactive use.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> TradeId {
        TradeId(uuid::Uuid::new_v4().to_string())
    }
}

/// Deterministic ids of the form `{prefix}-{n}`, counting up from 1.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("trade")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> TradeId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        TradeId(format!("{}-{}", self.prefix, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sequential_ids_count_up() {
        let ids = SequentialIdGenerator::new("t");
        assert_eq!(ids.next_id().as_str(), "t-1");
        assert_eq!(ids.next_id().as_str(), "t-2");
    }

    #[test]
    fn uuid_ids_do_not_repeat() {
        let ids = UuidGenerator;
        let seen: HashSet<TradeId> = (0..256).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 256);
    }
}
