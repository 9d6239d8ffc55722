//! Record id allocation
//!
//! Ids are millisecond wall-clock timestamps with a monotonic fallback: the
//! allocator never re-issues or goes below an id it has already handed out,
//! even when the clock has coarser resolution than the call rate or steps
//! backwards. The clock is injected so tests can drive allocation
//! deterministically.

use chrono::Utc;
use parking_lot::Mutex;
use std::sync::Arc;

use super::records::RecordId;

/// Source of current time in milliseconds
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Allocates unique, strictly increasing record ids for one collection
pub struct IdAllocator {
    clock: Arc<dyn Clock>,
    last: Mutex<i64>,
}

impl IdAllocator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            last: Mutex::new(0),
        }
    }

    /// Allocator backed by the wall clock
    pub fn system() -> Self {
        Self::new(Arc::new(SystemClock))
    }

    /// Allocate the next id: the current timestamp, bumped past the last
    /// issued id when the clock has not advanced
    pub fn next(&self) -> RecordId {
        let mut last = self.last.lock();
        let id = self.clock.now_millis().max(*last + 1);
        *last = id;
        RecordId::new(id)
    }

    /// Record an id that already exists in the collection, so future
    /// allocations stay above it
    pub fn observe(&self, id: RecordId) {
        let mut last = self.last.lock();
        *last = (*last).max(id.value());
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::system()
    }
}
