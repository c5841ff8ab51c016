//! Timestamp-based record ids

use chrono::Utc;

use crate::reducer::RecordId;

/// Issues ids from the wall clock in milliseconds.
///
/// Ids from one generator are strictly increasing: if the clock has not
/// moved past the last issued (or observed) id, the next id is `last + 1`.
/// Once `RecordId::MAX` has been seen the generator stays there.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: RecordId,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> RecordId {
        let now = Utc::now().timestamp_millis();
        let id = now.max(self.last.saturating_add(1));
        self.last = id;
        id
    }

    /// Record an id that already exists so it is never issued again
    pub fn observe(&mut self, id: RecordId) {
        self.last = self.last.max(id);
    }
}
