//! Edit-mode state machine
//!
//! One `EditState` is kept per entity type. Selecting a record moves to
//! `Editing(id)`; selecting another retargets the edit. A successful
//! submit returns to `Idle`. There is no user-facing cancel; the only other
//! way back to `Idle` is the record under edit being removed.

use crate::reducer::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Idle,
    Editing(RecordId),
}

impl Default for EditState {
    fn default() -> Self {
        Self::Idle
    }
}

impl EditState {
    /// Select `id` for editing, replacing any edit in flight
    pub fn begin(&mut self, id: RecordId) {
        *self = Self::Editing(id);
    }

    /// Complete the edit, returning the id that was being edited
    pub fn finish(&mut self) -> Option<RecordId> {
        let target = self.target();
        *self = Self::Idle;
        target
    }

    /// Drop the edit because its target is gone
    pub(crate) fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn target(&self) -> Option<RecordId> {
        match self {
            Self::Idle => None,
            Self::Editing(id) => Some(*id),
        }
    }

    pub fn is_editing(&self, id: RecordId) -> bool {
        self.target() == Some(id)
    }
}
