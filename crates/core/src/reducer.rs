//! Generic reducer over an ordered sequence of records
//!
//! Tasks and categories share the same four transitions (load, add,
//! remove, update). Each entity type exposes its own wire-level action
//! enum and converts it into [`Action`] before reducing.

/// Identifier carried by every record (a millisecond timestamp).
pub type RecordId = i64;

/// A record that can live in a reducible sequence
pub trait Record: Clone {
    /// Partial update merged into a record by `Action::Update`
    type Patch;

    fn id(&self) -> RecordId;

    /// Shallow merge: fields present in the patch replace ours.
    fn apply_patch(&mut self, patch: &Self::Patch);
}

/// A state transition over a sequence of `R`
#[derive(Debug, Clone, PartialEq)]
pub enum Action<R: Record> {
    /// Replace the sequence wholesale
    Load(Vec<R>),
    /// Append a record
    Add(R),
    /// Drop the record with this id
    Remove(RecordId),
    /// Merge a patch into the record with this id, keeping its position
    Update { id: RecordId, patch: R::Patch },
    /// Anything we don't recognize leaves the state alone
    Unknown,
}

/// Apply `action` to `state`, producing the next state.
///
/// Never fails: actions that target a missing id yield a copy of the
/// input unchanged.
pub fn reduce<R: Record>(state: &[R], action: Action<R>) -> Vec<R> {
    match action {
        Action::Load(records) => records,
        Action::Add(record) => {
            let mut next = Vec::with_capacity(state.len() + 1);
            next.extend_from_slice(state);
            next.push(record);
            next
        }
        Action::Remove(id) => state.iter().filter(|r| r.id() != id).cloned().collect(),
        Action::Update { id, patch } => state
            .iter()
            .map(|record| {
                let mut record = record.clone();
                if record.id() == id {
                    record.apply_patch(&patch);
                }
                record
            })
            .collect(),
        Action::Unknown => state.to_vec(),
    }
}
