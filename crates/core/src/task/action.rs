//! Task actions and reducer

use serde::{Deserialize, Serialize};

use super::model::{Task, TaskPatch};
use crate::reducer::{self, Action, RecordId};

/// An action dispatched to the task sequence
///
/// Serialized as `{"type": "ADD_TASK", "payload": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum TaskAction {
    #[serde(rename = "LOAD_TASKS")]
    Load(Vec<Task>),
    #[serde(rename = "ADD_TASK")]
    Add(Task),
    #[serde(rename = "REMOVE_TASK")]
    Remove(RecordId),
    #[serde(rename = "UPDATE_TASK")]
    Update {
        id: RecordId,
        #[serde(rename = "updatedTask")]
        updated_task: TaskPatch,
    },
    #[serde(other)]
    Unknown,
}

impl From<TaskAction> for Action<Task> {
    fn from(action: TaskAction) -> Self {
        match action {
            TaskAction::Load(tasks) => Action::Load(tasks),
            TaskAction::Add(task) => Action::Add(task),
            TaskAction::Remove(id) => Action::Remove(id),
            TaskAction::Update { id, updated_task } => Action::Update {
                id,
                patch: updated_task,
            },
            TaskAction::Unknown => Action::Unknown,
        }
    }
}

/// `(state, action) -> new state` for tasks
pub fn reduce_tasks(state: &[Task], action: TaskAction) -> Vec<Task> {
    reducer::reduce(state, action.into())
}
