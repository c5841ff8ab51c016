//! Task model definitions

use serde::{Deserialize, Serialize};

use crate::reducer::{Record, RecordId};

/// A task, persisted as `{id, name, description, category}`
///
/// `category` holds the *name* of a category, not its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
}

impl Task {
    /// Create a new task with an empty description
    pub fn new(id: RecordId, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            category: category.into(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Fields to merge into an existing task (`updatedTask`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl TaskPatch {
    /// Patch that only moves the task to another category
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }
}

impl Record for Task {
    type Patch = TaskPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn apply_patch(&mut self, patch: &TaskPatch) {
        if let Some(value) = &patch.name {
            self.name = value.clone();
        }
        if let Some(value) = &patch.description {
            self.description = value.clone();
        }
        if let Some(value) = &patch.category {
            self.category = value.clone();
        }
    }
}

/// Form input for creating or editing a task
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
}

impl TaskDraft {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            category: category.into(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Prefill a draft from an existing task
    pub fn from_task(task: &Task) -> Self {
        Self {
            name: task.name.clone(),
            description: task.description.clone(),
            category: task.category.clone(),
        }
    }

    /// Both a name and a category are required; description is optional.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.category.is_empty()
    }

    /// Materialize as a new task with the given id
    pub fn into_task(self, id: RecordId) -> Task {
        Task {
            id,
            name: self.name,
            description: self.description,
            category: self.category,
        }
    }

    /// Every field of the draft, as a full replacement patch
    pub fn into_patch(self) -> TaskPatch {
        TaskPatch {
            name: Some(self.name),
            description: Some(self.description),
            category: Some(self.category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task() {
        let task = Task::new(10, "Report", "Work");
        assert_eq!(task.id, 10);
        assert_eq!(task.name, "Report");
        assert_eq!(task.category, "Work");
        assert!(task.description.is_empty());
    }

    #[test]
    fn test_persisted_shape() {
        let task = Task::new(10, "Report", "Work").with_description("Q3 numbers");
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 10,
                "name": "Report",
                "description": "Q3 numbers",
                "category": "Work"
            })
        );
    }

    #[test]
    fn test_missing_description_defaults_to_empty() {
        let task: Task =
            serde_json::from_str(r#"{"id": 1, "name": "Walk", "category": "Home"}"#).unwrap();
        assert_eq!(task.description, "");
    }

    #[test]
    fn test_patch_merges_present_fields_only() {
        let mut task = Task::new(1, "Walk", "Home").with_description("dog");
        task.apply_patch(&TaskPatch::category("Errands"));

        assert_eq!(task.name, "Walk");
        assert_eq!(task.description, "dog");
        assert_eq!(task.category, "Errands");
    }

    #[test]
    fn test_draft_completeness() {
        assert!(TaskDraft::new("Walk", "Home").is_complete());
        assert!(!TaskDraft::new("", "Home").is_complete());
        assert!(!TaskDraft::new("Walk", "").is_complete());
    }

    #[test]
    fn test_draft_patch_replaces_everything() {
        let mut task = Task::new(1, "Walk", "Home").with_description("dog");
        task.apply_patch(&TaskDraft::new("Run", "Sport").into_patch());

        assert_eq!(task, Task::new(1, "Run", "Sport"));
    }
}
