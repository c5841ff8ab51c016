//! Task & category controller
//!
//! Owns both collections and translates user-level operations into
//! actions. Every change is written back as a full snapshot before the
//! operation returns.

use crate::category::{
    check_removal, reduce_categories, Category, CategoryAction, CategoryPatch, RemovalCheck,
};
use crate::edit::EditState;
use crate::id::IdGenerator;
use crate::reducer::RecordId;
use crate::storage::PersistenceAdapter;
use crate::task::{reduce_tasks, Task, TaskAction, TaskDraft, TaskPatch};
use crate::{Error, Result};

/// Outcome of a successful submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission<T> {
    Added(T),
    Updated(T),
    /// The record under edit was gone by the time the edit was submitted.
    /// The edit is complete and nothing changed.
    Vanished(RecordId),
}

impl<T> Submission<T> {
    pub fn record(&self) -> Option<&T> {
        match self {
            Self::Added(record) | Self::Updated(record) => Some(record),
            Self::Vanished(_) => None,
        }
    }

    pub fn into_record(self) -> Option<T> {
        match self {
            Self::Added(record) | Self::Updated(record) => Some(record),
            Self::Vanished(_) => None,
        }
    }
}

pub struct TodoController {
    adapter: PersistenceAdapter,
    tasks: Vec<Task>,
    categories: Vec<Category>,
    task_edit: EditState,
    category_edit: EditState,
    ids: IdGenerator,
    /// Rewrite task categories when a category is renamed
    cascade_renames: bool,
}

impl TodoController {
    /// Create a controller with empty collections. Call [`start`](Self::start)
    /// to load the persisted snapshots.
    pub fn new(adapter: PersistenceAdapter) -> Self {
        Self {
            adapter,
            tasks: Vec::new(),
            categories: Vec::new(),
            task_edit: EditState::default(),
            category_edit: EditState::default(),
            ids: IdGenerator::new(),
            cascade_renames: true,
        }
    }

    /// Set whether renaming a category renames it on its tasks too
    pub fn with_cascade_renames(mut self, cascade: bool) -> Self {
        self.cascade_renames = cascade;
        self
    }

    /// Load both snapshots and write them back.
    ///
    /// A snapshot that lost records while loading is not written back, so
    /// the stored copy survives until the collection is next changed.
    pub async fn start(&mut self) -> Result<()> {
        let tasks = self.adapter.load_tasks().await?;
        let categories = self.adapter.load_categories().await?;

        let loaded_ids = tasks
            .records
            .iter()
            .map(|t| t.id)
            .chain(categories.records.iter().map(|c| c.id));
        for id in loaded_ids {
            self.ids.observe(id);
        }

        self.tasks = reduce_tasks(&self.tasks, TaskAction::Load(tasks.records.clone()));
        self.categories = reduce_categories(
            &self.categories,
            CategoryAction::Load(categories.records.clone()),
        );

        if tasks.is_complete() {
            self.adapter.save_tasks(&self.tasks).await?;
        } else {
            tracing::warn!(
                discarded = tasks.discarded,
                "Stored tasks were only partly readable, leaving them as they are"
            );
        }
        if categories.is_complete() {
            self.adapter.save_categories(&self.categories).await?;
        } else {
            tracing::warn!(
                discarded = categories.discarded,
                "Stored categories were only partly readable, leaving them as they are"
            );
        }

        tracing::info!(
            tasks = self.tasks.len(),
            categories = self.categories.len(),
            "Loaded snapshots"
        );
        Ok(())
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn task(&self, id: RecordId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn category(&self, id: RecordId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Tasks filed under the category called `name`
    pub fn tasks_in_category<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Task> + 'a {
        self.tasks.iter().filter(move |t| t.category == name)
    }

    pub fn task_edit(&self) -> EditState {
        self.task_edit
    }

    pub fn category_edit(&self) -> EditState {
        self.category_edit
    }

    fn has_category_named(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name == name)
    }

    /// Apply a task action and persist if the collection changed.
    pub async fn dispatch_tasks(&mut self, action: TaskAction) -> Result<bool> {
        self.apply_task_actions(std::iter::once(action)).await
    }

    /// Apply a category action and persist if the collection changed.
    ///
    /// This bypasses the removal guard; use [`remove_category`](Self::remove_category)
    /// for user-initiated removals.
    pub async fn dispatch_categories(&mut self, action: CategoryAction) -> Result<bool> {
        let next = reduce_categories(&self.categories, action);
        if next == self.categories {
            return Ok(false);
        }
        self.adapter.save_categories(&next).await?;
        self.categories = next;
        Ok(true)
    }

    /// Fold several task actions into one state change and one write
    async fn apply_task_actions(
        &mut self,
        actions: impl IntoIterator<Item = TaskAction>,
    ) -> Result<bool> {
        let next = actions
            .into_iter()
            .fold(self.tasks.clone(), |state, action| reduce_tasks(&state, action));
        if next == self.tasks {
            return Ok(false);
        }
        self.adapter.save_tasks(&next).await?;
        self.tasks = next;
        Ok(true)
    }

    /// Select a task for editing. Returns the task so a form can be
    /// prefilled, or `None` if no task has that id.
    pub fn begin_task_edit(&mut self, id: RecordId) -> Option<&Task> {
        self.task_edit.begin(id);
        let task = self.tasks.iter().find(|t| t.id == id);
        if task.is_none() {
            tracing::warn!(id, "Editing a task that does not exist");
        }
        task
    }

    /// Add a new task, or update the one being edited.
    ///
    /// The category must name an existing category. An edit may also keep
    /// the category the task already has, even if that category is gone.
    pub async fn submit_task(&mut self, draft: TaskDraft) -> Result<Submission<Task>> {
        if !draft.is_complete() {
            return Err(Error::InvalidInput(
                "Please provide a task name and select a category".to_string(),
            ));
        }

        let Some(id) = self.task_edit.target() else {
            self.ensure_task_category(&draft, None)?;
            let task = draft.into_task(self.ids.next_id());
            self.dispatch_tasks(TaskAction::Add(task.clone())).await?;
            tracing::info!(id = task.id, name = %task.name, "Added task");
            return Ok(Submission::Added(task));
        };

        let Some(current) = self.task(id).cloned() else {
            self.task_edit.finish();
            tracing::warn!(id, "Submitted an edit for a task that no longer exists");
            return Ok(Submission::Vanished(id));
        };
        self.ensure_task_category(&draft, Some(&current))?;

        let changed = self
            .dispatch_tasks(TaskAction::Update {
                id,
                updated_task: draft.into_patch(),
            })
            .await?;
        self.task_edit.finish();
        if changed {
            tracing::info!(id, "Updated task");
        }

        match self.task(id) {
            Some(task) => Ok(Submission::Updated(task.clone())),
            None => Ok(Submission::Vanished(id)),
        }
    }

    fn ensure_task_category(&self, draft: &TaskDraft, current: Option<&Task>) -> Result<()> {
        let unchanged = current.is_some_and(|task| task.category == draft.category);
        if unchanged || self.has_category_named(&draft.category) {
            return Ok(());
        }
        Err(Error::InvalidInput(format!(
            "Please select an existing category ('{}' does not exist)",
            draft.category
        )))
    }

    /// Remove a task. Returns `false` if no task had that id.
    pub async fn remove_task(&mut self, id: RecordId) -> Result<bool> {
        if self.task_edit.is_editing(id) {
            self.task_edit.reset();
        }

        let removed = self.dispatch_tasks(TaskAction::Remove(id)).await?;
        if removed {
            tracing::info!(id, "Removed task");
        } else {
            tracing::warn!(id, "Remove requested for a task that does not exist");
        }
        Ok(removed)
    }

    /// Select a category for editing (renaming).
    pub fn begin_category_edit(&mut self, id: RecordId) -> Option<&Category> {
        self.category_edit.begin(id);
        let category = self.categories.iter().find(|c| c.id == id);
        if category.is_none() {
            tracing::warn!(id, "Editing a category that does not exist");
        }
        category
    }

    /// Add a new category, or rename the one being edited.
    ///
    /// With cascading renames on, tasks filed under the old name are moved
    /// to the new name in the same operation, and renaming onto the name
    /// of another category is rejected since it would merge their tasks.
    pub async fn submit_category(
        &mut self,
        name: impl Into<String>,
    ) -> Result<Submission<Category>> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidInput(
                "Please provide a category name".to_string(),
            ));
        }

        let Some(id) = self.category_edit.target() else {
            let category = Category::new(self.ids.next_id(), name);
            self.dispatch_categories(CategoryAction::Add(category.clone()))
                .await?;
            tracing::info!(id = category.id, name = %category.name, "Added category");
            return Ok(Submission::Added(category));
        };

        let Some(old_name) = self.category(id).map(|c| c.name.clone()) else {
            self.category_edit.finish();
            tracing::warn!(id, "Submitted an edit for a category that no longer exists");
            return Ok(Submission::Vanished(id));
        };

        let renamed = old_name != name;
        if renamed && self.cascade_renames {
            if self.categories.iter().any(|c| c.id != id && c.name == name) {
                return Err(Error::InvalidInput(format!(
                    "A category named '{}' already exists",
                    name
                )));
            }
            // Tasks are written first: if the category write fails, repeating
            // the rename finds no tasks left to move and completes it.
            self.rename_task_categories(&old_name, &name).await?;
        }

        self.dispatch_categories(CategoryAction::Update {
            id,
            updated_category: CategoryPatch::rename(name.clone()),
        })
        .await?;
        self.category_edit.finish();

        if renamed {
            tracing::info!(id, from = %old_name, to = %name, "Renamed category");
            let orphaned = self.tasks_in_category(&old_name).count();
            if orphaned > 0 {
                tracing::warn!(
                    category = %old_name,
                    orphaned,
                    "Tasks still reference the old category name"
                );
            }
        }

        match self.category(id) {
            Some(category) => Ok(Submission::Updated(category.clone())),
            None => Ok(Submission::Vanished(id)),
        }
    }

    async fn rename_task_categories(&mut self, from: &str, to: &str) -> Result<()> {
        let updates: Vec<TaskAction> = self
            .tasks_in_category(from)
            .map(|task| TaskAction::Update {
                id: task.id,
                updated_task: TaskPatch::category(to),
            })
            .collect();

        let count = updates.len();
        if self.apply_task_actions(updates).await? {
            tracing::info!(from, to, count, "Moved tasks to renamed category");
        }
        Ok(())
    }

    /// Remove a category unless some task still uses its name.
    ///
    /// Returns `Error::CategoryInUse` when blocked, and `Ok(false)` if no
    /// category had that id.
    pub async fn remove_category(&mut self, id: RecordId) -> Result<bool> {
        match check_removal(&self.categories, &self.tasks, id) {
            RemovalCheck::Missing => {
                tracing::warn!(id, "Remove requested for a category that does not exist");
                Ok(false)
            }
            RemovalCheck::Referenced {
                category,
                task_count,
            } => Err(Error::CategoryInUse {
                name: category.name.clone(),
                task_count,
            }),
            RemovalCheck::Allowed(_) => {
                if self.category_edit.is_editing(id) {
                    self.category_edit.reset();
                }
                let removed = self
                    .dispatch_categories(CategoryAction::Remove(id))
                    .await?;
                tracing::info!(id, "Removed category");
                Ok(removed)
            }
        }
    }
}
