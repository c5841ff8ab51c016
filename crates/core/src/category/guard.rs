//! Referential-integrity check run before a category is removed

use super::model::Category;
use crate::reducer::RecordId;
use crate::task::Task;

/// Outcome of checking whether a category may be removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalCheck<'a> {
    /// No task references the category
    Allowed(&'a Category),
    /// At least one task still uses the category's name
    Referenced {
        category: &'a Category,
        task_count: usize,
    },
    /// No category with that id exists
    Missing,
}

/// Look up category `id` and count the tasks filed under its name.
pub fn check_removal<'a>(
    categories: &'a [Category],
    tasks: &[Task],
    id: RecordId,
) -> RemovalCheck<'a> {
    let Some(category) = categories.iter().find(|c| c.id == id) else {
        return RemovalCheck::Missing;
    };

    let task_count = tasks
        .iter()
        .filter(|task| task.category == category.name)
        .count();

    if task_count == 0 {
        RemovalCheck::Allowed(category)
    } else {
        RemovalCheck::Referenced {
            category,
            task_count,
        }
    }
}
