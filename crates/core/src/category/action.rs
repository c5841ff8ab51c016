//! Category actions and reducer

use serde::{Deserialize, Serialize};

use super::model::{Category, CategoryPatch};
use crate::reducer::{self, Action, RecordId};

/// An action dispatched to the category sequence
///
/// Serialized as `{"type": "ADD_CATEGORY", "payload": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum CategoryAction {
    #[serde(rename = "LOAD_CATEGORIES")]
    Load(Vec<Category>),
    #[serde(rename = "ADD_CATEGORY")]
    Add(Category),
    #[serde(rename = "REMOVE_CATEGORY")]
    Remove(RecordId),
    #[serde(rename = "UPDATE_CATEGORY")]
    Update {
        id: RecordId,
        #[serde(rename = "updatedCategory")]
        updated_category: CategoryPatch,
    },
    #[serde(other)]
    Unknown,
}

impl From<CategoryAction> for Action<Category> {
    fn from(action: CategoryAction) -> Self {
        match action {
            CategoryAction::Load(categories) => Action::Load(categories),
            CategoryAction::Add(category) => Action::Add(category),
            CategoryAction::Remove(id) => Action::Remove(id),
            CategoryAction::Update {
                id,
                updated_category,
            } => Action::Update {
                id,
                patch: updated_category,
            },
            CategoryAction::Unknown => Action::Unknown,
        }
    }
}

/// `(state, action) -> new state` for categories
///
/// This does not check whether tasks still use the category; callers run
/// [`check_removal`](super::check_removal) before dispatching a remove.
pub fn reduce_categories(state: &[Category], action: CategoryAction) -> Vec<Category> {
    reducer::reduce(state, action.into())
}
