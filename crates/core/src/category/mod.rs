//! Category module
//!
//! Category types, the category reducer, and the removal guard that
//! keeps categories referenced by tasks from being deleted.

mod action;
mod guard;
mod model;

pub use action::{reduce_categories, CategoryAction};
pub use guard::{check_removal, RemovalCheck};
pub use model::*;
