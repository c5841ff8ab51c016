//! Task module
//!
//! This module contains task-related types and the task reducer.

mod action;
mod model;

pub use action::{reduce_tasks, TaskAction};
pub use model::*;
