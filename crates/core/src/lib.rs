//! Core library for the task & category manager
//!
//! This crate contains the core business logic, including:
//! - Task and category reducers over ordered sequences
//! - The category-removal guard and edit-mode state machine
//! - Snapshot persistence over a key-value medium
//! - The controller that ties them together

pub mod category;
pub mod controller;
pub mod edit;
pub mod error;
pub mod id;
pub mod reducer;
pub mod storage;
pub mod task;

pub use controller::{Submission, TodoController};
pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
