//! Task management module
//!
//! This module provides the task list and its CSV file mirror:
//! - Task model with a pending/completed status
//! - Read and write the `Task,Status` file format
//! - `TaskStore`, which persists every change before committing it

pub mod csv;
pub mod error;
pub mod model;
pub mod store;

pub use error::StoreError;
pub use model::{Task, TaskId, TaskStats, TaskStatus};
pub use store::{StoreOptions, TaskStore};
