use std::path::PathBuf;
use thiserror::Error;

use super::model::TaskId;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid task: {0}")]
    Validation(String),

    #[error("No task at position {index} (list has {len} tasks)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Task not found: {0}")]
    UnknownTask(TaskId),

    #[error("Malformed tasks file {} (line {line}): {reason}", path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Could not lock {} for writing: {source}\n\
         Another taskpad instance may be saving right now; try again.",
        path.display()
    )]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
