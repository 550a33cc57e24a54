use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task name {0:?} contains characters reserved by the record format")]
    InvalidName(String),

    #[error("task file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("malformed task record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TaskError>;
