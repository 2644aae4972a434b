use std::io;
use thiserror::Error;

use crate::domain::DomainError;
use crate::io::IoError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Input error: {0}")]
    Input(#[from] IoError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Batch rejected with {count} validation errors")]
    ValidationRejected { count: usize },
}

impl AppError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArguments(_) | Self::ValidationRejected { .. } => 2,
            _ => 1,
        }
    }
}
