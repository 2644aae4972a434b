use std::io;
use thiserror::Error;

use crate::domain::DomainError;

/// IO-level errors for reading client input and writing reports
#[derive(Error, Debug)]
pub enum IoError {
    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV async parsing error: {0}")]
    CsvAsync(#[from] csv_async::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}
