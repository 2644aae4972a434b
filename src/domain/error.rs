use thiserror::Error;

/// Domain-level errors raised while building records from client input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Empty job identifier")]
    EmptyJobId,
}
