use thiserror::Error;

/// Failure of a chunk's remote submission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Request timed out")]
    Timeout,

    #[error("Remote rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Malformed response: {0}")]
    Payload(String),
}
