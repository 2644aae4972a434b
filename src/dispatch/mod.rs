pub mod error;
pub mod mode;
pub mod outcome;
pub mod parallel;
pub mod sequential;
pub mod submit;

#[cfg(test)]
pub(crate) mod fake;

// Re-export commonly used types
pub use error::TransportError;
pub use mode::DispatchMode;
pub use outcome::{ChunkOutcome, FailureReason, Settled};
pub use parallel::dispatch_parallel;
pub use sequential::dispatch_sequential;
pub use submit::{
    ChunkSubmitter, MediaAck, NoProgress, RawSkippedEntry, Receipt, TransferObserver,
    UserBatchReceipt,
};
