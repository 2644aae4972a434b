use thiserror::Error;

use super::error::TransportError;
use super::submit::Receipt;
use crate::aggregate::AggregationError;
use crate::domain::ChunkPayload;

/// Why a chunk contributed nothing to the run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    #[error("{0}")]
    Transport(#[from] TransportError),

    #[error("{0}")]
    Inconsistent(#[from] AggregationError),

    #[error("Not attempted after chunk {failed_chunk} failed")]
    NotAttempted { failed_chunk: usize },

    #[error("No outcome was reported")]
    NeverSettled,
}

/// Terminal state of one chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled {
    Fulfilled(ChunkPayload),
    Rejected(FailureReason),
}

/// Settled result of one chunk, attributed by its index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkOutcome {
    pub chunk_index: usize,
    pub record_count: usize,
    pub settled: Settled,
}

impl ChunkOutcome {
    pub fn fulfilled(chunk_index: usize, record_count: usize, payload: ChunkPayload) -> Self {
        Self {
            chunk_index,
            record_count,
            settled: Settled::Fulfilled(payload),
        }
    }

    pub fn rejected(chunk_index: usize, record_count: usize, reason: FailureReason) -> Self {
        Self {
            chunk_index,
            record_count,
            settled: Settled::Rejected(reason),
        }
    }

    /// Settle a chunk from its submission result.
    ///
    /// A receipt that fails its consistency check rejects the chunk.
    pub fn from_submission<T: Receipt>(
        chunk_index: usize,
        record_count: usize,
        result: Result<T, TransportError>,
    ) -> Self {
        match result.map_err(FailureReason::from).and_then(|receipt| {
            receipt
                .into_payload(record_count)
                .map_err(FailureReason::from)
        }) {
            Ok(payload) => Self::fulfilled(chunk_index, record_count, payload),
            Err(reason) => Self::rejected(chunk_index, record_count, reason),
        }
    }

    pub fn is_fulfilled(&self) -> bool {
        matches!(self.settled, Settled::Fulfilled(_))
    }

    pub fn failure(&self) -> Option<&FailureReason> {
        match &self.settled {
            Settled::Rejected(reason) => Some(reason),
            Settled::Fulfilled(_) => None,
        }
    }
}
