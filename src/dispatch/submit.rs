use async_trait::async_trait;
use serde::Deserialize;
use serde::de::IgnoredAny;

use super::error::TransportError;
use crate::aggregate::AggregationError;
use crate::domain::{Chunk, ChunkPayload, Record, SkippedEntry};

/// Observer for byte-level transfer progress of the chunk in flight
pub trait TransferObserver: Send + Sync {
    fn on_transfer(&self, bytes_sent: u64, bytes_total: u64);
}

/// Observer that discards transfer events
pub struct NoProgress;

impl TransferObserver for NoProgress {
    fn on_transfer(&self, _bytes_sent: u64, _bytes_total: u64) {}
}

/// Remote response for a fulfilled chunk, checked before it is aggregated
pub trait Receipt: Send {
    /// Validate against the chunk that produced it
    fn into_payload(self, record_count: usize) -> Result<ChunkPayload, AggregationError>;
}

/// Chunk-level acknowledgement from a media endpoint; any response body
/// counts as an acknowledgement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "IgnoredAny")]
pub struct MediaAck;

impl From<IgnoredAny> for MediaAck {
    fn from(_: IgnoredAny) -> Self {
        MediaAck
    }
}

impl Receipt for MediaAck {
    fn into_payload(self, _record_count: usize) -> Result<ChunkPayload, AggregationError> {
        Ok(ChunkPayload::Acknowledged)
    }
}

/// Skipped-record entry as reported by the user endpoint.
///
/// The endpoint names a record by `identifier`, `username` or `email`;
/// whichever is present first in that order wins.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct RawSkippedEntry {
    pub identifier: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub reason: String,
}

impl RawSkippedEntry {
    fn into_entry(self) -> SkippedEntry {
        let identifier = self
            .identifier
            .or(self.username)
            .or(self.email)
            .unwrap_or_default();
        SkippedEntry::new(identifier, self.reason)
    }
}

impl From<SkippedEntry> for RawSkippedEntry {
    fn from(entry: SkippedEntry) -> Self {
        Self {
            identifier: Some(entry.identifier),
            reason: entry.reason,
            ..Self::default()
        }
    }
}

/// Response of the user endpoint: `{acceptedCount, skippedCount, skippedEntries}`
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBatchReceipt {
    pub accepted_count: Option<u64>,
    pub skipped_count: Option<u64>,
    #[serde(default)]
    pub skipped_entries: Vec<RawSkippedEntry>,
}

impl UserBatchReceipt {
    pub fn new(accepted: u64, skipped_entries: Vec<SkippedEntry>) -> Self {
        Self {
            accepted_count: Some(accepted),
            skipped_count: Some(skipped_entries.len() as u64),
            skipped_entries: skipped_entries.into_iter().map(RawSkippedEntry::from).collect(),
        }
    }
}

impl Receipt for UserBatchReceipt {
    fn into_payload(self, record_count: usize) -> Result<ChunkPayload, AggregationError> {
        let accepted = self.accepted_count.ok_or(AggregationError::MissingField {
            field: "acceptedCount",
        })?;
        let skipped = self.skipped_count.ok_or(AggregationError::MissingField {
            field: "skippedCount",
        })?;

        let reported = accepted.saturating_add(skipped);
        if reported > record_count as u64 {
            return Err(AggregationError::CountOverflow {
                reported,
                records: record_count,
            });
        }
        if self.skipped_entries.len() as u64 != skipped {
            return Err(AggregationError::SkippedMismatch {
                count: skipped,
                entries: self.skipped_entries.len(),
            });
        }

        Ok(ChunkPayload::Records {
            accepted,
            skipped,
            skipped_entries: self
                .skipped_entries
                .into_iter()
                .map(RawSkippedEntry::into_entry)
                .collect(),
        })
    }
}

/// Remote submission function for one kind of record
///
/// Implementations own the transport (and its timeout); the engine only
/// decides what goes into each call and when. Implementations that can
/// observe upload progress report it through `progress`.
#[async_trait]
pub trait ChunkSubmitter: Send + Sync {
    type Record: Record;
    type Receipt: Receipt;

    async fn submit(
        &self,
        chunk: Chunk<Self::Record>,
        progress: &dyn TransferObserver,
    ) -> Result<Self::Receipt, TransportError>;
}
