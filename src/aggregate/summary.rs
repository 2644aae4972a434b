use std::fmt;

use crate::dispatch::FailureReason;
use crate::domain::{RecordKind, SkippedEntry};
use crate::validation::Violation;

/// Final verdict of an ingestion run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverallStatus {
    Success,
    PartialFailure,
    TotalFailure,
    ValidationRejected,
}

impl OverallStatus {
    /// Status of a run that passed validation
    pub fn from_counts(failed_chunks: usize, total_chunks: usize) -> Self {
        if failed_chunks == 0 {
            Self::Success
        } else if failed_chunks >= total_chunks {
            Self::TotalFailure
        } else {
            Self::PartialFailure
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::PartialFailure => "partial_failure",
            Self::TotalFailure => "total_failure",
            Self::ValidationRejected => "validation_rejected",
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Skipped records, itemized while the list stays short
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkippedReport {
    Itemized(Vec<SkippedEntry>),
    Truncated { count: usize },
}

impl SkippedReport {
    pub fn entries(&self) -> &[SkippedEntry] {
        match self {
            Self::Itemized(entries) => entries,
            Self::Truncated { .. } => &[],
        }
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Truncated { .. })
    }
}

impl Default for SkippedReport {
    fn default() -> Self {
        Self::Itemized(Vec::new())
    }
}

/// A rejected chunk and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkFailure {
    pub chunk_index: usize,
    pub reason: FailureReason,
}

/// Consolidated, per-record-accurate result of one ingestion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestionSummary {
    pub kind: RecordKind,
    pub total_records: usize,
    pub total_chunks: usize,
    pub chunks_succeeded: usize,
    pub failed_chunk_count: usize,
    pub total_accepted: u64,
    pub total_skipped: u64,
    pub skipped: SkippedReport,
    /// Ascending chunk index
    pub failures: Vec<ChunkFailure>,
    pub violations: Vec<Violation>,
    pub status: OverallStatus,
}

impl IngestionSummary {
    /// Summary of a run stopped by validation; nothing was dispatched
    pub fn validation_rejected(
        kind: RecordKind,
        total_records: usize,
        violations: Vec<Violation>,
    ) -> Self {
        Self {
            kind,
            total_records,
            total_chunks: 0,
            chunks_succeeded: 0,
            failed_chunk_count: 0,
            total_accepted: 0,
            total_skipped: 0,
            skipped: SkippedReport::default(),
            failures: Vec::new(),
            violations,
            status: OverallStatus::ValidationRejected,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == OverallStatus::Success
    }

    /// Human-readable report lines; chunk failures in ascending index order
    pub fn messages(&self) -> Vec<String> {
        if self.status == OverallStatus::ValidationRejected {
            let mut lines = vec!["Validation errors:".to_string()];
            lines.extend(self.violations.iter().map(ToString::to_string));
            return lines;
        }

        let mut lines = Vec::new();
        match self.kind {
            RecordKind::User => {
                lines.push(match self.status {
                    OverallStatus::TotalFailure => format!(
                        "No users were registered ({} of {} chunks failed)",
                        self.failed_chunk_count, self.total_chunks
                    ),
                    OverallStatus::PartialFailure => format!(
                        "Registered {} users ({} of {} chunks failed)",
                        self.total_accepted, self.failed_chunk_count, self.total_chunks
                    ),
                    _ => format!("Successfully registered {} users", self.total_accepted),
                });
                match &self.skipped {
                    SkippedReport::Itemized(entries) => lines.extend(
                        entries
                            .iter()
                            .map(|entry| format!("Skipped {}: {}", entry.identifier, entry.reason)),
                    ),
                    SkippedReport::Truncated { .. } => {
                        lines.push(format!("{} users were skipped", self.total_skipped))
                    }
                }
            }
            RecordKind::Media => lines.push(format!(
                "Uploaded {} files ({} of {} chunks succeeded)",
                self.total_accepted, self.chunks_succeeded, self.total_chunks
            )),
        }

        lines.extend(
            self.failures
                .iter()
                .map(|failure| format!("Chunk {}: {}", failure.chunk_index, failure.reason)),
        );
        lines
    }
}

impl fmt::Display for IngestionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("\n"))
    }
}
