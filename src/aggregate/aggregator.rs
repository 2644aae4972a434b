use std::collections::BTreeMap;

use tracing::warn;

use super::summary::{ChunkFailure, IngestionSummary, OverallStatus, SkippedReport};
use crate::dispatch::{ChunkOutcome, FailureReason, Settled};
use crate::domain::{ChunkPayload, RecordKind};

/// Itemized skip lists longer than this collapse into a count
pub const DEFAULT_SKIP_DISPLAY_LIMIT: usize = 50;

/// Collects chunk outcomes as they settle and folds them into one summary.
///
/// Outcomes may arrive in any order; they are keyed by chunk index, so the
/// summary is the same whatever order the network completed them in.
#[derive(Debug)]
pub struct ResultAggregator {
    kind: RecordKind,
    total_chunks: usize,
    skip_display_limit: usize,
    outcomes: BTreeMap<usize, ChunkOutcome>,
}

impl ResultAggregator {
    pub fn new(kind: RecordKind, total_chunks: usize) -> Self {
        Self {
            kind,
            total_chunks,
            skip_display_limit: DEFAULT_SKIP_DISPLAY_LIMIT,
            outcomes: BTreeMap::new(),
        }
    }

    pub fn with_skip_display_limit(mut self, limit: usize) -> Self {
        self.skip_display_limit = limit;
        self
    }

    /// Record one settled chunk. Returns false (and keeps the first outcome)
    /// for an index outside the plan or one already reported.
    pub fn record(&mut self, outcome: ChunkOutcome) -> bool {
        if outcome.chunk_index >= self.total_chunks {
            warn!(
                chunk_index = outcome.chunk_index,
                total_chunks = self.total_chunks,
                "Ignoring outcome for unknown chunk"
            );
            return false;
        }
        if self.outcomes.contains_key(&outcome.chunk_index) {
            warn!(chunk_index = outcome.chunk_index, "Ignoring duplicate chunk outcome");
            return false;
        }
        self.outcomes.insert(outcome.chunk_index, outcome);
        true
    }

    pub fn settled(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_complete(&self) -> bool {
        self.outcomes.len() == self.total_chunks
    }

    /// Fold every outcome into the summary. A chunk that never reported
    /// counts as failed.
    pub fn finish(mut self) -> IngestionSummary {
        let mut summary = IngestionSummary {
            kind: self.kind,
            total_records: 0,
            total_chunks: self.total_chunks,
            chunks_succeeded: 0,
            failed_chunk_count: 0,
            total_accepted: 0,
            total_skipped: 0,
            skipped: SkippedReport::default(),
            failures: Vec::new(),
            violations: Vec::new(),
            status: OverallStatus::Success,
        };
        let mut skipped_entries = Vec::new();

        for index in 0..self.total_chunks {
            let outcome = self.outcomes.remove(&index).unwrap_or_else(|| {
                warn!(chunk_index = index, "Chunk never reported an outcome");
                ChunkOutcome::rejected(index, 0, FailureReason::NeverSettled)
            });
            summary.total_records += outcome.record_count;

            match outcome.settled {
                Settled::Fulfilled(ChunkPayload::Acknowledged) => {
                    summary.chunks_succeeded += 1;
                    summary.total_accepted += outcome.record_count as u64;
                }
                Settled::Fulfilled(ChunkPayload::Records {
                    accepted,
                    skipped,
                    skipped_entries: entries,
                }) => {
                    summary.chunks_succeeded += 1;
                    summary.total_accepted += accepted;
                    summary.total_skipped += skipped;
                    skipped_entries.extend(entries);
                }
                Settled::Rejected(reason) => {
                    summary.failed_chunk_count += 1;
                    summary.failures.push(ChunkFailure {
                        chunk_index: index,
                        reason,
                    });
                }
            }
        }

        summary.skipped = if skipped_entries.len() > self.skip_display_limit {
            SkippedReport::Truncated {
                count: skipped_entries.len(),
            }
        } else {
            SkippedReport::Itemized(skipped_entries)
        };
        summary.status = OverallStatus::from_counts(summary.failed_chunk_count, self.total_chunks);
        summary
    }
}

/// Aggregate a complete set of outcomes in one call
pub fn aggregate<I>(
    kind: RecordKind,
    total_chunks: usize,
    skip_display_limit: usize,
    outcomes: I,
) -> IngestionSummary
where
    I: IntoIterator<Item = ChunkOutcome>,
{
    let mut aggregator =
        ResultAggregator::new(kind, total_chunks).with_skip_display_limit(skip_display_limit);
    for outcome in outcomes {
        aggregator.record(outcome);
    }
    aggregator.finish()
}
