use tracing::{debug, info, warn};

use super::outcome::{ChunkOutcome, FailureReason};
use super::submit::{ChunkSubmitter, TransferObserver};
use crate::domain::{Chunk, Phase};
use crate::progress::{PercentScope, ProgressReporter};

/// Turns byte-level transfer events of one chunk into job progress
struct ChunkTransfer<'a> {
    reporter: &'a ProgressReporter,
    scope: PercentScope,
    position: usize,
    chunk_count: usize,
}

impl TransferObserver for ChunkTransfer<'_> {
    fn on_transfer(&self, bytes_sent: u64, bytes_total: u64) {
        let percent = self
            .scope
            .percent(self.position, self.chunk_count, bytes_sent, bytes_total);
        self.reporter.report(Phase::Dispatching, percent);
    }
}

/// Submit chunks strictly one after another.
///
/// The next chunk goes out only after the current transfer completes. The
/// first failure abandons the run: every later chunk settles as
/// `NotAttempted` without being submitted.
pub async fn dispatch_sequential<S, F>(
    chunks: Vec<Chunk<S::Record>>,
    submitter: &S,
    reporter: &ProgressReporter,
    scope: PercentScope,
    mut on_settled: F,
) where
    S: ChunkSubmitter,
    F: FnMut(ChunkOutcome),
{
    let chunk_count = chunks.len();
    info!(job = %reporter.job(), chunks = chunk_count, ?scope, "Dispatching chunks sequentially");
    reporter.report(Phase::Dispatching, 0);

    let mut remaining = chunks.into_iter().enumerate();
    while let Some((position, chunk)) = remaining.next() {
        let index = chunk.index;
        let record_count = chunk.len();
        debug!(chunk_index = index, records = record_count, "Submitting chunk");

        let transfer = ChunkTransfer {
            reporter,
            scope,
            position,
            chunk_count,
        };
        let result = submitter.submit(chunk, &transfer).await;
        let outcome = ChunkOutcome::from_submission(index, record_count, result);

        if let Some(reason) = outcome.failure() {
            warn!(
                job = %reporter.job(),
                chunk_index = index,
                error = %reason,
                "Chunk failed, abandoning remaining chunks"
            );
            on_settled(outcome);

            for (_, abandoned) in remaining.by_ref() {
                on_settled(ChunkOutcome::rejected(
                    abandoned.index,
                    abandoned.len(),
                    FailureReason::NotAttempted {
                        failed_chunk: index,
                    },
                ));
            }
            return;
        }

        on_settled(outcome);
        reporter.report(
            Phase::Dispatching,
            scope.percent(position, chunk_count, 1, 1),
        );
    }
}
