use futures::StreamExt;
use futures::stream::FuturesUnordered;
use tracing::{debug, info, warn};

use super::outcome::ChunkOutcome;
use super::submit::{ChunkSubmitter, NoProgress};
use crate::domain::{Chunk, Phase, rounded_percent};
use crate::progress::ProgressReporter;

/// Submit every chunk concurrently and wait until all of them have settled.
///
/// Chunks are submitted in ascending index order; each outcome is handed to
/// `on_settled` in completion order. A failed chunk never cancels its
/// siblings. Progress is the share of settled chunks.
pub async fn dispatch_parallel<S, F>(
    chunks: Vec<Chunk<S::Record>>,
    submitter: &S,
    reporter: &ProgressReporter,
    mut on_settled: F,
) where
    S: ChunkSubmitter,
    F: FnMut(ChunkOutcome),
{
    let total = chunks.len();
    info!(job = %reporter.job(), chunks = total, "Dispatching chunks in parallel");
    reporter.report(Phase::Dispatching, 0);

    let mut in_flight: FuturesUnordered<_> = chunks
        .into_iter()
        .map(|chunk| async move {
            let index = chunk.index;
            let record_count = chunk.len();
            debug!(chunk_index = index, records = record_count, "Submitting chunk");
            let result = submitter.submit(chunk, &NoProgress).await;
            ChunkOutcome::from_submission(index, record_count, result)
        })
        .collect();

    let mut settled = 0usize;
    while let Some(outcome) = in_flight.next().await {
        settled += 1;
        match outcome.failure() {
            Some(reason) => warn!(
                job = %reporter.job(),
                chunk_index = outcome.chunk_index,
                error = %reason,
                "Chunk failed"
            ),
            None => debug!(chunk_index = outcome.chunk_index, "Chunk settled"),
        }

        on_settled(outcome);
        reporter.report(
            Phase::Dispatching,
            rounded_percent(settled as u64, total as u64),
        );
    }
}
