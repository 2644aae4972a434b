use std::sync::Arc;

use tracing::{info, warn};

use super::config::EngineConfig;
use crate::aggregate::{IngestionSummary, ResultAggregator};
use crate::dispatch::{ChunkSubmitter, DispatchMode, dispatch_parallel, dispatch_sequential};
use crate::domain::{JobId, Phase, ProgressState, Record};
use crate::planner::plan;
use crate::progress::{ProgressBoard, ProgressReporter, ProgressSink};
use crate::validation::BatchValidation;

/// Bulk ingestion engine: validate, plan, dispatch, aggregate.
///
/// Owns the progress of every job it has run. Chunk failures never escape
/// as errors; they are folded into the returned summary.
pub struct IngestionEngine {
    config: EngineConfig,
    board: ProgressBoard,
    sink: Option<Arc<dyn ProgressSink>>,
}

impl IngestionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            board: ProgressBoard::new(),
            sink: None,
        }
    }

    /// Also forward every progress event to `sink`
    pub fn with_sink(mut self, sink: Arc<dyn ProgressSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Latest progress of `job`, if it has been run and not forgotten
    pub fn progress(&self, job: &JobId) -> Option<ProgressState> {
        self.board.get(job)
    }

    pub fn progress_board(&self) -> &ProgressBoard {
        &self.board
    }

    /// Drop the progress entry of a finished job
    pub fn forget(&self, job: &JobId) -> Option<ProgressState> {
        self.board.forget(job)
    }

    /// Ingest `records` under `mode`, submitting chunks through `submitter`.
    ///
    /// A batch that fails validation is rejected as a whole before any
    /// chunk is dispatched.
    pub async fn ingest<S>(
        &self,
        job: &JobId,
        records: Vec<S::Record>,
        mode: &DispatchMode,
        submitter: &S,
    ) -> IngestionSummary
    where
        S: ChunkSubmitter,
        S::Record: BatchValidation,
    {
        let kind = <S::Record as Record>::KIND;
        let reporter = ProgressReporter::new(job.clone(), self.board.clone(), self.sink.clone());

        reporter.report(Phase::Validating, 0);
        let violations = S::Record::validate_batch(&records);
        if !violations.is_empty() {
            warn!(
                job = %job,
                records = records.len(),
                violations = violations.len(),
                "Batch rejected by validation"
            );
            reporter.report(Phase::Done, 0);
            return IngestionSummary::validation_rejected(kind, records.len(), violations);
        }

        let total_records = records.len();
        let chunks = plan(records, mode.policy());
        info!(
            job = %job,
            mode = mode.name(),
            records = total_records,
            chunks = chunks.len(),
            "Starting ingestion"
        );

        let mut aggregator = ResultAggregator::new(kind, chunks.len())
            .with_skip_display_limit(self.config.skip_display_limit);

        match mode {
            DispatchMode::ParallelAll(_) => {
                dispatch_parallel(chunks, submitter, &reporter, |outcome| {
                    aggregator.record(outcome);
                })
                .await
            }
            DispatchMode::SequentialProgressive(_) => {
                dispatch_sequential(
                    chunks,
                    submitter,
                    &reporter,
                    self.config.percent_scope,
                    |outcome| {
                        aggregator.record(outcome);
                    },
                )
                .await
            }
        }

        reporter.report(Phase::Aggregating, 100);
        let summary = aggregator.finish();
        info!(
            job = %job,
            status = %summary.status,
            accepted = summary.total_accepted,
            skipped = summary.total_skipped,
            failed_chunks = summary.failed_chunk_count,
            "Ingestion finished"
        );
        reporter.report(Phase::Done, 100);

        summary
    }
}

impl Default for IngestionEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{OverallStatus, SkippedReport};
    use crate::dispatch::FailureReason;
    use crate::dispatch::fake::{FakeMediaSubmitter, FakeUserSubmitter, Script, media, users};
    use crate::domain::{Role, UserRecord};
    use crate::planner::{ChunkPolicy, VolumeTiers};
    use crate::progress::{ChannelSink, PercentScope};
    use crate::validation::Violation;

    fn job(id: &str) -> JobId {
        JobId::new(id).unwrap()
    }

    #[tokio::test]
    async fn validation_failure_dispatches_nothing() {
        let engine = IngestionEngine::default();
        let mut batch = users(3);
        batch[1] = UserRecord::normalized("bobby", "bob@example.com", "555", "abcd", Role::User);
        let submitter = FakeUserSubmitter {
            script: Script::new(1, &[]),
        };

        let summary = engine
            .ingest(&job("import"), batch, &engine.config().user_import_mode(), &submitter)
            .await;

        assert_eq!(summary.status, OverallStatus::ValidationRejected);
        assert_eq!(summary.violations, vec![Violation::PasswordTooShort { row: 2 }]);
        assert_eq!(summary.total_chunks, 0);
        assert!(submitter.script.submitted().is_empty());
        assert_eq!(
            engine.progress(&job("import")),
            Some(ProgressState::new(Phase::Done, 0))
        );
    }

    #[tokio::test]
    async fn user_import_with_failed_chunks_is_partial() {
        let engine = IngestionEngine::default();
        let mut batch = users(250);
        batch[0].username = "dup-first".to_string();
        batch[120].username = "dup-middle".to_string();
        let mode = DispatchMode::ParallelAll(ChunkPolicy::Custom(Arc::new(|_| 50)));
        let submitter = FakeUserSubmitter {
            script: Script::new(5, &[1, 3]),
        };

        let summary = engine.ingest(&job("import"), batch, &mode, &submitter).await;

        assert_eq!(summary.status, OverallStatus::PartialFailure);
        assert_eq!(summary.failed_chunk_count, 2);
        assert_eq!(summary.total_chunks, 5);
        // chunks 0, 2 and 4 contribute; one skip in chunk 0 and one in chunk 2
        assert_eq!(summary.total_accepted, 148);
        assert_eq!(summary.total_skipped, 2);
        let skipped: Vec<_> = summary
            .skipped
            .entries()
            .iter()
            .map(|e| e.identifier.as_str())
            .collect();
        assert_eq!(skipped, vec!["dup-first", "dup-middle"]);
    }

    #[tokio::test]
    async fn folder_batch_total_failure() {
        let engine = IngestionEngine::default();
        let submitter = FakeMediaSubmitter {
            script: Script::new(2, &[0, 1]),
        };

        let summary = engine
            .ingest(&job("folder-1"), media(300), &engine.config().folder_batch_mode(), &submitter)
            .await;

        assert_eq!(summary.total_chunks, 3);
        assert_eq!(summary.status, OverallStatus::PartialFailure);

        let submitter = FakeMediaSubmitter {
            script: Script::new(3, &[0, 1, 2]),
        };
        let summary = engine
            .ingest(&job("folder-2"), media(300), &engine.config().folder_batch_mode(), &submitter)
            .await;

        assert_eq!(summary.status, OverallStatus::TotalFailure);
        assert_eq!(summary.total_accepted, 0);
        assert_eq!(summary.failed_chunk_count, summary.total_chunks);
    }

    #[tokio::test]
    async fn selected_files_abort_after_first_failure() {
        let engine = IngestionEngine::default();
        let submitter = FakeMediaSubmitter {
            script: Script::new(3, &[0]),
        };

        let summary = engine
            .ingest(&job("picked"), media(10), &engine.config().selected_files_mode(), &submitter)
            .await;

        assert_eq!(submitter.script.submitted(), vec![0]);
        assert_eq!(summary.status, OverallStatus::TotalFailure);
        assert_eq!(
            summary.failures[2].reason,
            FailureReason::NotAttempted { failed_chunk: 0 }
        );
    }

    #[tokio::test]
    async fn progress_ends_done_and_sink_sees_every_phase() {
        let (sink, mut rx) = ChannelSink::channel();
        let engine = IngestionEngine::new(
            EngineConfig::default().with_percent_scope(PercentScope::PerChunk),
        )
        .with_sink(Arc::new(sink));
        let submitter = FakeMediaSubmitter {
            script: Script::new(3, &[]),
        };

        let summary = engine
            .ingest(&job("picked"), media(3), &engine.config().selected_files_mode(), &submitter)
            .await;
        assert!(summary.is_success());

        let mut phases = Vec::new();
        while let Ok(event) = rx.try_recv() {
            if phases.last() != Some(&event.state.phase) {
                phases.push(event.state.phase);
            }
        }
        assert_eq!(
            phases,
            vec![Phase::Validating, Phase::Dispatching, Phase::Aggregating, Phase::Done]
        );
        assert_eq!(
            engine.progress(&job("picked")),
            Some(ProgressState::new(Phase::Done, 100))
        );
        assert!(engine.forget(&job("picked")).is_some());
        assert!(engine.progress(&job("picked")).is_none());
    }

    #[tokio::test]
    async fn many_skips_collapse_in_summary() {
        let engine = IngestionEngine::default();
        let mut batch = users(120);
        for user in batch.iter_mut().take(60) {
            user.username = format!("dup-{}", user.username);
        }
        let submitter = FakeUserSubmitter {
            script: Script::new(3, &[]),
        };

        let summary = engine
            .ingest(&job("import"), batch, &engine.config().user_import_mode(), &submitter)
            .await;

        assert_eq!(summary.total_skipped, 60);
        assert_eq!(summary.total_accepted, 60);
        assert_eq!(summary.skipped, SkippedReport::Truncated { count: 60 });
    }

    #[tokio::test]
    async fn empty_batch_succeeds_without_dispatch() {
        let engine = IngestionEngine::default();
        let submitter = FakeMediaSubmitter {
            script: Script::new(0, &[]),
        };

        let summary = engine
            .ingest(&job("empty"), Vec::new(), &engine.config().selected_files_mode(), &submitter)
            .await;

        assert_eq!(summary.status, OverallStatus::Success);
        assert_eq!(summary.total_chunks, 0);
        assert!(submitter.script.submitted().is_empty());
    }

    #[tokio::test]
    async fn configured_tiers_drive_chunk_count() {
        let engine = IngestionEngine::new(
            EngineConfig::default().with_tiers(VolumeTiers::new(vec![(500, 25)], 250)),
        );
        let submitter = FakeMediaSubmitter {
            script: Script::new(12, &[]),
        };

        let summary = engine
            .ingest(&job("folder"), media(300), &engine.config().folder_batch_mode(), &submitter)
            .await;

        // default tiers would give 3 chunks of 100
        assert_eq!(summary.total_chunks, 12);
        assert_eq!(summary.total_accepted, 300);
        assert_eq!(submitter.script.submitted().len(), 12);
    }
}
