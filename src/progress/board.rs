use std::sync::Arc;

use dashmap::DashMap;
use tracing::trace;

use super::sink::ProgressSink;
use crate::domain::{JobId, Phase, ProgressState};

/// Latest progress of every job an engine has run, keyed by job id
#[derive(Clone, Default)]
pub struct ProgressBoard {
    states: Arc<DashMap<JobId, ProgressState>>,
}

impl ProgressBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, job: &JobId) -> Option<ProgressState> {
        self.states.get(job).map(|entry| *entry.value())
    }

    pub fn set(&self, job: &JobId, state: ProgressState) {
        self.states.insert(job.clone(), state);
    }

    /// Drop a job's entry, returning its last state
    pub fn forget(&self, job: &JobId) -> Option<ProgressState> {
        self.states.remove(job).map(|(_, state)| state)
    }

    /// Jobs that have started and not yet finished
    pub fn active_jobs(&self) -> Vec<JobId> {
        let mut jobs: Vec<JobId> = self
            .states
            .iter()
            .filter(|entry| !entry.value().is_done())
            .map(|entry| entry.key().clone())
            .collect();
        jobs.sort();
        jobs
    }

    pub fn is_active(&self, job: &JobId) -> bool {
        self.get(job).is_some_and(|state| !state.is_done())
    }
}

/// Publishes one job's progress to the board and an optional sink
#[derive(Clone)]
pub struct ProgressReporter {
    job: JobId,
    board: ProgressBoard,
    sink: Option<Arc<dyn ProgressSink>>,
}

impl ProgressReporter {
    pub fn new(job: JobId, board: ProgressBoard, sink: Option<Arc<dyn ProgressSink>>) -> Self {
        Self { job, board, sink }
    }

    pub fn job(&self) -> &JobId {
        &self.job
    }

    pub fn report(&self, phase: Phase, percent: u8) {
        let state = ProgressState::new(phase, percent);
        self.board.set(&self.job, state);
        trace!(job = %self.job, phase = ?phase, percent = state.percent, "Progress");
        if let Some(sink) = &self.sink {
            sink.on_progress(&self.job, state);
        }
    }
}
