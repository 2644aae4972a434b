use crate::aggregate::DEFAULT_SKIP_DISPLAY_LIMIT;
use crate::dispatch::DispatchMode;
use crate::planner::{ChunkPolicy, VolumeTiers};
use crate::progress::PercentScope;

/// Tunables of an ingestion engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Itemized skip lists longer than this collapse into a count
    pub skip_display_limit: usize,
    /// Percentage semantics of sequential runs
    pub percent_scope: PercentScope,
    /// Chunk sizes for folder-wide and import batches
    pub tiers: VolumeTiers,
    /// Number of batches for hand-picked media
    pub fixed_batches: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            skip_display_limit: DEFAULT_SKIP_DISPLAY_LIMIT,
            percent_scope: PercentScope::default(),
            tiers: VolumeTiers::default(),
            fixed_batches: 3,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skip_display_limit(mut self, limit: usize) -> Self {
        self.skip_display_limit = limit;
        self
    }

    pub fn with_percent_scope(mut self, scope: PercentScope) -> Self {
        self.percent_scope = scope;
        self
    }

    pub fn with_tiers(mut self, tiers: VolumeTiers) -> Self {
        self.tiers = tiers;
        self
    }

    /// Set the batch count for selected media (at least 1)
    pub fn with_fixed_batches(mut self, batches: usize) -> Self {
        self.fixed_batches = batches.max(1);
        self
    }

    /// Folder-wide media batch: tiered chunks, all in parallel
    pub fn folder_batch_mode(&self) -> DispatchMode {
        DispatchMode::ParallelAll(ChunkPolicy::TieredByVolume(self.tiers.clone()))
    }

    /// Spreadsheet user import: tiered chunks, all in parallel
    pub fn user_import_mode(&self) -> DispatchMode {
        DispatchMode::ParallelAll(ChunkPolicy::TieredByVolume(self.tiers.clone()))
    }

    /// Hand-picked media files: fixed batch count, one after another
    pub fn selected_files_mode(&self) -> DispatchMode {
        DispatchMode::SequentialProgressive(ChunkPolicy::FixedCount(self.fixed_batches))
    }
}
