use crate::planner::ChunkPolicy;

/// Concurrency discipline plus chunk-sizing policy for one run
#[derive(Debug, Clone)]
pub enum DispatchMode {
    /// Submit every chunk at once and wait for all of them to settle.
    /// Failed chunks do not stop their siblings.
    ParallelAll(ChunkPolicy),

    /// Submit one chunk at a time with byte-level progress.
    /// The first failure abandons the remaining chunks.
    SequentialProgressive(ChunkPolicy),
}

impl DispatchMode {
    pub fn policy(&self) -> &ChunkPolicy {
        match self {
            Self::ParallelAll(policy) | Self::SequentialProgressive(policy) => policy,
        }
    }

    pub fn is_sequential(&self) -> bool {
        matches!(self, Self::SequentialProgressive(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ParallelAll(_) => "parallel-all",
            Self::SequentialProgressive(_) => "sequential-progressive",
        }
    }
}
