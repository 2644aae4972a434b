pub mod aggregator;
pub mod error;
pub mod summary;

// Re-export commonly used types
pub use aggregator::{DEFAULT_SKIP_DISPLAY_LIMIT, ResultAggregator, aggregate};
pub use error::AggregationError;
pub use summary::{ChunkFailure, IngestionSummary, OverallStatus, SkippedReport};
