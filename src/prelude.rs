//! Prelude module for convenient imports
//!
//! Import everything you need with: `use ingest::prelude::*;`

// Domain types
pub use crate::domain::{
    Chunk, ChunkPayload, DomainError, JobId, MediaRecord, Phase, ProgressState, Record,
    RecordKind, Role, SkippedEntry, UserRecord,
};

// Validation and planning
pub use crate::planner::{ChunkPolicy, VolumeTiers, plan, plan_ranges};
pub use crate::validation::{BatchValidation, Violation, validate_users};

// Dispatch types
pub use crate::dispatch::{
    ChunkOutcome, ChunkSubmitter, DispatchMode, FailureReason, MediaAck, Receipt, Settled,
    TransferObserver, TransportError, UserBatchReceipt,
};

// Aggregation types
pub use crate::aggregate::{IngestionSummary, OverallStatus, ResultAggregator, SkippedReport};

// Progress types
pub use crate::progress::{ChannelSink, PercentScope, ProgressBoard, ProgressSink};

// Engine types
pub use crate::engine::{EngineConfig, IngestionEngine};

// IO types
pub use crate::io::{
    CsvUserStream, IoError, list_media_dir, load_media_dir, write_plan, write_summary,
};

// App types
pub use crate::app::{AppError, CliApp, CliArgs, Command, init_tracing, plan_job};
