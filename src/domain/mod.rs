pub mod chunk;
pub mod error;
pub mod payload;
pub mod progress;
pub mod record;

// Re-export commonly used types
pub use chunk::Chunk;
pub use error::DomainError;
pub use payload::{ChunkPayload, SkippedEntry};
pub use progress::{JobId, Phase, ProgressState, rounded_percent};
pub use record::{MediaRecord, Record, RecordKind, Role, UserRecord};
