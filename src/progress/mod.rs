pub mod board;
pub mod scope;
pub mod sink;

// Re-export commonly used types
pub use board::{ProgressBoard, ProgressReporter};
pub use scope::PercentScope;
pub use sink::{ChannelSink, ProgressEvent, ProgressSink};
