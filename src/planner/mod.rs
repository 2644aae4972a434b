pub mod partition;
pub mod policy;

// Re-export commonly used types
pub use partition::{plan, plan_ranges};
pub use policy::{ChunkPolicy, VolumeTiers};
