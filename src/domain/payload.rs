/// A record the remote side declined without failing its chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub identifier: String,
    pub reason: String,
}

impl SkippedEntry {
    pub fn new(identifier: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            reason: reason.into(),
        }
    }
}

/// Validated result of a fulfilled chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkPayload {
    /// Media endpoints only acknowledge the chunk as a whole
    Acknowledged,

    /// Record endpoints report a per-record breakdown
    Records {
        accepted: u64,
        skipped: u64,
        skipped_entries: Vec<SkippedEntry>,
    },
}
