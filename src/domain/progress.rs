use std::fmt;

use super::error::DomainError;

/// Stage of an ingestion run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    Validating,
    Dispatching,
    Aggregating,
    Done,
}

/// Snapshot of how far an ingestion run has progressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressState {
    pub percent: u8,
    pub phase: Phase,
}

impl ProgressState {
    /// Create a state, clamping the percentage to 100
    pub fn new(phase: Phase, percent: u8) -> Self {
        Self {
            percent: percent.min(100),
            phase,
        }
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }
}

/// Identifier of one ingestion run (a folder id, an import session, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::EmptyJobId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Round `numerator * 100 / denominator` half-up, clamped to 100.
/// A zero denominator counts as complete.
pub fn rounded_percent(numerator: u64, denominator: u64) -> u8 {
    if denominator == 0 {
        return 100;
    }
    let scaled = (numerator as u128 * 100 * 2 + denominator as u128) / (denominator as u128 * 2);
    scaled.min(100) as u8
}
