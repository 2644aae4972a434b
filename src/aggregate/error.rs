use thiserror::Error;

/// A fulfilled chunk whose receipt cannot be trusted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregationError {
    #[error("Receipt is missing field: {field}")]
    MissingField { field: &'static str },

    #[error("Receipt accounts for {reported} records but the chunk held {records}")]
    CountOverflow { reported: u64, records: usize },

    #[error("Receipt reports {count} skipped records but lists {entries}")]
    SkippedMismatch { count: u64, entries: usize },
}
