//! Bulk ingestion engine.
//!
//! Validates a batch of records, partitions it into chunks, dispatches the
//! chunks through a [`dispatch::ChunkSubmitter`] and folds every chunk
//! outcome into one [`aggregate::IngestionSummary`], reporting progress on
//! the way.

pub mod aggregate;
pub mod app;
pub mod dispatch;
pub mod domain;
pub mod engine;
pub mod io;
pub mod planner;
pub mod prelude;
pub mod progress;
pub mod validation;
