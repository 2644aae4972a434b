use std::ops::Range;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::error::IoError;
use crate::aggregate::IngestionSummary;
use crate::validation::Violation;

fn buffered() -> csv::Writer<Vec<u8>> {
    csv::Writer::from_writer(Vec::new())
}

async fn flush_to<W>(buffer: csv::Writer<Vec<u8>>, mut writer: W) -> Result<(), IoError>
where
    W: AsyncWrite + Unpin + Send,
{
    let bytes = buffer
        .into_inner()
        .map_err(|err| IoError::from(err.into_error()))?;
    writer.write_all(&bytes).await?;
    writer.flush().await?;
    Ok(())
}

/// Write a chunk plan, one line per chunk with 1-based row bounds
pub async fn write_plan<W>(ranges: &[Range<usize>], writer: W) -> Result<(), IoError>
where
    W: AsyncWrite + Unpin + Send,
{
    let mut csv = buffered();
    csv.write_record(["chunk", "first_row", "last_row", "records"])?;
    for (index, range) in ranges.iter().enumerate() {
        csv.write_record([
            index.to_string(),
            (range.start + 1).to_string(),
            range.end.to_string(),
            range.len().to_string(),
        ])?;
    }
    flush_to(csv, writer).await
}

/// Write validation violations in row order
pub async fn write_violations<W>(violations: &[Violation], writer: W) -> Result<(), IoError>
where
    W: AsyncWrite + Unpin + Send,
{
    let mut csv = buffered();
    csv.write_record(["row", "message"])?;
    for violation in violations {
        csv.write_record([violation.row().to_string(), violation.to_string()])?;
    }
    flush_to(csv, writer).await
}

/// Write the headline counts of a finished job
pub async fn write_summary<W>(summary: &IngestionSummary, writer: W) -> Result<(), IoError>
where
    W: AsyncWrite + Unpin + Send,
{
    let mut csv = buffered();
    csv.write_record([
        "status",
        "records",
        "chunks",
        "chunks_succeeded",
        "chunks_failed",
        "accepted",
        "skipped",
    ])?;
    csv.write_record([
        summary.status.as_str().to_string(),
        summary.total_records.to_string(),
        summary.total_chunks.to_string(),
        summary.chunks_succeeded.to_string(),
        summary.failed_chunk_count.to_string(),
        summary.total_accepted.to_string(),
        summary.total_skipped.to_string(),
    ])?;
    flush_to(csv, writer).await
}
