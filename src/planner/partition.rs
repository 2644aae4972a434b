use std::ops::Range;

use super::policy::ChunkPolicy;
use crate::domain::Chunk;

/// Chunk boundaries for a batch of `total` records.
///
/// Ranges are contiguous, non-overlapping and cover `0..total`; only an
/// empty batch yields no ranges.
pub fn plan_ranges(total: usize, policy: &ChunkPolicy) -> Vec<Range<usize>> {
    let size = policy.chunk_size(total);
    if size == 0 {
        return Vec::new();
    }

    (0..total)
        .step_by(size)
        .map(|start| start..(start + size).min(total))
        .collect()
}

/// Move `records` into chunks indexed `0..n` in formation order
pub fn plan<R>(records: Vec<R>, policy: &ChunkPolicy) -> Vec<Chunk<R>> {
    let ranges = plan_ranges(records.len(), policy);
    let mut chunks = Vec::with_capacity(ranges.len());
    let mut remaining = records.into_iter();

    for (index, range) in ranges.into_iter().enumerate() {
        let batch: Vec<R> = remaining.by_ref().take(range.len()).collect();
        chunks.push(Chunk::new(index, batch));
    }

    chunks
}
