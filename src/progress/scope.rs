use crate::domain::rounded_percent;

/// What a sequential run's percentage is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PercentScope {
    /// Bytes of the chunk in flight only; restarts at each chunk boundary
    PerChunk,

    /// Whole job: finished chunks plus the fraction of the current one
    #[default]
    Cumulative,
}

impl PercentScope {
    /// Percentage while chunk number `completed` (0-based) of `chunk_count`
    /// has sent `bytes_sent` of `bytes_total`
    pub fn percent(
        &self,
        completed: usize,
        chunk_count: usize,
        bytes_sent: u64,
        bytes_total: u64,
    ) -> u8 {
        match self {
            Self::PerChunk => rounded_percent(bytes_sent, bytes_total),
            Self::Cumulative => {
                if chunk_count == 0 {
                    return 100;
                }
                if bytes_total == 0 {
                    return rounded_percent(completed as u64 + 1, chunk_count as u64);
                }
                let done = (completed as u64)
                    .saturating_mul(bytes_total)
                    .saturating_add(bytes_sent.min(bytes_total));
                rounded_percent(done, (chunk_count as u64).saturating_mul(bytes_total))
            }
        }
    }
}
