use std::fmt;
use std::sync::Arc;

/// Volume thresholds for the tiered sizing policy
///
/// Each tier is `(max_total, chunk_size)`: the first tier whose `max_total`
/// is at least the batch size wins; larger batches use `overflow_size`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeTiers {
    tiers: Vec<(usize, usize)>,
    overflow_size: usize,
}

impl VolumeTiers {
    /// Build a tier table. Tiers are sorted by threshold; zero sizes are raised to 1.
    pub fn new(mut tiers: Vec<(usize, usize)>, overflow_size: usize) -> Self {
        tiers.sort_by_key(|(max_total, _)| *max_total);
        for (_, size) in tiers.iter_mut() {
            *size = (*size).max(1);
        }
        Self {
            tiers,
            overflow_size: overflow_size.max(1),
        }
    }

    pub fn chunk_size(&self, total: usize) -> usize {
        self.tiers
            .iter()
            .find(|(max_total, _)| total <= *max_total)
            .map(|(_, size)| *size)
            .unwrap_or(self.overflow_size)
    }
}

impl Default for VolumeTiers {
    fn default() -> Self {
        Self::new(vec![(200, 50), (500, 100), (1000, 150)], 200)
    }
}

/// How to size chunks for a batch of `total` records
#[derive(Clone)]
pub enum ChunkPolicy {
    /// Chunk size grows with the batch volume
    TieredByVolume(VolumeTiers),

    /// Split into this many equal batches of `ceil(total / batches)`
    FixedCount(usize),

    /// Custom sizing function: total -> chunk size (0 is treated as 1)
    Custom(Arc<dyn Fn(usize) -> usize + Send + Sync>),
}

impl ChunkPolicy {
    pub fn tiered() -> Self {
        Self::TieredByVolume(VolumeTiers::default())
    }

    pub fn fixed_count(batches: usize) -> Self {
        Self::FixedCount(batches)
    }

    /// Chunk size for a batch of `total` records; 0 only for empty input
    pub fn chunk_size(&self, total: usize) -> usize {
        if total == 0 {
            return 0;
        }
        match self {
            Self::TieredByVolume(tiers) => tiers.chunk_size(total),
            Self::FixedCount(batches) => total.div_ceil((*batches).max(1)),
            Self::Custom(f) => f(total).max(1),
        }
    }
}

impl fmt::Debug for ChunkPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TieredByVolume(tiers) => f.debug_tuple("TieredByVolume").field(tiers).finish(),
            Self::FixedCount(batches) => f.debug_tuple("FixedCount").field(batches).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
