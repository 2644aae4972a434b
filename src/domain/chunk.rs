use super::record::Record;

/// Contiguous slice of the original record sequence, submitted as one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<R> {
    pub index: usize,
    pub records: Vec<R>,
}

impl<R> Chunk<R> {
    pub fn new(index: usize, records: Vec<R>) -> Self {
        Self { index, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Record> Chunk<R> {
    /// Total payload size of the records in this chunk
    pub fn byte_len(&self) -> u64 {
        self.records.iter().map(Record::byte_len).sum()
    }
}
