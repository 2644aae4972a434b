//! In-memory submitters for exercising the dispatcher and engine

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use super::error::TransportError;
use super::submit::{ChunkSubmitter, MediaAck, TransferObserver, UserBatchReceipt};
use crate::domain::{Chunk, MediaRecord, Record, SkippedEntry, UserRecord};

/// Shared bookkeeping: which chunks fail, and the order of calls
#[derive(Default)]
pub struct Script {
    pub failing: HashSet<usize>,
    pub chunk_count: usize,
    pub submitted: Mutex<Vec<usize>>,
    pub completed: Mutex<Vec<usize>>,
}

impl Script {
    pub fn new(chunk_count: usize, failing: &[usize]) -> Self {
        Self {
            failing: failing.iter().copied().collect(),
            chunk_count,
            ..Self::default()
        }
    }

    pub fn submitted(&self) -> Vec<usize> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn completed(&self) -> Vec<usize> {
        self.completed.lock().unwrap().clone()
    }

    /// Later chunks yield fewer times, so they finish first
    async fn run<R: Record>(
        &self,
        chunk: &Chunk<R>,
        progress: &dyn TransferObserver,
    ) -> Result<(), TransportError> {
        self.submitted.lock().unwrap().push(chunk.index);

        let total = chunk.byte_len();
        progress.on_transfer(total / 2, total);

        let yields = self.chunk_count.saturating_sub(chunk.index) * 4;
        for _ in 0..yields {
            tokio::task::yield_now().await;
        }

        progress.on_transfer(total, total);
        self.completed.lock().unwrap().push(chunk.index);

        if self.failing.contains(&chunk.index) {
            return Err(TransportError::Rejected {
                status: 500,
                message: format!("chunk {} refused", chunk.index),
            });
        }
        Ok(())
    }
}

pub struct FakeMediaSubmitter {
    pub script: Script,
}

#[async_trait]
impl ChunkSubmitter for FakeMediaSubmitter {
    type Record = MediaRecord;
    type Receipt = MediaAck;

    async fn submit(
        &self,
        chunk: Chunk<MediaRecord>,
        progress: &dyn TransferObserver,
    ) -> Result<MediaAck, TransportError> {
        self.script.run(&chunk, progress).await?;
        Ok(MediaAck)
    }
}

/// Accepts every user except those whose name starts with `dup`
pub struct FakeUserSubmitter {
    pub script: Script,
}

#[async_trait]
impl ChunkSubmitter for FakeUserSubmitter {
    type Record = UserRecord;
    type Receipt = UserBatchReceipt;

    async fn submit(
        &self,
        chunk: Chunk<UserRecord>,
        progress: &dyn TransferObserver,
    ) -> Result<UserBatchReceipt, TransportError> {
        self.script.run(&chunk, progress).await?;

        let skipped: Vec<SkippedEntry> = chunk
            .records
            .iter()
            .filter(|user| user.username.starts_with("dup"))
            .map(|user| SkippedEntry::new(user.username.clone(), "User already exists"))
            .collect();
        let accepted = (chunk.len() - skipped.len()) as u64;

        Ok(UserBatchReceipt::new(accepted, skipped))
    }
}

pub fn media(count: usize) -> Vec<MediaRecord> {
    (0..count)
        .map(|i| MediaRecord::new(format!("img-{i:04}.png"), vec![0u8; 100]))
        .collect()
}

pub fn users(count: usize) -> Vec<UserRecord> {
    (0..count)
        .map(|i| {
            UserRecord::normalized(
                &format!("user{i:04}"),
                &format!("user{i}@example.com"),
                "5550100",
                "password123",
                crate::domain::Role::User,
            )
        })
        .collect()
}
