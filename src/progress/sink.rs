use tokio::sync::mpsc;

use crate::domain::{JobId, ProgressState};

/// Receiver of progress events; implementations must not block
pub trait ProgressSink: Send + Sync {
    fn on_progress(&self, job: &JobId, state: ProgressState);
}

/// Progress event forwarded over a channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEvent {
    pub job: JobId,
    pub state: ProgressState,
}

/// Forwards events to an unbounded channel, e.g. a UI task.
///
/// A dropped receiver is ignored: the consumer is free to stop listening.
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<ProgressEvent>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::UnboundedSender<ProgressEvent>) -> Self {
        Self { tx }
    }

    /// Create a sink together with the receiving end
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ProgressEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl ProgressSink for ChannelSink {
    fn on_progress(&self, job: &JobId, state: ProgressState) {
        let _ = self.tx.send(ProgressEvent {
            job: job.clone(),
            state,
        });
    }
}
