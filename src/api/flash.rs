//! Flash Message Queue
//!
//! One-shot notifications queued by actions and shown on the next page
//! render. Draining empties the queue, so each message is displayed once.

use std::collections::VecDeque;
use tokio::sync::Mutex;

use crate::view::FlashMessage;

/// Pending flash messages shared by all handlers
#[derive(Debug, Default)]
pub struct FlashQueue {
    pending: Mutex<VecDeque<FlashMessage>>,
}

impl FlashQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push(&self, message: FlashMessage) {
        self.pending.lock().await.push_back(message);
    }

    /// Take every pending message, oldest first
    pub async fn drain(&self) -> Vec<FlashMessage> {
        self.pending.lock().await.drain(..).collect()
    }

    /// Put drained messages back at the front, keeping their order
    pub async fn requeue(&self, messages: Vec<FlashMessage>) {
        let mut pending = self.pending.lock().await;
        for message in messages.into_iter().rev() {
            pending.push_front(message);
        }
    }

    /// Hand the pending messages to `render`; they stay queued if it fails
    pub async fn consume_with<T, E>(
        &self,
        render: impl FnOnce(Vec<FlashMessage>) -> Result<T, E>,
    ) -> Result<T, E> {
        let pending = self.drain().await;
        match render(pending.clone()) {
            Ok(rendered) => Ok(rendered),
            Err(e) => {
                self.requeue(pending).await;
                Err(e)
            }
        }
    }

    pub async fn len(&self) -> usize {
        self.pending.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
