//! In-memory notifier for tests.
//!
//! Lets tests script delivery outcomes (a simulated 204 or a failure) and
//! inspect exactly what the session actor tried to send, without any
//! network.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{Notifier, NotifyError};

/// Scripted notifier: queue outcomes with `enqueue_ok`/`enqueue_err`,
/// inspect deliveries with `sent`. With nothing queued it accepts every
/// message.
#[derive(Default)]
pub struct MockNotifier {
    results: Mutex<VecDeque<Result<(), NotifyError>>>,
    sent: Mutex<Vec<String>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a simulated accepted delivery (the endpoint's 204).
    pub fn enqueue_ok(&self) {
        self.results.lock().unwrap().push_back(Ok(()));
    }

    /// Queues a simulated failure for the next send.
    pub fn enqueue_err(&self, error: NotifyError) {
        self.results.lock().unwrap().push_back(Err(error));
    }

    /// Messages passed to `send`, in order.
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push(message.to_string());
        self.results.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}
