use std::sync::Mutex;

use async_trait::async_trait;

use crate::config::Messages;
use crate::error::{Result, ServiceError};
use crate::forward::FormForwarder;
use crate::models::MappedSubmission;

/// Mock implementation of FormForwarder for testing
pub struct MockFormForwarder {
    dispatched: Mutex<Vec<MappedSubmission>>,
    error_mode: Mutex<bool>,
}

impl MockFormForwarder {
    /// Create a new MockFormForwarder that accepts every dispatch
    pub fn new() -> Self {
        Self {
            dispatched: Mutex::new(Vec::new()),
            error_mode: Mutex::new(false),
        }
    }

    /// Create a new MockFormForwarder in error mode where every dispatch fails in transport
    pub fn new_error() -> Self {
        let forwarder = Self::new();
        forwarder.set_error_mode(true);
        forwarder
    }

    pub fn set_error_mode(&self, enabled: bool) {
        *self.error_mode.lock().unwrap() = enabled;
    }

    /// Number of dispatch attempts that reached the network layer
    pub fn dispatch_count(&self) -> usize {
        self.dispatched.lock().unwrap().len()
    }

    pub fn dispatched(&self) -> Vec<MappedSubmission> {
        self.dispatched.lock().unwrap().clone()
    }
}

impl Default for MockFormForwarder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FormForwarder for MockFormForwarder {
    async fn dispatch(&self, submission: &MappedSubmission) -> Result<()> {
        self.dispatched.lock().unwrap().push(submission.clone());

        if *self.error_mode.lock().unwrap() {
            return Err(ServiceError::Transport {
                message: Messages::default().transport_failure,
                cause: "Mock network unreachable".into(),
            });
        }
        Ok(())
    }
}
