use std::collections::VecDeque;
use std::sync::Mutex;

use publish_core::{ContentStore, StoreError};

/// [`ContentStore`] returning scripted responses and recording payloads.
///
/// Once the script runs out, addresses are generated as `ref-<n>`.
#[derive(Debug, Default)]
pub struct RecordingStore {
    responses: Mutex<VecDeque<Result<String, String>>>,
    payloads: Mutex<Vec<String>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an address for the next publish.
    pub fn then_return(self, address: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(address.into()));
        self
    }

    /// Queue a failure with `message`.
    pub fn then_fail(self, message: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(Err(message.into()));
        self
    }

    /// Payloads of every publish call, in call order, failures included.
    pub fn payloads(&self) -> Vec<String> {
        self.payloads.lock().unwrap().clone()
    }
}

impl ContentStore for RecordingStore {
    fn publish(&self, content: &str) -> Result<String, StoreError> {
        let mut payloads = self.payloads.lock().unwrap();
        payloads.push(content.to_string());
        let call = payloads.len();
        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(address)) => Ok(address),
            Some(Err(message)) => Err(StoreError::new(message)),
            None => Ok(format!("ref-{call}")),
        }
    }
}
