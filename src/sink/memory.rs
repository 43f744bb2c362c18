//! # sink::memory
//!
//! Test-only sink that records every publish and flush, and can be told to
//! fail at a given publish index or on flush.

use async_trait::async_trait;

use super::{SinkError, TickSink};

#[derive(Debug, Default)]
pub struct MemorySink {
    /// Every accepted `(topic, payload)`, in submission order.
    pub published:    Vec<(String, Vec<u8>)>,
    /// Size of each flushed batch, one entry per successful flush.
    pub flushed:      Vec<usize>,
    /// Reject the publish with this zero-based index (counted across batches).
    pub fail_publish: Option<usize>,
    /// Reject every flush.
    pub fail_flush:   bool,
    pending:          usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_publish_at(index: usize) -> Self {
        Self { fail_publish: Some(index), ..Self::default() }
    }

    pub fn failing_flush() -> Self {
        Self { fail_flush: true, ..Self::default() }
    }
}

#[async_trait]
impl TickSink for MemorySink {
    fn publish(&mut self, topic: &str, payload: Vec<u8>) -> Result<(), SinkError> {
        if self.fail_publish == Some(self.published.len()) {
            return Err(SinkError::Enqueue("queue full".to_string()));
        }
        self.published.push((topic.to_string(), payload));
        self.pending += 1;
        Ok(())
    }

    async fn flush(&mut self) -> Result<(), SinkError> {
        if self.fail_flush {
            return Err(SinkError::Delivery("broker unreachable".to_string()));
        }
        self.flushed.push(self.pending);
        self.pending = 0;
        Ok(())
    }
}
