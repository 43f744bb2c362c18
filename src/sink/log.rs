//! # sink::log
//!
//! Dry-run sink: nothing leaves the process, every payload is written to the
//! log at `debug` instead. Useful for development without a broker.

use async_trait::async_trait;
use tracing::debug;

use super::{SinkError, TickSink};

#[derive(Debug, Default)]
pub struct LogSink {
    pending: usize,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TickSink for LogSink {
    fn publish(&mut self, topic: &str, payload: Vec<u8>) -> Result<(), SinkError> {
        debug!(topic = %topic, payload = %String::from_utf8_lossy(&payload), "dry-run publish");
        self.pending += 1;
        Ok(())
    }

    async fn flush(&mut self) -> Result<(), SinkError> {
        debug!(messages = self.pending, "dry-run flush");
        self.pending = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_sink_accepts_and_flushes() {
        let mut sink = LogSink::new();
        sink.publish("stock-data-stream", br#"{"symbol":"SYM001"}"#.to_vec()).unwrap();
        sink.publish("stock-data-stream", br#"{"symbol":"SYM002"}"#.to_vec()).unwrap();
        assert_eq!(sink.pending, 2);

        sink.flush().await.unwrap();
        assert_eq!(sink.pending, 0);
    }
}
