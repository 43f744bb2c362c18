//! # sink
//!
//! The broker-client seam. The producer loop only ever talks to a
//! [`TickSink`]: enqueue a payload with [`TickSink::publish`], then wait for
//! the whole batch with [`TickSink::flush`].
//!
//! | Sink          | Selected by          | Behaviour                              |
//! |---------------|----------------------|----------------------------------------|
//! | [`KafkaSink`] | `TICK_SINK=kafka`    | rdkafka `FutureProducer` (feature `kafka`) |
//! | [`LogSink`]   | `TICK_SINK=log`      | dry run, payloads go to `tracing`      |

use async_trait::async_trait;
use thiserror::Error;

#[cfg(feature = "kafka")]
pub mod kafka;
pub mod log;
#[cfg(test)]
pub mod memory;

#[cfg(feature = "kafka")]
pub use kafka::KafkaSink;
pub use log::LogSink;

#[derive(Debug, Error)]
pub enum SinkError {
    /// The client could not be created / configured.
    #[cfg_attr(not(feature = "kafka"), allow(dead_code))]
    #[error("Broker connect failed: {0}")]
    Connect(String),

    /// The client refused to queue the message (e.g. local queue full).
    #[error("Broker enqueue failed: {0}")]
    Enqueue(String),

    /// The broker did not acknowledge a queued message.
    #[error("Broker delivery failed: {0}")]
    Delivery(String),
}

/// Publish / flush contract of a message-broker client.
#[async_trait]
pub trait TickSink: Send {
    /// Queue `payload` for `topic` and return without waiting for the broker.
    fn publish(&mut self, topic: &str, payload: Vec<u8>) -> Result<(), SinkError>;

    /// Resolve once every message queued since the last flush is acknowledged.
    async fn flush(&mut self) -> Result<(), SinkError>;
}

#[async_trait]
impl<S: TickSink + ?Sized> TickSink for Box<S> {
    fn publish(&mut self, topic: &str, payload: Vec<u8>) -> Result<(), SinkError> {
        (**self).publish(topic, payload)
    }

    async fn flush(&mut self) -> Result<(), SinkError> {
        (**self).flush().await
    }
}
