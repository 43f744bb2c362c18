//! # sink::kafka
//!
//! Kafka client built on rdkafka's `FutureProducer`.
//!
//! `publish` hands the record to librdkafka's internal queue and keeps the
//! returned `DeliveryFuture`; `flush` drains and awaits those futures, so it
//! only resolves once the broker has acknowledged every message of the batch.
//! There is no retry: the first failed delivery is returned.

use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::producer::{DeliveryFuture, FutureProducer, FutureRecord};
use tracing::{debug, info};

use super::{SinkError, TickSink};

pub struct KafkaSink {
    producer: FutureProducer,
    pending:  Vec<DeliveryFuture>,
}

impl KafkaSink {
    /// Create a producer for `brokers` (`host:port` each).
    ///
    /// `message_timeout_ms` bounds how long a queued message may wait for
    /// acknowledgement; `None` keeps librdkafka's default.
    pub fn connect(brokers: &[String], message_timeout_ms: Option<u64>) -> Result<Self, SinkError> {
        let mut client_config = ClientConfig::new();
        client_config.set("bootstrap.servers", brokers.join(","));
        if let Some(timeout) = message_timeout_ms {
            client_config.set("message.timeout.ms", timeout.to_string());
        }

        let producer: FutureProducer = client_config
            .create()
            .map_err(|e| SinkError::Connect(e.to_string()))?;

        info!(brokers = %brokers.join(","), "Kafka producer created");

        Ok(Self { producer, pending: Vec::new() })
    }
}

#[async_trait]
impl TickSink for KafkaSink {
    fn publish(&mut self, topic: &str, payload: Vec<u8>) -> Result<(), SinkError> {
        let record: FutureRecord<'_, (), Vec<u8>> = FutureRecord::to(topic).payload(&payload);

        let delivery = self
            .producer
            .send_result(record)
            .map_err(|(e, _record)| SinkError::Enqueue(e.to_string()))?;

        self.pending.push(delivery);
        Ok(())
    }

    async fn flush(&mut self) -> Result<(), SinkError> {
        let pending = std::mem::take(&mut self.pending);
        let count = pending.len();

        for delivery in pending {
            match delivery.await {
                Ok(Ok(_)) => {}
                Ok(Err((e, _message))) => return Err(SinkError::Delivery(e.to_string())),
                Err(_canceled) => {
                    return Err(SinkError::Delivery("delivery future canceled".to_string()))
                }
            }
        }

        debug!(messages = count, "Kafka batch acknowledged");
        Ok(())
    }
}
