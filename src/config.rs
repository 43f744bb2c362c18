//! # config — read the producer's configuration from environment variables
//!
//! | Variable                   | Default             | Description                            |
//! |----------------------------|---------------------|----------------------------------------|
//! | `TICK_SINK`                | see below           | `kafka` or `log` (dry run)             |
//! | `KAFKA_BROKERS`            | —  (required)       | comma-separated `host:port` list       |
//! | `KAFKA_TOPIC`              | `stock-data-stream` | destination topic                      |
//! | `BATCH_INTERVAL_SECS`      | `30`                | sleep between batches                  |
//! | `KAFKA_MESSAGE_TIMEOUT_MS` | librdkafka default  | delivery timeout per message           |
//!
//! `TICK_SINK` defaults to `kafka` in a `--features kafka` build and to `log`
//! otherwise, since a build without the feature has no Kafka client.

use std::time::Duration;
use anyhow::{bail, Context};

pub const DEFAULT_TOPIC: &str = "stock-data-stream";
pub const DEFAULT_INTERVAL_SECS: u64 = 30;

/// `TICK_SINK` when unset.
pub const DEFAULT_SINK: &str = if cfg!(feature = "kafka") { "kafka" } else { "log" };

/// Where the ticks go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkKind {
    /// A real Kafka cluster.
    Kafka {
        brokers:            Vec<String>,
        message_timeout_ms: Option<u64>,
    },
    /// Dry run: payloads are only logged.
    Log,
}

impl std::fmt::Display for SinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SinkKind::Kafka { .. } => write!(f, "kafka"),
            SinkKind::Log => write!(f, "log (dry run)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub sink:     SinkKind,
    pub topic:    String,
    pub interval: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let sink_str = lookup("TICK_SINK")
            .unwrap_or_else(|| DEFAULT_SINK.to_string())
            .to_lowercase();

        let sink = match sink_str.as_str() {
            "kafka" => SinkKind::Kafka {
                brokers:            parse_brokers(lookup("KAFKA_BROKERS"))?,
                message_timeout_ms: lookup("KAFKA_MESSAGE_TIMEOUT_MS")
                    .map(|v| v.parse())
                    .transpose()
                    .context("KAFKA_MESSAGE_TIMEOUT_MS must be a number of milliseconds")?,
            },
            "log" => SinkKind::Log,
            other => bail!("Unknown TICK_SINK: '{other}'. Use 'kafka' or 'log'"),
        };

        let interval_secs: u64 = lookup("BATCH_INTERVAL_SECS")
            .unwrap_or_else(|| DEFAULT_INTERVAL_SECS.to_string())
            .parse()
            .context("BATCH_INTERVAL_SECS must be a number")?;

        let topic = lookup("KAFKA_TOPIC").unwrap_or_else(|| DEFAULT_TOPIC.to_string());
        if topic.trim().is_empty() {
            bail!("KAFKA_TOPIC must not be empty");
        }

        Ok(Self {
            sink,
            topic,
            interval: Duration::from_secs(interval_secs),
        })
    }
}

/// No default on purpose: there is no sensible broker to guess.
fn parse_brokers(raw: Option<String>) -> anyhow::Result<Vec<String>> {
    let raw = raw.context("KAFKA_BROKERS environment variable is required (e.g. 'host:9092')")?;

    let brokers: Vec<String> = raw.split(',').map(|b| b.trim().to_string()).collect();
    if brokers.iter().any(String::is_empty) {
        bail!("KAFKA_BROKERS contains an empty entry: '{raw}'");
    }

    Ok(brokers)
}
