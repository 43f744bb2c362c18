//! # models::tick
//!
//! Defines [`TickRecord`], the synthetic market pulse that the producer loop
//! publishes once per symbol per batch.
//!
//! The serde field names are the wire contract consumers already read:
//! `symbol`, `Date-Time`, `Close`, `Volume`, and nothing else.

use serde::{Deserialize, Serialize};

/// Output pattern of the batch timestamp, e.g. `2024-05-01 14:32:10`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single simulated tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickRecord {
    /// Symbol from the fixed universe, e.g. `"SYM001"`.
    pub symbol: String,

    /// Batch timestamp in IST, already formatted with [`TIMESTAMP_FORMAT`].
    #[serde(rename = "Date-Time")]
    pub timestamp: String,

    /// Close price in `[100.00, 1500.00]`, rounded to 2 decimals.
    #[serde(rename = "Close")]
    pub close: f64,

    /// Traded volume in `[1000, 10000]`.
    #[serde(rename = "Volume")]
    pub volume: u32,
}

impl TickRecord {
    /// Serialise into the bytes handed to the broker: JSON text, UTF-8.
    #[inline]
    pub fn to_payload(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
