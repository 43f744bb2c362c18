//! # error
//!
//! Failures of the producer loop. None of them is recoverable: the loop
//! stops at the first one and `main` exits with it. The variants only say
//! which stage broke.

use thiserror::Error;

use crate::sink::SinkError;

#[derive(Debug, Error)]
pub enum ProducerError {
    /// A record could not be encoded as JSON.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The sink refused a record mid-batch.
    #[error("Publish of {symbol} failed: {source}")]
    Publish {
        symbol: String,
        #[source]
        source: SinkError,
    },

    /// The batch was not fully acknowledged.
    #[error("Flush failed: {0}")]
    Flush(#[source] SinkError),
}
