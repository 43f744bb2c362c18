//! # engine::producer
//!
//! **Producer Loop**: the only thing this binary does.
//!
//! ```text
//! loop until shutdown:
//!   1. capture IST timestamp once
//!   2. SYM001..SYM120 → TickRecord → JSON → sink.publish(topic)
//!   3. sink.flush()            (batch N fully acked before N+1 starts)
//!   4. log "Sent batch of 120 records"
//!   5. sleep(interval)         (shutdown wakes it early)
//! ```
//!
//! Every failure is returned to the caller as-is. Nothing is retried.

use tokio::sync::watch;
use tracing::info;

use crate::engine::generator::{batch_timestamp, generate_batch};
use crate::error::ProducerError;
use crate::sink::TickSink;
use crate::state::SimulatorState;

/// What a stopped loop reports back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub batches: u64,
    pub records: u64,
}

/// Generate, publish and flush one batch. Returns the batch timestamp and the
/// number of records sent.
pub async fn run_batch<S: TickSink>(
    state: &mut SimulatorState<S>,
) -> Result<(String, usize), ProducerError> {
    let SimulatorState { symbols, sink, topic, clock, rng, .. } = &mut *state;

    // ── 1. One timestamp for the whole batch ──────────────────────────────────
    let timestamp = batch_timestamp(clock.now());

    // ── 2. Publish one record per symbol ──────────────────────────────────────
    let mut sent = 0usize;
    for tick in generate_batch(symbols, &timestamp, rng) {
        let payload = tick.to_payload()?;
        sink.publish(topic, payload)
            .map_err(|source| ProducerError::Publish { symbol: tick.symbol, source })?;
        sent += 1;
    }

    // ── 3. Wait for the broker ────────────────────────────────────────────────
    sink.flush().await.map_err(ProducerError::Flush)?;

    state.record_batch(sent as u64);
    Ok((timestamp, sent))
}

/// Run batches every `state.interval` until `shutdown` turns `true` (or its
/// sender is dropped). A batch in progress always finishes its flush first.
pub async fn run<S: TickSink>(
    state: &mut SimulatorState<S>,
    mut shutdown: watch::Receiver<bool>,
) -> Result<RunSummary, ProducerError> {
    loop {
        if *shutdown.borrow() {
            break;
        }

        let (timestamp, sent) = run_batch(state).await?;
        info!(timestamp = %timestamp, records = sent, "Sent batch of {sent} records");

        tokio::select! {
            _ = tokio::time::sleep(state.interval) => {}
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }

    info!(
        batches = state.batches_sent,
        records = state.records_sent,
        "Producer loop stopped"
    );

    Ok(RunSummary { batches: state.batches_sent, records: state.records_sent })
}
