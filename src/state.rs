//! # state
//!
//! The producer's process-scoped context: everything the loop needs, built
//! once in `main` and handed to [`crate::engine::producer::run`].
//!
//! * The symbol universe is fixed at construction and never mutated.
//! * The sink is owned here; the loop is its only user.
//! * `batches_sent` / `records_sent` only ever increase.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engine::clock::{Clock, SystemClock};
use crate::models::SymbolUniverse;
use crate::sink::TickSink;

// ─── SimulatorState ───────────────────────────────────────────────────────────

pub struct SimulatorState<S> {
    pub symbols:      SymbolUniverse,
    pub sink:         S,
    pub topic:        String,
    pub interval:     Duration,
    pub clock:        Box<dyn Clock>,
    pub rng:          StdRng,
    pub batches_sent: u64,
    pub records_sent: u64,
}

impl<S: TickSink> SimulatorState<S> {
    /// Fresh context on the system clock with an entropy-seeded RNG.
    pub fn new(sink: S, topic: impl Into<String>, interval: Duration) -> Self {
        Self {
            symbols:      SymbolUniverse::new(),
            sink,
            topic:        topic.into(),
            interval,
            clock:        Box::new(SystemClock),
            rng:          StdRng::from_entropy(),
            batches_sent: 0,
            records_sent: 0,
        }
    }

    /// Swap the time source (tests drive it from tokio's paused clock).
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn record_batch(&mut self, records: u64) {
        self.batches_sent += 1;
        self.records_sent += records;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::memory::MemorySink;

    #[test]
    fn test_new_state_starts_empty() {
        let state = SimulatorState::new(MemorySink::new(), "stock-data-stream", Duration::from_secs(30));
        assert_eq!(state.symbols.len(), 120);
        assert_eq!(state.topic, "stock-data-stream");
        assert_eq!(state.batches_sent, 0);
        assert_eq!(state.records_sent, 0);
    }

    #[test]
    fn test_record_batch_accumulates() {
        let mut state = SimulatorState::new(MemorySink::new(), "t", Duration::from_secs(1));
        state.record_batch(120);
        state.record_batch(120);
        assert_eq!(state.batches_sent, 2);
        assert_eq!(state.records_sent, 240);
    }
}
