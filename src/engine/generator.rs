//! # engine::generator
//!
//! Builds one batch of [`TickRecord`]s: a single IST timestamp shared by the
//! whole batch, then a fresh close/volume sample per symbol.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::engine::clock::ist;
use crate::models::{SymbolUniverse, TickRecord, TIMESTAMP_FORMAT};

pub const CLOSE_MIN: f64 = 100.0;
pub const CLOSE_MAX: f64 = 1500.0;
pub const VOLUME_MIN: u32 = 1_000;
pub const VOLUME_MAX: u32 = 10_000;

/// Format a UTC instant as the IST batch timestamp.
pub fn batch_timestamp(now: DateTime<Utc>) -> String {
    now.with_timezone(&ist()).format(TIMESTAMP_FORMAT).to_string()
}

/// Uniform in `[CLOSE_MIN, CLOSE_MAX]`, rounded to cents.
pub fn sample_close<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let raw: f64 = rng.gen_range(CLOSE_MIN..=CLOSE_MAX);
    (raw * 100.0).round() / 100.0
}

/// Uniform in `[VOLUME_MIN, VOLUME_MAX]`, both ends inclusive.
pub fn sample_volume<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(VOLUME_MIN..=VOLUME_MAX)
}

pub fn make_tick<R: Rng + ?Sized>(symbol: &str, timestamp: &str, rng: &mut R) -> TickRecord {
    TickRecord {
        symbol:    symbol.to_string(),
        timestamp: timestamp.to_string(),
        close:     sample_close(rng),
        volume:    sample_volume(rng),
    }
}

/// One record per symbol, in universe order, all stamped with `timestamp`.
pub fn generate_batch<'a, R: Rng + ?Sized>(
    universe: &'a SymbolUniverse,
    timestamp: &'a str,
    rng: &'a mut R,
) -> impl Iterator<Item = TickRecord> + 'a {
    universe.iter().map(move |symbol| make_tick(symbol, timestamp, &mut *rng))
}
