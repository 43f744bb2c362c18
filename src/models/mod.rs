//! Domain models shared across the producer.

pub mod symbols;
pub mod tick;

pub use symbols::SymbolUniverse;
pub use tick::{TickRecord, TIMESTAMP_FORMAT};
