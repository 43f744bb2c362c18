//! # engine
//!
//! * [`generator`]: sampling and batch construction
//! * [`clock`]: wall-clock source for batch timestamps
//! * [`producer`]: the batch → flush → sleep loop

pub mod clock;
pub mod generator;
pub mod producer;
