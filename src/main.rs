//! # Tickstream — Synthetic Stock-Tick Producer
//!
//! ## Flow
//! ```text
//!  ┌────────────────────┐   every BATCH_INTERVAL_SECS   ┌──────────────────────┐
//!  │  SimulatorState    │                               │  Kafka               │
//!  │  SYM001..SYM120    │ ── 120 × publish + flush ───▶ │  topic               │
//!  │  StdRng · Clock    │                               │  stock-data-stream   │
//!  └────────────────────┘                               └──────────────────────┘
//! ```
//!
//! Any broker or serialisation failure ends the process with a non-zero exit.
//! Ctrl-C stops the loop between batches; a second Ctrl-C exits at once.
//!
//! | Variable   | Default           | Description     |
//! |------------|-------------------|-----------------|
//! | `RUST_LOG` | `tickstream=info` | Tracing filter  |
//!
//! See [`config`] for the rest.

use anyhow::Context;
use tokio::sync::watch;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod engine;
mod error;
mod models;
mod shutdown;
mod sink;
mod state;

use config::{Config, SinkKind};
use sink::{LogSink, TickSink};
use state::SimulatorState;

// ─── Entry Point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Load .env (optional — CI/prod can use real env vars) ──────────────
    dotenvy::dotenv().ok();

    // ── 2. Initialise structured logging ─────────────────────────────────────
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env()
            .add_directive("tickstream=info".parse()?)
            .add_directive("rdkafka=warn".parse()?))
        .init();

    info!(r#"

  ╔═══════════════════════════════════════════╗
  ║   TICKSTREAM — Synthetic Tick Producer    ║
  ║   120 symbols  ·  IST  ·  Kafka           ║
  ╚═══════════════════════════════════════════╝"#);

    // ── 3. Config + broker connection ────────────────────────────────────────
    let config = Config::from_env().context("Failed to load config")?;
    let sink = connect_sink(&config.sink).context("Failed to connect to broker")?;

    let mut state = SimulatorState::new(sink, config.topic.clone(), config.interval);

    info!(
        sink     = %config.sink,
        topic    = %config.topic,
        interval = ?config.interval,
        symbols  = state.symbols.len(),
        "Tickstream started"
    );

    // ── 4. Ctrl-C → shutdown signal, second Ctrl-C → exit now ───────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if shutdown::escalate_signals(tokio::signal::ctrl_c, shutdown_tx).await {
            warn!("Second Ctrl-C, exiting without waiting for the broker");
            std::process::exit(shutdown::INTERRUPTED_EXIT_CODE);
        }
    });

    // ── 5. Producer Loop ─────────────────────────────────────────────────────
    let summary = engine::producer::run(&mut state, shutdown_rx)
        .await
        .context("Producer loop failed")?;

    info!(batches = summary.batches, records = summary.records, "Tickstream stopped");
    Ok(())
}

/// Build the sink named by the config.
fn connect_sink(kind: &SinkKind) -> anyhow::Result<Box<dyn TickSink>> {
    match kind {
        #[cfg(feature = "kafka")]
        SinkKind::Kafka { brokers, message_timeout_ms } => {
            let sink = sink::KafkaSink::connect(brokers, *message_timeout_ms)?;
            Ok(Box::new(sink))
        }
        #[cfg(not(feature = "kafka"))]
        SinkKind::Kafka { .. } => {
            anyhow::bail!("TICK_SINK=kafka needs a build with `--features kafka` (or set TICK_SINK=log)")
        }
        SinkKind::Log => {
            warn!("TICK_SINK=log — ticks are logged at debug level, NOT sent to Kafka");
            Ok(Box::new(LogSink::new()))
        }
    }
}
