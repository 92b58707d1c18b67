//! spiro-app - headless spirograph driver
//!
//! Creates a drawing engine, animates one stroke at the configured tick rate
//! and writes the finished canvas as PNG.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod cli;

use std::sync::mpsc;

use anyhow::{Context, Result};
use clap::Parser;
use drawing::{DrawingEngine, EngineEvent, StartOutcome, compute_loops};
use spiro_config::EngineConfig;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let mechanism = cli.mechanism()?;
    let style = cli.style()?;

    let mut engine = DrawingEngine::new(config).context("Failed to create drawing engine")?;
    let events = engine.subscribe();

    info!(
        "Drawing R={} r={} d={} ({} loops) on a {}px canvas",
        mechanism.outer_radius,
        mechanism.inner_radius,
        mechanism.pen_offset,
        compute_loops(mechanism.outer_radius, mechanism.effective_inner_radius()),
        engine.canvas_size()
    );

    match engine.start_drawing(mechanism, style) {
        StartOutcome::Started { segments } => info!("Stroke started, {} segments", segments),
        StartOutcome::Cancelled => anyhow::bail!("engine was already drawing"),
    }

    run_stroke(&mut engine, &events).await;

    let output = &cli.output;
    engine
        .image()
        .save(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!("Saved {} ({} layers)", output.display(), engine.layer_count());

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Tick the engine at its configured rate until the stroke ends
async fn run_stroke(engine: &mut DrawingEngine, events: &mpsc::Receiver<EngineEvent>) {
    let mut interval = tokio::time::interval(engine.tick_interval());
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first interval tick completes immediately
    interval.tick().await;

    let mut reported = 0;
    while engine.is_drawing() {
        interval.tick().await;
        engine.tick();

        let decile = (engine.progress() * 10.0).floor() as u32;
        if decile > reported {
            reported = decile;
            info!("{:>3}% drawn", decile * 10);
        }

        for event in events.try_iter() {
            match event.feedback() {
                Some(feedback) => info!("{:?} (feedback: {:?})", event, feedback),
                None => debug!("{:?}", event),
            }
        }
    }
}
