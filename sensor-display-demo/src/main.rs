// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sensor Display Demo
//!
//! A simulated accelerometer publishes `sensor_data` on an in-process hub every 100 ms.
//! A [`DisplayUpdater`] renders each event into memory slots, and the console prints the
//! slots once per second.

use anyhow::Result;
use sensor_display::{CancellationToken, DisplayUpdater, EventHub, MemorySlots, RealtimeChannel};
use sensor_display_demo::{console, DemoConfig, SensorEmitter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = DemoConfig::load()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Cancellation token for graceful shutdown
    let cancel_token = CancellationToken::new();

    let cancel_token_ctrlc = cancel_token.clone();
    tokio::spawn(async move {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "failed to listen for Ctrl+C");
        }
        tracing::info!("shutting down");
        cancel_token_ctrlc.cancel();
    });

    let hub = EventHub::new();
    let order: Vec<String> = config
        .display
        .slot_ids()
        .into_iter()
        .map(str::to_owned)
        .collect();
    let slots = MemorySlots::with_slots(order.iter().cloned());
    let mut updater = DisplayUpdater::with_config(slots.clone(), config.display.clone());

    // Subscribe before the emitter starts so no sample is missed
    let events = hub.on(&config.display.event)?;

    let emitter_task = tokio::spawn(SensorEmitter::new(config.emitter.clone()).run(
        hub.clone(),
        config.display.event.clone(),
        cancel_token.clone(),
    ));
    let console_task = tokio::spawn(console::report(
        slots,
        order,
        config.console.interval(),
        cancel_token.clone(),
    ));

    tracing::info!("press Ctrl+C to stop");
    let summary = updater.run(events, cancel_token.clone()).await;

    let emitted = emitter_task.await?;
    console_task.await?;
    hub.close();

    tracing::info!(
        emitted,
        processed = summary.processed,
        failed = summary.failed,
        "demo finished"
    );

    Ok(())
}
