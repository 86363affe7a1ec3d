// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Periodic console rendering of the display slots.

use sensor_display::{CancellationToken, MemorySlots};
use std::time::Duration;
use tokio::time::interval;

/// One line with every slot in `order`, `-` for slots never written.
pub fn render_line(slots: &MemorySlots, order: &[String]) -> String {
    order
        .iter()
        .map(|id| match slots.text(id) {
            Some(text) if !text.is_empty() => format!("{id}={text}"),
            _ => format!("{id}=-"),
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Logs the current display every `period` until cancelled.
pub async fn report(
    slots: MemorySlots,
    order: Vec<String>,
    period: Duration,
    cancel_token: CancellationToken,
) {
    let mut ticker = interval(period);

    loop {
        tokio::select! {
            () = cancel_token.cancelled() => break,
            _ = ticker.tick() => {
                tracing::info!(display = %render_line(&slots, &order), writes = slots.writes());
            }
        }
    }
}
