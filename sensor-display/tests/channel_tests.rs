// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sensor_display::{
    CancellationToken, DisplayError, DisplayUpdater, EventHub, MemorySlots, RealtimeChannel,
    SensorSample, SubscriptionSummary, SENSOR_DATA_EVENT,
};
use sensor_display_test_utils::{assert_no_element_emitted, expect_next_payload, test_channel};
use sensor_display_test_utils::test_data::{payload, payload_all_strings, sample_tilted};
use std::time::Duration;
use tokio::time::sleep;

#[tokio::test]
async fn test_run_renders_each_event_and_survives_malformed_ones() -> anyhow::Result<()> {
    // Arrange
    let (tx, events) = test_channel();
    let slots = MemorySlots::with_slots(["x", "y", "z"]);
    let mut updater = DisplayUpdater::new(slots.clone());

    tx.send(payload(1.0, 2.0, 3.0))?;
    tx.send(payload_all_strings())?;
    tx.send(sample_tilted().to_payload())?;
    drop(tx);

    // Act
    let summary = updater.run(events, CancellationToken::new()).await;

    // Assert
    assert_eq!(
        summary,
        SubscriptionSummary {
            processed: 3,
            failed: 1,
            cancelled: false,
        }
    );
    assert_eq!(slots.text("x").as_deref(), Some("1.00"));
    assert_eq!(slots.text("y").as_deref(), Some("-2.10"));
    assert_eq!(slots.text("z").as_deref(), Some("0.00"));

    Ok(())
}

#[tokio::test]
async fn test_attach_follows_hub_until_closed() -> anyhow::Result<()> {
    // Arrange
    let hub = EventHub::new();
    let slots = MemorySlots::with_slots(["x", "y", "z"]);
    let mut updater = DisplayUpdater::new(slots.clone());

    let task = {
        let hub = hub.clone();
        tokio::spawn(async move {
            let summary = updater.attach(&hub, CancellationToken::new()).await;
            (updater, summary)
        })
    };

    while hub.subscriber_count(SENSOR_DATA_EVENT) == 0 {
        sleep(Duration::from_millis(1)).await;
    }

    // Act
    hub.emit("status", payload(9.0, 9.0, 9.0))?;
    hub.emit(SENSOR_DATA_EVENT, SensorSample::new(0.5, 0.25, -7.0).to_payload())?;
    hub.close();
    let (updater, summary) = task.await?;

    // Assert
    assert_eq!(summary?.processed, 1);
    assert_eq!(slots.text("x").as_deref(), Some("0.50"));
    assert_eq!(slots.text("y").as_deref(), Some("0.25"));
    assert_eq!(slots.text("z").as_deref(), Some("-7.00"));
    assert_eq!(updater.into_slots().writes(), 3);

    Ok(())
}

#[tokio::test]
async fn test_cancellation_stops_an_idle_updater() -> anyhow::Result<()> {
    // Arrange
    let hub = EventHub::new();
    let slots = MemorySlots::with_slots(["x", "y", "z"]);
    let mut updater = DisplayUpdater::new(slots.clone());
    let token = CancellationToken::new();

    let task = {
        let hub = hub.clone();
        let token = token.clone();
        tokio::spawn(async move { updater.attach(&hub, token).await })
    };

    // Act
    sleep(Duration::from_millis(10)).await;
    token.cancel();
    let summary = task.await??;

    // Assert
    assert!(summary.cancelled);
    assert_eq!(summary.processed, 0);
    assert_eq!(slots.writes(), 0);

    Ok(())
}

#[tokio::test]
async fn test_attach_to_closed_hub_fails() {
    let hub = EventHub::new();
    hub.close();
    let mut updater = DisplayUpdater::new(MemorySlots::with_slots(["x", "y", "z"]));

    let err = updater
        .attach(&hub, CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, DisplayError::ChannelClosed { event } if event == SENSOR_DATA_EVENT));
}

#[tokio::test]
async fn test_late_subscriber_sees_only_later_sensor_events() -> anyhow::Result<()> {
    // Arrange
    let hub = EventHub::new();
    hub.emit(SENSOR_DATA_EVENT, payload(1.0, 2.0, 3.0))?;
    let mut events = hub.on(SENSOR_DATA_EVENT)?;

    // Act
    hub.emit("status", payload(9.0, 9.0, 9.0))?;

    // Assert
    assert_no_element_emitted(&mut events, 20).await;

    let later = sample_tilted().to_payload();
    hub.emit(SENSOR_DATA_EVENT, later.clone())?;
    expect_next_payload(&mut events, &later).await;

    Ok(())
}
