// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::config::DisplayConfig;
use futures::Stream;
use sensor_display_core::{
    format_reading, Axis, AxisFault, ChannelEvent, DerivedFault, DerivedOutput, DisplayError,
    MalformedReason, OutputSlots, RealtimeChannel, Result, SensorSample, SlotError,
};
use sensor_display_exec::{CancellationToken, SubscribeExt, SubscriptionSummary};
use serde_json::Value;

/// Writes each received sample into the display slots.
///
/// The updater keeps no state between events besides its slots and configuration: every event
/// overwrites what the previous one displayed. The three axes are handled independently, so a
/// bad `z` does not stop `x` and `y` from being shown; the failures of one event are reported
/// together as a single [`DisplayError::MalformedEvent`].
///
/// ```
/// use sensor_display::{DisplayUpdater, MemorySlots};
/// use serde_json::json;
///
/// let slots = MemorySlots::with_slots(["x", "y", "z"]);
/// let mut updater = DisplayUpdater::new(slots.clone());
///
/// updater.apply(&json!({ "x": 1.005, "y": -2.1, "z": 0 })).unwrap();
///
/// assert_eq!(slots.text("x").as_deref(), Some("1.00"));
/// assert_eq!(slots.text("y").as_deref(), Some("-2.10"));
/// assert_eq!(slots.text("z").as_deref(), Some("0.00"));
/// ```
pub struct DisplayUpdater<S> {
    slots: S,
    config: DisplayConfig,
}

impl<S: OutputSlots> DisplayUpdater<S> {
    /// Updater for `sensor_data` events writing to slots `x`, `y` and `z`.
    pub fn new(slots: S) -> Self {
        Self::with_config(slots, DisplayConfig::default())
    }

    pub fn with_config(slots: S, config: DisplayConfig) -> Self {
        Self { slots, config }
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn slots(&self) -> &S {
        &self.slots
    }

    pub fn into_slots(self) -> S {
        self.slots
    }

    /// Renders one event payload.
    ///
    /// # Errors
    ///
    /// [`DisplayError::MalformedEvent`] listing every axis that was missing, not numeric,
    /// not finite or routed to a missing slot. The other axes are still written. Once all axes
    /// are written, the configured magnitude and status slots follow; a missing slot or a
    /// magnitude beyond `f64` range is reported the same way.
    pub fn apply(&mut self, payload: &Value) -> Result<()> {
        let mut sample = SensorSample::default();
        let mut faults = Vec::new();

        for axis in Axis::ALL {
            let written = SensorSample::read_axis(payload, axis).and_then(|value| {
                self.write_axis(axis, value)?;
                Ok(value)
            });

            match written {
                Ok(value) => sample = with_axis(sample, axis, value),
                Err(reason) => faults.push(AxisFault::new(axis, reason)),
            }
        }

        self.finish(&sample, faults)
    }

    /// Renders an already decoded sample.
    ///
    /// # Errors
    ///
    /// Same as [`apply`](Self::apply), minus the decoding failures.
    pub fn apply_sample(&mut self, sample: &SensorSample) -> Result<()> {
        let faults = Axis::ALL
            .into_iter()
            .filter_map(|axis| {
                self.write_axis(axis, sample.get(axis))
                    .err()
                    .map(|reason| AxisFault::new(axis, reason))
            })
            .collect();

        self.finish(sample, faults)
    }

    /// Renders `event` if it carries the configured name.
    ///
    /// Returns `Ok(false)` for events with any other name, leaving the display untouched.
    ///
    /// # Errors
    ///
    /// Same as [`apply`](Self::apply).
    pub fn handle_event(&mut self, event: &ChannelEvent) -> Result<bool> {
        if event.name != self.config.event {
            return Ok(false);
        }
        self.apply(&event.payload).map(|()| true)
    }

    /// Renders every payload of `events` until the stream ends or `cancellation_token` fires.
    ///
    /// Malformed events are logged and counted; they never end the subscription.
    pub async fn run<E>(
        &mut self,
        events: E,
        cancellation_token: CancellationToken,
    ) -> SubscriptionSummary
    where
        E: Stream<Item = Value> + Send + Unpin,
        S: Send,
    {
        let event = self.config.event.clone();
        tracing::info!(event = %event, "display updater subscribed");

        let summary = events
            .subscribe(
                |payload: Value| self.apply(&payload),
                |error: DisplayError| tracing::warn!(%error, "event not displayed"),
                Some(cancellation_token),
            )
            .await;

        tracing::info!(
            event = %event,
            processed = summary.processed,
            failed = summary.failed,
            cancelled = summary.cancelled,
            "display updater stopped"
        );

        summary
    }

    /// Subscribes to the configured event on `channel` and [`run`](Self::run)s on it.
    ///
    /// # Errors
    ///
    /// [`DisplayError::ChannelClosed`] if the channel refuses the subscription.
    pub async fn attach<C>(
        &mut self,
        channel: &C,
        cancellation_token: CancellationToken,
    ) -> Result<SubscriptionSummary>
    where
        C: RealtimeChannel + Sync + ?Sized,
        S: Send,
    {
        let events = channel.on(&self.config.event)?;
        Ok(self.run(events, cancellation_token).await)
    }

    fn write_axis(&mut self, axis: Axis, value: f64) -> core::result::Result<(), MalformedReason> {
        let text = format_reading(value)?;
        let slot = self.config.slots.slot(axis);
        self.slots.set_text(slot, &text).map_err(missing_slot)
    }

    fn finish(&mut self, sample: &SensorSample, faults: Vec<AxisFault>) -> Result<()> {
        if !faults.is_empty() {
            return Err(DisplayError::malformed(&self.config.event, faults));
        }

        let derived = self.write_derived(sample.magnitude());
        if derived.is_empty() {
            Ok(())
        } else {
            Err(DisplayError::malformed_derived(&self.config.event, derived))
        }
    }

    fn write_derived(&mut self, magnitude: f64) -> Vec<DerivedFault> {
        let mut faults = Vec::new();

        if let Some(slot) = self.config.magnitude_slot.as_deref() {
            let written = format_reading(magnitude)
                .and_then(|text| self.slots.set_text(slot, &text).map_err(missing_slot));
            if let Err(reason) = written {
                faults.push(DerivedFault::new(DerivedOutput::Magnitude, reason));
            }
        }

        if let Some(status) = &self.config.status {
            let written = status.band(magnitude).and_then(|band| {
                self.slots
                    .set_text(&status.slot, band.as_str())
                    .map_err(missing_slot)
            });
            if let Err(reason) = written {
                faults.push(DerivedFault::new(DerivedOutput::Status, reason));
            }
        }

        faults
    }
}

fn with_axis(sample: SensorSample, axis: Axis, value: f64) -> SensorSample {
    match axis {
        Axis::X => SensorSample { x: value, ..sample },
        Axis::Y => SensorSample { y: value, ..sample },
        Axis::Z => SensorSample { z: value, ..sample },
    }
}

fn missing_slot(error: SlotError) -> MalformedReason {
    match error {
        SlotError::UnknownSlot { slot } => MalformedReason::MissingSlot { slot },
    }
}
