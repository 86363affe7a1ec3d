// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Sensor Display
//!
//! Renders the `x`, `y` and `z` fields of real-time `sensor_data` events into three text slots,
//! each with exactly two decimals.
//!
//! ## Overview
//!
//! - [`DisplayUpdater`] is the event handler. It owns an [`OutputSlots`] surface and writes
//!   one formatted value per axis.
//! - The real-time channel is injected through [`RealtimeChannel`]; [`EventHub`] is an
//!   in-process implementation.
//! - Formatting follows [`format_reading`]: nearest hundredth of the stored value, exact ties
//!   away from zero, no negative zero, NaN and infinities rejected.
//! - Optionally the magnitude of each sample and its threshold band ([`MagnitudeBand`]) are
//!   written to two more slots.
//!
//! ## Quick Start
//!
//! ```rust
//! use sensor_display::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), DisplayError> {
//!     let hub = EventHub::new();
//!     let slots = MemorySlots::with_slots(["x", "y", "z"]);
//!     let mut updater = DisplayUpdater::new(slots.clone());
//!
//!     let events = hub.on(SENSOR_DATA_EVENT)?;
//!     hub.emit(SENSOR_DATA_EVENT, SensorSample::new(3.0, -2.1, 0.0).to_payload())?;
//!     hub.close();
//!
//!     updater.run(events, CancellationToken::new()).await;
//!
//!     assert_eq!(slots.text("x").as_deref(), Some("3.00"));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod display_updater;
pub mod status;

pub use config::{AxisSlots, DisplayConfig};
pub use display_updater::DisplayUpdater;
pub use status::{MagnitudeBand, StatusConfig};

// Re-export core types
pub use sensor_display_core::{
    format_reading, Axis, AxisFault, ChannelEvent, DerivedFault, DerivedOutput, DisplayError,
    EventHub, EventStream, MalformedReason, MemorySlots, OutputSlots, RealtimeChannel, Result,
    SensorSample, SlotError, SENSOR_DATA_EVENT,
};
pub use sensor_display_exec::{CancellationToken, SubscriptionSummary};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CancellationToken, DisplayConfig, DisplayError, DisplayUpdater, EventHub, MemorySlots,
        OutputSlots, RealtimeChannel, SensorSample, SENSOR_DATA_EVENT,
    };
}
