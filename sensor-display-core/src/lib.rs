// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core types for rendering `sensor_data` events into display slots.

pub mod axis;
pub mod error;
pub mod event;
pub mod event_hub;
pub mod format;
pub mod memory_slots;
pub mod output_slots;
pub mod sample;

pub use self::axis::Axis;
pub use self::error::{
    AxisFault, DerivedFault, DerivedOutput, DisplayError, MalformedReason, Result,
};
pub use self::event::{ChannelEvent, SENSOR_DATA_EVENT};
pub use self::event_hub::{EventHub, EventStream, RealtimeChannel};
pub use self::format::{format_reading, DECIMALS};
pub use self::memory_slots::MemorySlots;
pub use self::output_slots::{OutputSlots, SlotError};
pub use self::sample::SensorSample;
