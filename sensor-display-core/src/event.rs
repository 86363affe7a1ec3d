// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::sample::SensorSample;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Conventional name of the event carrying a [`SensorSample`].
pub const SENSOR_DATA_EVENT: &str = "sensor_data";

/// A named event as delivered by a real-time channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelEvent {
    pub name: String,
    pub payload: Value,
}

impl ChannelEvent {
    pub fn new(name: impl Into<String>, payload: Value) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }

    /// A `sensor_data` event for the given sample.
    #[must_use]
    pub fn sensor_data(sample: &SensorSample) -> Self {
        Self::new(SENSOR_DATA_EVENT, sample.to_payload())
    }
}
