// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::status::StatusConfig;
use sensor_display_core::{Axis, DisplayError, Result, SENSOR_DATA_EVENT};
use serde::{Deserialize, Serialize};

/// Output slot id for each axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AxisSlots {
    pub x: String,
    pub y: String,
    pub z: String,
}

impl AxisSlots {
    /// Slot the given axis is written to.
    #[must_use]
    pub fn slot(&self, axis: Axis) -> &str {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl Default for AxisSlots {
    fn default() -> Self {
        Self {
            x: Axis::X.field_name().to_owned(),
            y: Axis::Y.field_name().to_owned(),
            z: Axis::Z.field_name().to_owned(),
        }
    }
}

/// Which event to render and where each value goes.
///
/// Every field has a default, so an empty TOML document is a valid configuration:
///
/// ```toml
/// event = "sensor_data"
/// magnitude_slot = "magnitude"
///
/// [slots]
/// x = "x"
/// y = "y"
/// z = "z"
///
/// [status]
/// slot = "status"
/// warn_at = 1.0
/// alert_at = 2.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Name of the event carrying samples
    pub event: String,
    /// Output slot per axis
    pub slots: AxisSlots,
    /// Slot receiving the vector magnitude, if any
    pub magnitude_slot: Option<String>,
    /// Slot receiving the magnitude band, if any
    pub status: Option<StatusConfig>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            event: SENSOR_DATA_EVENT.to_owned(),
            slots: AxisSlots::default(),
            magnitude_slot: None,
            status: None,
        }
    }
}

impl DisplayConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// [`DisplayError::Config`] if the document does not parse or fails [`validate`](Self::validate).
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(|e| DisplayError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the event name and every slot id are non-empty, that no two outputs
    /// share a slot and that the status thresholds are ordered.
    ///
    /// # Errors
    ///
    /// [`DisplayError::Config`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.event.trim().is_empty() {
            return Err(DisplayError::config("event name must not be empty"));
        }

        let ids = self.slot_ids();
        for (index, id) in ids.iter().enumerate() {
            if id.trim().is_empty() {
                return Err(DisplayError::config("slot ids must not be empty"));
            }
            if ids[..index].contains(id) {
                return Err(DisplayError::config(format!(
                    "slot `{id}` is assigned more than once"
                )));
            }
        }

        if let Some(status) = &self.status {
            status.validate()?;
        }

        Ok(())
    }

    /// Every slot this configuration writes to, axes first.
    #[must_use]
    pub fn slot_ids(&self) -> Vec<&str> {
        Axis::ALL
            .iter()
            .map(|&axis| self.slots.slot(axis))
            .chain(self.magnitude_slot.as_deref())
            .chain(self.status.as_ref().map(|status| status.slot.as_str()))
            .collect()
    }
}
