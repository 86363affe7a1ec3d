// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::axis::Axis;
use crate::error::{AxisFault, MalformedReason};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One `(x, y, z)` reading delivered by a `sensor_data` event.
///
/// Samples are transient: built per event, rendered, dropped.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SensorSample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl SensorSample {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Value of the given axis.
    #[must_use]
    pub const fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Euclidean length of the vector.
    ///
    /// Computed without intermediate overflow: finite axes give a finite length unless the
    /// length itself exceeds `f64::MAX`.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Reads one axis out of an event payload.
    ///
    /// A payload that is not a JSON object has no fields, so every axis is
    /// [`MalformedReason::MissingField`]. Numeric strings are not numbers.
    ///
    /// # Errors
    ///
    /// [`MalformedReason::MissingField`] or [`MalformedReason::NotNumeric`].
    pub fn read_axis(payload: &Value, axis: Axis) -> Result<f64, MalformedReason> {
        match payload.get(axis.field_name()) {
            None => Err(MalformedReason::MissingField),
            Some(Value::Number(number)) => number.as_f64().ok_or(MalformedReason::NotNumeric {
                found: "out-of-range number",
            }),
            Some(other) => Err(MalformedReason::NotNumeric {
                found: json_type(other),
            }),
        }
    }

    /// Decodes all three axes, reporting every failing one.
    ///
    /// # Errors
    ///
    /// One [`AxisFault`] per axis that [`read_axis`](Self::read_axis) rejected.
    pub fn from_payload(payload: &Value) -> Result<Self, Vec<AxisFault>> {
        let mut sample = Self::default();
        let mut faults = Vec::new();

        for axis in Axis::ALL {
            match Self::read_axis(payload, axis) {
                Ok(value) => *sample.get_mut(axis) = value,
                Err(reason) => faults.push(AxisFault::new(axis, reason)),
            }
        }

        if faults.is_empty() {
            Ok(sample)
        } else {
            Err(faults)
        }
    }

    /// Payload in the shape a `sensor_data` event carries.
    #[must_use]
    pub fn to_payload(&self) -> Value {
        serde_json::json!({ "x": self.x, "y": self.y, "z": self.z })
    }

    fn get_mut(&mut self, axis: Axis) -> &mut f64 {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

impl From<[f64; 3]> for SensorSample {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
