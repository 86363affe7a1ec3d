// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sensor_display_core::{Axis, SensorSample};
use serde_json::{json, Value};

pub fn sample_at_rest() -> SensorSample {
    SensorSample::new(0.0, 0.0, 9.81)
}

/// `{x: 1.005, y: -2.1, z: 0}`, the sample whose `x` sits next to a rounding tie.
pub fn sample_tilted() -> SensorSample {
    SensorSample::new(1.005, -2.1, 0.0)
}

pub fn sample_shaking() -> SensorSample {
    SensorSample::new(-3.456, 7.891, -0.333)
}

pub fn payload(x: f64, y: f64, z: f64) -> Value {
    SensorSample::new(x, y, z).to_payload()
}

/// `sample` as a payload with `axis` removed.
pub fn payload_without(sample: &SensorSample, axis: Axis) -> Value {
    let mut payload = sample.to_payload();
    if let Some(fields) = payload.as_object_mut() {
        fields.remove(axis.field_name());
    }
    payload
}

/// `sample` as a payload with `axis` replaced by an arbitrary JSON value.
pub fn payload_with(sample: &SensorSample, axis: Axis, value: Value) -> Value {
    let mut payload = sample.to_payload();
    payload[axis.field_name()] = value;
    payload
}

/// A payload where every axis is the wrong type.
pub fn payload_all_strings() -> Value {
    json!({ "x": "1", "y": "2", "z": "3" })
}
