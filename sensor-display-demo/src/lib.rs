// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Building blocks of the sensor display demo binary.

pub mod config;
pub mod console;
pub mod sensor_emitter;

pub use config::{ConsoleConfig, DemoConfig, EmitterConfig};
pub use sensor_emitter::SensorEmitter;
