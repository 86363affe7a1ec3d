// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sensor_display::{DisplayConfig, DisplayError, Result};
use serde::Deserialize;
use std::time::Duration;

/// Simulated sensor settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EmitterConfig {
    pub interval_ms: u64,
    /// Peak value of each axis before noise
    pub amplitude: f64,
    /// Peak uniform noise added to each axis
    pub noise: f64,
    /// Fixed seed for reproducible runs
    #[serde(default)]
    pub seed: Option<u64>,
}

impl EmitterConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConsoleConfig {
    pub interval_ms: u64,
}

impl ConsoleConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Complete demo configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DemoConfig {
    /// Default `tracing` filter, overridden by `RUST_LOG`
    pub log_level: String,
    #[serde(default)]
    pub display: DisplayConfig,
    pub emitter: EmitterConfig,
    pub console: ConsoleConfig,
}

impl DemoConfig {
    /// Load configuration from embedded TOML file
    pub fn load() -> Result<Self> {
        Self::from_toml_str(include_str!("../config.toml"))
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| DisplayError::config(e.to_string()))?;
        config.display.validate()?;

        if config.emitter.interval_ms == 0 || config.console.interval_ms == 0 {
            return Err(DisplayError::config("intervals must be at least 1 ms"));
        }
        if !(config.emitter.amplitude.is_finite() && config.emitter.noise.is_finite()) {
            return Err(DisplayError::config("amplitude and noise must be finite"));
        }

        Ok(config)
    }
}
