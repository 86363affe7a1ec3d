// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Threshold bands for the magnitude of a sample.

use core::fmt;
use sensor_display_core::{DisplayError, MalformedReason, Result};
use serde::{Deserialize, Serialize};

/// Band a magnitude falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MagnitudeBand {
    /// Below `warn_at`
    Ok,
    /// At or above `warn_at`, below `alert_at`
    Warn,
    /// At or above `alert_at`
    Alert,
}

impl MagnitudeBand {
    /// Text written to the status slot.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warn => "warn",
            Self::Alert => "alert",
        }
    }
}

impl fmt::Display for MagnitudeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status slot and the thresholds that pick its text.
///
/// ```toml
/// [status]
/// slot = "status"
/// warn_at = 1.0
/// alert_at = 2.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatusConfig {
    pub slot: String,
    pub warn_at: f64,
    pub alert_at: f64,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            slot: "status".to_owned(),
            warn_at: 1.0,
            alert_at: 2.0,
        }
    }
}

impl StatusConfig {
    /// Band of `magnitude`.
    ///
    /// # Errors
    ///
    /// [`MalformedReason::NonFinite`] for NaN and infinities.
    pub fn band(&self, magnitude: f64) -> core::result::Result<MagnitudeBand, MalformedReason> {
        if !magnitude.is_finite() {
            return Err(MalformedReason::NonFinite { value: magnitude });
        }

        Ok(if magnitude < self.warn_at {
            MagnitudeBand::Ok
        } else if magnitude < self.alert_at {
            MagnitudeBand::Warn
        } else {
            MagnitudeBand::Alert
        })
    }

    /// Checks `0 <= warn_at <= alert_at`, both finite.
    ///
    /// # Errors
    ///
    /// [`DisplayError::Config`] otherwise.
    pub fn validate(&self) -> Result<()> {
        let ordered = 0.0 <= self.warn_at && self.warn_at <= self.alert_at;
        if !(self.alert_at.is_finite() && ordered) {
            return Err(DisplayError::config(format!(
                "status thresholds must satisfy 0 <= warn_at <= alert_at, got {} and {}",
                self.warn_at, self.alert_at
            )));
        }
        Ok(())
    }
}
