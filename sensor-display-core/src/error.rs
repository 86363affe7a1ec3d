// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the sensor display.
//!
//! Handler failures have exactly one class, [`DisplayError::MalformedEvent`]. It lists every
//! axis that could not be rendered, and every derived output (magnitude, status) that could not
//! be written, so a caller can tell a missing `z` apart from a missing output slot without
//! parsing messages. The remaining variants belong to the plumbing around
//! the handler (channel lifecycle, configuration, error aggregation).
//!
//! # Examples
//!
//! ```
//! use sensor_display_core::{Axis, AxisFault, DisplayError, MalformedReason, Result};
//!
//! fn render() -> Result<()> {
//!     Err(DisplayError::malformed(
//!         "sensor_data",
//!         vec![AxisFault::new(Axis::Z, MalformedReason::MissingField)],
//!     ))
//! }
//!
//! let err = render().unwrap_err();
//! assert_eq!(err.failed_axes(), vec![Axis::Z]);
//! ```

use crate::axis::Axis;
use core::fmt;

/// Why a single axis of an event could not be displayed.
#[derive(Debug, Clone, PartialEq)]
pub enum MalformedReason {
    /// The payload has no field for the axis.
    MissingField,
    /// The field exists but is not a JSON number.
    NotNumeric {
        /// JSON type that was found instead
        found: &'static str,
    },
    /// NaN or an infinity.
    NonFinite {
        /// The offending value
        value: f64,
    },
    /// The output slot the axis is routed to does not exist.
    MissingSlot {
        /// Id of the missing slot
        slot: String,
    },
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField => write!(f, "missing field"),
            Self::NotNumeric { found } => write!(f, "expected a number, found {found}"),
            Self::NonFinite { value } => write!(f, "non-finite value {value}"),
            Self::MissingSlot { slot } => write!(f, "output slot `{slot}` does not exist"),
        }
    }
}

/// A failure pinned to one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisFault {
    pub axis: Axis,
    pub reason: MalformedReason,
}

impl AxisFault {
    #[must_use]
    pub const fn new(axis: Axis, reason: MalformedReason) -> Self {
        Self { axis, reason }
    }
}

impl fmt::Display for AxisFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.axis, self.reason)
    }
}

/// An output computed from the whole sample rather than read from one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DerivedOutput {
    /// Euclidean length of the sample
    Magnitude,
    /// Threshold band of the magnitude
    Status,
}

impl fmt::Display for DerivedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Magnitude => f.write_str("magnitude"),
            Self::Status => f.write_str("status"),
        }
    }
}

/// A failure pinned to one derived output.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedFault {
    pub output: DerivedOutput,
    pub reason: MalformedReason,
}

impl DerivedFault {
    #[must_use]
    pub const fn new(output: DerivedOutput, reason: MalformedReason) -> Self {
        Self { output, reason }
    }
}

impl fmt::Display for DerivedFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.output, self.reason)
    }
}

fn describe_faults(faults: &[AxisFault], derived: &[DerivedFault]) -> String {
    faults
        .iter()
        .map(ToString::to_string)
        .chain(derived.iter().map(ToString::to_string))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Root error type for all sensor display operations
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    /// An event could not be rendered on one or more outputs.
    ///
    /// Axes that are not listed in `faults` were written normally. Derived outputs are only
    /// attempted once every axis succeeded.
    #[error("Malformed `{event}` event: {}", describe_faults(.faults, .derived))]
    MalformedEvent {
        /// Name of the event being handled
        event: String,
        /// One entry per failing axis, in axis order
        faults: Vec<AxisFault>,
        /// One entry per failing derived output
        derived: Vec<DerivedFault>,
    },

    /// The channel no longer accepts subscribers or events
    #[error("Channel closed while handling `{event}`")]
    ChannelClosed {
        /// Event name involved in the failed operation
        event: String,
    },

    /// Configuration could not be loaded
    #[error("Configuration error: {context}")]
    Config {
        /// What was wrong with the configuration
        context: String,
    },

    /// Multiple errors occurred
    ///
    /// Produced when a subscription without an error callback sees several failing events.
    #[error("Multiple errors occurred: {count} errors")]
    MultipleErrors {
        /// Number of errors that occurred
        count: usize,
        /// The individual errors
        errors: Vec<DisplayError>,
    },
}

impl DisplayError {
    /// Create a malformed event error
    pub fn malformed(event: impl Into<String>, faults: Vec<AxisFault>) -> Self {
        Self::MalformedEvent {
            event: event.into(),
            faults,
            derived: Vec::new(),
        }
    }

    /// Create a malformed event error for an event whose axes were all written
    pub fn malformed_derived(event: impl Into<String>, derived: Vec<DerivedFault>) -> Self {
        Self::MalformedEvent {
            event: event.into(),
            faults: Vec::new(),
            derived,
        }
    }

    /// Create a channel closed error for the given event name
    pub fn channel_closed(event: impl Into<String>) -> Self {
        Self::ChannelClosed {
            event: event.into(),
        }
    }

    /// Create a configuration error with the given context
    pub fn config(context: impl Into<String>) -> Self {
        Self::Config {
            context: context.into(),
        }
    }

    /// Aggregate several errors into one.
    ///
    /// A single error is returned unchanged.
    #[must_use]
    pub fn from_errors(mut errors: Vec<DisplayError>) -> Self {
        if errors.len() == 1 {
            if let Some(error) = errors.pop() {
                return error;
            }
        }

        Self::MultipleErrors {
            count: errors.len(),
            errors,
        }
    }

    /// Returns `true` for [`DisplayError::MalformedEvent`].
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedEvent { .. })
    }

    /// Per-axis faults of a malformed event; empty for every other variant.
    #[must_use]
    pub fn faults(&self) -> &[AxisFault] {
        match self {
            Self::MalformedEvent { faults, .. } => faults,
            _ => &[],
        }
    }

    /// Derived-output faults of a malformed event; empty for every other variant.
    #[must_use]
    pub fn derived_faults(&self) -> &[DerivedFault] {
        match self {
            Self::MalformedEvent { derived, .. } => derived,
            _ => &[],
        }
    }

    /// Axes that failed, in axis order.
    #[must_use]
    pub fn failed_axes(&self) -> Vec<Axis> {
        self.faults().iter().map(|fault| fault.axis).collect()
    }
}

/// Specialized Result type for sensor display operations
pub type Result<T> = std::result::Result<T, DisplayError>;
