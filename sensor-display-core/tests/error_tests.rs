// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sensor_display_core::{
    Axis, AxisFault, DerivedFault, DerivedOutput, DisplayError, MalformedReason,
};

#[test]
fn test_malformed_event_display_lists_faults() {
    let err = DisplayError::malformed(
        "sensor_data",
        vec![
            AxisFault::new(Axis::X, MalformedReason::NotNumeric { found: "string" }),
            AxisFault::new(Axis::Z, MalformedReason::MissingField),
        ],
    );

    assert_eq!(
        err.to_string(),
        "Malformed `sensor_data` event: x: expected a number, found string; z: missing field"
    );
}

#[test]
fn test_missing_slot_display() {
    let err = DisplayError::malformed(
        "sensor_data",
        vec![AxisFault::new(
            Axis::Y,
            MalformedReason::MissingSlot {
                slot: "y".to_string(),
            },
        )],
    );

    assert_eq!(
        err.to_string(),
        "Malformed `sensor_data` event: y: output slot `y` does not exist"
    );
}

#[test]
fn test_derived_faults_are_malformed_event() {
    let err = DisplayError::malformed_derived(
        "sensor_data",
        vec![
            DerivedFault::new(
                DerivedOutput::Magnitude,
                MalformedReason::NonFinite {
                    value: f64::INFINITY,
                },
            ),
            DerivedFault::new(
                DerivedOutput::Status,
                MalformedReason::MissingSlot {
                    slot: "status".to_string(),
                },
            ),
        ],
    );

    assert!(err.is_malformed());
    assert!(err.failed_axes().is_empty());
    assert_eq!(err.derived_faults().len(), 2);
    assert_eq!(
        err.to_string(),
        "Malformed `sensor_data` event: magnitude: non-finite value inf; status: output slot `status` does not exist"
    );
}

#[test]
fn test_failed_axes_in_axis_order() {
    let err = DisplayError::malformed(
        "sensor_data",
        vec![
            AxisFault::new(Axis::Y, MalformedReason::MissingField),
            AxisFault::new(Axis::Z, MalformedReason::NonFinite { value: f64::NAN }),
        ],
    );

    assert!(err.is_malformed());
    assert_eq!(err.failed_axes(), vec![Axis::Y, Axis::Z]);
}

#[test]
fn test_non_malformed_errors_have_no_faults() {
    let err = DisplayError::channel_closed("sensor_data");

    assert!(!err.is_malformed());
    assert!(err.faults().is_empty());
    assert_eq!(err.to_string(), "Channel closed while handling `sensor_data`");
}

#[test]
fn test_from_errors_keeps_single_error() {
    let err = DisplayError::from_errors(vec![DisplayError::config("bad slot id")]);

    assert!(matches!(err, DisplayError::Config { .. }));
}

#[test]
fn test_from_errors_aggregates_many() {
    let err = DisplayError::from_errors(vec![
        DisplayError::config("one"),
        DisplayError::channel_closed("sensor_data"),
    ]);

    assert!(matches!(err, DisplayError::MultipleErrors { count: 2, .. }));
    assert_eq!(err.to_string(), "Multiple errors occurred: 2 errors");
}
