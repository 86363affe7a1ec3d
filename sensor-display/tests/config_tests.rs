// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sensor_display::{Axis, DisplayConfig, DisplayError, StatusConfig, SENSOR_DATA_EVENT};

#[test]
fn test_default_config_routes_axes_to_same_named_slots() {
    let config = DisplayConfig::default();

    assert_eq!(config.event, SENSOR_DATA_EVENT);
    assert_eq!(config.slots.slot(Axis::X), "x");
    assert_eq!(config.slots.slot(Axis::Y), "y");
    assert_eq!(config.slots.slot(Axis::Z), "z");
    assert_eq!(config.magnitude_slot, None);
    assert_eq!(config.status, None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_document_yields_defaults() -> anyhow::Result<()> {
    let config = DisplayConfig::from_toml_str("")?;

    assert_eq!(config, DisplayConfig::default());
    Ok(())
}

#[test]
fn test_partial_document_keeps_remaining_defaults() -> anyhow::Result<()> {
    // Arrange
    let source = r#"
        magnitude_slot = "magnitude"

        [slots]
        z = "altitude"
    "#;

    // Act
    let config = DisplayConfig::from_toml_str(source)?;

    // Assert
    assert_eq!(config.event, SENSOR_DATA_EVENT);
    assert_eq!(config.slots.slot(Axis::X), "x");
    assert_eq!(config.slots.slot(Axis::Z), "altitude");
    assert_eq!(config.slot_ids(), vec!["x", "y", "altitude", "magnitude"]);
    Ok(())
}

#[test]
fn test_unknown_key_is_rejected() {
    let err = DisplayConfig::from_toml_str("refresh_rate = 10").unwrap_err();

    assert!(matches!(err, DisplayError::Config { .. }));
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = DisplayConfig::from_toml_str("event = ").unwrap_err();

    assert!(err.to_string().starts_with("Configuration error:"));
}

#[test]
fn test_empty_event_name_is_rejected() {
    let err = DisplayConfig::from_toml_str(r#"event = " ""#).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Configuration error: event name must not be empty"
    );
}

#[test]
fn test_empty_slot_id_is_rejected() {
    let err = DisplayConfig::from_toml_str("[slots]\ny = \"\"").unwrap_err();

    assert_eq!(
        err.to_string(),
        "Configuration error: slot ids must not be empty"
    );
}

#[test]
fn test_shared_slot_is_rejected() {
    // Arrange
    let config = DisplayConfig {
        magnitude_slot: Some("x".to_string()),
        ..DisplayConfig::default()
    };

    // Act
    let err = config.validate().unwrap_err();

    // Assert
    assert_eq!(
        err.to_string(),
        "Configuration error: slot `x` is assigned more than once"
    );
}

#[test]
fn test_empty_status_table_uses_default_thresholds() -> anyhow::Result<()> {
    let config = DisplayConfig::from_toml_str("[status]")?;

    assert_eq!(config.status, Some(StatusConfig::default()));
    assert_eq!(config.slot_ids(), vec!["x", "y", "z", "status"]);
    Ok(())
}

#[test]
fn test_custom_status_thresholds() -> anyhow::Result<()> {
    // Arrange
    let source = r#"
        [status]
        slot = "band"
        warn_at = 9.5
        alert_at = 12.0
    "#;

    // Act
    let config = DisplayConfig::from_toml_str(source)?;

    // Assert
    let status = config.status.expect("status configured");
    assert_eq!(status.slot, "band");
    assert_eq!(status.warn_at, 9.5);
    assert_eq!(status.alert_at, 12.0);
    Ok(())
}

#[test]
fn test_inverted_status_thresholds_are_rejected() {
    let err = DisplayConfig::from_toml_str("[status]\nwarn_at = 3.0\nalert_at = 2.0").unwrap_err();

    assert!(matches!(err, DisplayError::Config { .. }));
    assert!(err.to_string().contains("warn_at <= alert_at"));
}

#[test]
fn test_status_slot_must_not_shadow_an_axis() {
    let err = DisplayConfig::from_toml_str("[status]\nslot = \"z\"").unwrap_err();

    assert_eq!(
        err.to_string(),
        "Configuration error: slot `z` is assigned more than once"
    );
}
