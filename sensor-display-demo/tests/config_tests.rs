// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sensor_display::{DisplayError, SENSOR_DATA_EVENT};
use sensor_display_demo::DemoConfig;
use std::time::Duration;

#[test]
fn test_embedded_config_loads() -> anyhow::Result<()> {
    let config = DemoConfig::load()?;

    assert_eq!(config.log_level, "info");
    assert_eq!(config.display.event, SENSOR_DATA_EVENT);
    assert_eq!(config.display.magnitude_slot.as_deref(), Some("magnitude"));
    assert_eq!(
        config.display.slot_ids(),
        vec!["x", "y", "z", "magnitude", "status"]
    );
    assert_eq!(config.emitter.interval(), Duration::from_millis(100));
    assert_eq!(config.emitter.seed, None);
    Ok(())
}

#[test]
fn test_display_section_is_optional() -> anyhow::Result<()> {
    let config = DemoConfig::from_toml_str(
        r#"
        log_level = "debug"

        [emitter]
        interval_ms = 5
        amplitude = 1.0
        noise = 0.0
        seed = 7

        [console]
        interval_ms = 50
        "#,
    )?;

    assert_eq!(config.display.slot_ids(), vec!["x", "y", "z"]);
    assert_eq!(config.emitter.seed, Some(7));
    Ok(())
}

#[test]
fn test_zero_interval_is_rejected() {
    let err = DemoConfig::from_toml_str(
        r#"
        log_level = "info"

        [emitter]
        interval_ms = 0
        amplitude = 1.0
        noise = 0.0

        [console]
        interval_ms = 50
        "#,
    )
    .unwrap_err();

    assert!(matches!(err, DisplayError::Config { .. }));
}

#[test]
fn test_invalid_display_section_is_rejected() {
    let err = DemoConfig::from_toml_str(
        r#"
        log_level = "info"

        [display.slots]
        x = "y"

        [emitter]
        interval_ms = 10
        amplitude = 1.0
        noise = 0.0

        [console]
        interval_ms = 50
        "#,
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Configuration error: slot `y` is assigned more than once"
    );
}
