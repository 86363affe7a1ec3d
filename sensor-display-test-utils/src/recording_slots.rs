// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sensor_display_core::{OutputSlots, SlotError};
use std::collections::BTreeMap;

/// Output surface that keeps an ordered log of writes.
///
/// Every slot exists unless it was named in [`without`](Self::without).
#[derive(Debug, Clone, Default)]
pub struct RecordingSlots {
    writes: Vec<(String, String)>,
    missing: Vec<String>,
}

impl RecordingSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface on which the given slots do not exist.
    pub fn without<I, S>(missing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            writes: Vec::new(),
            missing: missing.into_iter().map(Into::into).collect(),
        }
    }

    /// All successful writes, oldest first.
    pub fn writes(&self) -> &[(String, String)] {
        &self.writes
    }

    /// Last text written to each slot.
    pub fn latest(&self) -> BTreeMap<String, String> {
        self.writes.iter().cloned().collect()
    }
}

impl OutputSlots for RecordingSlots {
    fn set_text(&mut self, slot: &str, text: &str) -> Result<(), SlotError> {
        if self.missing.iter().any(|missing| missing == slot) {
            return Err(SlotError::unknown(slot));
        }
        self.writes.push((slot.to_owned(), text.to_owned()));
        Ok(())
    }
}
