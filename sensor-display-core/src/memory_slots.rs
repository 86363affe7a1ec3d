// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::output_slots::{OutputSlots, SlotError};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Default)]
struct SlotTable {
    texts: BTreeMap<String, String>,
    writes: usize,
}

/// In-memory display surface.
///
/// Only declared slots accept writes. Clones share the same table, so one handle can be given
/// to a [`OutputSlots`] consumer while another inspects the rendered text.
///
/// ```
/// use sensor_display_core::{MemorySlots, OutputSlots};
///
/// let slots = MemorySlots::with_slots(["x", "y", "z"]);
/// let mut writer = slots.clone();
///
/// writer.set_text("x", "1.00").unwrap();
/// assert_eq!(slots.text("x").as_deref(), Some("1.00"));
/// assert!(writer.set_text("w", "2.00").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySlots {
    table: Arc<Mutex<SlotTable>>,
}

impl MemorySlots {
    /// Surface with no slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface with the given slots declared and empty.
    pub fn with_slots<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slots = Self::new();
        for id in ids {
            slots.declare(id);
        }
        slots
    }

    /// Declares a slot. Existing text is kept.
    pub fn declare(&self, id: impl Into<String>) {
        self.table.lock().texts.entry(id.into()).or_default();
    }

    /// Current text of a slot, `None` if it was never declared.
    #[must_use]
    pub fn text(&self, id: &str) -> Option<String> {
        self.table.lock().texts.get(id).cloned()
    }

    /// Copy of every slot and its text.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.table.lock().texts.clone()
    }

    /// Number of successful writes since creation.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.table.lock().writes
    }
}

impl OutputSlots for MemorySlots {
    fn set_text(&mut self, slot: &str, text: &str) -> Result<(), SlotError> {
        let mut table = self.table.lock();
        let entry = table
            .texts
            .get_mut(slot)
            .ok_or_else(|| SlotError::unknown(slot))?;

        text.clone_into(entry);
        table.writes += 1;
        Ok(())
    }
}
