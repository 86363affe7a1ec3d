// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Error returned by a display surface that cannot take a write.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    /// No slot with this id exists on the surface.
    #[error("Unknown output slot `{slot}`")]
    UnknownSlot {
        /// Id that was looked up
        slot: String,
    },
}

impl SlotError {
    pub fn unknown(slot: impl Into<String>) -> Self {
        Self::UnknownSlot { slot: slot.into() }
    }
}

/// Addressable text slots of a display surface.
///
/// Decouples rendering from the host that owns the slots, so formatting and routing can be
/// tested without a real UI.
pub trait OutputSlots {
    /// Replaces the text of `slot` with `text`.
    ///
    /// # Errors
    ///
    /// [`SlotError::UnknownSlot`] when the surface has no such slot. The surface must not be
    /// modified in that case.
    fn set_text(&mut self, slot: &str, text: &str) -> Result<(), SlotError>;
}

impl<T: OutputSlots + ?Sized> OutputSlots for &mut T {
    fn set_text(&mut self, slot: &str, text: &str) -> Result<(), SlotError> {
        (**self).set_text(slot, text)
    }
}

impl<T: OutputSlots + ?Sized> OutputSlots for Box<T> {
    fn set_text(&mut self, slot: &str, text: &str) -> Result<(), SlotError> {
        (**self).set_text(slot, text)
    }
}
