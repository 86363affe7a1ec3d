// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the sensor display workspace.
//!
//! This crate is meant for tests only. It provides:
//!
//! - `test_data` - payload and sample fixtures, including malformed payloads
//! - `recording_slots` - an output surface that records every write in order
//! - `helpers` - stream assertion helpers
//! - [`test_channel`] - a push-style channel standing in for a real-time connection
//!
//! ```rust
//! use sensor_display_test_utils::{test_channel, test_data::sample_tilted};
//! use futures::StreamExt;
//!
//! # async fn example() {
//! let (tx, mut events) = test_channel();
//!
//! tx.send(sample_tilted().to_payload()).unwrap();
//!
//! let payload = events.next().await.unwrap();
//! assert_eq!(payload["y"], -2.1);
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod recording_slots;
pub mod test_data;

use futures::Stream;
use serde_json::Value;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

// Re-export commonly used test utilities
pub use helpers::{assert_no_element_emitted, expect_next_payload};
pub use recording_slots::RecordingSlots;

/// Creates an unbounded channel of event payloads.
///
/// Sending pushes a payload to the stream side; dropping the sender ends the stream.
pub fn test_channel() -> (
    mpsc::UnboundedSender<Value>,
    impl Stream<Item = Value> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, UnboundedReceiverStream::new(rx))
}
