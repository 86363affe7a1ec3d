// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! In-process, hot, multi-subscriber hub of named events.
//!
//! An [`EventHub`] plays the role of a real-time channel: producers `emit` named events and
//! every current subscriber of that name receives the payload.
//!
//! ## Characteristics
//!
//! - **Hot**: late subscribers only see events emitted after they subscribed.
//! - **Unbounded**: no backpressure, a slow subscriber queues events.
//! - **Thread-safe**: cheap to clone; all clones share the same routes.
//! - **Close**: closing completes every subscriber stream and rejects further use.
//!
//! ## Example
//!
//! ```
//! use sensor_display_core::{EventHub, SensorSample, SENSOR_DATA_EVENT};
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let hub = EventHub::new();
//! let mut events = hub.subscribe(SENSOR_DATA_EVENT).unwrap();
//!
//! hub.emit(SENSOR_DATA_EVENT, SensorSample::new(1.0, 2.0, 3.0).to_payload()).unwrap();
//! hub.emit("status", serde_json::json!("ignored")).unwrap();
//! hub.close();
//!
//! assert_eq!(events.next().await.unwrap()["x"], 1.0);
//! assert_eq!(events.next().await, None);
//! # }
//! ```

use crate::error::{DisplayError, Result};
use crate::event::ChannelEvent;
use async_channel::Sender;
use core::pin::Pin;
use futures::stream::Stream;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Stream of payloads for one event name.
pub type EventStream = Pin<Box<dyn Stream<Item = Value> + Send + 'static>>;

/// Source of named events.
///
/// Injected into consumers instead of a process-wide connection handle.
pub trait RealtimeChannel {
    /// Subscribes to every future event called `event`.
    ///
    /// # Errors
    ///
    /// [`DisplayError::ChannelClosed`] when the channel no longer delivers events.
    fn on(&self, event: &str) -> Result<EventStream>;
}

#[derive(Default)]
struct HubState {
    closed: bool,
    routes: HashMap<String, Vec<Sender<Value>>>,
}

/// Hot broadcaster of named events.
///
/// See the [module documentation](crate::event_hub) for details.
#[derive(Clone, Default)]
pub struct EventHub {
    state: Arc<Mutex<HubState>>,
}

impl EventHub {
    /// Creates an open hub with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to `event`.
    ///
    /// # Errors
    ///
    /// [`DisplayError::ChannelClosed`] after [`close`](Self::close).
    pub fn subscribe(&self, event: &str) -> Result<EventStream> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(DisplayError::channel_closed(event));
        }

        let (tx, rx) = async_channel::unbounded();
        state.routes.entry(event.to_owned()).or_default().push(tx);
        tracing::debug!(event, "subscriber attached");

        Ok(Box::pin(rx))
    }

    /// Delivers `event` to all current subscribers of its name.
    ///
    /// Returns how many subscribers received it. Subscribers whose stream was dropped are
    /// pruned here.
    ///
    /// # Errors
    ///
    /// [`DisplayError::ChannelClosed`] after [`close`](Self::close).
    pub fn send(&self, event: ChannelEvent) -> Result<usize> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(DisplayError::channel_closed(event.name));
        }

        let Some(senders) = state.routes.get_mut(&event.name) else {
            tracing::debug!(event = %event.name, "no subscribers");
            return Ok(0);
        };

        senders.retain(|tx| tx.try_send(event.payload.clone()).is_ok());
        let delivered = senders.len();
        if senders.is_empty() {
            state.routes.remove(&event.name);
        }

        Ok(delivered)
    }

    /// Convenience wrapper around [`send`](Self::send).
    ///
    /// # Errors
    ///
    /// [`DisplayError::ChannelClosed`] after [`close`](Self::close).
    pub fn emit(&self, event: impl Into<String>, payload: Value) -> Result<usize> {
        self.send(ChannelEvent::new(event, payload))
    }

    /// Closes the hub, completing all subscriber streams.
    ///
    /// Idempotent.
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        state.routes.clear();
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Number of subscribers of `event`.
    ///
    /// Dropped subscribers are only removed on the next send to that event.
    #[must_use]
    pub fn subscriber_count(&self, event: &str) -> usize {
        self.state.lock().routes.get(event).map_or(0, Vec::len)
    }
}

impl RealtimeChannel for EventHub {
    fn on(&self, event: &str) -> Result<EventStream> {
        self.subscribe(event)
    }
}
