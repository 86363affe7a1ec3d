// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use futures::stream::{Stream, StreamExt};
use sensor_display_core::{DisplayError, Result};
use tokio_util::sync::CancellationToken;

/// Outcome of a finished subscription.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubscriptionSummary {
    /// Items handed to the handler
    pub processed: usize,
    /// Items whose handler returned an error
    pub failed: usize,
    /// `true` if the subscription stopped because of the cancellation token
    pub cancelled: bool,
}

/// Extension trait driving a stream through a synchronous handler.
///
/// Items are handled one at a time, in arrival order, each to completion before the next one is
/// pulled from the stream.
#[async_trait]
pub trait SubscribeExt<T>: Stream<Item = T> + Sized {
    /// Subscribes to the stream, routing handler errors to `on_error`.
    ///
    /// # Behavior
    ///
    /// - Calls `on_next` for every item, sequentially
    /// - A failing item is passed to `on_error` and processing continues
    /// - Stops when the stream ends or the cancellation token fires; a cancelled token is
    ///   noticed even while waiting for the next item
    ///
    /// # Examples
    ///
    /// ```
    /// use futures::stream;
    /// use sensor_display_exec::SubscribeExt;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let mut seen = Vec::new();
    /// let mut errors = Vec::new();
    ///
    /// let summary = stream::iter(vec![1, -2, 3])
    ///     .subscribe(
    ///         |item: i32| {
    ///             if item < 0 {
    ///                 return Err(format!("negative: {item}"));
    ///             }
    ///             seen.push(item);
    ///             Ok(())
    ///         },
    ///         |err| errors.push(err),
    ///         None,
    ///     )
    ///     .await;
    ///
    /// assert_eq!(seen, vec![1, 3]);
    /// assert_eq!(errors, vec!["negative: -2".to_string()]);
    /// assert_eq!(summary.failed, 1);
    /// # }
    /// ```
    async fn subscribe<F, E, OnError>(
        self,
        on_next: F,
        on_error: OnError,
        cancellation_token: Option<CancellationToken>,
    ) -> SubscriptionSummary
    where
        F: FnMut(T) -> core::result::Result<(), E> + Send,
        OnError: FnMut(E) + Send,
        E: Send;

    /// Subscribes without an error callback.
    ///
    /// # Errors
    ///
    /// Handler errors are collected and returned once the subscription ends, as the error
    /// itself when there is one and as [`DisplayError::MultipleErrors`] otherwise.
    async fn try_subscribe<F>(
        self,
        on_next: F,
        cancellation_token: Option<CancellationToken>,
    ) -> Result<SubscriptionSummary>
    where
        F: FnMut(T) -> Result<()> + Send;
}

#[async_trait]
impl<S, T> SubscribeExt<T> for S
where
    S: Stream<Item = T> + Send + Unpin,
    T: Send,
{
    async fn subscribe<F, E, OnError>(
        mut self,
        mut on_next: F,
        mut on_error: OnError,
        cancellation_token: Option<CancellationToken>,
    ) -> SubscriptionSummary
    where
        F: FnMut(T) -> core::result::Result<(), E> + Send,
        OnError: FnMut(E) + Send,
        E: Send,
    {
        let cancellation_token = cancellation_token.unwrap_or_default();
        let mut summary = SubscriptionSummary::default();

        loop {
            let item = tokio::select! {
                biased;
                () = cancellation_token.cancelled() => {
                    summary.cancelled = true;
                    break;
                }
                item = self.next() => match item {
                    Some(item) => item,
                    None => break,
                },
            };

            summary.processed += 1;
            if let Err(error) = on_next(item) {
                summary.failed += 1;
                on_error(error);
            }
        }

        tracing::debug!(
            processed = summary.processed,
            failed = summary.failed,
            cancelled = summary.cancelled,
            "subscription finished"
        );

        summary
    }

    async fn try_subscribe<F>(
        self,
        on_next: F,
        cancellation_token: Option<CancellationToken>,
    ) -> Result<SubscriptionSummary>
    where
        F: FnMut(T) -> Result<()> + Send,
    {
        let mut collected = Vec::new();
        let summary = self
            .subscribe(on_next, |error| collected.push(error), cancellation_token)
            .await;

        if collected.is_empty() {
            Ok(summary)
        } else {
            Err(DisplayError::from_errors(collected))
        }
    }
}
