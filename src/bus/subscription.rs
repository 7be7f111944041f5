// SPDX-License-Identifier: MPL-2.0
//! Subscriptions to an [`ErrorBus`], and the Iced adapter that streams bus
//! events into an application's message loop.

use super::{ErrorBus, ErrorEvent, GLOBAL_ERROR_CHANNEL};
use iced::futures::{SinkExt, Stream};
use iced::stream;
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};

/// Live subscription to a bus. Released when dropped.
#[derive(Debug)]
pub struct BusSubscription {
    receiver: broadcast::Receiver<ErrorEvent>,
}

impl BusSubscription {
    pub(super) fn new(receiver: broadcast::Receiver<ErrorEvent>) -> Self {
        Self { receiver }
    }

    /// Returns the next queued event without waiting.
    ///
    /// Events skipped because this subscriber fell behind are logged and
    /// passed over; only the most recent errors matter for display.
    pub fn try_next(&mut self) -> Option<ErrorEvent> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Some(event),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(channel = GLOBAL_ERROR_CHANNEL, skipped, "subscriber lagged");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => return None,
            }
        }
    }

    /// Waits for the next event. Returns `None` once every bus handle is gone.
    pub async fn next(&mut self) -> Option<ErrorEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(channel = GLOBAL_ERROR_CHANNEL, skipped, "subscriber lagged");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}

impl ErrorBus {
    /// Iced subscription yielding every event published on this bus.
    ///
    /// The bus subscription lives exactly as long as the Iced subscription:
    /// once the application stops returning it from `subscription()`, the
    /// stream and its receiver are dropped.
    pub fn subscription(&self) -> iced::Subscription<ErrorEvent> {
        iced::Subscription::run_with(self.clone(), event_stream)
    }
}

fn event_stream(bus: &ErrorBus) -> impl Stream<Item = ErrorEvent> {
    let bus = bus.clone();
    stream::channel(super::CHANNEL_CAPACITY, move |mut output: iced::futures::channel::mpsc::Sender<ErrorEvent>| async move {
        let mut subscription = bus.subscribe();
        tracing::debug!(channel = GLOBAL_ERROR_CHANNEL, bus = ?bus.id(), "listener mounted");

        while let Some(event) = subscription.next().await {
            if output.send(event).await.is_err() {
                break;
            }
        }

        tracing::debug!(channel = GLOBAL_ERROR_CHANNEL, bus = ?bus.id(), "listener stopped");
    })
}
