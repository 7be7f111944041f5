// SPDX-License-Identifier: MPL-2.0
//! Application-wide error bus.
//!
//! Any part of the host may publish an error message; the error indicator
//! subscribes and decides what to show. Publishing is fire-and-forget: with
//! no subscriber mounted the event is simply dropped.
//!
//! Buses are ordinary handles. Components receive the bus they should use,
//! which keeps them testable and lets several independent buses coexist. A
//! process-wide default bus backs [`trigger_global_error`] for code that has
//! no handle at hand.
//!
//! ```
//! use iced_frost::bus::ErrorBus;
//!
//! let bus = ErrorBus::new();
//! let mut subscription = bus.subscribe();
//!
//! bus.publish("Network unreachable");
//! let event = subscription.try_next().expect("delivered synchronously");
//! assert_eq!(event.message, "Network unreachable");
//! ```

mod subscription;

pub use subscription::BusSubscription;

use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use tokio::sync::broadcast;

/// Topic name of the global error channel.
pub const GLOBAL_ERROR_CHANNEL: &str = "globalError";

/// Number of events a slow subscriber may fall behind before the oldest ones
/// are skipped.
pub const CHANNEL_CAPACITY: usize = 64;

/// Payload carried by the bus. Not retained after dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEvent {
    pub message: String,
}

impl ErrorEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Unique identifier for a bus instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BusId(u64);

impl BusId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Cloneable publish/subscribe handle. Clones share the same channel.
#[derive(Debug, Clone)]
pub struct ErrorBus {
    id: BusId,
    sender: broadcast::Sender<ErrorEvent>,
}

impl ErrorBus {
    /// Creates a new, independent bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            id: BusId::next(),
            sender,
        }
    }

    /// Returns the process-wide default bus.
    pub fn global() -> &'static ErrorBus {
        static GLOBAL: OnceLock<ErrorBus> = OnceLock::new();
        GLOBAL.get_or_init(ErrorBus::new)
    }

    #[must_use]
    pub fn id(&self) -> BusId {
        self.id
    }

    /// Broadcasts `message` to every current subscriber.
    ///
    /// The event is in each subscriber's queue when this returns. Without
    /// subscribers it is dropped. Never fails.
    pub fn publish(&self, message: impl Into<String>) {
        let event = ErrorEvent::new(message);
        match self.sender.send(event) {
            Ok(receivers) => {
                tracing::trace!(
                    channel = GLOBAL_ERROR_CHANNEL,
                    receivers,
                    "error event published"
                );
            }
            Err(broadcast::error::SendError(event)) => {
                tracing::trace!(
                    channel = GLOBAL_ERROR_CHANNEL,
                    text = %event.message,
                    "no subscriber, error event dropped"
                );
            }
        }
    }

    /// Acquires a subscription. Dropping it releases the subscription.
    #[must_use]
    pub fn subscribe(&self) -> BusSubscription {
        BusSubscription::new(self.sender.subscribe())
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ErrorBus {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ErrorBus {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ErrorBus {}

impl Hash for ErrorBus {
    fn hash<H: Hasher>(&self, state: &mut H) {
        GLOBAL_ERROR_CHANNEL.hash(state);
        self.id.hash(state);
    }
}

/// Publishes `message` on the process-wide bus.
///
/// Callable from anywhere, including background tasks. Never panics.
pub fn trigger_global_error(message: impl Into<String>) {
    ErrorBus::global().publish(message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_without_subscribers_is_silent() {
        let bus = ErrorBus::new();
        assert_eq!(bus.subscriber_count(), 0);
        bus.publish("nobody listens");
    }

    #[test]
    fn every_subscriber_receives_the_event() {
        let bus = ErrorBus::new();
        let mut first = bus.subscribe();
        let mut second = bus.subscribe();

        bus.publish("Disk full");

        assert_eq!(first.try_next(), Some(ErrorEvent::new("Disk full")));
        assert_eq!(second.try_next(), Some(ErrorEvent::new("Disk full")));
        assert_eq!(first.try_next(), None);
    }

    #[test]
    fn dropping_subscription_releases_it() {
        let bus = ErrorBus::new();
        let subscription = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);
        drop(subscription);
        assert_eq!(bus.subscriber_count(), 0);
        bus.publish("after unmount");
    }

    #[test]
    fn independent_buses_do_not_cross_talk() {
        let a = ErrorBus::new();
        let b = ErrorBus::new();
        let mut on_b = b.subscribe();

        a.publish("only on a");

        assert_eq!(on_b.try_next(), None);
        assert_ne!(a, b);
    }

    #[test]
    fn clones_share_the_channel() {
        let bus = ErrorBus::new();
        let clone = bus.clone();
        let mut subscription = bus.subscribe();

        clone.publish("via clone");

        assert_eq!(subscription.try_next().map(|e| e.message), Some("via clone".into()));
        assert_eq!(bus, clone);
    }

    #[test]
    fn global_bus_is_shared() {
        let mut subscription = ErrorBus::global().subscribe();
        trigger_global_error("from anywhere");

        // Other tests may publish on the global bus concurrently.
        let mut seen = false;
        while let Some(event) = subscription.try_next() {
            seen |= event.message == "from anywhere";
        }
        assert!(seen);
    }
}
