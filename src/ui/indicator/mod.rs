// SPDX-License-Identifier: MPL-2.0
//! Global error indicator.
//!
//! Listens to an [`ErrorBus`], drops suppressed background errors, and shows
//! at most one error at a time as a dismissible toast. A newer error replaces
//! the displayed one (never queued) and plays a short replace transition.
//!
//! # Components
//!
//! - [`state`] - `Indicator` state machine, `ErrorInfo`, messages and effects
//! - [`suppress`] - Fixed suppression list for background-sync failures
//! - [`toast`] - Toast rendering
//!
//! # Usage
//!
//! ```ignore
//! // Mount: return the subscription while the indicator is on screen.
//! fn subscription(&self) -> Subscription<Message> {
//!     indicator::subscription(&self.bus).map(Message::Indicator)
//! }
//!
//! // Update: forward messages, map the follow-up task back.
//! Message::Indicator(msg) => self.indicator.update(msg).map(Message::Indicator),
//!
//! // View: overlay the toast on top of the screen.
//! stack![content, Toast::view_overlay(&self.indicator, &self.i18n).map(Message::Indicator)]
//! ```

mod state;
mod suppress;
mod toast;

pub use state::{Effect, ErrorId, ErrorInfo, Indicator, Message, State, REPLACE_TRANSITION};
pub use suppress::{is_suppressed, matching_pattern, SUPPRESSED_PATTERNS};
pub use toast::Toast;

use crate::bus::{BusSubscription, ErrorBus};
use iced::{Subscription, Task};
use std::time::Duration;

/// Waits `after`, then yields `id`. Backs the replace settle timer.
pub async fn settle_after(id: ErrorId, after: Duration) -> ErrorId {
    tokio::time::sleep(after).await;
    id
}

impl Effect {
    /// Turns the effect into an Iced task.
    pub fn into_task(self) -> Task<Message> {
        match self {
            Effect::None => Task::none(),
            Effect::ScheduleSettle { id, after } => {
                Task::perform(settle_after(id, after), Message::ReplaceSettled)
            }
        }
    }
}

impl Indicator {
    /// Applies a message and returns the follow-up task.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.handle_message(message).into_task()
    }

    /// Applies every event already queued on `subscription`.
    ///
    /// For hosts that pump the bus themselves instead of using
    /// [`subscription`]. The returned effect is the latest settle to schedule.
    pub fn drain(&mut self, subscription: &mut BusSubscription) -> Effect {
        let mut effect = Effect::None;
        while let Some(event) = subscription.try_next() {
            effect = effect.then(self.receive(event));
        }
        effect
    }
}

/// Iced subscription feeding `bus` events to the indicator.
///
/// The bus subscription is held only while this is returned from the
/// application's `subscription()`.
pub fn subscription(bus: &ErrorBus) -> Subscription<Message> {
    bus.subscription().map(Message::Received)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn settle_fires_after_the_transition() {
        let id = ErrorId::new();
        let start = tokio::time::Instant::now();

        let settled = settle_after(id, REPLACE_TRANSITION).await;

        assert_eq!(settled, id);
        assert!(start.elapsed() >= Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn late_settle_after_dismiss_is_inert() {
        let mut indicator = Indicator::new();
        indicator.receive(crate::bus::ErrorEvent::new("Network unreachable"));
        let Effect::ScheduleSettle { id, after } =
            indicator.receive(crate::bus::ErrorEvent::new("Disk full"))
        else {
            panic!("replacement schedules a settle");
        };

        let timer = tokio::spawn(settle_after(id, after));
        indicator.dismiss();
        let fired = timer.await.expect("timer task");

        let _ = indicator.update(Message::ReplaceSettled(fired));
        assert_eq!(indicator.state(), &State::Hidden);
    }

    #[test]
    fn drain_applies_queued_events_in_order() {
        let bus = ErrorBus::new();
        let mut subscription = bus.subscribe();
        let mut indicator = Indicator::new();

        bus.publish("Network unreachable");
        bus.publish("Disk full");
        bus.publish("后台同步失败");

        let effect = drain_effect_id(indicator.drain(&mut subscription));
        assert_eq!(indicator.current().map(ErrorInfo::id), Some(effect));
        assert_eq!(indicator.current().map(ErrorInfo::message), Some("Disk full"));
        assert!(indicator.is_replacing());
    }

    fn drain_effect_id(effect: Effect) -> ErrorId {
        match effect {
            Effect::ScheduleSettle { id, .. } => id,
            Effect::None => panic!("expected a settle"),
        }
    }

    #[test]
    fn drain_with_nothing_queued_is_noop() {
        let bus = ErrorBus::new();
        let mut subscription = bus.subscribe();
        let mut indicator = Indicator::new();
        assert_eq!(indicator.drain(&mut subscription), Effect::None);
        assert!(!indicator.is_visible());
    }
}
