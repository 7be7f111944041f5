// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the showcase application.

use super::Message;
use crate::bus::ErrorBus;
use crate::ui::indicator;
use iced::Subscription;

/// Listens to `bus` while the indicator is mounted.
///
/// Returning `Subscription::none()` unmounts the listener, which drops its
/// bus subscription; errors published afterwards are discarded.
pub fn create_indicator_subscription(bus: &ErrorBus, mounted: bool) -> Subscription<Message> {
    if mounted {
        indicator::subscription(bus).map(Message::Indicator)
    } else {
        Subscription::none()
    }
}
