// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests for the error bus feeding the error indicator.

#[cfg(test)]
mod tests {
    use iced_frost::bus::ErrorBus;
    use iced_frost::ui::indicator::{settle_after, Effect, Indicator, Message, State};

    fn settle_id(effect: Effect) -> iced_frost::ui::indicator::ErrorId {
        match effect {
            Effect::ScheduleSettle { id, .. } => id,
            Effect::None => panic!("expected a scheduled settle"),
        }
    }

    #[test]
    fn first_error_is_shown() {
        let bus = ErrorBus::new();
        let mut subscription = bus.subscribe();
        let mut indicator = Indicator::new();

        bus.publish("Network unreachable");
        assert_eq!(indicator.drain(&mut subscription), Effect::None);

        assert!(matches!(indicator.state(), State::Showing(e) if e.message() == "Network unreachable"));
    }

    #[tokio::test(start_paused = true)]
    async fn newer_error_replaces_then_settles() {
        let bus = ErrorBus::new();
        let mut subscription = bus.subscribe();
        let mut indicator = Indicator::new();

        bus.publish("Network unreachable");
        indicator.drain(&mut subscription);
        bus.publish("Disk full");
        let effect = indicator.drain(&mut subscription);

        assert!(matches!(indicator.state(), State::Replacing(e) if e.message() == "Disk full"));

        let Effect::ScheduleSettle { id, after } = effect else {
            panic!("replacement schedules a settle");
        };
        let fired = settle_after(id, after).await;
        indicator.handle_message(Message::ReplaceSettled(fired));

        assert!(matches!(indicator.state(), State::Showing(e) if e.message() == "Disk full"));
    }

    #[test]
    fn suppressed_errors_never_show() {
        let bus = ErrorBus::new();
        let mut subscription = bus.subscribe();
        let mut indicator = Indicator::new();

        bus.publish("后台同步失败");
        bus.publish("保存播放记录失败: timeout");
        indicator.drain(&mut subscription);

        assert_eq!(indicator.state(), &State::Hidden);
    }

    #[test]
    fn suppressed_error_keeps_the_current_one() {
        let bus = ErrorBus::new();
        let mut subscription = bus.subscribe();
        let mut indicator = Indicator::new();

        bus.publish("Disk full");
        bus.publish("后台同步收藏失败");
        indicator.drain(&mut subscription);

        assert!(matches!(indicator.state(), State::Showing(e) if e.message() == "Disk full"));
    }

    #[test]
    fn only_the_latest_settle_applies() {
        let bus = ErrorBus::new();
        let mut subscription = bus.subscribe();
        let mut indicator = Indicator::new();

        bus.publish("A");
        indicator.drain(&mut subscription);
        bus.publish("B");
        let stale = settle_id(indicator.drain(&mut subscription));
        bus.publish("C");
        let latest = settle_id(indicator.drain(&mut subscription));

        assert!(!indicator.settle(stale));
        assert!(indicator.is_replacing());
        assert!(indicator.settle(latest));
        assert!(matches!(indicator.state(), State::Showing(e) if e.message() == "C"));
    }

    #[test]
    fn dismiss_hides_and_next_error_shows_again() {
        let bus = ErrorBus::new();
        let mut subscription = bus.subscribe();
        let mut indicator = Indicator::new();

        bus.publish("Network unreachable");
        indicator.drain(&mut subscription);
        indicator.handle_message(Message::Dismiss);
        assert_eq!(indicator.state(), &State::Hidden);

        bus.publish("Disk full");
        assert_eq!(indicator.drain(&mut subscription), Effect::None);
        assert!(matches!(indicator.state(), State::Showing(e) if e.message() == "Disk full"));
    }

    #[test]
    fn errors_published_after_unmount_are_dropped() {
        let bus = ErrorBus::new();
        let subscription = bus.subscribe();
        drop(subscription);

        bus.publish("Network unreachable");

        let mut remounted = bus.subscribe();
        let mut indicator = Indicator::new();
        indicator.drain(&mut remounted);
        assert_eq!(indicator.state(), &State::Hidden);
    }
}
