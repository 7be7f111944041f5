// SPDX-License-Identifier: MPL-2.0
//! Single-slot error state and its transitions.
//!
//! ```text
//! Hidden ──event──▶ Showing(e1) ──event──▶ Replacing(e2) ──settle(e2)──▶ Showing(e2)
//!    ▲                   │                      │
//!    └─────dismiss───────┴──────────────────────┘
//! ```
//!
//! A replacement schedules a settle timer tagged with the new error's id.
//! The timer only has an effect while the indicator is still replacing that
//! same error; anything else makes it inert.

use super::suppress;
use crate::bus::ErrorEvent;
use crate::config::defaults::REPLACE_TRANSITION_MS;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// How long the replace transition lasts.
pub const REPLACE_TRANSITION: Duration = Duration::from_millis(REPLACE_TRANSITION_MS);

/// Unique identifier for a displayed error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ErrorId(u64);

impl ErrorId {
    /// Creates a new unique error ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ErrorId {
    fn default() -> Self {
        Self::new()
    }
}

/// An error accepted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    id: ErrorId,
    message: String,
    timestamp: DateTime<Utc>,
}

impl ErrorInfo {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: ErrorId::new(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> ErrorId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// When the error was received.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Display state. Replacing without an error is unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum State {
    #[default]
    Hidden,
    Showing(ErrorInfo),
    /// Content already switched to the new error, transition still running.
    Replacing(ErrorInfo),
}

impl State {
    #[must_use]
    pub fn error(&self) -> Option<&ErrorInfo> {
        match self {
            State::Hidden => None,
            State::Showing(error) | State::Replacing(error) => Some(error),
        }
    }
}

/// Messages driving the indicator.
#[derive(Debug, Clone)]
pub enum Message {
    /// An event arrived from the bus.
    Received(ErrorEvent),
    /// The user closed the toast.
    Dismiss,
    /// The replace transition for this error has elapsed.
    ReplaceSettled(ErrorId),
}

/// Follow-up work requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Deliver `Message::ReplaceSettled(id)` after `after`.
    ScheduleSettle { id: ErrorId, after: Duration },
}

impl Effect {
    /// Combines two effects from consecutive transitions, keeping the latest
    /// scheduled settle.
    #[must_use]
    pub fn then(self, next: Effect) -> Effect {
        match next {
            Effect::None => self,
            scheduled => scheduled,
        }
    }
}

/// Error indicator state machine.
#[derive(Debug, Clone, Default)]
pub struct Indicator {
    state: State,
}

impl Indicator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// The error currently displayed.
    #[must_use]
    pub fn current(&self) -> Option<&ErrorInfo> {
        self.state.error()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        !matches!(self.state, State::Hidden)
    }

    #[must_use]
    pub fn is_replacing(&self) -> bool {
        matches!(self.state, State::Replacing(_))
    }

    /// Applies an incoming bus event.
    ///
    /// Suppressed messages leave the state untouched. Otherwise the new error
    /// is shown immediately, replacing any current one.
    pub fn receive(&mut self, event: ErrorEvent) -> Effect {
        if let Some(pattern) = suppress::matching_pattern(&event.message) {
            tracing::debug!(text = %event.message, pattern, "background error suppressed");
            return Effect::None;
        }

        let error = ErrorInfo::new(event.message);
        tracing::warn!(id = ?error.id(), text = %error.message(), "showing error");

        match std::mem::take(&mut self.state) {
            State::Hidden => {
                self.state = State::Showing(error);
                Effect::None
            }
            State::Showing(previous) | State::Replacing(previous) => {
                tracing::trace!(replaced = ?previous.id(), by = ?error.id(), "error replaced");
                let id = error.id();
                self.state = State::Replacing(error);
                Effect::ScheduleSettle {
                    id,
                    after: REPLACE_TRANSITION,
                }
            }
        }
    }

    /// Clears everything. Pending settle timers become inert.
    pub fn dismiss(&mut self) {
        if let Some(error) = self.current() {
            tracing::trace!(id = ?error.id(), "error dismissed");
        }
        self.state = State::Hidden;
    }

    /// Ends the replace transition for `id`.
    ///
    /// Returns false, leaving the state untouched, when `id` is not the error
    /// being replaced (dismissed or superseded since the timer started).
    pub fn settle(&mut self, id: ErrorId) -> bool {
        match std::mem::take(&mut self.state) {
            State::Replacing(error) if error.id() == id => {
                self.state = State::Showing(error);
                true
            }
            other => {
                tracing::trace!(id = ?id, "stale settle timer ignored");
                self.state = other;
                false
            }
        }
    }

    /// Applies a message and returns the follow-up effect.
    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::Received(event) => self.receive(event),
            Message::Dismiss => {
                self.dismiss();
                Effect::None
            }
            Message::ReplaceSettled(id) => {
                self.settle(id);
                Effect::None
            }
        }
    }
}
