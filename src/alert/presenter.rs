// SPDX-License-Identifier: MPL-2.0
//! View-side driver for the alert queue.
//!
//! The presenter turns what happens in the view (timer ticks, dismiss
//! clicks, the undo button, the end of the exit transition) into controller
//! signals, and describes what the view should draw for the current alert.
//! It never paints anything itself.

use super::broadcaster::StateHandle;
use super::message::QueuedAlert;
use crate::config::Config;
use crate::domain::alert::{AlertKey, Severity};
use crate::domain::ui::AutoHideDuration;
use std::time::{Duration, Instant};

/// Why the view wants the current alert to go away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The display duration elapsed.
    Timeout,
    /// The user pressed the close button.
    CloseButton,
    /// The user clicked outside the alert.
    ClickAway,
    /// The host application closed it.
    Programmatic,
}

impl CloseReason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CloseReason::Timeout => "timeout",
            CloseReason::CloseButton => "close_button",
            CloseReason::ClickAway => "click_away",
            CloseReason::Programmatic => "programmatic",
        }
    }
}

/// Events fed to [`Presenter::handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Periodic tick for the auto-hide timer.
    Tick,
    /// Close the current alert.
    Dismiss(CloseReason),
    /// Run the current alert's undo action, then close it.
    Undo,
    /// The exit transition of the current alert finished.
    Exited,
}

/// Buttons the view should offer next to the alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Undo,
    Close,
}

/// How the current alert should be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Variant {
    /// Bare snackbar. The title is not drawn as a heading; views may use it
    /// as a tooltip.
    Plain { title: Option<String>, body: String },
    /// Category-styled alert with optional title.
    Alert {
        severity: Severity,
        title: Option<String>,
        body: String,
    },
}

/// Everything a view needs to render the current alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertView {
    /// Key for the enter/exit transition.
    pub key: AlertKey,
    /// False while the alert plays its exit transition.
    pub is_open: bool,
    pub variant: Variant,
    pub actions: Vec<Action>,
}

impl AlertView {
    fn from_alert(alert: &QueuedAlert, is_open: bool) -> Self {
        let variant = match alert.severity() {
            Some(severity) => Variant::Alert {
                severity,
                title: alert.title().map(str::to_string),
                body: alert.body().to_string(),
            },
            None => Variant::Plain {
                title: alert.title().map(str::to_string),
                body: alert.body().to_string(),
            },
        };
        // Category-styled alerts always carry a close button.
        let actions = match (alert.undo().is_some(), &variant) {
            (true, _) => vec![Action::Undo, Action::Close],
            (false, Variant::Alert { .. }) => vec![Action::Close],
            (false, Variant::Plain { .. }) => Vec::new(),
        };
        Self {
            key: alert.key(),
            is_open,
            variant,
            actions,
        }
    }
}

/// Tunables for the presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresenterSettings {
    pub auto_hide: AutoHideDuration,
    /// Whether a click outside the alert dismisses it.
    pub close_on_clickaway: bool,
}

impl From<&Config> for PresenterSettings {
    fn from(config: &Config) -> Self {
        Self {
            auto_hide: config.auto_hide(),
            close_on_clickaway: config.close_on_clickaway(),
        }
    }
}

/// Tracks when the current alert became visible and forwards view events.
#[derive(Debug, Default)]
pub struct Presenter {
    settings: PresenterSettings,
    shown: Option<(AlertKey, Instant)>,
}

impl Presenter {
    #[must_use]
    pub fn new(settings: PresenterSettings) -> Self {
        Self {
            settings,
            shown: None,
        }
    }

    #[must_use]
    pub fn settings(&self) -> PresenterSettings {
        self.settings
    }

    /// Starts the display timer if a new alert became visible.
    ///
    /// Called by [`handle`](Self::handle); hosts may also call it from a
    /// state listener so the timer starts the moment an alert appears.
    pub fn observe(&mut self, state: &StateHandle, now: Instant) {
        let visible = state
            .current()
            .filter(|_| state.is_open())
            .map(|alert| alert.key());

        match (visible, self.shown) {
            (Some(key), Some((shown_key, _))) if key == shown_key => {}
            (Some(key), _) => self.shown = Some((key, now)),
            (None, _) => {
                if state.current().is_none() {
                    self.shown = None;
                }
            }
        }
    }

    pub fn handle(&mut self, state: &StateHandle, event: Event, now: Instant) {
        self.observe(state, now);

        match event {
            Event::Tick => {
                if state.is_open() && self.remaining(now) == Some(Duration::ZERO) {
                    state.request_close_with_reason(CloseReason::Timeout.as_str());
                }
            }
            Event::Dismiss(CloseReason::ClickAway) if !self.settings.close_on_clickaway => {}
            Event::Dismiss(reason) => state.request_close_with_reason(reason.as_str()),
            Event::Undo => {
                let Some(alert) = state.current() else {
                    return;
                };
                let Some(undo) = alert.undo() else {
                    return;
                };
                undo.invoke();
                state.note_undo(alert.key());
                state.request_close_with_reason("undo");
            }
            Event::Exited => {
                state.on_exited();
                self.observe(state, now);
            }
        }
    }

    /// Time left before the visible alert auto-hides.
    ///
    /// `None` when no alert is being timed.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let (_, shown_at) = self.shown?;
        let elapsed = now.saturating_duration_since(shown_at);
        Some(self.settings.auto_hide.as_duration().saturating_sub(elapsed))
    }

    /// Whether the host needs to keep sending [`Event::Tick`].
    #[must_use]
    pub fn needs_tick(&self, state: &StateHandle) -> bool {
        state.is_open()
    }

    /// What to draw right now, or `None` when the queue is empty.
    #[must_use]
    pub fn view(&self, state: &StateHandle) -> Option<AlertView> {
        let alert = state.current()?;
        Some(AlertView::from_alert(&alert, state.is_open()))
    }
}
