//! The preview controller: all widget behavior as a pure state machine.
//!
//! Operations mutate controller state and return the [`Effect`]s the app
//! layer must apply to the shell WebView, the window, and the timer queue.
//! Nothing here touches a WebView, so every behavior is unit testable.

pub mod messages;

use chrono::{DateTime, Local};
use tracing::debug;

use palmview_common::notifications::Notification;
use palmview_common::types::{FrameVisibility, FullscreenAffordance, LoadIndicator};
use palmview_common::urls;

/// A side effect requested by a controller operation, in application order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Swap the load-button icon.
    SetLoadIndicator(LoadIndicator),
    /// Navigate the inner frame. The shell echoes `attempt` back with the
    /// completion signal.
    SetFrameSource { url: String, attempt: u64 },
    /// Present either the placeholder or the active frame.
    SetFrameVisibility(FrameVisibility),
    /// Show a transient toast (the app layer owns its hide/remove timers).
    Notify(Notification),
    /// Enter or leave window fullscreen.
    SetFullscreen(bool),
    /// Update the fullscreen toggle's label and icon.
    SetFullscreenAffordance(FullscreenAffordance),
    /// Write the status-bar clock text.
    SetClock(String),
}

/// Owns the widget state: the last requested URL, the load indicator, the
/// frame/placeholder exclusivity, and the navigation attempt counter used
/// to discard completions from superseded loads.
pub struct PreviewController {
    current_url: String,
    indicator: LoadIndicator,
    frame: FrameVisibility,
    attempt: u64,
    clock_format: String,
}

impl PreviewController {
    pub fn new(clock_format: impl Into<String>) -> Self {
        Self {
            current_url: String::new(),
            indicator: LoadIndicator::Idle,
            frame: FrameVisibility::Placeholder,
            attempt: 0,
            clock_format: clock_format.into(),
        }
    }

    /// Last successfully requested URL; empty when nothing was loaded.
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    pub fn indicator(&self) -> LoadIndicator {
        self.indicator
    }

    pub fn frame_visibility(&self) -> FrameVisibility {
        self.frame
    }

    /// Normalize, validate, and load a URL typed by the user.
    ///
    /// Rejected input produces an error toast and mutates nothing. On
    /// success the indicator engages before the frame source is assigned.
    pub fn request_load(&mut self, raw: &str) -> Vec<Effect> {
        let Some(url) = urls::normalize(raw) else {
            return vec![Effect::Notify(Notification::error(messages::EMPTY_URL))];
        };

        if !urls::is_valid(&url) {
            return vec![Effect::Notify(Notification::error(messages::INVALID_URL))];
        }

        self.indicator = LoadIndicator::Loading;
        self.frame = FrameVisibility::Active;
        self.attempt += 1;
        self.current_url = url.clone();

        vec![
            Effect::SetLoadIndicator(LoadIndicator::Loading),
            Effect::SetFrameSource {
                url,
                attempt: self.attempt,
            },
            Effect::SetFrameVisibility(FrameVisibility::Active),
        ]
    }

    /// The frame finished loading the navigation tagged `attempt`.
    pub fn frame_loaded(&mut self, attempt: u64) -> Vec<Effect> {
        if attempt != self.attempt {
            debug!(attempt, current = self.attempt, "stale load completion discarded");
            return Vec::new();
        }

        self.indicator = LoadIndicator::Idle;
        vec![
            Effect::SetLoadIndicator(LoadIndicator::Idle),
            Effect::Notify(Notification::success(messages::LOAD_SUCCESS)),
        ]
    }

    /// The frame reported a failure for the navigation tagged `attempt`.
    ///
    /// Reverts to the placeholder but keeps `current_url`, so refresh
    /// retries the failing URL.
    pub fn frame_failed(&mut self, attempt: u64) -> Vec<Effect> {
        if attempt != self.attempt {
            debug!(attempt, current = self.attempt, "stale load failure discarded");
            return Vec::new();
        }

        self.indicator = LoadIndicator::Idle;
        self.frame = FrameVisibility::Placeholder;
        vec![
            Effect::SetLoadIndicator(LoadIndicator::Idle),
            Effect::Notify(Notification::error(messages::LOAD_ERROR)),
            Effect::SetFrameVisibility(FrameVisibility::Placeholder),
        ]
    }

    /// Reload the last requested URL without re-running validation.
    pub fn refresh(&mut self) -> Vec<Effect> {
        if self.current_url.is_empty() {
            return vec![Effect::Notify(Notification::error(
                messages::NO_URL_TO_REFRESH,
            ))];
        }

        self.attempt += 1;
        vec![
            Effect::SetFrameSource {
                url: self.current_url.clone(),
                attempt: self.attempt,
            },
            Effect::Notify(Notification::success(messages::REFRESHED)),
        ]
    }

    /// Effects to restore a freshly booted shell document to the current
    /// state that the init payload alone cannot re-create: an active
    /// frame needs its source re-assigned. The attempt is not advanced;
    /// this is the same navigation, replayed.
    pub fn resync_frame(&self) -> Vec<Effect> {
        if self.frame == FrameVisibility::Active && !self.current_url.is_empty() {
            vec![Effect::SetFrameSource {
                url: self.current_url.clone(),
                attempt: self.attempt,
            }]
        } else {
            Vec::new()
        }
    }

    /// Toggle fullscreen, trusting the window's own state query rather
    /// than a shadow flag.
    pub fn toggle_fullscreen(&mut self, currently_fullscreen: bool) -> Vec<Effect> {
        if currently_fullscreen {
            vec![
                Effect::SetFullscreen(false),
                Effect::SetFullscreenAffordance(FullscreenAffordance::Enter),
            ]
        } else {
            vec![
                Effect::SetFullscreen(true),
                Effect::SetFullscreenAffordance(FullscreenAffordance::Exit),
            ]
        }
    }

    /// Format the status-bar clock for the given instant.
    pub fn clock_tick(&self, now: DateTime<Local>) -> Vec<Effect> {
        vec![Effect::SetClock(
            now.format(&self.clock_format).to_string(),
        )]
    }
}

#[cfg(test)]
mod tests;
