//! Dispatch: shell events into the controller, controller effects out to
//! the shell, window, and timer queue.

use std::time::Instant;

use serde_json::json;
use winit::window::Fullscreen;

use palmview_common::notifications::{Notification, ToastId, TOAST_FADE, TOAST_VISIBLE};
use palmview_common::types::FullscreenAffordance;
use palmview_shell::ShellEvent;

use crate::controller::Effect;

use super::core::PalmviewApp;
use super::keys::Action;
use super::timers::{TimerEvent, CLOCK_PERIOD};

impl PalmviewApp {
    /// Route one shell event through the controller.
    pub(super) fn handle_shell_event(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::Ready => self.on_shell_ready(),

            ShellEvent::LoadRequested { raw } => {
                let effects = self.controller.request_load(&raw);
                self.apply_effects(effects);
            }

            ShellEvent::RefreshRequested => {
                let effects = self.controller.refresh();
                self.apply_effects(effects);
            }

            ShellEvent::FullscreenToggleRequested => self.toggle_fullscreen(),

            ShellEvent::KeyPressed { key } => match self.registry.resolve(&key) {
                Some(Action::Refresh) => {
                    let effects = self.controller.refresh();
                    self.apply_effects(effects);
                }
                Some(Action::ToggleFullscreen) => self.toggle_fullscreen(),
                None => {}
            },

            ShellEvent::FrameLoaded { attempt } => {
                let effects = self.controller.frame_loaded(attempt);
                self.apply_effects(effects);
            }

            ShellEvent::FrameFailed { attempt } => {
                let effects = self.controller.frame_failed(attempt);
                self.apply_effects(effects);
            }
        }
    }

    /// The shell booted: deliver the init payload and any startup URL.
    fn on_shell_ready(&mut self) {
        tracing::info!("Shell ready");

        let affordance = if self.is_fullscreen() {
            FullscreenAffordance::Exit
        } else {
            FullscreenAffordance::Enter
        };

        let clock = self
            .controller
            .clock_tick(chrono::Local::now())
            .into_iter()
            .find_map(|e| match e {
                Effect::SetClock(text) => Some(text),
                _ => None,
            })
            .unwrap_or_default();

        let payload = json!({
            "device": {
                "name": self.config.device.name,
                "width": self.config.device.width,
                "height": self.config.device.height,
            },
            "examples": self.config.examples.iter().map(|example| {
                json!({ "label": example.label, "url": example.url })
            }).collect::<Vec<_>>(),
            "clock": clock,
            "fullscreen": { "label": affordance.label(), "icon": affordance.icon() },
            "hotkeys": self.registry.bound_keys(),
            // Lets a reloaded shell document resync to the controller
            "state": {
                "url": self.controller.current_url(),
                "indicator": self.controller.indicator(),
                "frame": self.controller.frame_visibility(),
            },
        });

        if let Some(ref shell) = self.shell {
            if let Err(e) = shell.send_init(&payload) {
                tracing::warn!("Failed to send init payload: {e}");
            }
        }

        // A reloaded shell document lost the iframe; replay the active page
        let effects = self.controller.resync_frame();
        self.apply_effects(effects);

        // First clock refresh happens in the init payload; keep it current
        // from here on.
        self.timers
            .schedule(Instant::now() + CLOCK_PERIOD, TimerEvent::ClockTick);

        if let Some(url) = self.pending_startup_url.take() {
            let effects = self.controller.request_load(&url);
            self.apply_effects(effects);
        }
    }

    fn is_fullscreen(&self) -> bool {
        self.window
            .as_ref()
            .map(|w| w.fullscreen().is_some())
            .unwrap_or(false)
    }

    /// Toggle fullscreen based on the window's own state query.
    fn toggle_fullscreen(&mut self) {
        let currently_fullscreen = self.is_fullscreen();
        let effects = self.controller.toggle_fullscreen(currently_fullscreen);
        self.apply_effects(effects);
    }

    /// Apply controller effects in order.
    pub(super) fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            self.apply_effect(effect);
        }
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::SetLoadIndicator(state) => {
                if let Some(ref shell) = self.shell {
                    if let Err(e) = shell.set_load_indicator(state) {
                        tracing::warn!("Failed to set load indicator: {e}");
                    }
                }
            }

            Effect::SetFrameSource { url, attempt } => {
                if let Some(ref shell) = self.shell {
                    if let Err(e) = shell.set_frame_source(&url, attempt) {
                        tracing::warn!("Failed to set frame source: {e}");
                    }
                }
                self.update_window_title();
            }

            Effect::SetFrameVisibility(state) => {
                if let Some(ref shell) = self.shell {
                    if let Err(e) = shell.set_frame_visibility(state) {
                        tracing::warn!("Failed to set frame visibility: {e}");
                    }
                }
            }

            Effect::Notify(notification) => self.show_toast(notification),

            Effect::SetFullscreen(on) => {
                if let Some(ref window) = self.window {
                    let mode = on.then(|| Fullscreen::Borderless(None));
                    window.set_fullscreen(mode);
                }
            }

            Effect::SetFullscreenAffordance(affordance) => {
                if let Some(ref shell) = self.shell {
                    if let Err(e) = shell.set_fullscreen_affordance(affordance) {
                        tracing::warn!("Failed to set fullscreen affordance: {e}");
                    }
                }
            }

            Effect::SetClock(text) => {
                if let Some(ref shell) = self.shell {
                    if let Err(e) = shell.set_clock(&text) {
                        tracing::warn!("Failed to set clock: {e}");
                    }
                }
            }
        }
    }

    /// Show a toast and schedule its independent hide/remove pair.
    fn show_toast(&mut self, notification: Notification) {
        let id = ToastId(self.next_toast_id);
        self.next_toast_id += 1;

        if let Some(ref shell) = self.shell {
            if let Err(e) = shell.show_toast(id, &notification) {
                tracing::warn!("Failed to show toast: {e}");
            }
        }

        let now = Instant::now();
        self.timers
            .schedule(now + TOAST_VISIBLE, TimerEvent::ToastHide(id));
        self.timers.schedule(
            now + TOAST_VISIBLE + TOAST_FADE,
            TimerEvent::ToastRemove(id),
        );
    }
}
