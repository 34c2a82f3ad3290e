//! Event-loop pacing: drain shell events, fire due deadlines, sleep until
//! the next one.

use std::time::{Duration, Instant};

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::PalmviewApp;
use super::timers::{TimerEvent, CLOCK_PERIOD};

/// How often to drain the shell event sink.
const POLL_INTERVAL: Duration = Duration::from_millis(16);

impl PalmviewApp {
    /// Run one poll pass and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        for event in self.shell_manager.drain_events() {
            self.handle_shell_event(event);
        }

        self.fire_due_timers();

        let now = Instant::now();
        let mut wake = now + POLL_INTERVAL;
        if let Some(deadline) = self.timers.next_deadline() {
            wake = wake.min(deadline.max(now));
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(wake));
    }

    fn fire_due_timers(&mut self) {
        let now = Instant::now();
        for event in self.timers.pop_due(now) {
            match event {
                TimerEvent::ClockTick => {
                    let effects = self.controller.clock_tick(chrono::Local::now());
                    self.apply_effects(effects);
                    self.timers.schedule(now + CLOCK_PERIOD, TimerEvent::ClockTick);
                }

                TimerEvent::ToastHide(id) => {
                    if let Some(ref shell) = self.shell {
                        if let Err(e) = shell.hide_toast(id) {
                            tracing::warn!("Failed to hide toast {id}: {e}");
                        }
                    }
                }

                TimerEvent::ToastRemove(id) => {
                    if let Some(ref shell) = self.shell {
                        if let Err(e) = shell.remove_toast(id) {
                            tracing::warn!("Failed to remove toast {id}: {e}");
                        }
                    }
                }
            }
        }
    }
}
