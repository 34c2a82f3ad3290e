//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::PalmviewApp;

impl ApplicationHandler for PalmviewApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.update_window_title();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_shell_bounds(size);
                }
            }

            WindowEvent::Focused(true) => {
                if let Some(ref shell) = self.shell {
                    if let Err(e) = shell.focus() {
                        tracing::debug!("Failed to focus shell WebView: {e}");
                    }
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.poll_and_schedule(event_loop);
    }
}

impl PalmviewApp {
    /// Drop the shell WebView before the window goes away.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Shutting down");
        self.shell = None;
        tracing::info!("Shutdown complete");
    }
}
