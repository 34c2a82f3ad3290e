//! Window creation and shell WebView setup.

use std::sync::Arc;

use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use palmview_shell::{ContentProvider, ShellConfig, ShellManager};

use super::core::PalmviewApp;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Relative path to shell assets that shadow the bundled copies during
/// development.
const SHELL_ASSETS_DIR: &str = "assets/shell";

// =============================================================================
// INITIALIZATION
// =============================================================================

impl PalmviewApp {
    /// Create the window and the shell WebView.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        self.initialize_shell_manager();

        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let bounds = shell_bounds(window.inner_size());
        let shell_config = ShellConfig::with_user_agent(self.config.device.user_agent.as_str());

        match self.shell_manager.create(window.as_ref(), bounds, shell_config) {
            Ok(handle) => {
                self.shell = Some(handle);
            }
            Err(e) => {
                tracing::error!("Failed to create shell WebView: {e}");
                return false;
            }
        }

        self.window = Some(window);
        tracing::info!("Window created and shell WebView initialized");
        true
    }

    /// Set up the content provider for `palmview://`, shadowing the
    /// bundled assets with an on-disk directory when one is present.
    fn initialize_shell_manager(&mut self) {
        let dev_dir = std::env::current_dir().unwrap_or_default().join(SHELL_ASSETS_DIR);

        let provider = if dev_dir.is_dir() {
            tracing::info!(dir = %dev_dir.display(), "using development shell assets");
            ContentProvider::bundled().with_base_dir(dev_dir)
        } else {
            ContentProvider::bundled()
        };

        self.shell_manager = ShellManager::new().with_content_provider(provider);
    }

    /// Keep the shell WebView tracking the window size.
    pub(super) fn sync_shell_bounds(&self, size: PhysicalSize<u32>) {
        if let Some(ref shell) = self.shell {
            if let Err(e) = shell.set_bounds(shell_bounds(size)) {
                tracing::warn!("Failed to resize shell WebView: {e}");
            }
        }
    }
}

/// The shell always fills the window.
fn shell_bounds(size: PhysicalSize<u32>) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, 0.0)),
        size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(size.width, size.height)),
    }
}
