//! PalmviewApp struct definition and constructor.

use std::sync::Arc;

use winit::window::Window;

use palmview_config::PalmviewConfig;
use palmview_shell::{ShellHandle, ShellManager};

use crate::controller::PreviewController;

use super::keys::KeybindRegistry;
use super::timers::TimerQueue;

/// Top-level application state.
pub struct PalmviewApp {
    pub(super) config: PalmviewConfig,
    pub(super) registry: KeybindRegistry,
    pub(super) controller: PreviewController,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Shell WebView
    pub(super) shell_manager: ShellManager,
    pub(super) shell: Option<ShellHandle>,

    // Startup URL from the CLI, held until the shell reports ready
    pub(super) pending_startup_url: Option<String>,

    // Deadlines: clock tick plus one hide/remove pair per toast
    pub(super) timers: TimerQueue,
    pub(super) next_toast_id: u64,
}

impl PalmviewApp {
    pub fn new(config: PalmviewConfig, startup_url: Option<String>) -> Self {
        let registry = KeybindRegistry::from_config(&config.keybinds);
        let controller = PreviewController::new(config.clock.format.clone());
        Self {
            config,
            registry,
            controller,
            window: None,
            shell_manager: ShellManager::new(),
            shell: None,
            pending_startup_url: startup_url,
            timers: TimerQueue::new(),
            next_toast_id: 0,
        }
    }
}
