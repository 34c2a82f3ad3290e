//! Shell WebView lifecycle management.
//!
//! `ShellManager` creates the single shell WebView hosting the device
//! chrome and collects its events for the main loop to drain.

use std::sync::{Arc, Mutex};

use crate::content::ContentProvider;
use crate::events::ShellEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::ShellHandle;
pub use types::ShellConfig;

/// Creates the shell WebView and owns its event sink.
pub struct ShellManager {
    /// Event sink — events are pushed here for the main event loop to consume.
    pub(crate) events: Arc<Mutex<Vec<ShellEvent>>>,
    /// Content provider for the `palmview://` custom protocol.
    content_provider: Arc<ContentProvider>,
}

impl ShellManager {
    /// Create a manager serving the bundled shell assets.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            content_provider: Arc::new(ContentProvider::bundled()),
        }
    }

    /// Replace the content provider (e.g. with a development base dir).
    pub fn with_content_provider(mut self, provider: ContentProvider) -> Self {
        self.content_provider = Arc::new(provider);
        self
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<ShellEvent> {
        let mut events = self.events.lock().unwrap();
        std::mem::take(&mut *events)
    }

    pub(crate) fn content_provider(&self) -> Arc<ContentProvider> {
        Arc::clone(&self.content_provider)
    }
}

impl Default for ShellManager {
    fn default() -> Self {
        Self::new()
    }
}
