//! Window title management: reflects the current page.

use crate::controller::messages;

use super::core::PalmviewApp;

impl PalmviewApp {
    /// Update the window title to reflect the current page.
    ///
    /// Format: "{window.title} — {url | sem página}"
    pub(super) fn update_window_title(&self) {
        let Some(ref window) = self.window else {
            return;
        };

        let page = if self.controller.current_url().is_empty() {
            messages::NO_PAGE_TITLE
        } else {
            self.controller.current_url()
        };

        window.set_title(&format!("{} — {page}", self.config.window.title));
    }
}
