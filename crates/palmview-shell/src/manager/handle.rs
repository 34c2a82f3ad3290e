use serde_json::json;
use wry::WebView;

use palmview_common::notifications::{Notification, ToastId};
use palmview_common::types::{FrameVisibility, FullscreenAffordance, LoadIndicator};

use crate::error::ShellError;
use crate::ipc::js_dispatch_message;

/// Handle to the shell WebView. Wraps command delivery as typed methods
/// over IPC dispatch.
pub struct ShellHandle {
    webview: WebView,
}

impl ShellHandle {
    pub(super) fn new(webview: WebView) -> Self {
        Self { webview }
    }

    /// Execute JavaScript in the shell context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), ShellError> {
        self.webview.evaluate_script(js)?;
        Ok(())
    }

    /// Send a typed IPC message to the shell.
    pub fn send_ipc(&self, kind: &str, payload: &serde_json::Value) -> Result<(), ShellError> {
        let script = js_dispatch_message(kind, payload);
        self.evaluate_script(&script)
    }

    /// Deliver the startup payload once the shell reports ready.
    pub fn send_init(&self, payload: &serde_json::Value) -> Result<(), ShellError> {
        self.send_ipc("init", payload)
    }

    /// Point the inner frame at a URL. The shell echoes `attempt` back
    /// with the completion signal.
    pub fn set_frame_source(&self, url: &str, attempt: u64) -> Result<(), ShellError> {
        self.send_ipc("set-frame-source", &json!({ "url": url, "attempt": attempt }))
    }

    /// Swap the load-button icon.
    pub fn set_load_indicator(&self, state: LoadIndicator) -> Result<(), ShellError> {
        self.send_ipc("set-load-indicator", &json!({ "state": state }))
    }

    /// Present either the placeholder or the active frame.
    pub fn set_frame_visibility(&self, state: FrameVisibility) -> Result<(), ShellError> {
        self.send_ipc("set-frame-visibility", &json!({ "state": state }))
    }

    /// Write the status-bar clock text.
    pub fn set_clock(&self, text: &str) -> Result<(), ShellError> {
        self.send_ipc("set-clock", &json!({ "text": text }))
    }

    /// Update the fullscreen toggle's label and icon.
    pub fn set_fullscreen_affordance(
        &self,
        affordance: FullscreenAffordance,
    ) -> Result<(), ShellError> {
        self.send_ipc(
            "set-fullscreen-affordance",
            &json!({ "label": affordance.label(), "icon": affordance.icon() }),
        )
    }

    /// Append a toast element; the shell animates it in on its next frame.
    pub fn show_toast(&self, id: ToastId, notification: &Notification) -> Result<(), ShellError> {
        self.send_ipc(
            "toast-show",
            &json!({
                "id": id.0,
                "kind": notification.kind,
                "message": notification.message,
            }),
        )
    }

    /// Start a toast's fade-out transition.
    pub fn hide_toast(&self, id: ToastId) -> Result<(), ShellError> {
        self.send_ipc("toast-hide", &json!({ "id": id.0 }))
    }

    /// Remove a faded toast element from the stack.
    pub fn remove_toast(&self, id: ToastId) -> Result<(), ShellError> {
        self.send_ipc("toast-remove", &json!({ "id": id.0 }))
    }

    /// Resize the shell to track the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), ShellError> {
        self.webview.set_bounds(bounds)?;
        Ok(())
    }

    /// Focus the shell WebView.
    pub fn focus(&self) -> Result<(), ShellError> {
        self.webview.focus()?;
        Ok(())
    }
}
