use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::ShellEvent;
use crate::ipc::IpcMessage;

use super::ShellManager;

// =============================================================================
// NAVIGATION ALLOWLIST
// =============================================================================

/// Allowed URL prefixes for shell-document navigation.
///
/// The shell document itself never leaves the bundled assets; user pages
/// load in the inner frame, whose subframe navigations are not routed
/// through this handler.
pub const ALLOWED_NAV_PREFIXES: &[&str] = &[
    "palmview://",
    // On Windows, WebView2 rewrites custom protocols: palmview://localhost/… → http://palmview.localhost/…
    "http://palmview.localhost",
    "about:blank",
];

/// Check whether a URL is allowed by the navigation allowlist.
pub fn is_navigation_allowed(url: &str) -> bool {
    ALLOWED_NAV_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl ShellManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<ShellEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            let Some(msg) = IpcMessage::from_json(&body) else {
                warn!(body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            };

            match ShellEvent::from_ipc(&msg) {
                Some(event) => {
                    debug!(kind = %msg.kind, "IPC event from shell");
                    if let Ok(mut evts) = events.lock() {
                        evts.push(event);
                    }
                }
                None => {
                    warn!(kind = %msg.kind, "IPC message dropped: unknown kind or bad payload");
                }
            }
        })
    }

    pub(super) fn attach_navigation_handler<'a>(builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !is_navigation_allowed(&url) {
                warn!(url = %url, "shell navigation blocked: URL not in allowlist");
                return false;
            }
            debug!(url = %url, "shell navigation allowed");
            true
        })
    }

    pub(super) fn attach_page_load_handler<'a>(builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let phase = match event {
                wry::PageLoadEvent::Started => "started",
                wry::PageLoadEvent::Finished => "finished",
            };
            debug!(phase, url = %url, "shell document load");
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
