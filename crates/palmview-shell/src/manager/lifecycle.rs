use std::sync::Arc;

use tracing::{debug, warn};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::error::ShellError;
use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::ShellHandle;
use super::types::ShellConfig;
use super::ShellManager;

/// The URL the shell WebView boots from.
const SHELL_URL: &str = "palmview://localhost/index.html";

impl ShellManager {
    /// Create the shell WebView as a child of the given window.
    ///
    /// The `window` must implement `raw_window_handle::HasWindowHandle`.
    /// The WebView fills `bounds` within the parent window.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: wry::Rect,
        config: ShellConfig,
    ) -> Result<ShellHandle, ShellError> {
        let events = Arc::clone(&self.events);

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_focused(true);

        // Initialization script for the IPC bridge
        builder = builder.with_initialization_script(IPC_INIT_SCRIPT);

        // Mobile user agent, applied to the inner frame's requests as well
        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        // IPC handler: JS -> Rust
        builder = Self::attach_ipc_handler(builder, events);

        // Shell document load (debug visibility only; frame completion
        // arrives over IPC)
        builder = Self::attach_page_load_handler(builder);

        // Navigation handler: the shell document stays on palmview://
        builder = Self::attach_navigation_handler(builder);

        // Custom protocol serving the bundled chrome
        builder = self.attach_custom_protocol(builder);

        builder = builder.with_url(SHELL_URL);

        let webview = builder
            .build_as_child(window)
            .map_err(|e| ShellError::Creation(e.to_string()))?;

        debug!(url = %SHELL_URL, "shell WebView created");

        Ok(ShellHandle::new(webview))
    }

    fn attach_custom_protocol<'a>(&self, builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        let cp = self.content_provider();
        builder.with_custom_protocol("palmview".to_string(), move |_wv_id, request| {
            let uri = request.uri().to_string();
            let path = uri
                .strip_prefix("palmview://localhost/")
                .or_else(|| uri.strip_prefix("palmview://localhost"))
                .or_else(|| uri.strip_prefix("palmview:///"))
                .or_else(|| uri.strip_prefix("palmview://"))
                .unwrap_or("");

            match cp.resolve(path) {
                Some((mime, data)) => wry::http::Response::builder()
                    .status(200)
                    .header("Content-Type", mime.as_ref())
                    .header("Access-Control-Allow-Origin", "palmview://localhost")
                    .body(std::borrow::Cow::from(data.into_owned()))
                    .unwrap(),
                None => {
                    warn!(path = %path, "custom protocol: asset not found");
                    wry::http::Response::builder()
                        .status(404)
                        .body(std::borrow::Cow::from(b"Not Found".to_vec()))
                        .unwrap()
                }
            }
        })
    }
}
