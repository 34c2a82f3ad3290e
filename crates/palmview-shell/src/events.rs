//! Shell event types.

use crate::ipc::{IpcMessage, IpcPayload};

/// Events forwarded by the shell WebView to the application loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    /// The shell document finished booting and is ready for the init payload.
    Ready,
    /// The user submitted the URL field (raw, untrimmed text).
    LoadRequested { raw: String },
    /// The refresh control was activated.
    RefreshRequested,
    /// The fullscreen toggle was activated.
    FullscreenToggleRequested,
    /// A global key-down the shell did not consume itself.
    KeyPressed { key: String },
    /// The inner frame finished loading the navigation tagged `attempt`.
    FrameLoaded { attempt: u64 },
    /// The inner frame reported a failure for the navigation tagged `attempt`.
    FrameFailed { attempt: u64 },
}

impl ShellEvent {
    /// Decode a parsed IPC message into a shell event.
    ///
    /// Unknown kinds and malformed payloads yield `None`; the caller logs
    /// and drops them.
    pub fn from_ipc(msg: &IpcMessage) -> Option<Self> {
        match msg.kind.as_str() {
            "ready" => Some(ShellEvent::Ready),
            "load-requested" => match &msg.payload {
                IpcPayload::Text(raw) => Some(ShellEvent::LoadRequested { raw: raw.clone() }),
                _ => None,
            },
            "refresh-requested" => Some(ShellEvent::RefreshRequested),
            "fullscreen-requested" => Some(ShellEvent::FullscreenToggleRequested),
            "key-pressed" => match &msg.payload {
                IpcPayload::Text(key) => Some(ShellEvent::KeyPressed { key: key.clone() }),
                _ => None,
            },
            "frame-loaded" => attempt_of(&msg.payload).map(|attempt| ShellEvent::FrameLoaded { attempt }),
            "frame-failed" => attempt_of(&msg.payload).map(|attempt| ShellEvent::FrameFailed { attempt }),
            _ => None,
        }
    }
}

fn attempt_of(payload: &IpcPayload) -> Option<u64> {
    match payload {
        IpcPayload::Json(value) => value.get("attempt")?.as_u64(),
        _ => None,
    }
}
