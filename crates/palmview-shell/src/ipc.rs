//! IPC (Inter-Process Communication) protocol between Rust and JavaScript.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: JavaScript calls `window.ipc.postMessage(JSON.stringify({...}))`,
//!   which triggers the `ipc_handler` registered on the WebView.
//! - **Rust -> JS**: Rust calls `webview.evaluate_script("...")` to invoke
//!   JavaScript functions in the WebView context.

use serde::{Deserialize, Serialize};

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    /// The message payload (arbitrary JSON).
    pub payload: IpcPayload,
}

/// Payload of an IPC message — either a simple string or structured JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
    None,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Create a simple text message.
    pub fn text(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: IpcPayload::Text(text.into()),
        }
    }

    /// Create a JSON message.
    pub fn json(kind: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload: IpcPayload::Json(value),
        }
    }
}

/// JavaScript snippet that sets up the IPC bridge on the JS side.
/// This is injected as an initialization script into the shell WebView.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    // Palmview IPC bridge
    window.palmview = window.palmview || {};
    window.palmview.ipc = {
        postMessage: function(msg) {
            window.ipc.postMessage(JSON.stringify(msg));
        },
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        // Callbacks registered by JS code to handle messages from Rust
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Generate a JS snippet that dispatches a message to the JS IPC handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.palmview.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_text_payload() {
        let msg = IpcMessage::from_json(r#"{"kind":"load-requested","payload":"google.com"}"#)
            .expect("should parse");
        assert_eq!(msg.kind, "load-requested");
        assert!(matches!(msg.payload, IpcPayload::Text(ref t) if t == "google.com"));
    }

    #[test]
    fn parses_json_payload() {
        let msg = IpcMessage::from_json(r#"{"kind":"frame-loaded","payload":{"attempt":3}}"#)
            .expect("should parse");
        assert_eq!(msg.kind, "frame-loaded");
        match msg.payload {
            IpcPayload::Json(v) => assert_eq!(v["attempt"], 3),
            other => panic!("expected json payload, got {other:?}"),
        }
    }

    #[test]
    fn parses_null_payload() {
        let msg = IpcMessage::from_json(r#"{"kind":"refresh-requested","payload":null}"#)
            .expect("should parse");
        assert_eq!(msg.kind, "refresh-requested");
        // serde(untagged) maps JSON null onto the Json variant
        assert!(!matches!(msg.payload, IpcPayload::Text(_)));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(IpcMessage::from_json("not json").is_none());
        assert!(IpcMessage::from_json(r#"{"payload":"x"}"#).is_none());
    }

    #[test]
    fn dispatch_script_escapes_kind_and_payload() {
        let script = js_dispatch_message("set-clock", &serde_json::json!({"text": "14:05"}));
        assert!(script.starts_with("window.palmview.ipc._dispatch(\"set-clock\""));
        assert!(script.contains("\"14:05\""));
    }

    #[test]
    fn init_script_defines_bridge() {
        assert!(IPC_INIT_SCRIPT.contains("window.palmview"));
        assert!(IPC_INIT_SCRIPT.contains("postMessage"));
        assert!(IPC_INIT_SCRIPT.contains("_dispatch"));
    }
}
