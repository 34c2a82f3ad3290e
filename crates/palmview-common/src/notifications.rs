use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long a toast stays fully visible before fading out.
pub const TOAST_VISIBLE: Duration = Duration::from_millis(3000);

/// How long the fade-out transition runs before the element is removed.
pub const TOAST_FADE: Duration = Duration::from_millis(300);

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient user-facing notification.
///
/// Toasts stack without a cap; each one is timed independently by the app
/// (visible for [`TOAST_VISIBLE`], then fading for [`TOAST_FADE`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// Identifier for a toast element in the shell DOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToastId(pub u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind() {
        let n = Notification::success("Site carregado com sucesso!");
        assert_eq!(n.kind, NotificationKind::Success);
        assert_eq!(n.message, "Site carregado com sucesso!");

        let n = Notification::error("Digite uma URL válida");
        assert_eq!(n.kind, NotificationKind::Error);
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&NotificationKind::Success).unwrap(),
            "\"success\""
        );
        assert_eq!(
            serde_json::to_string(&NotificationKind::Error).unwrap(),
            "\"error\""
        );
    }

    #[test]
    fn toast_id_display() {
        assert_eq!(ToastId(7).to_string(), "toast-7");
    }

    #[test]
    fn fade_is_shorter_than_visible_window() {
        assert!(TOAST_FADE < TOAST_VISIBLE);
    }
}
