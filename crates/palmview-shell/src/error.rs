/// Errors surfaced by the shell bridge.
///
/// None of these are fatal after startup: a failed command is logged and
/// dropped, and the user can always retry the operation.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("webview creation failed: {0}")]
    Creation(String),

    #[error("script evaluation failed: {0}")]
    Script(String),
}

impl From<wry::Error> for ShellError {
    fn from(e: wry::Error) -> Self {
        ShellError::Script(e.to_string())
    }
}
