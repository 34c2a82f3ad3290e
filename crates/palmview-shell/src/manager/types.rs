/// Configuration for creating the shell WebView.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// User agent sent with every request, including the inner frame's.
    pub user_agent: Option<String>,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Whether to enable clipboard access.
    pub clipboard: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            user_agent: None,
            devtools: cfg!(debug_assertions),
            clipboard: true,
        }
    }
}

impl ShellConfig {
    /// Create a config with the given frame user agent.
    pub fn with_user_agent(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: Some(user_agent.into()),
            ..Default::default()
        }
    }
}
