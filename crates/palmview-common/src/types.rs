use serde::{Deserialize, Serialize};

/// State of the load-button icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadIndicator {
    /// Static "go" arrow.
    Idle,
    /// Spinning busy icon while a navigation is in flight.
    Loading,
}

/// Which of the two device-screen surfaces is presented.
///
/// Exactly one holds at any time; the enum makes the mutual exclusion
/// structural instead of inferring it from element visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameVisibility {
    /// Idle-state artwork shown before any successful load.
    Placeholder,
    /// The embedded frame is active and visible.
    Active,
}

/// The fullscreen toggle's current affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FullscreenAffordance {
    /// Window is not fullscreen; the control offers to enter.
    Enter,
    /// Window is fullscreen; the control offers to exit.
    Exit,
}

impl FullscreenAffordance {
    /// Button caption shown next to the icon.
    pub fn label(&self) -> &'static str {
        match self {
            FullscreenAffordance::Enter => "Fullscreen",
            FullscreenAffordance::Exit => "Sair",
        }
    }

    /// Icon name rendered by the shell.
    pub fn icon(&self) -> &'static str {
        match self {
            FullscreenAffordance::Enter => "arrows-fullscreen",
            FullscreenAffordance::Exit => "fullscreen-exit",
        }
    }

    /// The affordance after a successful toggle.
    pub fn toggled(&self) -> Self {
        match self {
            FullscreenAffordance::Enter => FullscreenAffordance::Exit,
            FullscreenAffordance::Exit => FullscreenAffordance::Enter,
        }
    }
}
