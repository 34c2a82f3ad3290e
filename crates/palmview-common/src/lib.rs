pub mod errors;
pub mod notifications;
pub mod types;
pub mod urls;

pub use errors::ConfigError;
pub use notifications::{Notification, NotificationKind, ToastId};
pub use types::{FrameVisibility, FullscreenAffordance, LoadIndicator};
