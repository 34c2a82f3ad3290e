//! WebView bridge for the Palmview device shell.
//!
//! Wraps the `wry` crate to provide:
//! - The shell WebView hosting the bundled device chrome and inner frame
//! - Bidirectional IPC (Rust <-> JavaScript)
//! - Custom protocol for serving bundled shell assets
//! - A navigation allowlist for the shell document
//! - Typed events in (`ShellEvent`) and typed commands out (`ShellHandle`)

pub mod content;
pub mod error;
pub mod events;
pub mod ipc;
pub mod manager;

pub use content::ContentProvider;
pub use error::ShellError;
pub use events::ShellEvent;
pub use ipc::{IpcMessage, IpcPayload};
pub use manager::{ShellConfig, ShellHandle, ShellManager};
