//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, the shell WebView, the preview
//! controller, and the timer queue.

mod core;
mod dispatch;
mod event_handler;
mod init;
pub mod keys;
mod polling;
mod timers;
mod title;

pub use self::core::PalmviewApp;
