mod app_state;
mod cli;
mod controller;

use std::path::Path;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("palmview=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "palmview=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Palmview v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load config, honoring a CLI path override
    let config = match args.config {
        Some(ref path) => {
            tracing::info!("Using config override: {path}");
            palmview_config::toml_loader::load_from_path(Path::new(path))
        }
        None => palmview_config::load_config(),
    }
    .unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        palmview_config::PalmviewConfig::default()
    });
    tracing::info!("Config loaded (device: {})", config.device.name);

    // Create event loop and run
    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::PalmviewApp::new(config, args.url);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
