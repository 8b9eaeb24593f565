//! Friday Launcher - GUI Application
//!
//! Run with: cargo run --bin friday-launcher

use iced::application;
use tracing_subscriber::EnvFilter;

// Import from the library
use friday::gui::FridayApp;

fn main() -> iced::Result {
    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    application(FridayApp::title, FridayApp::update, FridayApp::view)
        .theme(FridayApp::theme)
        .run_with(FridayApp::new)
}
