mod app;
mod config;
mod state;
mod ui;

use anyhow::{Context, Result};

use app::SplineViewerApp;
use config::ViewerConfig;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let config = ViewerConfig::default();
    let state = AppState::load(&config.input_path)
        .with_context(|| format!("loading {}", config.input_path.display()))?;

    // Blocks until the window is closed.
    eframe::run_native(
        &config.title,
        config.native_options(),
        Box::new(move |_cc| Ok(Box::new(SplineViewerApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer window failed: {e}"))
}
