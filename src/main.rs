use clap::Parser;
use std::path::PathBuf;

mod backend;
mod config;
mod draw;
mod input;
mod ui;
mod util;

#[derive(Parser, Debug)]
#[command(name = "graphic-editor")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GRAPHIC_EDITOR_GIT_HASH"), ")"),
    about = "Simple graphic editor: place connected points or draw freehand strokes"
)]
struct Cli {
    /// Initial drawing mode (points-and-lines or drawing)
    #[arg(long, short = 'm', value_name = "MODE")]
    mode: Option<String>,

    /// Load configuration from this file instead of the default location
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Check for Wayland environment
    if std::env::var_os("WAYLAND_DISPLAY").is_none() {
        log::error!("WAYLAND_DISPLAY not set - this application requires Wayland.");
        log::error!("Please run inside a Wayland compositor (GNOME, KDE Plasma, Sway, etc.).");
        return Err(anyhow::anyhow!(
            "WAYLAND_DISPLAY not set; a Wayland compositor is required"
        ));
    }

    log::info!("Starting graphic editor...");
    log::info!("Controls:");
    log::info!("  - Points and lines: click to place points joined in order");
    log::info!("  - Drawing: drag to paint a freehand stroke");
    log::info!("  - Clear: toolbar button or E");
    log::info!("  - Switch mode: toolbar buttons or 1 / 2");
    log::info!("  - Exit: Escape or Ctrl+Q");

    backend::run_wayland(backend::LaunchOptions {
        initial_mode: cli.mode,
        config_path: cli.config,
    })?;

    log::info!("Graphic editor closed.");
    Ok(())
}
