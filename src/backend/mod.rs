use anyhow::Result;
use std::path::PathBuf;

pub mod wayland;

/// Startup choices taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Drawing mode to start in (overrides config default)
    pub initial_mode: Option<String>,
    /// Configuration file to load instead of the default location
    pub config_path: Option<PathBuf>,
}

/// Run Wayland backend with full event loop
pub fn run_wayland(options: LaunchOptions) -> Result<()> {
    let mut backend = wayland::WaylandBackend::new(options);
    backend.run()
}
