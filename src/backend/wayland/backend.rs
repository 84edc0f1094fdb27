// Coordinates backend startup/shutdown and drives the event loop while delegating
// rendering & protocol state to `WaylandState` and its handler modules.
use anyhow::{Context, Result};
use log::{debug, info, warn};
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    registry::RegistryState,
    seat::SeatState,
    shell::{
        WaylandSurface,
        xdg::{XdgShell, window::WindowDecorations},
    },
    shm::Shm,
};
use wayland_client::{Connection, globals::registry_queue_init};

use super::state::WaylandState;
use crate::{
    backend::LaunchOptions,
    config::{Config, KeybindingsConfig},
    input::Editor,
    ui::Toolbar,
    util,
};

/// Window title shown by the compositor.
const WINDOW_TITLE: &str = "Graphic editor";
/// Application id used by compositors to group and match windows.
const APP_ID: &str = "graphic-editor";
/// Smallest window width that still fits the widest toolbar button.
const MIN_WIDTH: u32 = 200;
const MIN_CANVAS_HEIGHT: u32 = 50;

/// Wayland backend state
pub struct WaylandBackend {
    options: LaunchOptions,
}

impl WaylandBackend {
    pub fn new(options: LaunchOptions) -> Self {
        Self { options }
    }

    fn load_config(&self) -> Config {
        let loaded = match &self.options.config_path {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        };
        match loaded {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load config: {:#}. Using defaults.", e);
                Config::default()
            }
        }
    }

    pub fn run(&mut self) -> Result<()> {
        info!("Starting Wayland backend");

        // Connect to Wayland compositor
        let conn =
            Connection::connect_to_env().context("Failed to connect to Wayland compositor")?;
        debug!("Connected to Wayland display");

        // Initialize registry and event queue
        let (globals, mut event_queue) =
            registry_queue_init(&conn).context("Failed to initialize Wayland registry")?;
        let qh = event_queue.handle();

        // Bind global interfaces
        let compositor_state =
            CompositorState::bind(&globals, &qh).context("wl_compositor not available")?;
        debug!("Bound compositor");

        let xdg_shell = XdgShell::bind(&globals, &qh).context("xdg_wm_base not available")?;
        debug!("Bound xdg shell");

        let shm = Shm::bind(&globals, &qh).context("wl_shm not available")?;
        debug!("Bound shared memory");

        let output_state = OutputState::new(&globals, &qh);
        let seat_state = SeatState::new(&globals, &qh);
        let registry_state = RegistryState::new(&globals);

        let config = self.load_config();
        info!("Configuration loaded");
        debug!(
            "  Canvas: {}x{}",
            config.canvas.width, config.canvas.height
        );
        debug!("  Buffer count: {}", config.performance.buffer_count);
        debug!("  VSync: {}", config.performance.enable_vsync);

        let action_map = match config.keybindings.build_action_map() {
            Ok(map) => map,
            Err(err) => {
                warn!("Invalid keybinding configuration: {}. Using default bindings.", err);
                KeybindingsConfig::default()
                    .build_action_map()
                    .context("Default keybindings failed to build")?
            }
        };

        let mode = config.initial_mode(self.options.initial_mode.as_deref());
        info!("Starting in {} mode", mode);

        let style = config.drawing_style();
        debug!(
            "  Points: {}px {} markers, {:.1}px {} lines",
            style.marker_size,
            util::color_to_name(&style.marker_color),
            style.line_width,
            util::color_to_name(&style.line_color)
        );
        debug!(
            "  Freehand: {:.1}px {}",
            style.stroke_width,
            util::color_to_name(&style.stroke_color)
        );

        let editor = Editor::with_defaults(style, mode, action_map);
        let toolbar = Toolbar::new(config.ui.toolbar_font_size);

        let mut state = WaylandState::new(
            registry_state,
            compositor_state,
            xdg_shell,
            shm,
            output_state,
            seat_state,
            config,
            editor,
            toolbar,
        );

        info!("Creating editor window");
        let wl_surface = state.compositor_state.create_surface(&qh);
        let window =
            state
                .xdg_shell
                .create_window(wl_surface, WindowDecorations::RequestServer, &qh);
        window.set_title(WINDOW_TITLE);
        window.set_app_id(APP_ID);
        window.set_min_size(Some((MIN_WIDTH, state.toolbar.height() + MIN_CANVAS_HEIGHT)));
        window.commit();

        let (default_width, default_height) = (state.surface.width(), state.surface.height());
        state.surface.set_window(window);
        info!(
            "Window created (initial size {}x{})",
            default_width, default_height
        );

        // Track consecutive render failures for error recovery
        let mut consecutive_render_failures = 0u32;
        const MAX_RENDER_FAILURES: u32 = 10;

        // Main event loop
        let mut loop_error: Option<anyhow::Error> = None;
        loop {
            if state.editor.should_exit {
                info!("Exit requested, breaking event loop");
                break;
            }

            match event_queue.blocking_dispatch(&mut state) {
                Ok(_) => {
                    if state.editor.should_exit {
                        info!("Exit requested after dispatch, breaking event loop");
                        break;
                    }
                }
                Err(e) => {
                    warn!("Event queue error: {}", e);
                    loop_error = Some(anyhow::anyhow!("Wayland event queue error: {}", e));
                    break;
                }
            }

            // Throttle to the display refresh rate when vsync is enabled
            let can_render = state.surface.is_configured()
                && state.editor.needs_redraw
                && (!state.surface.frame_callback_pending()
                    || !state.config.performance.enable_vsync);

            if can_render {
                match state.render(&qh) {
                    Ok(()) => {
                        consecutive_render_failures = 0;
                        state.editor.needs_redraw = false;
                        if state.config.performance.enable_vsync {
                            state.surface.set_frame_callback_pending(true);
                        }
                    }
                    Err(e) => {
                        consecutive_render_failures += 1;
                        warn!(
                            "Rendering error (attempt {}/{}): {}",
                            consecutive_render_failures, MAX_RENDER_FAILURES, e
                        );

                        if consecutive_render_failures >= MAX_RENDER_FAILURES {
                            return Err(anyhow::anyhow!(
                                "Too many consecutive render failures ({}), exiting: {}",
                                consecutive_render_failures,
                                e
                            ));
                        }

                        // Clear redraw flag to avoid infinite error loop
                        state.editor.needs_redraw = false;
                    }
                }
            } else if state.editor.needs_redraw && state.surface.frame_callback_pending() {
                debug!("Main loop: Skipping render - frame callback already pending");
            }
        }

        info!(
            "Wayland backend exiting ({} points, {} canvas items)",
            state.editor.points().len(),
            state.editor.frame.len()
        );

        match loop_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
