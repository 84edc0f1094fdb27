// Holds the live Wayland protocol state shared by the backend loop and the handler
// submodules; provides window composition and damage helpers used across them.
use anyhow::{Context, Result};
use log::debug;
use smithay_client_toolkit::{
    compositor::CompositorState, output::OutputState, registry::RegistryState, seat::SeatState,
    shell::{WaylandSurface, xdg::XdgShell}, shm::Shm,
};
use wayland_client::{QueueHandle, protocol::wl_shm};

use crate::{
    config::Config,
    draw::{self, Color},
    input::Editor,
    ui::{self, PointerRouter, Toolbar},
    util::Rect,
};

use super::surface::SurfaceState;

/// Internal Wayland state shared across modules.
pub(super) struct WaylandState {
    // Wayland protocol objects
    pub(super) registry_state: RegistryState,
    pub(super) compositor_state: CompositorState,
    pub(super) xdg_shell: XdgShell,
    pub(super) shm: Shm,
    pub(super) output_state: OutputState,
    pub(super) seat_state: SeatState,

    // Window and buffer management
    pub(super) surface: SurfaceState,

    // Configuration
    pub(super) config: Config,
    pub(super) background: Color,

    // Editor and toolbar
    pub(super) editor: Editor,
    pub(super) toolbar: Toolbar,
    pub(super) pointer: PointerRouter,
}

impl WaylandState {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        registry_state: RegistryState,
        compositor_state: CompositorState,
        xdg_shell: XdgShell,
        shm: Shm,
        output_state: OutputState,
        seat_state: SeatState,
        config: Config,
        editor: Editor,
        toolbar: Toolbar,
    ) -> Self {
        let background = config.canvas.background.to_color();
        let surface = SurfaceState::new(
            config.canvas.width,
            toolbar.height() + config.canvas.height,
        );
        Self {
            registry_state,
            compositor_state,
            xdg_shell,
            shm,
            output_state,
            seat_state,
            surface,
            config,
            background,
            editor,
            toolbar,
            pointer: PointerRouter::new(),
        }
    }

    /// Height of the toolbar strip, i.e. the canvas origin in window coordinates.
    pub(super) fn toolbar_height(&self) -> i32 {
        self.toolbar.height().min(i32::MAX as u32) as i32
    }

    /// Applies a new window size to the toolbar layout and the canvas.
    pub(super) fn apply_window_size(&mut self, width: u32, height: u32) {
        if self.surface.update_dimensions(width, height) {
            debug!("Window size changed to {}x{} - recreating SlotPool", width, height);
        }
        self.toolbar.layout(width);
        self.editor
            .update_canvas_dimensions(width, height.saturating_sub(self.toolbar.height()));
    }

    pub(super) fn render(&mut self, qh: &QueueHandle<Self>) -> Result<()> {
        debug!("=== RENDER START ===");
        let buffer_count = self.config.performance.buffer_count as usize;
        let width = self.surface.width();
        let height = self.surface.height();

        // Get a buffer from the pool
        let (buffer, canvas) = {
            let pool = self.surface.ensure_pool(&self.shm, buffer_count)?;
            pool.create_buffer(
                width as i32,
                height as i32,
                (width * 4) as i32,
                wl_shm::Format::Argb8888,
            )
            .context("Failed to create buffer")?
        };

        // SAFETY: This unsafe block creates a Cairo surface from raw memory buffer.
        // Safety invariants that must be maintained:
        // 1. `canvas` is a valid mutable slice from SlotPool with exactly (width * height * 4) bytes
        // 2. The buffer format ARgb32 matches the allocation (4 bytes per pixel)
        // 3. The stride (width * 4) correctly represents the number of bytes per row
        // 4. `cairo_surface` and `ctx` are dropped before the buffer is committed to Wayland,
        //    so Cairo never touches the memory after ownership transfers
        // 5. No other references to this memory exist during Cairo's usage
        let cairo_surface = unsafe {
            cairo::ImageSurface::create_for_data_unsafe(
                canvas.as_mut_ptr(),
                cairo::Format::ARgb32,
                width as i32,
                height as i32,
                (width * 4) as i32,
            )
            .context("Failed to create Cairo surface")?
        };

        let ctx = cairo::Context::new(&cairo_surface).context("Failed to create Cairo context")?;
        debug!(
            "Rendering toolbar and {} canvas items",
            self.editor.frame.len()
        );
        compose_window(
            &ctx,
            &self.toolbar,
            &self.editor,
            self.background,
            width,
            height,
        );

        cairo_surface.flush();
        drop(ctx);
        drop(cairo_surface);

        debug!("Attaching buffer and committing surface");
        let wl_surface = self
            .surface
            .window()
            .context("Window not created")?
            .wl_surface()
            .clone();
        wl_surface.attach(Some(buffer.wl_buffer()), 0, 0);

        let surface_width = width.min(i32::MAX as u32) as i32;
        let surface_height = height.min(i32::MAX as u32) as i32;
        let toolbar_height = self.toolbar_height();

        if self.editor.dirty_tracker.is_clean() {
            debug!("Canvas unchanged, damaging toolbar strip only");
        }

        // The toolbar strip is small and reflects hover and mode state, so it is
        // damaged on every frame; canvas regions are offset below it.
        let mut regions: Vec<Rect> = Rect::new(0, 0, surface_width, toolbar_height)
            .into_iter()
            .collect();
        regions.extend(
            self.editor
                .take_dirty_regions()
                .into_iter()
                .map(|rect| rect.translated(0, toolbar_height)),
        );

        for rect in resolve_damage_regions(surface_width, surface_height, regions) {
            debug!(
                "Damaging buffer region x={} y={} w={} h={}",
                rect.x, rect.y, rect.width, rect.height
            );
            wl_surface.damage_buffer(rect.x, rect.y, rect.width, rect.height);
        }

        if self.config.performance.enable_vsync {
            debug!("Requesting frame callback (vsync enabled)");
            wl_surface.frame(qh, wl_surface.clone());
        }

        wl_surface.commit();
        debug!("=== RENDER COMPLETE ===");

        Ok(())
    }
}

/// Paints the toolbar and the full canvas content into `ctx`.
///
/// The canvas is repainted from the retained frame every time, so content
/// survives resizes and buffer swaps.
fn compose_window(
    ctx: &cairo::Context,
    toolbar: &Toolbar,
    editor: &Editor,
    background: Color,
    width: u32,
    height: u32,
) {
    let toolbar_height = toolbar.height().min(height);
    let canvas_height = (height - toolbar_height) as f64;

    ui::render_toolbar(ctx, toolbar, editor.mode(), width);

    let _ = ctx.save();
    ctx.translate(0.0, toolbar_height as f64);
    ctx.rectangle(0.0, 0.0, width as f64, canvas_height);
    ctx.clip();
    draw::render_background(ctx, background, width as f64, canvas_height);
    draw::render_shapes(ctx, &editor.frame.shapes);
    let _ = ctx.restore();
}

fn resolve_damage_regions(width: i32, height: i32, regions: Vec<Rect>) -> Vec<Rect> {
    let mut regions: Vec<Rect> = regions
        .into_iter()
        .filter_map(|rect| rect.clipped_to(width, height))
        .collect();

    if regions.is_empty() && width > 0 && height > 0 {
        if let Some(full) = Rect::new(0, 0, width, height) {
            regions.push(full);
        }
    }

    regions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeybindingsConfig;
    use crate::input::{DrawMode, DrawingStyle};

    #[test]
    fn resolve_damage_returns_full_when_empty() {
        let regions = resolve_damage_regions(800, 714, Vec::new());
        assert_eq!(regions, vec![Rect::new(0, 0, 800, 714).unwrap()]);
    }

    #[test]
    fn resolve_damage_filters_invalid_rects() {
        let regions = resolve_damage_regions(
            800,
            600,
            vec![
                Rect {
                    x: 10,
                    y: 10,
                    width: 50,
                    height: 40,
                },
                Rect {
                    x: 0,
                    y: 0,
                    width: 0,
                    height: 10,
                },
            ],
        );

        assert_eq!(regions, vec![Rect::new(10, 10, 50, 40).unwrap()]);
    }

    #[test]
    fn resolve_damage_clips_to_surface() {
        let regions = resolve_damage_regions(
            800,
            600,
            vec![Rect {
                x: 790,
                y: -5,
                width: 20,
                height: 30,
            }],
        );

        assert_eq!(regions, vec![Rect::new(790, 0, 10, 25).unwrap()]);
    }

    #[test]
    fn compose_window_places_canvas_below_toolbar() {
        let mut toolbar = Toolbar::new(14.0);
        toolbar.layout(200);
        let action_map = KeybindingsConfig::default().build_action_map().unwrap();
        let mut editor = Editor::with_defaults(
            DrawingStyle::default(),
            DrawMode::PointsAndLines,
            action_map,
        );
        editor.on_press(20, 20);

        let height = toolbar.height() + 100;
        let mut surface =
            cairo::ImageSurface::create(cairo::Format::ARgb32, 200, height as i32).unwrap();
        {
            let ctx = cairo::Context::new(&surface).unwrap();
            compose_window(&ctx, &toolbar, &editor, Color::rgb(1.0, 1.0, 1.0), 200, height);
        }
        surface.flush();

        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        let pixel = |x: usize, y: usize| {
            let offset = y * stride + x * 4;
            // ARGB32 is stored native-endian: B, G, R, A on little-endian hosts
            u32::from_ne_bytes([
                data[offset],
                data[offset + 1],
                data[offset + 2],
                data[offset + 3],
            ])
        };

        let marker_y = toolbar.height() as usize + 20;
        assert_eq!(pixel(20, marker_y) & 0x00FF_FFFF, 0x0000_0000);
        assert_eq!(pixel(150, marker_y), 0xFFFF_FFFF);
    }
}
