//! Manages the toplevel window and shared memory buffers for the Wayland backend.

use anyhow::{Context, Result};
use log::info;
use smithay_client_toolkit::{
    shell::xdg::window::Window,
    shm::{Shm, slot::SlotPool},
};

/// Tracks the editor window, buffer pool, and associated sizing state.
pub struct SurfaceState {
    window: Option<Window>,
    pool: Option<SlotPool>,
    width: u32,
    height: u32,
    configured: bool,
    frame_callback_pending: bool,
}

impl SurfaceState {
    /// Creates a new, unconfigured surface state with a fallback size.
    ///
    /// The fallback is used until the compositor suggests a size of its own.
    pub fn new(default_width: u32, default_height: u32) -> Self {
        Self {
            window: None,
            pool: None,
            width: default_width,
            height: default_height,
            configured: false,
            frame_callback_pending: false,
        }
    }

    /// Assigns the window produced during startup.
    pub fn set_window(&mut self, window: Window) {
        self.window = Some(window);
    }

    /// Returns the window, if created.
    pub fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    /// Updates the surface dimensions, returning `true` if the size changed.
    ///
    /// When the size changes, any existing buffer pool becomes invalid and is dropped.
    pub fn update_dimensions(&mut self, width: u32, height: u32) -> bool {
        let changed = self.width != width || self.height != height;
        self.width = width;
        self.height = height;
        if changed {
            self.pool = None;
        }
        changed
    }

    /// Current surface width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Current surface height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_configured(&mut self, configured: bool) {
        self.configured = configured;
    }

    /// Returns whether the window has completed its initial configure.
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn set_frame_callback_pending(&mut self, pending: bool) {
        self.frame_callback_pending = pending;
    }

    /// Returns whether a frame callback is currently outstanding.
    pub fn frame_callback_pending(&self) -> bool {
        self.frame_callback_pending
    }

    /// Ensures a shared memory pool of the appropriate size exists.
    pub fn ensure_pool(&mut self, shm: &Shm, buffer_count: usize) -> Result<&mut SlotPool> {
        if self.pool.is_none() {
            let pool_size = buffer_pool_size(self.width, self.height, buffer_count)?;
            info!(
                "Creating new SlotPool ({}x{}, {} bytes, {} buffers)",
                self.width, self.height, pool_size, buffer_count
            );
            let pool = SlotPool::new(pool_size, shm).context("Failed to create slot pool")?;
            self.pool = Some(pool);
        }

        self.pool
            .as_mut()
            .context("Buffer pool not initialized despite previous check")
    }
}

/// Bytes needed for `buffer_count` ARGB8888 buffers of `width`x`height`.
fn buffer_pool_size(width: u32, height: u32, buffer_count: usize) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(4))
        .and_then(|bytes| bytes.checked_mul(buffer_count))
        .with_context(|| {
            format!(
                "Buffer pool size overflows for {}x{} with {} buffers",
                width, height, buffer_count
            )
        })
}
