//! Wayland backend: an xdg toplevel window holding the toolbar and the canvas.

mod backend;
mod handlers;
mod state;
mod surface;

pub use backend::WaylandBackend;
