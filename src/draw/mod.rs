//! Canvas primitives, retained items, and Cairo rendering.
//!
//! This module defines the core drawing types:
//! - [`Point`] / [`Line`]: the markers and connecting segments placed by clicks
//! - [`DrawingSurface`]: the retained-mode canvas they render onto
//! - [`Frame`]: the item list backing the canvas
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod dirty;
pub mod frame;
pub mod primitives;
pub mod render;
pub mod shape;
pub mod surface;

pub use color::Color;
pub use dirty::DirtyTracker;
pub use frame::Frame;
pub use primitives::{Line, Point};
pub use render::{render_background, render_shape, render_shapes};
pub use shape::Shape;
pub use surface::DrawingSurface;

#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
