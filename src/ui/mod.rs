//! UI rendering: the toolbar above the canvas.

pub mod router;
pub mod toolbar;

pub use router::{PointerRouter, PressTarget};
pub use toolbar::{Toolbar, ToolbarButton, render_toolbar};
