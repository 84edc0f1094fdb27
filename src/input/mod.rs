//! Input handling and editor state machine.
//!
//! This module translates backend keyboard and pointer events into drawing
//! actions. It owns the editor state: the canvas frame, the active mode, the
//! ordered point list, and the freehand cursor memory.

pub mod events;
pub mod mode;
pub mod modifiers;
pub mod state;

pub use events::{Key, MouseButton, PointerEvent, PointerKind};
pub use mode::DrawMode;
pub use modifiers::Modifiers;
pub use state::{DrawingStyle, Editor};
