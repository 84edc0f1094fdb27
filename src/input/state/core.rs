//! Editor state and construction.

use crate::config::{Action, KeyBinding};
use crate::draw::{
    Color, DirtyTracker, DrawingSurface, Frame, Point,
    color::{BLACK, BLUE, RED},
};
use crate::input::{mode::DrawMode, modifiers::Modifiers};
use crate::util::Rect;
use std::collections::HashMap;

/// Appearance of everything the editor places on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawingStyle {
    /// Point marker diameter in pixels (radius is `marker_size / 2`)
    pub marker_size: i32,
    /// Point marker fill color
    pub marker_color: Color,
    /// Width of lines connecting consecutive points
    pub line_width: f64,
    /// Color of lines connecting consecutive points
    pub line_color: Color,
    /// Width of freehand stroke segments
    pub stroke_width: f64,
    /// Color of freehand stroke segments
    pub stroke_color: Color,
}

impl Default for DrawingStyle {
    fn default() -> Self {
        Self {
            marker_size: 6,
            marker_color: BLACK,
            line_width: 3.0,
            line_color: BLUE,
            stroke_width: 2.0,
            stroke_color: RED,
        }
    }
}

/// Main editor state containing the whole drawing session.
///
/// Holds the retained canvas frame, the active mode, the ordered list of
/// placed points and the last freehand cursor position. Pointer, key and
/// toolbar events arrive through the methods in the sibling modules.
pub struct Editor {
    /// Retained canvas items (markers, lines, freehand segments)
    pub frame: Frame,
    /// Marker, line and stroke appearance
    pub style: DrawingStyle,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Whether user requested to exit
    pub should_exit: bool,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Canvas width in pixels (set by backend after configuration)
    pub canvas_width: u32,
    /// Canvas height in pixels (set by backend after configuration)
    pub canvas_height: u32,
    pub(super) mode: DrawMode,
    /// Placed points in click order; append-only until cleared
    pub(super) points: Vec<Point>,
    /// Last freehand cursor position, valid only during an active drag
    pub(super) last_cursor: Option<(i32, i32)>,
    /// Tracks dirty canvas regions between renders
    pub(crate) dirty_tracker: DirtyTracker,
    /// Keybinding action map for lookup
    pub(super) action_map: HashMap<KeyBinding, Action>,
}

impl Editor {
    /// Creates a new editor with the given appearance, startup mode and keybindings.
    ///
    /// Canvas dimensions default to 0 and should be updated by the backend
    /// after surface configuration (see `update_canvas_dimensions`).
    pub fn with_defaults(
        style: DrawingStyle,
        mode: DrawMode,
        action_map: HashMap<KeyBinding, Action>,
    ) -> Self {
        Self {
            frame: Frame::new(),
            style,
            modifiers: Modifiers::new(),
            should_exit: false,
            needs_redraw: true,
            canvas_width: 0,
            canvas_height: 0,
            mode,
            points: Vec::new(),
            last_cursor: None,
            dirty_tracker: DirtyTracker::new(),
            action_map,
        }
    }

    /// Current drawing mode.
    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    /// Switches the drawing mode.
    ///
    /// Existing drawings and the point list are preserved, so returning to
    /// points-and-lines mode keeps chaining from the last placed point.
    pub fn set_mode(&mut self, mode: DrawMode) {
        if self.mode != mode {
            log::debug!("Mode changed: {} -> {}", self.mode, mode);
        }
        self.mode = mode;
        self.needs_redraw = true;
    }

    /// Points placed so far, in click order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Last freehand cursor position, if a drag is in progress.
    pub fn last_cursor(&self) -> Option<(i32, i32)> {
        self.last_cursor
    }

    /// Erases the canvas and resets all session state.
    ///
    /// Calling this repeatedly is the same as calling it once.
    pub fn clear(&mut self) {
        self.frame.delete_all();
        self.points.clear();
        self.last_cursor = None;
        self.dirty_tracker.mark_full();
        self.needs_redraw = true;
    }

    /// Updates the canvas dimensions after the window is (re)configured.
    pub fn update_canvas_dimensions(&mut self, width: u32, height: u32) {
        if self.canvas_width != width || self.canvas_height != height {
            self.canvas_width = width;
            self.canvas_height = height;
            self.dirty_tracker.mark_full();
            self.needs_redraw = true;
        }
    }

    /// Records damage for every frame item appended at or after index `from`.
    pub(super) fn mark_shapes_since(&mut self, from: usize) {
        for shape in &self.frame.shapes[from..] {
            self.dirty_tracker.mark_shape(shape);
        }
    }

    /// Drains the canvas regions that changed since the last render.
    pub fn take_dirty_regions(&mut self) -> Vec<Rect> {
        let width = self.canvas_width.min(i32::MAX as u32) as i32;
        let height = self.canvas_height.min(i32::MAX as u32) as i32;
        self.dirty_tracker.take_regions(width, height)
    }
}
