use crate::draw::{Line, Point};
use crate::input::{
    events::{PointerEvent, PointerKind},
    mode::DrawMode,
};
use log::debug;

use super::Editor;

impl Editor {
    /// Dispatches a semantic pointer event to the matching handler.
    pub fn on_pointer_event(&mut self, event: PointerEvent) {
        match event.kind {
            PointerKind::Press => self.on_press(event.x, event.y),
            PointerKind::Drag => self.on_drag(event.x, event.y),
            PointerKind::Release => self.on_release(),
        }
    }

    /// Processes a primary-button press at canvas coordinates.
    ///
    /// # Behavior
    /// - Points and lines: places a marker, joins it to the previous point
    ///   with a line when one exists, then records the point
    /// - Free draw: does nothing
    pub fn on_press(&mut self, x: i32, y: i32) {
        if self.mode != DrawMode::PointsAndLines {
            return;
        }

        let first_new = self.frame.len();
        let point = Point::new(x, y);
        point.render_with(
            &mut self.frame,
            self.style.marker_size,
            self.style.marker_color,
        );

        if let Some(previous) = self.points.last() {
            Line::new(previous, &point).render_with(
                &mut self.frame,
                self.style.line_width,
                self.style.line_color,
            );
        }

        self.points.push(point);
        debug!("Placed point #{} at ({}, {})", self.points.len(), x, y);

        self.mark_shapes_since(first_new);
        self.needs_redraw = true;
    }

    /// Processes pointer motion with the primary button held.
    ///
    /// # Behavior
    /// - Free draw: joins the previous cursor position (if any) to `(x, y)`
    ///   with a stroke segment, then remembers `(x, y)`
    /// - Points and lines: does nothing
    pub fn on_drag(&mut self, x: i32, y: i32) {
        if self.mode != DrawMode::FreeDraw {
            return;
        }

        if let Some((last_x, last_y)) = self.last_cursor {
            let first_new = self.frame.len();
            Line::new(&Point::new(last_x, last_y), &Point::new(x, y)).render_with(
                &mut self.frame,
                self.style.stroke_width,
                self.style.stroke_color,
            );
            self.mark_shapes_since(first_new);
            self.needs_redraw = true;
        }

        self.last_cursor = Some((x, y));
    }

    /// Processes the primary-button release that ends a drag sequence.
    ///
    /// The next drag starts a fresh stroke instead of joining this one.
    pub fn on_release(&mut self) {
        self.last_cursor = None;
    }
}
