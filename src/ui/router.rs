//! Splits window-coordinate pointer input between the toolbar and the canvas.
//!
//! The window is the toolbar strip on top and the canvas below it. Presses in
//! the strip are hit-tested against the toolbar buttons; presses below it
//! start a canvas drag whose events are translated to canvas coordinates.

use crate::config::Action;
use crate::input::PointerEvent;

use super::Toolbar;

/// Where a primary-button press landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressTarget {
    /// A toolbar button was clicked
    Toolbar(Action),
    /// The press started on the canvas (canvas coordinates)
    Canvas(PointerEvent),
}

/// Tracks whether the primary button went down on the canvas.
///
/// Only a press that began on the canvas produces drag and release events;
/// a press on the toolbar that is dragged onto the canvas draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerRouter {
    /// Last canvas position of the active drag
    canvas_drag: Option<(i32, i32)>,
}

impl PointerRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while a drag that started on the canvas is in progress.
    pub fn is_canvas_drag(&self) -> bool {
        self.canvas_drag.is_some()
    }

    /// Routes a primary-button press at window coordinates.
    ///
    /// Returns `None` for presses on the toolbar background between buttons.
    pub fn press(&mut self, toolbar: &Toolbar, x: i32, y: i32) -> Option<PressTarget> {
        let toolbar_height = canvas_origin(toolbar);
        if y < toolbar_height {
            return toolbar.hit_test(x, y).map(PressTarget::Toolbar);
        }

        let y = y - toolbar_height;
        self.canvas_drag = Some((x, y));
        Some(PressTarget::Canvas(PointerEvent::press(x, y)))
    }

    /// Routes pointer motion; yields a drag only during a canvas drag.
    pub fn motion(&mut self, toolbar: &Toolbar, x: i32, y: i32) -> Option<PointerEvent> {
        let position = self.canvas_drag.as_mut()?;
        let y = y - canvas_origin(toolbar);
        *position = (x, y);
        Some(PointerEvent::drag(x, y))
    }

    /// Routes a primary-button release; yields a release only if the press
    /// started on the canvas.
    pub fn release(&mut self, toolbar: &Toolbar, x: i32, y: i32) -> Option<PointerEvent> {
        self.canvas_drag
            .take()
            .map(|_| PointerEvent::release(x, y - canvas_origin(toolbar)))
    }

    /// Ends a canvas drag at its last known position, e.g. when the pointer
    /// device disappears mid-drag.
    pub fn cancel(&mut self) -> Option<PointerEvent> {
        self.canvas_drag
            .take()
            .map(|(x, y)| PointerEvent::release(x, y))
    }
}

fn canvas_origin(toolbar: &Toolbar) -> i32 {
    toolbar.height().min(i32::MAX as u32) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeybindingsConfig;
    use crate::draw::Point;
    use crate::input::{DrawMode, DrawingStyle, Editor};

    fn setup(mode: DrawMode) -> (PointerRouter, Toolbar, Editor) {
        let mut toolbar = Toolbar::new(14.0);
        toolbar.layout(800);
        let action_map = KeybindingsConfig::default().build_action_map().unwrap();
        let mut editor = Editor::with_defaults(DrawingStyle::default(), mode, action_map);
        editor.update_canvas_dimensions(800, 600);
        (PointerRouter::new(), toolbar, editor)
    }

    fn deliver_press(
        router: &mut PointerRouter,
        toolbar: &Toolbar,
        editor: &mut Editor,
        x: i32,
        y: i32,
    ) {
        match router.press(toolbar, x, y) {
            Some(PressTarget::Toolbar(action)) => editor.handle_action(action),
            Some(PressTarget::Canvas(event)) => editor.on_pointer_event(event),
            None => {}
        }
    }

    #[test]
    fn toolbar_press_runs_action_without_placing_point() {
        let (mut router, toolbar, mut editor) = setup(DrawMode::PointsAndLines);

        // Center of the "Drawing" button
        let target = router.press(&toolbar, 400, 95);
        assert_eq!(target, Some(PressTarget::Toolbar(Action::FreeDrawMode)));
        assert!(!router.is_canvas_drag());

        deliver_press(&mut router, &toolbar, &mut editor, 400, 57);
        assert_eq!(editor.mode(), DrawMode::PointsAndLines);
        assert!(editor.points().is_empty());
        assert!(editor.frame.is_empty());
    }

    #[test]
    fn toolbar_gap_press_is_ignored() {
        let (mut router, toolbar, _) = setup(DrawMode::PointsAndLines);
        assert_eq!(router.press(&toolbar, 400, 2), None);
        assert!(!router.is_canvas_drag());
    }

    #[test]
    fn canvas_press_is_translated_below_toolbar() {
        let (mut router, toolbar, mut editor) = setup(DrawMode::PointsAndLines);
        let window_y = toolbar.height() as i32 + 5;

        assert_eq!(
            router.press(&toolbar, 40, window_y),
            Some(PressTarget::Canvas(PointerEvent::press(40, 5)))
        );

        router = PointerRouter::new();
        deliver_press(&mut router, &toolbar, &mut editor, 40, window_y);
        assert_eq!(editor.points(), &[Point::new(40, 5)]);
    }

    #[test]
    fn toolbar_press_then_motion_does_not_drag() {
        let (mut router, toolbar, mut editor) = setup(DrawMode::FreeDraw);
        let canvas_y = toolbar.height() as i32 + 20;

        deliver_press(&mut router, &toolbar, &mut editor, 400, 95);
        for (x, y) in [(400, canvas_y), (420, canvas_y + 10), (440, canvas_y + 20)] {
            if let Some(event) = router.motion(&toolbar, x, y) {
                editor.on_pointer_event(event);
            }
        }

        assert!(router.motion(&toolbar, 450, canvas_y).is_none());
        assert_eq!(editor.last_cursor(), None);
        assert!(editor.frame.is_empty());
    }

    #[test]
    fn canvas_drag_forwards_motion_in_canvas_coordinates() {
        let (mut router, toolbar, mut editor) = setup(DrawMode::FreeDraw);
        let top = toolbar.height() as i32;

        deliver_press(&mut router, &toolbar, &mut editor, 10, top + 10);
        for (x, y) in [(10, top + 10), (20, top + 30)] {
            let event = router.motion(&toolbar, x, y).unwrap();
            editor.on_pointer_event(event);
        }
        assert_eq!(editor.last_cursor(), Some((20, 30)));
        assert_eq!(editor.frame.segment_count(), 1);

        let release = router.release(&toolbar, 20, top + 30).unwrap();
        assert_eq!(release, PointerEvent::release(20, 30));
        editor.on_pointer_event(release);
        assert_eq!(editor.last_cursor(), None);
    }

    #[test]
    fn release_without_canvas_press_leaves_cursor_untouched() {
        let (mut router, toolbar, mut editor) = setup(DrawMode::FreeDraw);
        let top = toolbar.height() as i32;

        editor.on_pointer_event(PointerEvent::drag(5, 5));
        assert_eq!(editor.last_cursor(), Some((5, 5)));

        assert_eq!(router.release(&toolbar, 5, top + 5), None);
        assert_eq!(editor.last_cursor(), Some((5, 5)));

        deliver_press(&mut router, &toolbar, &mut editor, 400, 95);
        assert_eq!(router.release(&toolbar, 400, 95), None);
        assert_eq!(editor.last_cursor(), Some((5, 5)));
    }

    #[test]
    fn cancel_releases_at_last_canvas_position() {
        let (mut router, toolbar, _) = setup(DrawMode::FreeDraw);
        let top = toolbar.height() as i32;

        assert_eq!(router.cancel(), None);
        router.press(&toolbar, 10, top + 10);
        router.motion(&toolbar, 30, top + 40);
        assert_eq!(router.cancel(), Some(PointerEvent::release(30, 40)));
        assert!(!router.is_canvas_drag());
    }
}
