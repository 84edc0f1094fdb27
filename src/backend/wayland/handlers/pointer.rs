// Routes pointer events either to the toolbar buttons or, in canvas coordinates, to the editor.
use log::debug;
use smithay_client_toolkit::seat::pointer::{
    BTN_LEFT, BTN_MIDDLE, BTN_RIGHT, PointerEvent, PointerEventKind, PointerHandler,
};
use wayland_client::{Connection, QueueHandle, protocol::wl_pointer};

use crate::{input::MouseButton, ui::PressTarget};

use super::super::state::WaylandState;

fn map_button(button: u32) -> Option<MouseButton> {
    match button {
        BTN_LEFT => Some(MouseButton::Left),
        BTN_MIDDLE => Some(MouseButton::Middle),
        BTN_RIGHT => Some(MouseButton::Right),
        _ => None,
    }
}

impl WaylandState {
    fn update_hover(&mut self, x: i32, y: i32) {
        if self.toolbar.set_hover(x, y) {
            self.editor.needs_redraw = true;
        }
    }

    fn on_primary_press(&mut self, x: i32, y: i32) {
        match self.pointer.press(&self.toolbar, x, y) {
            Some(PressTarget::Toolbar(action)) => {
                debug!("Toolbar button clicked: {:?}", action);
                self.editor.handle_action(action);
            }
            Some(PressTarget::Canvas(event)) => self.editor.on_pointer_event(event),
            None => {}
        }
    }

    fn on_primary_release(&mut self, x: i32, y: i32) {
        if let Some(event) = self.pointer.release(&self.toolbar, x, y) {
            self.editor.on_pointer_event(event);
        }
    }
}

impl PointerHandler for WaylandState {
    fn pointer_frame(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _pointer: &wl_pointer::WlPointer,
        events: &[PointerEvent],
    ) {
        for event in events {
            let x = event.position.0 as i32;
            let y = event.position.1 as i32;
            match event.kind {
                PointerEventKind::Enter { .. } => {
                    debug!("Pointer entered at ({}, {})", x, y);
                    self.update_hover(x, y);
                }
                PointerEventKind::Leave { .. } => {
                    debug!("Pointer left surface");
                    if self.toolbar.clear_hover() {
                        self.editor.needs_redraw = true;
                    }
                }
                PointerEventKind::Motion { .. } => {
                    self.update_hover(x, y);
                    if let Some(drag) = self.pointer.motion(&self.toolbar, x, y) {
                        self.editor.on_pointer_event(drag);
                    }
                }
                PointerEventKind::Press { button, .. } => {
                    debug!("Button {} pressed at ({}, {})", button, x, y);
                    if map_button(button) == Some(MouseButton::Left) {
                        self.on_primary_press(x, y);
                    }
                }
                PointerEventKind::Release { button, .. } => {
                    debug!("Button {} released", button);
                    if map_button(button) == Some(MouseButton::Left) {
                        self.on_primary_release(x, y);
                    }
                }
                PointerEventKind::Axis { .. } => {}
            }
        }
    }
}
