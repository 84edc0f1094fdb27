use crate::config::Action;
use crate::input::{events::Key, mode::DrawMode};

use super::Editor;

impl Editor {
    /// Processes a key press event.
    ///
    /// Modifier keys only update the tracked modifier state. Every other key
    /// is looked up in the configured keybindings together with the held
    /// modifiers and the bound action (if any) is executed.
    pub fn on_key_press(&mut self, key: Key) {
        match key {
            Key::Shift => {
                self.modifiers.shift = true;
                return;
            }
            Key::Ctrl => {
                self.modifiers.ctrl = true;
                return;
            }
            Key::Alt => {
                self.modifiers.alt = true;
                return;
            }
            _ => {}
        }

        let Some(key_str) = key.binding_name() else {
            return;
        };

        if let Some(action) = self.find_action(&key_str) {
            self.handle_action(action);
        }
    }

    /// Processes a key release event.
    pub fn on_key_release(&mut self, key: Key) {
        match key {
            Key::Shift => self.modifiers.shift = false,
            Key::Ctrl => self.modifiers.ctrl = false,
            Key::Alt => self.modifiers.alt = false,
            _ => {}
        }
    }

    /// Executes an action triggered by a keybinding or a toolbar button.
    pub fn handle_action(&mut self, action: Action) {
        log::debug!("Handling action: {:?}", action);
        match action {
            Action::Exit => {
                self.should_exit = true;
            }
            Action::ClearCanvas => {
                self.clear();
            }
            Action::PointsAndLinesMode => {
                self.set_mode(DrawMode::PointsAndLines);
            }
            Action::FreeDrawMode => {
                self.set_mode(DrawMode::FreeDraw);
            }
        }
    }

    fn find_action(&self, key_str: &str) -> Option<Action> {
        self.action_map
            .iter()
            .find(|(binding, _)| {
                binding.matches(
                    key_str,
                    self.modifiers.ctrl,
                    self.modifiers.shift,
                    self.modifiers.alt,
                )
            })
            .map(|(_, action)| *action)
    }
}
