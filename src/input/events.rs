//! Generic input event types, independent of the windowing backend.

/// Generic key representation.
///
/// The backend maps its native key symbols to these values before handing
/// them to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Escape key
    Escape,
    /// Return/Enter key
    Return,
    /// Backspace key
    Backspace,
    /// Tab key
    Tab,
    /// Space bar
    Space,
    /// Delete key
    Delete,
    /// Shift modifier
    Shift,
    /// Ctrl modifier
    Ctrl,
    /// Alt modifier
    Alt,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Name used when matching against configured keybindings.
    ///
    /// Returns `None` for modifier and unrecognized keys.
    pub fn binding_name(&self) -> Option<String> {
        let name = match self {
            Key::Char(c) => return Some(c.to_lowercase().to_string()),
            Key::Escape => "escape",
            Key::Return => "return",
            Key::Backspace => "backspace",
            Key::Tab => "tab",
            Key::Space => "space",
            Key::Delete => "delete",
            Key::Shift | Key::Ctrl | Key::Alt | Key::Unknown => return None,
        };
        Some(name.to_string())
    }
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (primary drawing button)
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

/// What happened to the primary pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Primary button went down
    Press,
    /// Pointer moved while the primary button is held
    Drag,
    /// Primary button went up
    Release,
}

/// A semantic pointer event in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub x: i32,
    pub y: i32,
    pub kind: PointerKind,
}

impl PointerEvent {
    pub fn press(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            kind: PointerKind::Press,
        }
    }

    pub fn drag(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            kind: PointerKind::Drag,
        }
    }

    pub fn release(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            kind: PointerKind::Release,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_names_are_lowercase() {
        assert_eq!(Key::Char('E').binding_name().as_deref(), Some("e"));
        assert_eq!(Key::Escape.binding_name().as_deref(), Some("escape"));
        assert_eq!(Key::Shift.binding_name(), None);
        assert_eq!(Key::Unknown.binding_name(), None);
    }
}
