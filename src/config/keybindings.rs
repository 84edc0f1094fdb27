//! Keybinding configuration types and parsing.
//!
//! This module defines the configurable keyboard shortcuts for the editor's
//! toolbar commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// All commands that can be triggered from the toolbar or the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Close the editor window
    Exit,
    /// Erase the canvas and forget all points
    ClearCanvas,
    /// Switch to click-to-place points connected by lines
    PointsAndLinesMode,
    /// Switch to freehand drawing
    FreeDrawMode,
}

/// Errors produced while parsing the `[keybindings]` table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeybindingError {
    #[error("Empty keybinding string")]
    Empty,

    #[error("No key specified in: {0}")]
    MissingKey(String),

    #[error("Duplicate keybinding '{binding}' assigned to both {first:?} and {second:?}")]
    Duplicate {
        binding: String,
        first: Action,
        second: Action,
    },
}

/// A single keybinding: a key name with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Q" or "Escape".
    ///
    /// Modifiers can appear in any order and spaces around '+' are ignored.
    /// Key names are stored lowercase so lookups are case-insensitive.
    pub fn parse(s: &str) -> Result<Self, KeybindingError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(KeybindingError::Empty);
        }

        let normalized: String = s.split('+').map(str::trim).collect::<Vec<_>>().join("+");

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut key_parts = Vec::new();

        for part in normalized.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(KeybindingError::MissingKey(s.to_string()));
        }

        // "Ctrl++" splits into ["Ctrl", "", ""]; two empty parts are the '+' key itself,
        // while a single one is just a trailing separator ("Ctrl+")
        let key = if key_parts.iter().all(|part| part.is_empty()) {
            if key_parts.len() < 2 {
                return Err(KeybindingError::MissingKey(s.to_string()));
            }
            "+".to_string()
        } else {
            key_parts.join("+").to_lowercase()
        };

        Ok(Self {
            key,
            ctrl,
            shift,
            alt,
        })
    }

    /// Check if this keybinding matches the given key and modifier state.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == ctrl
            && self.shift == shift
            && self.alt == alt
    }
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings. Users specify them in config.toml as:
/// ```toml
/// [keybindings]
/// exit = ["Escape", "Ctrl+Q"]
/// clear_canvas = ["E"]
/// points_and_lines_mode = ["1"]
/// free_draw_mode = ["2"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_exit")]
    pub exit: Vec<String>,

    #[serde(default = "default_clear_canvas")]
    pub clear_canvas: Vec<String>,

    #[serde(default = "default_points_and_lines_mode")]
    pub points_and_lines_mode: Vec<String>,

    #[serde(default = "default_free_draw_mode")]
    pub free_draw_mode: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            exit: default_exit(),
            clear_canvas: default_clear_canvas(),
            points_and_lines_mode: default_points_and_lines_mode(),
            free_draw_mode: default_free_draw_mode(),
        }
    }
}

impl KeybindingsConfig {
    /// Build a lookup map from keybindings to actions.
    ///
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, KeybindingError> {
        let mut map = HashMap::new();

        let tables = [
            (&self.exit, Action::Exit),
            (&self.clear_canvas, Action::ClearCanvas),
            (&self.points_and_lines_mode, Action::PointsAndLinesMode),
            (&self.free_draw_mode, Action::FreeDrawMode),
        ];

        for (bindings, action) in tables {
            for binding_str in bindings {
                let binding = KeyBinding::parse(binding_str)?;
                if let Some(existing) = map.insert(binding, action) {
                    return Err(KeybindingError::Duplicate {
                        binding: binding_str.clone(),
                        first: existing,
                        second: action,
                    });
                }
            }
        }

        Ok(map)
    }
}

fn default_exit() -> Vec<String> {
    vec!["Escape".to_string(), "Ctrl+Q".to_string()]
}

fn default_clear_canvas() -> Vec<String> {
    vec!["E".to_string()]
}

fn default_points_and_lines_mode() -> Vec<String> {
    vec!["1".to_string()]
}

fn default_free_draw_mode() -> Vec<String> {
    vec!["2".to_string()]
}
