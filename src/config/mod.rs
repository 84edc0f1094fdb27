//! Configuration file support for graphic-editor.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/graphic-editor/config.toml`. Settings include canvas size,
//! marker and stroke appearance, keybindings, and performance tuning.
//!
//! If no config file exists, defaults matching the classic editor are used.

pub mod enums;
pub mod keybindings;
pub mod types;

pub use enums::ColorSpec;
pub use keybindings::{Action, KeyBinding, KeybindingError, KeybindingsConfig};
pub use types::{CanvasConfig, FreehandConfig, PerformanceConfig, PointsConfig, UiConfig};

use crate::input::{DrawMode, DrawingStyle};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name used under the XDG config home.
const CONFIG_DIR_NAME: &str = "graphic-editor";

/// Main configuration structure containing all user settings.
///
/// All fields have defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 800
/// height = 600
/// background = "white"
///
/// [points]
/// marker_size = 6
/// marker_color = "black"
/// line_width = 3.0
/// line_color = "blue"
///
/// [freehand]
/// width = 2.0
/// color = "red"
///
/// [ui]
/// default_mode = "points-and-lines"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas size and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Point marker and connecting line appearance
    #[serde(default)]
    pub points: PointsConfig,

    /// Freehand stroke appearance
    #[serde(default)]
    pub freehand: FreehandConfig,

    /// UI display preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// Performance tuning options
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// Keyboard shortcuts for toolbar commands
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width` / `canvas.height`: 100 - 8192
    /// - `points.marker_size`: 1 - 64
    /// - `points.line_width`, `freehand.width`: 0.5 - 20.0
    /// - `ui.toolbar_font_size`: 8.0 - 32.0
    /// - `performance.buffer_count`: 2 - 4
    fn validate_and_clamp(&mut self) {
        if !(100..=8192).contains(&self.canvas.width) {
            warn!(
                "Invalid canvas width {}, clamping to 100-8192 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(100, 8192);
        }

        if !(100..=8192).contains(&self.canvas.height) {
            warn!(
                "Invalid canvas height {}, clamping to 100-8192 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(100, 8192);
        }

        if !(1..=64).contains(&self.points.marker_size) {
            warn!(
                "Invalid marker_size {}, clamping to 1-64 range",
                self.points.marker_size
            );
            self.points.marker_size = self.points.marker_size.clamp(1, 64);
        }

        if !(0.5..=20.0).contains(&self.points.line_width) {
            warn!(
                "Invalid line_width {:.1}, clamping to 0.5-20.0 range",
                self.points.line_width
            );
            self.points.line_width = self.points.line_width.clamp(0.5, 20.0);
        }

        if !(0.5..=20.0).contains(&self.freehand.width) {
            warn!(
                "Invalid freehand width {:.1}, clamping to 0.5-20.0 range",
                self.freehand.width
            );
            self.freehand.width = self.freehand.width.clamp(0.5, 20.0);
        }

        if !(8.0..=32.0).contains(&self.ui.toolbar_font_size) {
            warn!(
                "Invalid toolbar_font_size {:.1}, clamping to 8.0-32.0 range",
                self.ui.toolbar_font_size
            );
            self.ui.toolbar_font_size = self.ui.toolbar_font_size.clamp(8.0, 32.0);
        }

        if !(2..=4).contains(&self.performance.buffer_count) {
            warn!(
                "Invalid buffer_count {}, clamping to 2-4 range",
                self.performance.buffer_count
            );
            self.performance.buffer_count = self.performance.buffer_count.clamp(2, 4);
        }

        if self.ui.default_mode.parse::<DrawMode>().is_err() {
            warn!(
                "Invalid default_mode '{}', falling back to 'points-and-lines'",
                self.ui.default_mode
            );
            self.ui.default_mode = "points-and-lines".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `path`, or returns defaults if the file does not exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Returns the JSON schema describing the configuration file.
    pub fn config_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Resolves the configured startup mode, preferring `override_mode` when it parses.
    pub fn initial_mode(&self, override_mode: Option<&str>) -> DrawMode {
        if let Some(requested) = override_mode {
            match requested.parse::<DrawMode>() {
                Ok(mode) => return mode,
                Err(()) => warn!(
                    "Invalid mode '{}', using '{}' from config",
                    requested, self.ui.default_mode
                ),
            }
        }
        self.ui.default_mode.parse().unwrap_or_default()
    }

    /// Builds the marker, line and stroke appearance used by the editor.
    pub fn drawing_style(&self) -> DrawingStyle {
        DrawingStyle {
            marker_size: self.points.marker_size,
            marker_color: self.points.marker_color.to_color(),
            line_width: self.points.line_width,
            line_color: self.points.line_color.to_color(),
            stroke_width: self.freehand.width,
            stroke_color: self.freehand.color.to_color(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, BLUE, GREEN, RED, WHITE};
    use std::io::Write;

    #[test]
    fn defaults_match_classic_editor() {
        let config = Config::default();
        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.canvas.height, 600);
        assert_eq!(config.canvas.background.to_color(), WHITE);

        let style = config.drawing_style();
        assert_eq!(style, DrawingStyle::default());
        assert_eq!(style.marker_size, 6);
        assert_eq!(style.marker_color, BLACK);
        assert_eq!(style.line_width, 3.0);
        assert_eq!(style.line_color, BLUE);
        assert_eq!(style.stroke_width, 2.0);
        assert_eq!(style.stroke_color, RED);
        assert_eq!(config.initial_mode(None), DrawMode::PointsAndLines);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.points.marker_size, 6);
    }

    #[test]
    fn partial_file_is_merged_with_defaults_and_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[points]
marker_size = 500
line_color = [0, 255, 0]

[freehand]
width = 0.0

[ui]
default_mode = "sideways"

[performance]
buffer_count = 9
"#
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.points.marker_size, 64);
        assert_eq!(config.points.line_color.to_color(), GREEN);
        assert_eq!(config.freehand.width, 0.5);
        assert_eq!(config.ui.default_mode, "points-and-lines");
        assert_eq!(config.performance.buffer_count, 4);
        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.keybindings.clear_canvas, vec!["E".to_string()]);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[canvas\nwidth = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn initial_mode_prefers_valid_override() {
        let config = Config::default();
        assert_eq!(config.initial_mode(Some("drawing")), DrawMode::FreeDraw);
        assert_eq!(config.initial_mode(Some("bogus")), DrawMode::PointsAndLines);
    }

    #[test]
    fn schema_mentions_sections() {
        let schema = serde_json::to_string(&Config::config_schema()).unwrap();
        assert!(schema.contains("canvas"));
        assert!(schema.contains("keybindings"));
    }
}
