//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas geometry and background.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Initial canvas width in pixels (valid range: 100 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Initial canvas height in pixels, excluding the toolbar (valid range: 100 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: u32,

    /// Canvas background color
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_background(),
        }
    }
}

/// Appearance of placed points and the lines connecting them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PointsConfig {
    /// Marker diameter in pixels; odd sizes round down (valid range: 1 - 64)
    #[serde(default = "default_marker_size")]
    pub marker_size: i32,

    /// Marker fill color
    #[serde(default = "default_marker_color")]
    pub marker_color: ColorSpec,

    /// Connecting line width in pixels (valid range: 0.5 - 20.0)
    #[serde(default = "default_line_width")]
    pub line_width: f64,

    /// Connecting line color
    #[serde(default = "default_line_color")]
    pub line_color: ColorSpec,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            marker_size: default_marker_size(),
            marker_color: default_marker_color(),
            line_width: default_line_width(),
            line_color: default_line_color(),
        }
    }
}

/// Appearance of freehand strokes.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FreehandConfig {
    /// Stroke width in pixels (valid range: 0.5 - 20.0)
    #[serde(default = "default_stroke_width")]
    pub width: f64,

    /// Stroke color
    #[serde(default = "default_stroke_color")]
    pub color: ColorSpec,
}

impl Default for FreehandConfig {
    fn default() -> Self {
        Self {
            width: default_stroke_width(),
            color: default_stroke_color(),
        }
    }
}

/// UI display preferences.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Mode active at startup: "points-and-lines" or "drawing"
    #[serde(default = "default_mode")]
    pub default_mode: String,

    /// Toolbar button label size in points (valid range: 8.0 - 32.0)
    #[serde(default = "default_toolbar_font_size")]
    pub toolbar_font_size: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_mode: default_mode(),
            toolbar_font_size: default_toolbar_font_size(),
        }
    }
}

/// Performance tuning options.
///
/// Most users won't need to change these from their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PerformanceConfig {
    /// Number of shared-memory buffers (valid range: 2 - 4)
    #[serde(default = "default_buffer_count")]
    pub buffer_count: u32,

    /// Throttle rendering to compositor frame callbacks
    #[serde(default = "default_enable_vsync")]
    pub enable_vsync: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            buffer_count: default_buffer_count(),
            enable_vsync: default_enable_vsync(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_canvas_width() -> u32 {
    800
}

fn default_canvas_height() -> u32 {
    600
}

fn default_background() -> ColorSpec {
    ColorSpec::named("white")
}

fn default_marker_size() -> i32 {
    6
}

fn default_marker_color() -> ColorSpec {
    ColorSpec::named("black")
}

fn default_line_width() -> f64 {
    3.0
}

fn default_line_color() -> ColorSpec {
    ColorSpec::named("blue")
}

fn default_stroke_width() -> f64 {
    2.0
}

fn default_stroke_color() -> ColorSpec {
    ColorSpec::named("red")
}

fn default_mode() -> String {
    "points-and-lines".to_string()
}

fn default_toolbar_font_size() -> f64 {
    14.0
}

fn default_buffer_count() -> u32 {
    2
}

fn default_enable_vsync() -> bool {
    true
}
