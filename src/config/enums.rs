//! Configuration enum types.

use crate::draw::{Color, color::BLACK};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color setting - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// marker_color = "black"
///
/// # Custom RGB color (0-255 per component)
/// line_color = [0, 128, 255]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, orange, pink, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color setting to a [`Color`] struct.
    ///
    /// Unknown color names default to black with a warning. RGB arrays are
    /// converted from 0-255 range to 0.0-1.0 range with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using black", name);
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color::rgb(
                *r as f64 / 255.0,
                *g as f64 / 255.0,
                *b as f64 / 255.0,
            ),
        }
    }

    pub(crate) fn named(name: &str) -> Self {
        ColorSpec::Name(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, WHITE};

    #[test]
    fn named_and_rgb_specs_convert() {
        assert_eq!(ColorSpec::named("blue").to_color(), BLUE);
        assert_eq!(ColorSpec::Rgb([255, 255, 255]).to_color(), WHITE);
        assert_eq!(ColorSpec::named("mauve").to_color(), BLACK);
    }
}
