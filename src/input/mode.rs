//! Editor drawing mode selection.

use std::fmt;

/// What a primary-button interaction on the canvas does.
///
/// Switching modes never touches existing drawings or the point list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DrawMode {
    /// Clicks place points; each new point is joined to the previous one (default)
    #[default]
    PointsAndLines,
    /// Dragging paints a continuous freehand stroke
    FreeDraw,
}

impl DrawMode {
    /// Label of the toolbar button that selects this mode.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PointsAndLines => "Points and lines",
            Self::FreeDraw => "Drawing",
        }
    }
}

impl fmt::Display for DrawMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PointsAndLines => "points-and-lines",
            Self::FreeDraw => "drawing",
        })
    }
}

impl std::str::FromStr for DrawMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "points-and-lines" | "points" | "lines" => Ok(Self::PointsAndLines),
            "drawing" | "free-draw" | "freehand" | "draw" => Ok(Self::FreeDraw),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_mode_is_points_and_lines() {
        assert_eq!(DrawMode::default(), DrawMode::PointsAndLines);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            DrawMode::from_str("points-and-lines").unwrap(),
            DrawMode::PointsAndLines
        );
        assert_eq!(
            DrawMode::from_str("Points_And_Lines").unwrap(),
            DrawMode::PointsAndLines
        );
        assert_eq!(DrawMode::from_str("DRAWING").unwrap(), DrawMode::FreeDraw);
        assert_eq!(DrawMode::from_str("free_draw").unwrap(), DrawMode::FreeDraw);
        assert!(DrawMode::from_str("invalid").is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for mode in [DrawMode::PointsAndLines, DrawMode::FreeDraw] {
            assert_eq!(mode.to_string().parse::<DrawMode>().unwrap(), mode);
        }
    }
}
