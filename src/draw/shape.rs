//! Retained canvas items.

use super::color::Color;
use crate::util::Rect;

/// A drawable item retained by the canvas.
///
/// Items are appended in draw order and repainted on every frame, so anything
/// placed on the canvas survives resizes until the canvas is cleared.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Filled circle/ellipse inscribed in the box `(x0, y0)..(x1, y1)`
    Oval {
        /// Left edge of the bounding box
        x0: i32,
        /// Top edge of the bounding box
        y0: i32,
        /// Right edge of the bounding box
        x1: i32,
        /// Bottom edge of the bounding box
        y1: i32,
        /// Fill and outline color
        color: Color,
    },
    /// Straight segment between two canvas coordinates
    Segment {
        /// Starting X coordinate
        x1: i32,
        /// Starting Y coordinate
        y1: i32,
        /// Ending X coordinate
        x2: i32,
        /// Ending Y coordinate
        y2: i32,
        /// Stroke color
        color: Color,
        /// Stroke width in pixels
        thick: f64,
    },
}

impl Shape {
    /// Returns the axis-aligned bounding box for this shape, expanded to cover stroke width.
    ///
    /// The returned rectangle is suitable for dirty region tracking and damage hints.
    pub fn bounding_box(&self) -> Option<Rect> {
        match self {
            Shape::Oval { x0, y0, x1, y1, .. } => bounding_box_for_oval(*x0, *y0, *x1, *y1),
            Shape::Segment {
                x1,
                y1,
                x2,
                y2,
                thick,
                ..
            } => bounding_box_for_line(*x1, *y1, *x2, *y2, *thick),
        }
    }

    /// Returns `true` for point markers.
    pub fn is_oval(&self) -> bool {
        matches!(self, Shape::Oval { .. })
    }

    /// Returns `true` for straight segments.
    pub fn is_segment(&self) -> bool {
        matches!(self, Shape::Segment { .. })
    }
}

fn stroke_padding(thick: f64) -> i32 {
    let padding = (thick / 2.0).ceil() as i32;
    padding.max(1)
}

pub(crate) fn bounding_box_for_oval(x0: i32, y0: i32, x1: i32, y1: i32) -> Option<Rect> {
    // The outline is one pixel wide and straddles the box edge.
    let min_x = x0.min(x1) - 1;
    let max_x = x0.max(x1) + 1;
    let min_y = y0.min(y1) - 1;
    let max_y = y0.max(y1) + 1;

    ensure_positive_rect(min_x, min_y, max_x, max_y)
}

pub(crate) fn bounding_box_for_line(
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    thick: f64,
) -> Option<Rect> {
    let padding = stroke_padding(thick);

    let min_x = x1.min(x2) - padding;
    let max_x = x1.max(x2) + padding;
    let min_y = y1.min(y2) - padding;
    let max_y = y1.max(y2) + padding;

    ensure_positive_rect(min_x, min_y, max_x, max_y)
}

fn ensure_positive_rect(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Rect> {
    let max_x = if min_x == max_x { max_x + 1 } else { max_x };
    let max_y = if min_y == max_y { max_y + 1 } else { max_y };
    Rect::from_min_max(min_x, min_y, max_x, max_y)
}
