//! Point markers and connecting lines.

use super::color::{BLACK, BLUE, Color};
use super::surface::DrawingSurface;

/// Default marker diameter in pixels.
pub const DEFAULT_MARKER_SIZE: i32 = 6;
/// Default marker color.
pub const DEFAULT_MARKER_COLOR: Color = BLACK;
/// Default connecting line width in pixels.
pub const DEFAULT_LINE_WIDTH: f64 = 3.0;
/// Default connecting line color.
pub const DEFAULT_LINE_COLOR: Color = BLUE;

/// A placed point on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Draws the marker with the default size and color.
    pub fn render(&self, surface: &mut impl DrawingSurface) {
        self.render_with(surface, DEFAULT_MARKER_SIZE, DEFAULT_MARKER_COLOR);
    }

    /// Draws a filled circular marker centered on the point.
    ///
    /// The radius is `size / 2` with integer division, so odd sizes round down
    /// (a size of 7 covers the same box as 6).
    pub fn render_with(&self, surface: &mut impl DrawingSurface, size: i32, color: Color) {
        let radius = size / 2;
        surface.create_oval(
            self.x - radius,
            self.y - radius,
            self.x + radius,
            self.y + radius,
            color,
        );
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A straight line between two borrowed points.
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    start: &'a Point,
    end: &'a Point,
}

impl<'a> Line<'a> {
    pub fn new(start: &'a Point, end: &'a Point) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> &'a Point {
        self.start
    }

    pub fn end(&self) -> &'a Point {
        self.end
    }

    /// Draws the segment with the default width and color.
    pub fn render(&self, surface: &mut impl DrawingSurface) {
        self.render_with(surface, DEFAULT_LINE_WIDTH, DEFAULT_LINE_COLOR);
    }

    /// Draws the segment between the current coordinates of both endpoints.
    pub fn render_with(&self, surface: &mut impl DrawingSurface, width: f64, color: Color) {
        let (start, end) = (self.start(), self.end());
        surface.create_line(start.x(), start.y(), end.x(), end.y(), width, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Frame, Shape, color::RED};

    #[test]
    fn point_renders_default_marker() {
        let mut frame = Frame::new();
        Point::new(10, 20).render(&mut frame);

        assert_eq!(
            frame.shapes,
            vec![Shape::Oval {
                x0: 7,
                y0: 17,
                x1: 13,
                y1: 23,
                color: BLACK,
            }]
        );
    }

    #[test]
    fn odd_marker_size_rounds_down() {
        let mut six = Frame::new();
        let mut seven = Frame::new();
        let point = Point::new(40, 40);
        point.render_with(&mut six, 6, RED);
        point.render_with(&mut seven, 7, RED);

        assert_eq!(six.shapes, seven.shapes);
    }

    #[test]
    fn line_renders_between_endpoints() {
        let a = Point::new(10, 10);
        let b = Point::new(50, 10);
        let mut frame = Frame::new();
        Line::new(&a, &b).render(&mut frame);

        assert_eq!(
            frame.shapes,
            vec![Shape::Segment {
                x1: 10,
                y1: 10,
                x2: 50,
                y2: 10,
                color: BLUE,
                thick: 3.0,
            }]
        );
    }

    #[test]
    fn line_borrows_endpoints() {
        let a = Point::from((1, 2));
        let b = Point::from((3, 4));
        let line = Line::new(&a, &b);
        assert!(std::ptr::eq(line.start(), &a));
        assert!(std::ptr::eq(line.end(), &b));
    }
}
