//! Frame container for the retained canvas items.

use super::color::Color;
use super::shape::Shape;
use super::surface::DrawingSurface;

/// Container for every item currently on the canvas.
///
/// Acts as the retained drawing surface: primitives append items through
/// [`DrawingSurface`], and the backend repaints the whole list each frame.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Items in draw order (first = bottom, last = top)
    pub shapes: Vec<Shape>,
}

impl Frame {
    /// Creates a new empty frame.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Removes all items from the frame.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Number of point markers on the canvas.
    pub fn marker_count(&self) -> usize {
        self.shapes.iter().filter(|s| s.is_oval()).count()
    }

    /// Number of straight segments on the canvas.
    pub fn segment_count(&self) -> usize {
        self.shapes.iter().filter(|s| s.is_segment()).count()
    }
}

impl DrawingSurface for Frame {
    fn create_oval(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        self.shapes.push(Shape::Oval {
            x0,
            y0,
            x1,
            y1,
            color,
        });
    }

    fn create_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, width: f64, color: Color) {
        self.shapes.push(Shape::Segment {
            x1,
            y1,
            x2,
            y2,
            color,
            thick: width,
        });
    }

    fn delete_all(&mut self) {
        self.clear();
    }
}
