//! Drawing surface abstraction used by the point and line primitives.

use super::color::Color;

/// A retained-mode canvas that primitives draw onto.
///
/// Each call adds one item; items stay on the surface until [`delete_all`]
/// is called.
///
/// [`delete_all`]: DrawingSurface::delete_all
pub trait DrawingSurface {
    /// Adds a filled oval inscribed in the box `(x0, y0)..(x1, y1)`.
    fn create_oval(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color);

    /// Adds a straight segment from `(x1, y1)` to `(x2, y2)`.
    fn create_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, width: f64, color: Color);

    /// Removes every item from the surface.
    fn delete_all(&mut self);
}
