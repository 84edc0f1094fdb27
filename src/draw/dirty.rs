//! Dirty region tracking for incremental damage hints.
//!
//! Collects axis-aligned rectangles (in canvas coordinates) that changed
//! between frames.

use super::Shape;
use crate::util::Rect;

/// Tracks dirty rectangles accumulated between renders.
#[derive(Debug, Default)]
pub struct DirtyTracker {
    regions: Vec<Rect>,
    force_full: bool,
}

impl DirtyTracker {
    /// Creates a new, empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the entire surface as dirty. Clears any accumulated rectangles.
    pub fn mark_full(&mut self) {
        self.force_full = true;
        self.regions.clear();
    }

    /// Adds a dirty rectangle if the tracker is not already full.
    pub fn mark_rect(&mut self, rect: Rect) {
        if !rect.is_valid() || self.force_full {
            return;
        }
        self.regions.push(rect);
    }

    /// Adds the bounding box for the given shape, or full damage if none is available.
    pub fn mark_shape(&mut self, shape: &Shape) {
        match shape.bounding_box() {
            Some(rect) => self.mark_rect(rect),
            None => self.mark_full(),
        }
    }

    /// Returns true when nothing has been marked since the last drain.
    pub fn is_clean(&self) -> bool {
        !self.force_full && self.regions.is_empty()
    }

    /// Drains the dirty regions gathered so far.
    ///
    /// When the full surface is marked, returns a single rectangle covering the
    /// entire surface; otherwise returns accumulated rectangles.
    pub fn take_regions(&mut self, width: i32, height: i32) -> Vec<Rect> {
        if self.force_full {
            self.force_full = false;
            self.regions.clear();
            return Rect::new(0, 0, width, height).into_iter().collect();
        }
        self.regions.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED};

    #[test]
    fn mark_shape_records_rectangles() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_shape(&Shape::Segment {
            x1: 0,
            y1: 0,
            x2: 10,
            y2: 10,
            color: RED,
            thick: 2.0,
        });

        assert!(!tracker.is_clean());
        let rects = tracker.take_regions(100, 100);
        assert_eq!(rects.len(), 1);
        assert!(rects[0].width > 0);
        assert!(rects[0].height > 0);
        assert!(tracker.is_clean());
    }

    #[test]
    fn mark_full_takes_precedence() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_shape(&Shape::Oval {
            x0: 5,
            y0: 5,
            x1: 11,
            y1: 11,
            color: BLACK,
        });
        tracker.mark_full();
        tracker.mark_shape(&Shape::Oval {
            x0: 20,
            y0: 20,
            x1: 26,
            y1: 26,
            color: BLACK,
        });

        let rects = tracker.take_regions(200, 100);
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0], Rect::new(0, 0, 200, 100).unwrap());
    }

    #[test]
    fn full_damage_on_empty_surface_yields_nothing() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_full();
        assert!(tracker.take_regions(0, 0).is_empty());
    }
}
