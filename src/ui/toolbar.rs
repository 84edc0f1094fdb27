//! Toolbar layout, hit-testing and rendering.
//!
//! The toolbar sits at the top of the window above the canvas. It holds one
//! button per row, each centered horizontally.

use crate::config::Action;
use crate::draw::Color;
use crate::input::DrawMode;
use crate::util::Rect;

// ============================================================================
// UI Layout Constants (not configurable)
// ============================================================================

/// Gap between the window edge and a button, and half the gap between rows
const TOOLBAR_PAD: f64 = 5.0;
/// Horizontal space between a label and the button border
const BUTTON_LABEL_PAD_X: f64 = 12.0;
/// Average glyph width as a fraction of font size, used for button sizing
const CHAR_WIDTH_FACTOR: f64 = 0.6;
/// Button border width
const BUTTON_BORDER_WIDTH: f64 = 1.0;

const TOOLBAR_BG: Color = Color::rgb(0.92, 0.92, 0.92);
const TOOLBAR_SEPARATOR: Color = Color::rgb(0.7, 0.7, 0.7);
const BUTTON_BG: Color = Color::rgb(0.98, 0.98, 0.98);
const BUTTON_ACTIVE_BG: Color = Color::rgb(0.55, 0.72, 0.95);
const BUTTON_BORDER: Color = Color::rgb(0.45, 0.45, 0.45);
const LABEL_COLOR: Color = Color::rgb(0.1, 0.1, 0.1);

/// A clickable toolbar button.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarButton {
    /// Text shown on the button
    pub label: &'static str,
    /// Action executed when the button is clicked
    pub action: Action,
    /// Button area in window coordinates
    pub rect: Rect,
}

impl ToolbarButton {
    /// Mode this button selects, if it is a mode button.
    pub fn selects_mode(&self) -> Option<DrawMode> {
        match self.action {
            Action::PointsAndLinesMode => Some(DrawMode::PointsAndLines),
            Action::FreeDrawMode => Some(DrawMode::FreeDraw),
            Action::ClearCanvas | Action::Exit => None,
        }
    }
}

/// Toolbar with the "Clear", "Points and lines" and "Drawing" buttons.
#[derive(Debug, Clone)]
pub struct Toolbar {
    font_size: f64,
    buttons: Vec<ToolbarButton>,
    hovered: Option<usize>,
}

impl Toolbar {
    /// Creates a toolbar whose buttons are sized for `font_size`.
    ///
    /// Buttons start centered in a zero-width window; call [`Toolbar::layout`]
    /// once the window width is known.
    pub fn new(font_size: f64) -> Self {
        let entries = [
            ("Clear", Action::ClearCanvas),
            (DrawMode::PointsAndLines.label(), Action::PointsAndLinesMode),
            (DrawMode::FreeDraw.label(), Action::FreeDrawMode),
        ];

        let button_height = Self::button_height_for(font_size);
        let buttons = entries
            .into_iter()
            .enumerate()
            .filter_map(|(row, (label, action))| {
                let width = (label.chars().count() as f64 * font_size * CHAR_WIDTH_FACTOR
                    + BUTTON_LABEL_PAD_X * 2.0)
                    .round() as i32;
                let y = (TOOLBAR_PAD + row as f64 * (button_height as f64 + TOOLBAR_PAD * 2.0))
                    .round() as i32;
                Rect::new(-width / 2, y, width, button_height).map(|rect| ToolbarButton {
                    label,
                    action,
                    rect,
                })
            })
            .collect();

        Self {
            font_size,
            buttons,
            hovered: None,
        }
    }

    fn button_height_for(font_size: f64) -> i32 {
        (font_size * 2.0).round().max(1.0) as i32
    }

    /// Re-centers every button for a window of the given width.
    pub fn layout(&mut self, width: u32) {
        let width = width.min(i32::MAX as u32) as i32;
        for button in &mut self.buttons {
            button.rect.x = (width - button.rect.width) / 2;
        }
    }

    /// Total toolbar height in pixels; the canvas starts right below it.
    pub fn height(&self) -> u32 {
        self.buttons
            .last()
            .map(|button| button.rect.y + button.rect.height + TOOLBAR_PAD as i32)
            .unwrap_or(0)
            .max(0) as u32
    }

    pub fn buttons(&self) -> &[ToolbarButton] {
        &self.buttons
    }

    /// Returns the action of the button under `(x, y)`, if any.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<Action> {
        self.button_index_at(x, y)
            .map(|index| self.buttons[index].action)
    }

    fn button_index_at(&self, x: i32, y: i32) -> Option<usize> {
        self.buttons
            .iter()
            .position(|button| button.rect.contains(x, y))
    }

    /// Updates the hovered button. Returns true when the highlight changed.
    pub fn set_hover(&mut self, x: i32, y: i32) -> bool {
        let hovered = self.button_index_at(x, y);
        let changed = hovered != self.hovered;
        self.hovered = hovered;
        changed
    }

    /// Removes any hover highlight. Returns true when one was shown.
    pub fn clear_hover(&mut self) -> bool {
        self.hovered.take().is_some()
    }

    /// Button currently under the pointer, if any.
    pub fn hovered(&self) -> Option<&ToolbarButton> {
        self.hovered.and_then(|index| self.buttons.get(index))
    }
}

/// Renders the toolbar strip along the top of the window.
///
/// The button selecting `active_mode` is highlighted and the hovered button
/// is drawn slightly lighter.
pub fn render_toolbar(ctx: &cairo::Context, toolbar: &Toolbar, active_mode: DrawMode, width: u32) {
    let height = toolbar.height() as f64;
    let width = width as f64;

    let _ = ctx.save();

    TOOLBAR_BG.apply(ctx);
    ctx.rectangle(0.0, 0.0, width, height);
    let _ = ctx.fill();

    TOOLBAR_SEPARATOR.apply(ctx);
    ctx.set_line_width(1.0);
    ctx.move_to(0.0, height - 0.5);
    ctx.line_to(width, height - 0.5);
    let _ = ctx.stroke();

    let hovered = toolbar.hovered();
    for button in &toolbar.buttons {
        let mut fill = if button.selects_mode() == Some(active_mode) {
            BUTTON_ACTIVE_BG
        } else {
            BUTTON_BG
        };
        if hovered.is_some_and(|h| std::ptr::eq(h, button)) {
            fill = fill.lighten(0.35);
        }
        render_button(ctx, button, fill, toolbar.font_size);
    }

    let _ = ctx.restore();
}

fn render_button(ctx: &cairo::Context, button: &ToolbarButton, fill: Color, font_size: f64) {
    let rect = button.rect;
    let (x, y) = (rect.x as f64, rect.y as f64);
    let (w, h) = (rect.width as f64, rect.height as f64);

    fill.apply(ctx);
    ctx.rectangle(x, y, w, h);
    let _ = ctx.fill();

    // Half-pixel inset keeps the 1px border crisp
    BUTTON_BORDER.apply(ctx);
    ctx.set_line_width(BUTTON_BORDER_WIDTH);
    ctx.rectangle(x + 0.5, y + 0.5, w - 1.0, h - 1.0);
    let _ = ctx.stroke();

    let layout = pangocairo::functions::create_layout(ctx);
    let font_desc = pango::FontDescription::from_string(&format!("Sans {}", font_size));
    layout.set_font_description(Some(&font_desc));
    layout.set_text(button.label);

    let (_ink_rect, logical_rect) = layout.extents();
    let text_width = logical_rect.width() as f64 / pango::SCALE as f64;
    let text_height = logical_rect.height() as f64 / pango::SCALE as f64;

    LABEL_COLOR.apply(ctx);
    ctx.move_to(x + (w - text_width) / 2.0, y + (h - text_height) / 2.0);
    pangocairo::functions::show_layout(ctx, &layout);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laid_out(width: u32) -> Toolbar {
        let mut toolbar = Toolbar::new(14.0);
        toolbar.layout(width);
        toolbar
    }

    #[test]
    fn buttons_are_stacked_in_order() {
        let toolbar = laid_out(800);
        let labels: Vec<_> = toolbar.buttons().iter().map(|b| b.label).collect();
        assert_eq!(labels, vec!["Clear", "Points and lines", "Drawing"]);

        let ys: Vec<_> = toolbar.buttons().iter().map(|b| b.rect.y).collect();
        assert_eq!(ys, vec![5, 43, 81]);
        assert!(toolbar.buttons().iter().all(|b| b.rect.height == 28));
    }

    #[test]
    fn height_covers_three_rows_and_padding() {
        let toolbar = laid_out(800);
        assert_eq!(toolbar.height(), 114);
    }

    #[test]
    fn buttons_are_centered() {
        let toolbar = laid_out(800);
        for button in toolbar.buttons() {
            let left = button.rect.x;
            let right = 800 - (button.rect.x + button.rect.width);
            assert!((left - right).abs() <= 1, "{} not centered", button.label);
        }
    }

    #[test]
    fn hit_test_maps_buttons_to_actions() {
        let toolbar = laid_out(800);
        for button in toolbar.buttons() {
            let cx = button.rect.x + button.rect.width / 2;
            let cy = button.rect.y + button.rect.height / 2;
            assert_eq!(toolbar.hit_test(cx, cy), Some(button.action));
        }
        assert_eq!(toolbar.hit_test(400, 20), Some(Action::ClearCanvas));
        assert_eq!(toolbar.hit_test(400, 57), Some(Action::PointsAndLinesMode));
        assert_eq!(toolbar.hit_test(400, 95), Some(Action::FreeDrawMode));
    }

    #[test]
    fn hit_test_misses_outside_buttons() {
        let toolbar = laid_out(800);
        assert_eq!(toolbar.hit_test(2, 20), None);
        assert_eq!(toolbar.hit_test(400, 2), None);
        assert_eq!(toolbar.hit_test(400, 36), None);
        assert_eq!(toolbar.hit_test(400, 200), None);
    }

    #[test]
    fn relayout_follows_window_width() {
        let mut toolbar = laid_out(800);
        toolbar.layout(400);
        assert_eq!(toolbar.hit_test(200, 20), Some(Action::ClearCanvas));
        assert_eq!(toolbar.hit_test(600, 20), None);
    }

    #[test]
    fn hover_reports_changes() {
        let mut toolbar = laid_out(800);
        assert!(toolbar.set_hover(400, 20));
        assert!(!toolbar.set_hover(401, 21));
        assert_eq!(toolbar.hovered().map(|b| b.action), Some(Action::ClearCanvas));
        assert!(toolbar.set_hover(400, 200));
        assert!(toolbar.hovered().is_none());
        assert!(!toolbar.clear_hover());
    }

    #[test]
    fn mode_buttons_know_their_mode() {
        let toolbar = laid_out(800);
        let modes: Vec<_> = toolbar.buttons().iter().map(|b| b.selects_mode()).collect();
        assert_eq!(
            modes,
            vec![None, Some(DrawMode::PointsAndLines), Some(DrawMode::FreeDraw)]
        );
    }
}
