//! Cairo-based rendering functions for canvas items.

use super::color::Color;
use super::shape::Shape;

/// Fills the given canvas area with a solid background color.
///
/// Should be called before rendering shapes.
pub fn render_background(ctx: &cairo::Context, color: Color, width: f64, height: f64) {
    color.apply(ctx);
    ctx.rectangle(0.0, 0.0, width, height);
    let _ = ctx.fill(); // A failed fill only leaves the previous background visible
}

/// Renders all shapes in a collection to a Cairo context.
///
/// Shapes are drawn in the order they appear (first shape = bottom layer).
pub fn render_shapes(ctx: &cairo::Context, shapes: &[Shape]) {
    for shape in shapes {
        render_shape(ctx, shape);
    }
}

/// Renders a single shape to a Cairo context.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape) {
    match shape {
        Shape::Oval {
            x0,
            y0,
            x1,
            y1,
            color,
        } => render_oval(ctx, *x0, *y0, *x1, *y1, *color),
        Shape::Segment {
            x1,
            y1,
            x2,
            y2,
            color,
            thick,
        } => render_segment(ctx, *x1, *y1, *x2, *y2, *color, *thick),
    }
}

/// Render a filled oval with a one pixel outline in the same color
fn render_oval(ctx: &cairo::Context, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
    let cx = (x0 + x1) as f64 / 2.0;
    let cy = (y0 + y1) as f64 / 2.0;
    let rx = (x1 - x0).abs() as f64 / 2.0;
    let ry = (y1 - y0).abs() as f64 / 2.0;

    color.apply(ctx);

    if rx == 0.0 || ry == 0.0 {
        // Zero-sized markers still leave a dot, like the outline would.
        ctx.rectangle(cx - 0.5, cy - 0.5, 1.0, 1.0);
        let _ = ctx.fill();
        return;
    }

    ctx.save().ok();
    ctx.translate(cx, cy);
    ctx.scale(rx, ry);
    ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
    ctx.restore().ok();

    let _ = ctx.fill_preserve();
    ctx.set_line_width(1.0);
    let _ = ctx.stroke();
}

/// Render a straight segment
fn render_segment(
    ctx: &cairo::Context,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: Color,
    thick: f64,
) {
    color.apply(ctx);
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);

    ctx.move_to(x1 as f64, y1 as f64);
    ctx.line_to(x2 as f64, y2 as f64);
    let _ = ctx.stroke();
}
