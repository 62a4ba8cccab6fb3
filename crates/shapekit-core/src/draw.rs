//! One drawing function per shape kind.
//!
//! Each function draws onto `onto` when given (compositing the new primitive
//! with what the shape already holds) or onto a fresh blank shape, and
//! returns the shape with its bounding geometry up to date. Offsets default
//! to the origin.

use crate::dimensions::{apply_dimensions, CornerRadii, CornerRadius, Dimensions};
use crate::geometry::Point;
use crate::graphics::Canvas;
use crate::shape::Shape;
use crate::style::ShapeStyle;

pub use crate::dimensions::start_point_x;

/// Take the target shape and prime its canvas with the stroke (and optionally fill) of `style`.
fn prepare(onto: Option<Shape>, style: &ShapeStyle, filled: bool) -> Shape {
    let mut shape = onto.unwrap_or_default();
    shape
        .graphics
        .set_stroke_style(style.stroke_style)
        .begin_stroke(style.stroke);
    if filled {
        shape.graphics.begin_fill(style.fill);
    }
    shape
}

fn finish(mut shape: Shape, dims: Dimensions) -> Shape {
    log::trace!("drew {} on shape {}", dims.kind(), shape.id);
    apply_dimensions(&mut shape, dims);
    shape
}

/// Straight line from `offset` to `to`.
pub fn line(to: Point, style: &ShapeStyle, offset: Option<Point>, onto: Option<Shape>) -> Shape {
    let from = offset.unwrap_or_default();
    let dims = Dimensions::linear(to.x - from.x, to.y - from.y, Some(from));

    let mut shape = prepare(onto, style, false);
    shape.graphics.move_to(from).line_to(to);
    finish(shape, dims)
}

/// Rectangle with its top-left corner at `offset`.
pub fn rect(
    width: f64,
    height: f64,
    style: &ShapeStyle,
    offset: Option<Point>,
    onto: Option<Shape>,
) -> Shape {
    let dims = Dimensions::rectangular(width, height, offset);

    let mut shape = prepare(onto, style, true);
    shape.graphics.draw_rect(dims.offset(), width, height);
    finish(shape, dims)
}

/// Rectangle with every corner rounded by `radius`.
pub fn round_rect(
    width: f64,
    height: f64,
    radius: f64,
    style: &ShapeStyle,
    offset: Option<Point>,
    onto: Option<Shape>,
) -> Shape {
    let dims = Dimensions::rectangular(width, height, offset)
        .with_corners(CornerRadius::Uniform { radius });

    let mut shape = prepare(onto, style, true);
    shape
        .graphics
        .draw_round_rect(dims.offset(), width, height, radius);
    finish(shape, dims)
}

/// Rectangle with an individual radius per corner.
pub fn round_rect_complex(
    width: f64,
    height: f64,
    radii: CornerRadii,
    style: &ShapeStyle,
    offset: Option<Point>,
    onto: Option<Shape>,
) -> Shape {
    let dims = Dimensions::rectangular(width, height, offset)
        .with_corners(CornerRadius::PerCorner(radii));

    let mut shape = prepare(onto, style, true);
    shape
        .graphics
        .draw_round_rect_complex(dims.offset(), width, height, radii);
    finish(shape, dims)
}

/// Circle centred on `offset`.
pub fn circle(
    radius: f64,
    style: &ShapeStyle,
    offset: Option<Point>,
    onto: Option<Shape>,
) -> Shape {
    let dims = Dimensions::circular(radius, offset);

    let mut shape = prepare(onto, style, true);
    shape.graphics.draw_circle(dims.offset(), radius);
    finish(shape, dims)
}

/// Ellipse inscribed in the `width` x `height` box whose top-left is `offset`.
pub fn ellipse(
    width: f64,
    height: f64,
    style: &ShapeStyle,
    offset: Option<Point>,
    onto: Option<Shape>,
) -> Shape {
    let dims = Dimensions::rectangular(width, height, offset);

    let mut shape = prepare(onto, style, true);
    shape.graphics.draw_ellipse(dims.offset(), width, height);
    finish(shape, dims)
}

/// Regular polygon or star centred on `offset`, bounded like a circle of `radius`.
///
/// `point_size` defaults to 0 (a plain polygon); `angle` rotates the first
/// vertex, in degrees.
pub fn poly_star(
    radius: f64,
    sides: u32,
    point_size: Option<f64>,
    angle: f64,
    style: &ShapeStyle,
    offset: Option<Point>,
    onto: Option<Shape>,
) -> Shape {
    let dims = Dimensions::circular(radius, offset);

    let mut shape = prepare(onto, style, true);
    shape.graphics.draw_poly_star(
        dims.offset(),
        radius,
        sides,
        point_size.unwrap_or(0.0),
        angle,
    );
    finish(shape, dims)
}
