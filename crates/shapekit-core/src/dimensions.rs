//! Bounding geometry of drawn shapes.
//!
//! Every drawing call builds a fresh [`Dimensions`] record. When the target
//! shape already carries one, the two are merged into an `Irregular` record
//! covering both extents; see [`merge`] and [`apply_dimensions`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{BBox, Point};
use crate::shape::{Bounded, Shape};

/// Category tag of a drawn shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangular,
    Circular,
    Triangular,
    Irregular,
    Linear,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Rectangular => "rectangular",
            ShapeKind::Circular => "circular",
            ShapeKind::Triangular => "triangular",
            ShapeKind::Irregular => "irregular",
            ShapeKind::Linear => "linear",
        };
        f.write_str(name)
    }
}

/// Radii of the four corners of a rounded rectangle, clockwise from top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl CornerRadii {
    pub fn new(top_left: f64, top_right: f64, bottom_right: f64, bottom_left: f64) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    pub fn uniform(radius: f64) -> Self {
        Self::new(radius, radius, radius, radius)
    }
}

/// Corner rounding recorded for rounded-rectangle draws.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CornerRadius {
    Uniform { radius: f64 },
    PerCorner(CornerRadii),
}

impl CornerRadius {
    pub fn radii(&self) -> CornerRadii {
        match self {
            CornerRadius::Uniform { radius } => CornerRadii::uniform(*radius),
            CornerRadius::PerCorner(radii) => *radii,
        }
    }
}

/// The two axes a bounding box is measured along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Which side of an axis an extremity lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Start,
    End,
}

/// Bounding geometry of a shape.
///
/// The reference offset depends on the variant: top-left for `Rectangular`
/// and `Irregular`, centre for `Circular`, start point for `Linear`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Dimensions {
    Rectangular {
        width: f64,
        height: f64,
        offset: Point,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        corners: Option<CornerRadius>,
    },
    Circular {
        radius: f64,
        center: Point,
    },
    Linear {
        dx: f64,
        dy: f64,
        offset: Point,
    },
    Irregular {
        width: f64,
        height: f64,
        offset: Point,
    },
}

impl Dimensions {
    pub fn rectangular(width: f64, height: f64, offset: Option<Point>) -> Self {
        Dimensions::Rectangular {
            width,
            height,
            offset: offset.unwrap_or_default(),
            corners: None,
        }
    }

    pub fn circular(radius: f64, center: Option<Point>) -> Self {
        Dimensions::Circular {
            radius,
            center: center.unwrap_or_default(),
        }
    }

    pub fn linear(dx: f64, dy: f64, offset: Option<Point>) -> Self {
        Dimensions::Linear {
            dx,
            dy,
            offset: offset.unwrap_or_default(),
        }
    }

    /// Attach corner rounding. Only rectangular records keep it.
    pub fn with_corners(mut self, radius: CornerRadius) -> Self {
        if let Dimensions::Rectangular { corners, .. } = &mut self {
            *corners = Some(radius);
        }
        self
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Dimensions::Rectangular { .. } => ShapeKind::Rectangular,
            Dimensions::Circular { .. } => ShapeKind::Circular,
            Dimensions::Linear { .. } => ShapeKind::Linear,
            Dimensions::Irregular { .. } => ShapeKind::Irregular,
        }
    }

    pub fn width(&self) -> f64 {
        match self {
            Dimensions::Rectangular { width, .. } | Dimensions::Irregular { width, .. } => *width,
            Dimensions::Circular { radius, .. } => radius * 2.0,
            Dimensions::Linear { dx, .. } => dx.abs(),
        }
    }

    pub fn height(&self) -> f64 {
        match self {
            Dimensions::Rectangular { height, .. } | Dimensions::Irregular { height, .. } => {
                *height
            }
            Dimensions::Circular { radius, .. } => radius * 2.0,
            Dimensions::Linear { dy, .. } => dy.abs(),
        }
    }

    /// The reference coordinate the shape is measured from.
    pub fn offset(&self) -> Point {
        match self {
            Dimensions::Rectangular { offset, .. }
            | Dimensions::Linear { offset, .. }
            | Dimensions::Irregular { offset, .. } => *offset,
            Dimensions::Circular { center, .. } => *center,
        }
    }

    pub fn radius(&self) -> Option<f64> {
        match self {
            Dimensions::Circular { radius, .. } => Some(*radius),
            _ => None,
        }
    }

    pub fn corners(&self) -> Option<CornerRadius> {
        match self {
            Dimensions::Rectangular { corners, .. } => *corners,
            _ => None,
        }
    }

    /// Axis-aligned box spanning the start and end extremities.
    pub fn bounds(&self) -> BBox {
        BBox::new(
            Point::new(
                extremity(self, Axis::X, Edge::Start),
                extremity(self, Axis::Y, Edge::Start),
            ),
            Point::new(
                extremity(self, Axis::X, Edge::End),
                extremity(self, Axis::Y, Edge::End),
            ),
        )
    }
}

/// Minimum (`Start`) or maximum (`End`) coordinate of a record along one axis.
pub fn extremity(dims: &Dimensions, axis: Axis, edge: Edge) -> f64 {
    let pick = |p: &Point| match axis {
        Axis::X => p.x,
        Axis::Y => p.y,
    };
    match dims {
        Dimensions::Circular { radius, center } => match edge {
            Edge::Start => -radius + pick(center),
            Edge::End => radius + pick(center),
        },
        Dimensions::Linear { dx, dy, offset } => {
            let origin = pick(offset);
            let delta = match axis {
                Axis::X => *dx,
                Axis::Y => *dy,
            };
            match edge {
                Edge::Start => origin.min(origin + delta),
                Edge::End => origin.max(origin + delta),
            }
        }
        Dimensions::Rectangular { offset, .. } | Dimensions::Irregular { offset, .. } => {
            let size = match axis {
                Axis::X => dims.width(),
                Axis::Y => dims.height(),
            };
            match edge {
                Edge::Start => pick(offset),
                Edge::End => pick(offset) + size,
            }
        }
    }
}

/// Left-most x coordinate of a record.
pub fn start_point_x(dims: &Dimensions) -> f64 {
    extremity(dims, Axis::X, Edge::Start)
}

/// Smallest axis-aligned record enclosing both `existing` and `incoming`.
///
/// The result is always `Irregular`: radius and corner rounding no longer
/// describe a merged box.
pub fn merge(existing: &Dimensions, incoming: &Dimensions) -> Dimensions {
    let span = |axis: Axis| {
        let start = extremity(existing, axis, Edge::Start)
            .min(extremity(incoming, axis, Edge::Start));
        let end = extremity(existing, axis, Edge::End)
            .max(extremity(incoming, axis, Edge::End));
        (start, (end - start).abs())
    };
    let (x, width) = span(Axis::X);
    let (y, height) = span(Axis::Y);

    Dimensions::Irregular {
        width,
        height,
        offset: Point::new(x, y),
    }
}

/// Store `dims` on `shape`, merging with any record the shape already holds,
/// and push the resulting box to the shape's external bounds.
pub fn apply_dimensions(shape: &mut Shape, dims: Dimensions) -> &mut Shape {
    let dims = match shape.dimensions() {
        Some(existing) => {
            let merged = merge(existing, &dims);
            log::debug!(
                "compositing {} onto {} shape {}: {:?} -> {:?}",
                dims.kind(),
                existing.kind(),
                shape.id,
                existing.bounds().to_array(),
                merged.bounds().to_array()
            );
            merged
        }
        None => dims,
    };

    shape.set_bounds(dims.bounds());
    shape.store_dimensions(dims);
    shape
}
