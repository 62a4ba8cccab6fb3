use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dimensions::{Dimensions, ShapeKind};
use crate::geometry::BBox;
use crate::graphics::Graphics;

/// Unique shape identifier.
pub type ShapeId = Uuid;

/// Anything that exposes an explicit bounding box.
pub trait Bounded {
    /// The explicit bounds, if any have been set.
    fn get_bounds(&self) -> Option<BBox>;
    /// Replace the explicit bounds.
    fn set_bounds(&mut self, bounds: BBox);
    /// Category of the geometry inside the bounds, if any has been drawn.
    fn kind(&self) -> Option<ShapeKind>;
}

/// A drawable display object: a command list plus its cached bounding geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    pub name: Option<String>,
    pub graphics: Graphics,
    bounds: Option<BBox>,
    dimensions: Option<Dimensions>,
}

impl Shape {
    /// Create a blank shape with an empty command list and no bounds.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: None,
            graphics: Graphics::new(),
            bounds: None,
            dimensions: None,
        }
    }

    /// Attach a human-readable name.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// The active bounding record, replaced on every draw.
    pub fn dimensions(&self) -> Option<&Dimensions> {
        self.dimensions.as_ref()
    }

    pub(crate) fn store_dimensions(&mut self, dims: Dimensions) {
        self.dimensions = Some(dims);
    }

    /// Box of the active record. The external bounds start out equal to it but
    /// can be overridden through [`Bounded::set_bounds`].
    fn record_bounds(&self) -> Option<BBox> {
        self.dimensions.map(|d| d.bounds())
    }

    /// Width of the active record (0 before the first draw).
    pub fn width(&self) -> f64 {
        self.dimensions.map_or(0.0, |d| d.width())
    }

    /// Height of the active record (0 before the first draw).
    pub fn height(&self) -> f64 {
        self.dimensions.map_or(0.0, |d| d.height())
    }

    /// Left edge of the active record's box.
    pub fn x_offset(&self) -> f64 {
        self.record_bounds().map_or(0.0, |b| b.min.x)
    }

    /// Top edge of the active record's box.
    pub fn y_offset(&self) -> f64 {
        self.record_bounds().map_or(0.0, |b| b.min.y)
    }

    /// Set only while the shape holds a single circular draw.
    pub fn radius(&self) -> Option<f64> {
        self.dimensions.and_then(|d| d.radius())
    }

    /// Whether more than one primitive has been drawn onto this shape.
    pub fn is_composite(&self) -> bool {
        matches!(self.dimensions, Some(Dimensions::Irregular { .. }))
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self::new()
    }
}

impl Bounded for Shape {
    fn get_bounds(&self) -> Option<BBox> {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: BBox) {
        self.bounds = Some(bounds);
    }

    fn kind(&self) -> Option<ShapeKind> {
        self.dimensions.map(|d| d.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimensions::apply_dimensions;
    use crate::geometry::Point;

    #[test]
    fn test_blank_shape() {
        let shape = Shape::new().with_name("blank");
        assert_eq!(shape.name.as_deref(), Some("blank"));
        assert!(shape.get_bounds().is_none());
        assert!(shape.kind().is_none());
        assert!(shape.graphics.is_empty());
        assert_eq!(shape.width(), 0.0);
    }

    #[test]
    fn test_apply_sets_bounds_and_mirrors() {
        let mut shape = Shape::new();
        apply_dimensions(
            &mut shape,
            Dimensions::rectangular(10.0, 20.0, Some(Point::new(1.0, 2.0))),
        );
        assert_eq!(
            shape.get_bounds(),
            Some(BBox::from_origin_size(1.0, 2.0, 10.0, 20.0))
        );
        assert_eq!(shape.kind(), Some(ShapeKind::Rectangular));
        assert!((shape.x_offset() - 1.0).abs() < 1e-10);
        assert!((shape.y_offset() - 2.0).abs() < 1e-10);
        assert!(!shape.is_composite());
    }

    #[test]
    fn test_second_apply_merges() {
        let mut shape = Shape::new();
        apply_dimensions(&mut shape, Dimensions::circular(5.0, None));
        assert_eq!(shape.radius(), Some(5.0));

        apply_dimensions(
            &mut shape,
            Dimensions::rectangular(10.0, 2.0, Some(Point::new(0.0, 0.0))),
        )
        .set_bounds(BBox::from_origin_size(0.0, 0.0, 1.0, 1.0));
        assert!(shape.is_composite());
        assert_eq!(shape.radius(), None);
        // Chained set_bounds overrides the external bounds only.
        assert!((shape.width() - 15.0).abs() < 1e-10);
        assert_eq!(shape.get_bounds().unwrap().to_array(), [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_mirrored_accessors_agree_after_bounds_override() {
        let mut shape = Shape::new();
        apply_dimensions(&mut shape, Dimensions::rectangular(10.0, 20.0, None));
        shape.set_bounds(BBox::from_origin_size(100.0, 100.0, 1.0, 1.0));

        assert!((shape.x_offset() - 0.0).abs() < 1e-10);
        assert!((shape.y_offset() - 0.0).abs() < 1e-10);
        assert!((shape.width() - 10.0).abs() < 1e-10);
        assert!((shape.height() - 20.0).abs() < 1e-10);
        assert_eq!(
            shape.get_bounds(),
            Some(BBox::from_origin_size(100.0, 100.0, 1.0, 1.0))
        );
    }
}
