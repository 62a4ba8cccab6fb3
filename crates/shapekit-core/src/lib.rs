//! # shapekit core
//!
//! Drawing helpers for a retained-mode vector canvas that keep each shape's
//! bounding box (width, height, offset) up to date, including the merged box
//! of shapes built from several primitives.
//!
//! ```
//! use shapekit_core::{draw, Bounded, Point, ShapeKind, ShapeStyle};
//!
//! let style = ShapeStyle::default();
//! let shape = draw::circle(5.0, &style, None, None);
//! let shape = draw::rect(4.0, 4.0, &style, Some(Point::new(0.0, 0.0)), Some(shape));
//! assert_eq!(shape.kind(), Some(ShapeKind::Irregular));
//! assert_eq!(shape.get_bounds().unwrap().to_array(), [-5.0, -5.0, 5.0, 5.0]);
//! ```

pub mod config;
pub mod dimensions;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod graphics;
pub mod shape;
pub mod spatial;
pub mod stage;
pub mod style;

pub use config::StageSettings;
pub use dimensions::{CornerRadii, CornerRadius, Dimensions, ShapeKind};
pub use error::{StageError, StyleError};
pub use geometry::{BBox, Point};
pub use graphics::{Canvas, Graphics, Instruction};
pub use shape::{Bounded, Shape, ShapeId};
pub use stage::Stage;
pub use style::{Color, ShapeStyle, StrokeStyle};
