use serde::{Deserialize, Serialize};

use crate::dimensions::CornerRadii;
use crate::geometry::Point;
use crate::style::{Color, StrokeStyle};

/// Drawing capability of a retained-mode vector canvas.
///
/// Every call returns the canvas so commands can be chained.
pub trait Canvas {
    fn set_stroke_style(&mut self, style: StrokeStyle) -> &mut Self;
    /// Start a new stroke; `None` ends stroking for subsequent paths.
    fn begin_stroke(&mut self, color: Option<Color>) -> &mut Self;
    /// Start a new fill; `None` ends filling for subsequent paths.
    fn begin_fill(&mut self, color: Option<Color>) -> &mut Self;
    fn move_to(&mut self, to: Point) -> &mut Self;
    fn line_to(&mut self, to: Point) -> &mut Self;
    fn draw_rect(&mut self, origin: Point, width: f64, height: f64) -> &mut Self;
    fn draw_round_rect(&mut self, origin: Point, width: f64, height: f64, radius: f64)
        -> &mut Self;
    fn draw_round_rect_complex(
        &mut self,
        origin: Point,
        width: f64,
        height: f64,
        radii: CornerRadii,
    ) -> &mut Self;
    fn draw_circle(&mut self, center: Point, radius: f64) -> &mut Self;
    fn draw_ellipse(&mut self, origin: Point, width: f64, height: f64) -> &mut Self;
    /// `point_size` in `0..1` indents alternate vertices into a star; `angle` is in degrees.
    fn draw_poly_star(
        &mut self,
        center: Point,
        radius: f64,
        sides: u32,
        point_size: f64,
        angle: f64,
    ) -> &mut Self;
}

/// A single recorded canvas command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Instruction {
    StrokeStyle(StrokeStyle),
    BeginStroke { color: Option<Color> },
    BeginFill { color: Option<Color> },
    MoveTo { to: Point },
    LineTo { to: Point },
    Rect { origin: Point, width: f64, height: f64 },
    RoundRect { origin: Point, width: f64, height: f64, radii: CornerRadii },
    Circle { center: Point, radius: f64 },
    Ellipse { origin: Point, width: f64, height: f64 },
    PolyStar {
        center: Point,
        radius: f64,
        sides: u32,
        point_size: f64,
        angle: f64,
    },
}

/// Canvas that records commands in order for later playback.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graphics {
    instructions: Vec<Instruction>,
}

impl Graphics {
    /// Empty command list.
    pub fn new() -> Self {
        Self {
            instructions: Vec::new(),
        }
    }

    /// Recorded commands in playback order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Drop all recorded commands. The owning shape's bounds are left untouched.
    pub fn clear(&mut self) {
        self.instructions.clear();
    }

    fn push(&mut self, instruction: Instruction) -> &mut Self {
        self.instructions.push(instruction);
        self
    }
}

impl Canvas for Graphics {
    fn set_stroke_style(&mut self, style: StrokeStyle) -> &mut Self {
        self.push(Instruction::StrokeStyle(style))
    }

    fn begin_stroke(&mut self, color: Option<Color>) -> &mut Self {
        self.push(Instruction::BeginStroke { color })
    }

    fn begin_fill(&mut self, color: Option<Color>) -> &mut Self {
        self.push(Instruction::BeginFill { color })
    }

    fn move_to(&mut self, to: Point) -> &mut Self {
        self.push(Instruction::MoveTo { to })
    }

    fn line_to(&mut self, to: Point) -> &mut Self {
        self.push(Instruction::LineTo { to })
    }

    fn draw_rect(&mut self, origin: Point, width: f64, height: f64) -> &mut Self {
        self.push(Instruction::Rect {
            origin,
            width,
            height,
        })
    }

    fn draw_round_rect(
        &mut self,
        origin: Point,
        width: f64,
        height: f64,
        radius: f64,
    ) -> &mut Self {
        self.draw_round_rect_complex(origin, width, height, CornerRadii::uniform(radius))
    }

    fn draw_round_rect_complex(
        &mut self,
        origin: Point,
        width: f64,
        height: f64,
        radii: CornerRadii,
    ) -> &mut Self {
        self.push(Instruction::RoundRect {
            origin,
            width,
            height,
            radii,
        })
    }

    fn draw_circle(&mut self, center: Point, radius: f64) -> &mut Self {
        self.push(Instruction::Circle { center, radius })
    }

    fn draw_ellipse(&mut self, origin: Point, width: f64, height: f64) -> &mut Self {
        self.push(Instruction::Ellipse {
            origin,
            width,
            height,
        })
    }

    fn draw_poly_star(
        &mut self,
        center: Point,
        radius: f64,
        sides: u32,
        point_size: f64,
        angle: f64,
    ) -> &mut Self {
        self.push(Instruction::PolyStar {
            center,
            radius,
            sides,
            point_size,
            angle,
        })
    }
}
