use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use shapekit_core::{Bounded, Instruction, ShapeKind, Stage};

use crate::Viewport;

/// Render data for one shape, ready to be replayed by a canvas frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderShape {
    pub id: String,
    pub name: Option<String>,
    pub kind: Option<ShapeKind>,
    /// Cached bounds: [min_x, min_y, max_x, max_y]
    pub bounds: Option<[f64; 4]>,
    pub instructions: Vec<Instruction>,
    /// Whether the bounds intersect the viewport.
    pub visible: bool,
}

/// Complete render frame data for a stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderFrame {
    pub stage: String,
    pub background: [f32; 4], // RGBA
    pub shapes: Vec<RenderShape>,
    pub viewport: Viewport,
    pub stage_bbox: Option<[f64; 4]>,
}

impl RenderFrame {
    pub fn empty(viewport: Viewport) -> Self {
        Self {
            stage: String::new(),
            background: [1.0; 4],
            shapes: Vec::new(),
            viewport,
            stage_bbox: None,
        }
    }

    pub fn from_stage(stage: &Stage, viewport: Viewport) -> Self {
        let index = stage.spatial_index();
        let on_screen: HashSet<_> = index
            .query_region(&viewport.visible_bounds())
            .into_iter()
            .map(|entry| entry.shape_id)
            .collect();
        let shapes: Vec<RenderShape> = stage
            .children()
            .iter()
            .map(|shape| {
                let bounds = shape.get_bounds();
                RenderShape {
                    id: shape.id.to_string(),
                    name: shape.name.clone(),
                    kind: shape.kind(),
                    bounds: bounds.map(|b| b.to_array()),
                    instructions: shape.graphics.instructions().to_vec(),
                    // Shapes without cached bounds cannot be culled.
                    visible: bounds.is_none() || on_screen.contains(&shape.id),
                }
            })
            .collect();

        log::info!(
            "Built frame for stage '{}': {} shapes, {} visible",
            stage.name,
            shapes.len(),
            shapes.iter().filter(|s| s.visible).count()
        );

        Self {
            stage: stage.name.clone(),
            background: stage.settings.background.to_f32_array(),
            shapes,
            viewport,
            stage_bbox: stage.bounds().map(|b| b.to_array()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapekit_core::{draw, Point, ShapeStyle};

    #[test]
    fn test_frame_from_stage() {
        let style = ShapeStyle::default();
        let mut stage = Stage::new("frame");
        let shape = draw::circle(5.0, &style, Some(Point::new(50.0, 50.0)), None);
        stage.add_child(draw::rect(4.0, 4.0, &style, Some(Point::new(50.0, 50.0)), Some(shape)));
        stage.add_child(draw::rect(10.0, 10.0, &style, Some(Point::new(5000.0, 5000.0)), None));

        let frame = RenderFrame::from_stage(&stage, Viewport::new(200.0, 200.0));
        assert_eq!(frame.stage, "frame");
        assert_eq!(frame.shapes.len(), 2);
        assert_eq!(frame.shapes[0].kind, Some(ShapeKind::Irregular));
        assert_eq!(frame.shapes[0].bounds, Some([45.0, 45.0, 55.0, 55.0]));
        assert!(frame.shapes[0].visible);
        assert!(!frame.shapes[1].visible);
        assert_eq!(frame.stage_bbox, Some([45.0, 45.0, 5010.0, 5010.0]));
        assert_eq!(frame.background, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_culling_keeps_unbounded_and_edge_touching_shapes() {
        let style = ShapeStyle::default();
        let mut stage = Stage::new("cull");
        stage.add_child(shapekit_core::Shape::new());
        stage.add_child(draw::rect(10.0, 10.0, &style, Some(Point::new(200.0, 0.0)), None));
        stage.add_child(draw::circle(1.0, &style, Some(Point::new(-5.0, -5.0)), None));

        let frame = RenderFrame::from_stage(&stage, Viewport::new(200.0, 200.0));
        assert!(frame.shapes[0].visible);
        assert!(frame.shapes[0].bounds.is_none());
        assert!(frame.shapes[1].visible);
        assert!(!frame.shapes[2].visible);
    }

    #[test]
    fn test_frame_serializes() {
        let frame = RenderFrame::empty(Viewport::new(10.0, 10.0));
        let json = serde_json::to_value(&frame).unwrap();
        assert!(json["shapes"].as_array().unwrap().is_empty());
        assert!(json["stage_bbox"].is_null());
    }
}
