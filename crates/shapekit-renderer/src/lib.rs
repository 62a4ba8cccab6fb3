//! # shapekit renderer
//!
//! Turns a stage into JSON-serializable render frames that a canvas frontend
//! replays, and fits the viewport those frames are drawn with.

pub mod render_data;
pub mod viewport;

pub use render_data::{RenderFrame, RenderShape};
pub use viewport::Viewport;

use shapekit_core::{Stage, StageError};

/// Load a saved stage and build a frame zoomed to fit its contents.
pub fn frame_from_stage_json(json: &str) -> Result<RenderFrame, StageError> {
    let stage = Stage::from_json(json)?;
    let mut viewport = Viewport::new(stage.settings.width, stage.settings.height);
    if let Some(bbox) = stage.bounds() {
        viewport.fit_bbox(&bbox);
    }
    Ok(RenderFrame::from_stage(&stage, viewport))
}
