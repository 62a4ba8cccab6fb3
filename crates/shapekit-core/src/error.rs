use thiserror::Error;

use crate::shape::ShapeId;

#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Invalid color '{0}': expected #rgb, #rrggbb, #rrggbbaa or a CSS color name")]
    InvalidColor(String),
}

#[derive(Error, Debug)]
pub enum StageError {
    #[error("Stage JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Shape {0} is not on the stage")]
    ShapeNotFound(ShapeId),
}
