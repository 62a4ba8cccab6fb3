use serde::{Deserialize, Serialize};

use crate::style::{Color, ShapeStyle, StrokeStyle};

/// Canvas settings stored alongside a stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StageSettings {
    pub width: f64,
    pub height: f64,
    pub background: Color,
    pub default_stroke_width: f64,
}

impl Default for StageSettings {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            background: Color::WHITE,
            default_stroke_width: 1.0,
        }
    }
}

impl StageSettings {
    /// Black stroke at the configured width, no fill.
    pub fn default_style(&self) -> ShapeStyle {
        ShapeStyle::default().with_stroke_style(StrokeStyle::new(self.default_stroke_width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: StageSettings = serde_json::from_str(r#"{ "width": 320.0 }"#).unwrap();
        assert!((settings.width - 320.0).abs() < 1e-10);
        assert!((settings.height - 600.0).abs() < 1e-10);
        assert_eq!(settings.background, Color::WHITE);
    }

    #[test]
    fn test_default_style_uses_stroke_width() {
        let settings = StageSettings {
            default_stroke_width: 3.0,
            ..Default::default()
        };
        let style = settings.default_style();
        assert!((style.stroke_style.width - 3.0).abs() < 1e-10);
        assert_eq!(style.stroke, Some(Color::BLACK));
    }
}
