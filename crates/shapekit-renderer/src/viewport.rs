use serde::{Deserialize, Serialize};
use shapekit_core::BBox;

/// The part of a stage shown on the canvas.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Viewport {
    /// Center X in stage coordinates.
    pub center_x: f64,
    /// Center Y in stage coordinates.
    pub center_y: f64,
    /// Zoom level (canvas pixels per stage unit).
    pub zoom: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl Viewport {
    /// Unzoomed viewport showing stage coordinates `0..canvas_width`, `0..canvas_height`.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            center_x: canvas_width / 2.0,
            center_y: canvas_height / 2.0,
            zoom: 1.0,
            canvas_width,
            canvas_height,
        }
    }

    /// Center on `bbox` and zoom so it fills 90% of the canvas.
    pub fn fit_bbox(&mut self, bbox: &BBox) {
        let width = bbox.width();
        let height = bbox.height();
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        let center = bbox.center();
        self.center_x = center.x;
        self.center_y = center.y;

        let zoom_x = self.canvas_width / width * 0.9;
        let zoom_y = self.canvas_height / height * 0.9;
        self.zoom = zoom_x.min(zoom_y);
    }

    /// The visible region in stage coordinates.
    pub fn visible_bounds(&self) -> BBox {
        let half_w = self.canvas_width / (2.0 * self.zoom);
        let half_h = self.canvas_height / (2.0 * self.zoom);
        BBox::from_origin_size(
            self.center_x - half_w,
            self.center_y - half_h,
            half_w * 2.0,
            half_h * 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapekit_core::Point;

    #[test]
    fn test_visible_bounds_at_default_zoom() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.visible_bounds().to_array(), [0.0, 0.0, 800.0, 600.0]);
    }

    #[test]
    fn test_fit_bbox() {
        let mut vp = Viewport::new(100.0, 100.0);
        vp.fit_bbox(&BBox::new(Point::new(-5.0, -5.0), Point::new(15.0, 5.0)));
        assert!((vp.center_x - 5.0).abs() < 1e-10);
        assert!((vp.center_y - 0.0).abs() < 1e-10);
        assert!((vp.zoom - 4.5).abs() < 1e-10);
        let visible = vp.visible_bounds();
        assert!((visible.width() - 100.0 / 4.5).abs() < 1e-9);
        assert!((visible.center().x - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_degenerate_bbox_is_ignored() {
        let mut vp = Viewport::new(100.0, 100.0);
        vp.fit_bbox(&BBox::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0)));
        assert!((vp.zoom - 1.0).abs() < 1e-10);
    }
}
