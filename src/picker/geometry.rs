use egui::Rect;

/// Cached mapping between the on-screen rectangle the image is rendered into
/// and the image's native pixel grid.
///
/// Recomputed from the current layout every frame — recomputation is
/// idempotent and side-effect-free, so redundant calls are harmless.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DisplayGeometry {
    pub display_left: f32,
    pub display_top: f32,
    pub display_width: f32,
    pub display_height: f32,
    /// Image pixels per display point along x (`image_w / display_width`).
    pub scale_x: f32,
    /// Image pixels per display point along y (`image_h / display_height`).
    pub scale_y: f32,
}

impl DisplayGeometry {
    /// Derive the geometry for `image_w × image_h` pixels rendered into
    /// `rendered_rect`. A zero-sized rect yields scale factors of 0, which
    /// the sampler reports as "sampling unavailable" — never a division.
    pub fn compute(rendered_rect: Rect, image_w: u32, image_h: u32) -> Self {
        let display_width = rendered_rect.width();
        let display_height = rendered_rect.height();
        let scale_x = if display_width > 0.0 {
            image_w as f32 / display_width
        } else {
            0.0
        };
        let scale_y = if display_height > 0.0 {
            image_h as f32 / display_height
        } else {
            0.0
        };
        Self {
            display_left: rendered_rect.min.x,
            display_top: rendered_rect.min.y,
            display_width,
            display_height,
            scale_x,
            scale_y,
        }
    }

    /// True when no meaningful layout has been observed yet (zero-sized rect
    /// or no image). Sampling and magnifier projection are unavailable.
    pub fn is_degenerate(&self) -> bool {
        self.scale_x <= 0.0 || self.scale_y <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Rect, pos2};

    #[test]
    fn test_compute_scales() {
        let rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(100.0, 100.0));
        let g = DisplayGeometry::compute(rect, 10, 10);
        assert_eq!(g.scale_x, 0.1);
        assert_eq!(g.scale_y, 0.1);
        assert_eq!(g.display_left, 0.0);
        assert_eq!(g.display_width, 100.0);
        assert!(!g.is_degenerate());
    }

    #[test]
    fn test_anisotropic_scales() {
        let rect = Rect::from_min_max(pos2(10.0, 20.0), pos2(210.0, 120.0));
        let g = DisplayGeometry::compute(rect, 400, 400);
        assert_eq!(g.scale_x, 2.0);
        assert_eq!(g.scale_y, 4.0);
        assert_eq!(g.display_left, 10.0);
        assert_eq!(g.display_top, 20.0);
    }

    #[test]
    fn test_zero_rect_is_degenerate_not_a_division() {
        let rect = Rect::from_min_max(pos2(5.0, 5.0), pos2(5.0, 5.0));
        let g = DisplayGeometry::compute(rect, 10, 10);
        assert_eq!(g.scale_x, 0.0);
        assert_eq!(g.scale_y, 0.0);
        assert!(g.is_degenerate());
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let rect = Rect::from_min_max(pos2(3.0, 4.0), pos2(103.0, 54.0));
        let a = DisplayGeometry::compute(rect, 64, 32);
        let b = DisplayGeometry::compute(rect, 64, 32);
        assert_eq!(a, b);
    }
}
