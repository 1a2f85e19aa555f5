//! Loupe projection: where the magnifier panel sits and how the zoomed
//! background is positioned inside it.
//!
//! The background is the *entire* image scaled by the zoom factor, shifted by
//! an offset — a single pre-rendered texture serves every pointer position
//! via translation alone. Offsets are deliberately not edge-clamped: near the
//! image border the panel shows off-canvas background, which keeps the
//! sampled pixel dead-center at all times.

use egui::{Pos2, Vec2};

use super::geometry::DisplayGeometry;

/// Default magnification of the loupe.
pub const DEFAULT_ZOOM: f32 = 4.0;

/// Zoom factors the user can cycle through.
pub const ZOOM_LEVELS: [f32; 3] = [2.0, 4.0, 8.0];

/// Fixed offset of the panel from the pointer, so it never occludes the
/// cursor (right of and above it).
pub const CURSOR_OFFSET: Vec2 = Vec2::new(20.0, -20.0);

/// One frame of loupe placement data, consumed by the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagnifierFrame {
    /// Top-left corner of the loupe panel in display space.
    pub panel_pos: Pos2,
    /// Size of the zoomed background (`display size × zoom`).
    pub background_size: Vec2,
    /// Translation of the background relative to the panel's top-left,
    /// chosen so the pixel under the pointer lands at the panel center.
    pub background_offset: Vec2,
}

/// Project the loupe for the given pointer position.
pub fn project(
    pointer: Pos2,
    geometry: &DisplayGeometry,
    panel_size: Vec2,
    zoom: f32,
) -> MagnifierFrame {
    let rel_x = pointer.x - geometry.display_left;
    let rel_y = pointer.y - geometry.display_top;

    MagnifierFrame {
        panel_pos: pointer + CURSOR_OFFSET,
        background_size: Vec2::new(
            geometry.display_width * zoom,
            geometry.display_height * zoom,
        ),
        background_offset: Vec2::new(
            -(rel_x * zoom - panel_size.x / 2.0),
            -(rel_y * zoom - panel_size.y / 2.0),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Rect, pos2, vec2};

    fn geometry() -> DisplayGeometry {
        DisplayGeometry::compute(Rect::from_min_max(pos2(0.0, 0.0), pos2(100.0, 100.0)), 10, 10)
    }

    #[test]
    fn test_panel_follows_pointer_with_fixed_offset() {
        let f = project(pos2(40.0, 60.0), &geometry(), vec2(150.0, 150.0), 4.0);
        assert_eq!(f.panel_pos, pos2(60.0, 40.0));
    }

    #[test]
    fn test_background_is_full_display_size_times_zoom() {
        let f = project(pos2(0.0, 0.0), &geometry(), vec2(150.0, 150.0), 4.0);
        assert_eq!(f.background_size, vec2(400.0, 400.0));
    }

    #[test]
    fn test_pointed_at_spot_lands_at_panel_center() {
        // The background point corresponding to the pointer sits at
        // offset + rel * zoom in panel-local coordinates; that must equal the
        // panel center for every pointer position and zoom level.
        let geo = geometry();
        let panel = vec2(150.0, 150.0);
        for &zoom in &ZOOM_LEVELS {
            for &(px, py) in &[(0.0, 0.0), (55.0, 55.0), (99.0, 1.0), (100.0, 100.0)] {
                let pointer = pos2(px, py);
                let f = project(pointer, &geo, panel, zoom);
                let rel = pointer - pos2(geo.display_left, geo.display_top);
                let in_panel = f.background_offset + rel * zoom;
                assert_eq!(in_panel, panel / 2.0, "zoom {zoom}, pointer {pointer:?}");
            }
        }
    }

    #[test]
    fn test_no_edge_clamping_near_borders() {
        // At the top-left corner half the panel hangs off-canvas: the offset
        // is exactly +panel/2, not clamped back to zero.
        let f = project(pos2(0.0, 0.0), &geometry(), vec2(150.0, 150.0), 4.0);
        assert_eq!(f.background_offset, vec2(75.0, 75.0));
    }

    #[test]
    fn test_offset_display_rect_uses_relative_position() {
        let geo =
            DisplayGeometry::compute(Rect::from_min_max(pos2(50.0, 50.0), pos2(150.0, 150.0)), 10, 10);
        let f = project(pos2(50.0, 50.0), &geo, vec2(100.0, 100.0), 4.0);
        // rel = (0, 0) → the image origin is centered in the panel.
        assert_eq!(f.background_offset, vec2(50.0, 50.0));
    }
}
