use egui::{Color32, Pos2, Rect, Vec2};

use super::color;
use super::geometry::DisplayGeometry;
use super::magnifier::{self, DEFAULT_ZOOM, MagnifierFrame, ZOOM_LEVELS};
use super::sampler::{self, SampleResult, SourceImage};
use super::selection::{Selection, SelectionState};

// ============================================================================
// SESSION — one loaded image plus everything derived from it
// ============================================================================

/// Explicit session context: the loaded image, the cached display geometry,
/// the hover/lock selection and the loupe zoom. Owned by the app shell;
/// replaced wholesale on reset or new image load, which is also what resets
/// the selection and readouts.
///
/// All methods are synchronous and run on the UI thread; each pointer or
/// commit event is processed to completion before the next one arrives.
pub struct Session {
    image: SourceImage,
    geometry: DisplayGeometry,
    selection: Selection,
    zoom: f32,
}

/// Pure data for the readout panel — the presentation layer renders this
/// without touching the session internals.
pub struct Readouts {
    pub live: Option<Color32>,
    pub committed: Option<Color32>,
    pub hex: String,
    pub rgb: String,
    pub locked: bool,
}

impl Session {
    pub fn new(image: SourceImage) -> Self {
        Self {
            image,
            // Degenerate until the first post-layout geometry update;
            // sampling is unavailable before that.
            geometry: DisplayGeometry::default(),
            selection: Selection::new(),
            zoom: DEFAULT_ZOOM,
        }
    }

    pub fn image(&self) -> &SourceImage {
        &self.image
    }

    pub fn geometry(&self) -> &DisplayGeometry {
        &self.geometry
    }

    pub fn is_locked(&self) -> bool {
        self.selection.is_locked()
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Advance the loupe zoom to the next level (2× → 4× → 8× → 2×).
    pub fn cycle_zoom(&mut self) -> f32 {
        let idx = ZOOM_LEVELS.iter().position(|z| *z == self.zoom).unwrap_or(0);
        self.zoom = ZOOM_LEVELS[(idx + 1) % ZOOM_LEVELS.len()];
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom;
    }

    /// Refresh the display geometry from the rect the image is currently
    /// rendered into. Called every frame post-layout; idempotent.
    pub fn update_geometry(&mut self, rendered_rect: Rect) {
        self.geometry =
            DisplayGeometry::compute(rendered_rect, self.image.width(), self.image.height());
    }

    /// A pointer-move event: sample under the pointer and feed the selection
    /// state machine. `None` (geometry not ready) leaves every readout
    /// untouched — no stale or undefined colors.
    pub fn pointer_moved(&mut self, pointer: Pos2) -> Option<SampleResult> {
        let sample = sampler::sample(pointer, &self.geometry, &self.image)?;
        self.selection.apply_sample(sample);
        Some(sample)
    }

    /// The commit action: resolve the sample at the click point and toggle
    /// hover/lock with it.
    pub fn toggle_lock(&mut self, pointer: Pos2) -> SelectionState {
        let at_click = sampler::sample(pointer, &self.geometry, &self.image);
        self.selection.toggle(at_click)
    }

    /// Loupe placement for the current pointer position, or `None` before
    /// the first geometry update.
    pub fn magnifier_frame(&self, pointer: Pos2, panel_size: Vec2) -> Option<MagnifierFrame> {
        if self.geometry.is_degenerate() {
            return None;
        }
        Some(magnifier::project(pointer, &self.geometry, panel_size, self.zoom))
    }

    pub fn readouts(&self) -> Readouts {
        let committed = self.selection.committed();
        let (hex, rgb) = match committed {
            Some(s) => (color::hex(s.r, s.g, s.b), color::rgb_text(s.r, s.g, s.b)),
            None => (String::new(), String::new()),
        };
        Readouts {
            live: self.selection.live().map(|s| s.color32()),
            committed: committed.map(|s| s.color32()),
            hex,
            rgb,
            locked: self.selection.is_locked(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};
    use image::{Rgba, RgbaImage};

    fn red_session() -> Session {
        let img = SourceImage::new(RgbaImage::from_pixel(10, 10, Rgba([255, 0, 0, 255])));
        let mut session = Session::new(img);
        session.update_geometry(Rect::from_min_max(pos2(0.0, 0.0), pos2(100.0, 100.0)));
        session
    }

    #[test]
    fn test_pipeline_worked_example() {
        let mut session = red_session();
        let s = session.pointer_moved(pos2(55.0, 55.0)).unwrap();
        assert_eq!((s.pixel_x, s.pixel_y), (5, 5));

        let r = session.readouts();
        assert_eq!(r.hex, "#FF0000");
        assert_eq!(r.rgb, "rgb(255, 0, 0)");
        assert_eq!(r.live, Some(Color32::from_rgb(255, 0, 0)));
        assert_eq!(r.committed, r.live);
        assert!(!r.locked);
    }

    #[test]
    fn test_no_geometry_no_readout_change() {
        let img = SourceImage::new(RgbaImage::from_pixel(10, 10, Rgba([255, 0, 0, 255])));
        let mut session = Session::new(img);
        assert!(session.pointer_moved(pos2(5.0, 5.0)).is_none());
        let r = session.readouts();
        assert_eq!(r.committed, None);
        assert_eq!(r.hex, "");
    }

    #[test]
    fn test_lock_freezes_text_readouts() {
        // Left half green, right half blue.
        let mut img = RgbaImage::from_pixel(10, 10, Rgba([0, 255, 0, 255]));
        for y in 0..10 {
            for x in 5..10 {
                img.put_pixel(x, y, Rgba([0, 0, 255, 255]));
            }
        }
        let mut session = Session::new(SourceImage::new(img));
        session.update_geometry(Rect::from_min_max(pos2(0.0, 0.0), pos2(100.0, 100.0)));

        let state = session.toggle_lock(pos2(10.0, 10.0));
        assert_eq!(state, SelectionState::Locked);
        assert_eq!(session.readouts().hex, "#00FF00");

        // Hovering over the blue half: live moves, committed stays pinned.
        session.pointer_moved(pos2(90.0, 90.0));
        let r = session.readouts();
        assert_eq!(r.hex, "#00FF00");
        assert_eq!(r.live, Some(Color32::from_rgb(0, 0, 255)));

        // Unlocking at the blue half re-syncs immediately.
        session.toggle_lock(pos2(90.0, 90.0));
        assert_eq!(session.readouts().hex, "#0000FF");
    }

    #[test]
    fn test_magnifier_unavailable_before_layout() {
        let img = SourceImage::new(RgbaImage::from_pixel(10, 10, Rgba([255, 0, 0, 255])));
        let session = Session::new(img);
        assert!(session.magnifier_frame(pos2(5.0, 5.0), vec2(150.0, 150.0)).is_none());
    }

    #[test]
    fn test_zoom_cycles_through_levels() {
        let mut session = red_session();
        assert_eq!(session.zoom(), 4.0);
        assert_eq!(session.cycle_zoom(), 8.0);
        assert_eq!(session.cycle_zoom(), 2.0);
        assert_eq!(session.cycle_zoom(), 4.0);
    }
}
