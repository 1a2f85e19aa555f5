// ============================================================================
// IMAGE VIEWER — renders the loaded image, captures pointer events, and
// paints the sampling overlays (hovered-pixel outline + magnifier loupe)
// ============================================================================

use eframe::egui;
use egui::{
    Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, TextureHandle, TextureOptions, Vec2,
};

use crate::picker::{SampleResult, SelectionState, Session};

/// Side length of the square loupe panel, in display points.
pub const LOUPE_SIZE: f32 = 150.0;

/// What the viewer reported back to the app shell this frame.
pub enum ViewerEvent {
    LockToggled(SelectionState),
}

pub struct Viewer {
    /// The full image, uploaded once per image load. Serves both the main
    /// view and the loupe (via UV translation), so the loupe can never go
    /// stale relative to what is on screen.
    texture: Option<TextureHandle>,
}

impl Viewer {
    pub fn new() -> Self {
        Self { texture: None }
    }

    /// Drop the cached texture. Called whenever the image is replaced.
    pub fn clear_texture(&mut self) {
        self.texture = None;
    }

    pub fn show(&mut self, ui: &mut egui::Ui, session: &mut Session) -> Option<ViewerEvent> {
        let mut event = None;

        let available = ui.available_size();
        let sense = Sense::click().union(Sense::hover());
        let (response, painter) = ui.allocate_painter(available, sense);
        let canvas_rect = response.rect;

        painter.rect_filled(canvas_rect, 0.0, Color32::from_gray(28));

        let texture = self.ensure_texture(ui.ctx(), session);

        // Aspect-fit the image into the canvas (letterboxed when the aspect
        // ratios differ).
        let img_w = session.image().width() as f32;
        let img_h = session.image().height() as f32;
        let fit = (canvas_rect.width() / img_w).min(canvas_rect.height() / img_h);
        let image_rect = Rect::from_center_size(
            canvas_rect.center(),
            Vec2::new(img_w * fit, img_h * fit),
        );

        // Geometry follows the rect actually rendered this frame, so window
        // resizes need no separate event path. Recomputation is idempotent.
        session.update_geometry(image_rect);

        let full_uv = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0));
        painter.image(texture.id(), image_rect, full_uv, Color32::WHITE);

        if ui.input(|i| i.key_pressed(egui::Key::Z)) {
            session.cycle_zoom();
        }

        // Commit action: resolve the sample at the click point itself, then
        // toggle hover/lock with it.
        if response.clicked()
            && let Some(pos) = response.interact_pointer_pos()
            && image_rect.contains(pos)
        {
            let state = session.toggle_lock(pos);
            event = Some(ViewerEvent::LockToggled(state));
        }

        // Hover sampling. Off the image the loupe is hidden and no readout
        // changes.
        if let Some(pos) = response.hover_pos().filter(|p| image_rect.contains(*p))
            && let Some(sample) = session.pointer_moved(pos)
        {
            self.draw_pixel_outline(&painter, ui, session, image_rect, sample);
            self.draw_loupe(&painter, session, &texture, pos);
        }

        event
    }

    fn ensure_texture(&mut self, ctx: &egui::Context, session: &Session) -> TextureHandle {
        if let Some(tex) = &self.texture {
            return tex.clone();
        }
        let img = session.image().rgba();
        let size = [img.width() as usize, img.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw());
        // Nearest magnification keeps loupe pixels crisp; the main view is
        // usually minified, where Linear looks better.
        let options = TextureOptions {
            magnification: egui::TextureFilter::Nearest,
            minification: egui::TextureFilter::Linear,
            ..Default::default()
        };
        let tex = ctx.load_texture("source-image", color_image, options);
        self.texture = Some(tex.clone());
        tex
    }

    /// Outline the image pixel under the cursor, in a color that contrasts
    /// with the current theme.
    fn draw_pixel_outline(
        &self,
        painter: &egui::Painter,
        ui: &egui::Ui,
        session: &Session,
        image_rect: Rect,
        sample: SampleResult,
    ) {
        let geo = session.geometry();
        if geo.is_degenerate() {
            return;
        }
        // Display points per image pixel.
        let pixel_w = 1.0 / geo.scale_x;
        let pixel_h = 1.0 / geo.scale_y;
        let pixel_rect = Rect::from_min_size(
            Pos2::new(
                image_rect.min.x + sample.pixel_x as f32 * pixel_w,
                image_rect.min.y + sample.pixel_y as f32 * pixel_h,
            ),
            Vec2::new(pixel_w.max(1.0), pixel_h.max(1.0)),
        );
        let cursor_color = if ui.visuals().dark_mode {
            Color32::from_rgb(0, 255, 255) // Cyan in dark mode
        } else {
            Color32::from_rgb(255, 200, 0) // Yellow in light mode
        };
        painter.rect_stroke(pixel_rect, 0.0, Stroke::new(1.0, cursor_color));
    }

    /// Paint the loupe: the zoomed background positioned by the projector,
    /// clipped to the panel, with a crosshair marking the sampled pixel at
    /// the exact center.
    fn draw_loupe(
        &self,
        painter: &egui::Painter,
        session: &Session,
        texture: &TextureHandle,
        pointer: Pos2,
    ) {
        let panel_size = Vec2::splat(LOUPE_SIZE);
        let Some(frame) = session.magnifier_frame(pointer, panel_size) else {
            return;
        };

        let panel_rect = Rect::from_min_size(frame.panel_pos, panel_size);
        let background_rect = Rect::from_min_size(
            frame.panel_pos + frame.background_offset,
            frame.background_size,
        );

        // Near the image border part of the background legitimately hangs
        // outside the panel; the clip makes that the off-canvas area instead
        // of an edge-clamped (and therefore off-center) view.
        let clipped = painter.with_clip_rect(panel_rect);
        clipped.rect_filled(panel_rect, 0.0, Color32::from_gray(18));
        let full_uv = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0));
        clipped.image(texture.id(), background_rect, full_uv, Color32::WHITE);

        let center = panel_rect.center();
        let cross = Stroke::new(1.0, Color32::from_white_alpha(170));
        painter.line_segment(
            [
                Pos2::new(panel_rect.min.x, center.y),
                Pos2::new(panel_rect.max.x, center.y),
            ],
            cross,
        );
        painter.line_segment(
            [
                Pos2::new(center.x, panel_rect.min.y),
                Pos2::new(center.x, panel_rect.max.y),
            ],
            cross,
        );

        painter.rect_stroke(panel_rect, 4.0, Stroke::new(2.0, Color32::from_gray(200)));
        painter.text(
            panel_rect.right_bottom() + Vec2::new(-6.0, -4.0),
            Align2::RIGHT_BOTTOM,
            format!("{:.0}×", session.zoom()),
            FontId::proportional(12.0),
            Color32::from_gray(220),
        );
    }
}
