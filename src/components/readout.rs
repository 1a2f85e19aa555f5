// ============================================================================
// READOUT PANEL — committed + hover swatches, hex/rgb fields, copy buttons
// ============================================================================

use eframe::egui;
use egui::{Color32, Pos2, Stroke, TextStyle, Vec2};

use crate::picker::Session;
use crate::picker::magnifier::ZOOM_LEVELS;

/// Border accent while a selection is locked (the same green the toasts use).
const LOCKED_BORDER: Color32 = Color32::from_rgb(34, 197, 94);

/// What the user asked the app shell to do.
pub enum ReadoutAction {
    Copy(String),
    Reset,
}

#[derive(Default)]
pub struct ReadoutPanel;

impl ReadoutPanel {
    pub fn show(&mut self, ui: &mut egui::Ui, session: &mut Session) -> Option<ReadoutAction> {
        let mut action = None;
        let readouts = session.readouts();

        ui.add_space(8.0);
        ui.heading("Selection");
        ui.add_space(6.0);

        // -- committed swatch (what the text fields describe) --
        ui.horizontal(|ui| {
            let border = if readouts.locked {
                Stroke::new(2.0, LOCKED_BORDER)
            } else {
                Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color)
            };
            draw_swatch(ui, readouts.committed, Vec2::splat(44.0), border);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new("Selected").small().strong());
                ui.label(
                    egui::RichText::new(if readouts.locked {
                        "locked — click the image to unlock"
                    } else {
                        "following the cursor — click to lock"
                    })
                    .small(),
                );
            });
        });

        ui.add_space(4.0);

        // -- live hover swatch (always current, never locked) --
        ui.horizontal(|ui| {
            let border = Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color);
            draw_swatch(ui, readouts.live, Vec2::splat(24.0), border);
            ui.label(egui::RichText::new("Under cursor").small());
        });

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(4.0);

        // -- text readouts with copy buttons --
        if let Some(a) = value_row(ui, "HEX", &readouts.hex) {
            action = Some(a);
        }
        if let Some(a) = value_row(ui, "RGB", &readouts.rgb) {
            action = Some(a);
        }

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(4.0);

        // -- loupe zoom (Z also cycles it) --
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Loupe").small().strong());
            for &zoom in &ZOOM_LEVELS {
                if ui
                    .selectable_label(session.zoom() == zoom, format!("{:.0}×", zoom))
                    .clicked()
                {
                    session.set_zoom(zoom);
                }
            }
        });

        ui.add_space(12.0);
        if ui.button("Load another image").clicked() {
            action = Some(ReadoutAction::Reset);
        }

        action
    }
}

/// One "label / monospace value / Copy" row. Returns a copy request when the
/// button is pressed and there is something to copy.
fn value_row(ui: &mut egui::Ui, label: &str, value: &str) -> Option<ReadoutAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        ui.add_sized(
            [30.0, 18.0],
            egui::Label::new(egui::RichText::new(label).small().strong()),
        );
        let mut text = value.to_string();
        ui.add_sized(
            [120.0, 18.0],
            egui::TextEdit::singleline(&mut text)
                .font(TextStyle::Monospace)
                .interactive(false),
        );
        if ui.button("Copy").clicked() && !value.is_empty() {
            action = Some(ReadoutAction::Copy(value.to_string()));
        }
    });
    action
}

/// A color swatch over a checkerboard (the checkerboard shows through while
/// no sample exists yet).
fn draw_swatch(ui: &mut egui::Ui, color: Option<Color32>, size: Vec2, border: Stroke) {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    if ui.is_rect_visible(rect) {
        let p = ui.painter();
        draw_checkerboard(p, rect, 5.0);
        if let Some(c) = color {
            p.rect_filled(rect, 3.0, c);
        }
        p.rect_stroke(rect, 3.0, border);
    }
}

/// Checkerboard pattern inside `rect`.
fn draw_checkerboard(painter: &egui::Painter, rect: egui::Rect, cell: f32) {
    painter.rect_filled(rect, 0.0, Color32::WHITE);
    let cols = (rect.width() / cell).ceil() as i32;
    let rows = (rect.height() / cell).ceil() as i32;
    for row in 0..rows {
        for col in 0..cols {
            if (row + col) % 2 == 1 {
                let cr = egui::Rect::from_min_size(
                    Pos2::new(
                        rect.min.x + col as f32 * cell,
                        rect.min.y + row as f32 * cell,
                    ),
                    Vec2::new(cell, cell),
                )
                .intersect(rect);
                painter.rect_filled(cr, 0.0, Color32::from_gray(200));
            }
        }
    }
}
