use eframe::egui;
use egui::{Align2, Color32, FontId, Key, Pos2, Rect, Stroke, Vec2};
use image::RgbaImage;

use crate::components::readout::{ReadoutAction, ReadoutPanel};
use crate::io;
use crate::picker::{SelectionState, Session, SourceImage};
use crate::viewer::{Viewer, ViewerEvent};
use crate::{log_err, log_info};

/// How long a toast stays on screen.
const TOAST_SECS: f64 = 2.0;

/// A transient overlay message; only one at a time — a new one replaces it.
struct Toast {
    text: String,
    error: bool,
    shown_at: f64,
}

pub struct PixPickApp {
    /// `None` while the upload screen is showing; created on a successful
    /// image load and replaced wholesale on reset or a new load — which is
    /// also what resets the selection and readouts.
    session: Option<Session>,
    viewer: Viewer,
    readout: ReadoutPanel,
    toast: Option<Toast>,
}

impl PixPickApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            session: None,
            viewer: Viewer::new(),
            readout: ReadoutPanel,
            toast: None,
        }
    }

    fn toast(&mut self, ctx: &egui::Context, text: impl Into<String>, error: bool) {
        self.toast = Some(Toast {
            text: text.into(),
            error,
            shown_at: ctx.input(|i| i.time),
        });
    }

    /// Install a freshly decoded image as the new session, or surface the
    /// failure. Either way the previous session state is what decides what
    /// stays on screen (a failed load keeps it untouched).
    fn install_image(&mut self, ctx: &egui::Context, result: Result<RgbaImage, String>) {
        match result {
            Ok(img) => {
                log_info!("Loaded image {}×{}", img.width(), img.height());
                self.session = Some(Session::new(SourceImage::new(img)));
                self.viewer.clear_texture();
            }
            Err(msg) => {
                log_err!("{}", msg);
                self.toast(ctx, msg, true);
            }
        }
    }

    fn open_dialog(&mut self, ctx: &egui::Context) {
        if let Some(path) = io::pick_image_file() {
            log_info!("Opening {}", path.display());
            let result = io::load_image(&path);
            self.install_image(ctx, result);
        }
    }

    /// Drag-and-drop and clipboard-paste ingestion, checked every frame.
    fn handle_ingestion(&mut self, ctx: &egui::Context) {
        // First dropped file wins.
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(file) = dropped.into_iter().next() {
            let result = if let Some(path) = file.path {
                log_info!("Dropped {}", path.display());
                io::load_image(&path)
            } else if let Some(bytes) = file.bytes {
                io::load_image_from_bytes(&bytes)
            } else {
                Err("Dropped file had no readable content".to_string())
            };
            self.install_image(ctx, result);
            return;
        }

        if ctx.input(|i| i.modifiers.command && i.key_pressed(Key::V)) {
            match io::image_from_clipboard() {
                Some(img) => self.install_image(ctx, Ok(img)),
                None => self.toast(ctx, "No image on the clipboard", true),
            }
        }
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("PixPick").strong());
                ui.separator();
                if ui.button("Open image…").clicked() {
                    self.open_dialog(ctx);
                }
                if let Some(session) = &self.session {
                    ui.separator();
                    ui.label(format!(
                        "{}×{} px",
                        session.image().width(),
                        session.image().height()
                    ));
                }
            });
        });
    }

    /// The pre-load screen: a drop target that also opens the file dialog on
    /// click. Paste works here too (handled in `handle_ingestion`).
    fn show_upload_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let hovering_files = ctx.input(|i| !i.raw.hovered_files.is_empty());
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click());
            let rect = response.rect;

            let zone = Rect::from_center_size(
                rect.center(),
                Vec2::new((rect.width() - 80.0).clamp(200.0, 520.0), 260.0),
            );
            let accent = if hovering_files || response.hovered() {
                Color32::from_rgb(66, 133, 244)
            } else {
                ui.visuals().widgets.noninteractive.bg_stroke.color
            };
            painter.rect_stroke(zone, 8.0, Stroke::new(2.0, accent));
            painter.text(
                zone.center() - Vec2::new(0.0, 24.0),
                Align2::CENTER_CENTER,
                "Drop an image here",
                FontId::proportional(22.0),
                ui.visuals().text_color(),
            );
            painter.text(
                zone.center() + Vec2::new(0.0, 10.0),
                Align2::CENTER_CENTER,
                "click to browse, or paste from the clipboard",
                FontId::proportional(14.0),
                ui.visuals().weak_text_color(),
            );

            if response.clicked() {
                self.open_dialog(ctx);
            }
        });
    }

    fn show_editor(&mut self, ctx: &egui::Context) {
        let mut pending: Option<ReadoutAction> = None;
        egui::SidePanel::right("readout_panel")
            .resizable(false)
            .default_width(230.0)
            .show(ctx, |ui| {
                if let Some(session) = self.session.as_mut() {
                    pending = self.readout.show(ui, session);
                }
            });

        match pending {
            Some(ReadoutAction::Copy(text)) => {
                if io::copy_text(&text) {
                    log_info!("Copied {}", text);
                    self.toast(ctx, format!("Copied {}", text), false);
                } else {
                    self.toast(ctx, "Clipboard unavailable", true);
                }
            }
            Some(ReadoutAction::Reset) => {
                log_info!("Session reset");
                self.session = None;
                self.viewer.clear_texture();
            }
            None => {}
        }

        let mut viewer_event = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(session) = self.session.as_mut() {
                viewer_event = self.viewer.show(ui, session);
            }
        });

        if let Some(ViewerEvent::LockToggled(state)) = viewer_event {
            match state {
                SelectionState::Locked => self.toast(ctx, "Color selection locked", false),
                SelectionState::Hovering => self.toast(ctx, "Unlocked", false),
            }
        }
    }

    /// Bottom-center overlay message, auto-expiring after `TOAST_SECS`.
    fn show_toast(&mut self, ctx: &egui::Context) {
        let Some(toast) = &self.toast else {
            return;
        };
        if ctx.input(|i| i.time) - toast.shown_at > TOAST_SECS {
            self.toast = None;
            return;
        }

        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("toast"),
        ));
        let galley = painter.layout_no_wrap(
            toast.text.clone(),
            FontId::proportional(14.0),
            Color32::WHITE,
        );
        let pad = Vec2::new(14.0, 8.0);
        let screen = ctx.screen_rect();
        let rect = Rect::from_center_size(
            Pos2::new(screen.center().x, screen.max.y - 40.0),
            galley.size() + pad * 2.0,
        );
        let bg = if toast.error {
            Color32::from_rgb(239, 68, 68)
        } else {
            Color32::from_rgb(34, 197, 94)
        };
        painter.rect_filled(rect, 6.0, bg);
        painter.galley(rect.min + pad, galley);

        // Wake up again so the expiry above actually runs.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

impl eframe::App for PixPickApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_ingestion(ctx);
        self.show_top_bar(ctx);
        if self.session.is_some() {
            self.show_editor(ctx);
        } else {
            self.show_upload_screen(ctx);
        }
        self.show_toast(ctx);
    }
}
