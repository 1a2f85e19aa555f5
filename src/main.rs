// GUI-subsystem binary: no console window is allocated on Windows. All
// diagnostics go to the session log file instead (see logger.rs).
#![windows_subsystem = "windows"]
#![allow(dead_code)] // Small API surface kept beyond current call sites (logger path, re-exports)

mod app;
mod components;
mod io;
pub mod logger;
mod picker;
mod viewer;

use app::PixPickApp;
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    // Session log (overwrites the previous session's file)
    logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_title("PixPick"),
        ..Default::default()
    };

    eframe::run_native(
        "PixPick",
        options,
        Box::new(|cc| Box::new(PixPickApp::new(cc))),
    )
}
