#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use sketchbook::app::TOOLBAR_HEIGHT;
use sketchbook::{CanvasConfig, SketchApp};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = CanvasConfig::default();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width as f32, config.height as f32 + TOOLBAR_HEIGHT])
            .with_resizable(false)
            .with_title("SketchBook"),
        ..Default::default()
    };

    eframe::run_native(
        "SketchBook",
        native_options,
        Box::new(|cc| Ok(Box::new(SketchApp::new(cc)))),
    )
}
