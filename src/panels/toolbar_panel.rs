use crate::app::{SketchApp, TOOLBAR_HEIGHT};
use crate::tool::ToolMode;

pub fn toolbar_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar")
        .exact_height(TOOLBAR_HEIGHT)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                let active_mode = app.controller().mode();
                for mode in ToolMode::ALL {
                    if ui.selectable_label(active_mode == mode, mode.name()).clicked() {
                        log::info!("Tool selected from UI: {}", mode);
                        app.select_mode(mode);
                    }
                }

                ui.separator();

                ui.label("Color:");
                let mut color = app.controller().color();
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    app.select_color(color);
                }

                ui.separator();

                if ui.button("Save").clicked() {
                    app.save_with_dialog();
                }
                if ui.button("Clear").clicked() {
                    app.reset();
                }

                if let Some(status) = app.status() {
                    ui.separator();
                    ui.label(status);
                }
            });
        });
}
