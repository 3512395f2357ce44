use crate::app::SketchApp;

pub fn canvas_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let canvas_rect = ui.available_rect_before_wrap();
            let response = ui.allocate_rect(canvas_rect, egui::Sense::drag());
            let hovered = response.hovered();
            if hovered {
                ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
            }

            app.handle_canvas_input(ctx, canvas_rect, hovered);
            app.sync_texture(ctx);

            let painter = ui.painter_at(canvas_rect);
            painter.rect_filled(canvas_rect, 0.0, app.controller().config().background);

            if let Some(texture) = app.texture() {
                let image_rect = egui::Rect::from_min_size(canvas_rect.min, texture.size_vec2());
                painter.image(
                    texture.id(),
                    image_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }
        });
}
