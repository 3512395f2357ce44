use std::path::{Path, PathBuf};

use egui::{Color32, TextureHandle, TextureOptions};

use crate::config::{CanvasConfig, SketchSettings};
use crate::controller::{DrawingController, SaveOutcome};
use crate::input::{self, CanvasEvent, InputHandler, ShortcutAction};
use crate::panels::{canvas_panel, toolbar_panel};
use crate::tool::ToolMode;

/// Height reserved for the toolbar above the canvas
pub const TOOLBAR_HEIGHT: f32 = 36.0;

pub struct SketchApp {
    controller: DrawingController,
    input: InputHandler,
    settings: SketchSettings,
    texture: Option<TextureHandle>,
    texture_revision: u64,
    status: Option<String>,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::with_settings(CanvasConfig::default(), SketchSettings::default())
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings: SketchSettings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        log::info!("Starting with {:?}", settings);

        Self::with_settings(CanvasConfig::default(), settings)
    }

    pub fn with_settings(config: CanvasConfig, settings: SketchSettings) -> Self {
        let mut controller = DrawingController::new(config);
        controller.set_mode(settings.mode);
        controller.set_color(settings.color);

        Self {
            controller,
            input: InputHandler::new(egui::Rect::NOTHING),
            settings,
            texture: None,
            texture_revision: 0,
            status: None,
        }
    }

    pub fn controller(&self) -> &DrawingController {
        &self.controller
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn texture(&self) -> Option<&TextureHandle> {
        self.texture.as_ref()
    }

    pub fn select_mode(&mut self, mode: ToolMode) {
        self.controller.set_mode(mode);
        self.settings.mode = mode;
    }

    pub fn select_color(&mut self, color: Color32) {
        self.controller.set_color(color);
        self.settings.color = color;
    }

    pub fn reset(&mut self) {
        self.controller.reset();
        self.status = None;
    }

    /// Ask the user for a destination and save there
    pub fn save_with_dialog(&mut self) {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Select File Location")
            .add_filter("PNG image", &["png"])
            .set_file_name("sketch.png");
        if let Some(dir) = &self.settings.last_save_dir {
            dialog = dialog.set_directory(dir);
        }

        match dialog.save_file() {
            Some(mut path) => {
                if path.extension().is_none() {
                    path.set_extension("png");
                }
                self.save_to(&path);
            }
            None => log::debug!("Save cancelled"),
        }
    }

    /// Save to `path`, reporting the outcome in the status line
    pub fn save_to(&mut self, path: &Path) {
        match self.controller.save(path) {
            Ok(SaveOutcome::Written) => {
                self.settings.last_save_dir = path.parent().map(PathBuf::from);
                self.status = Some(format!("Saved to {}", path.display()));
            }
            Ok(SaveOutcome::NothingToSave) => {
                self.status = Some("Nothing to save yet".to_owned());
            }
            Err(err) => {
                log::error!("{err}");
                self.status = Some(format!("Save failed: {err}"));
            }
        }
    }

    pub fn handle_shortcut(&mut self, action: ShortcutAction) {
        log::debug!("Shortcut: {action:?}");
        match action {
            ShortcutAction::SelectMode(mode) => self.select_mode(mode),
            ShortcutAction::Save => self.save_with_dialog(),
            ShortcutAction::Reset => self.reset(),
        }
    }

    pub fn handle_canvas_event(&mut self, event: CanvasEvent) {
        match event {
            CanvasEvent::PointerDown(pos) => self.controller.on_pointer_down(pos),
            CanvasEvent::PointerDrag(pos) => self.controller.on_pointer_drag(pos),
            CanvasEvent::PointerUp(pos) => self.controller.on_pointer_up(pos),
        }
    }

    /// Route this frame's pointer input for the canvas occupying `rect`.
    /// `hovered` is false while another layer covers the pointer.
    pub fn handle_canvas_input(&mut self, ctx: &egui::Context, rect: egui::Rect, hovered: bool) {
        self.controller
            .resize(rect.width().floor() as u32, rect.height().floor() as u32);
        self.input.set_canvas_rect(rect);

        for event in self.input.process_input(ctx, hovered) {
            self.handle_canvas_event(event);
        }
    }

    /// Re-upload the canvas raster if it changed since the last frame
    pub fn sync_texture(&mut self, ctx: &egui::Context) {
        let revision = self.controller.revision();
        if revision == self.texture_revision {
            return;
        }
        self.texture_revision = revision;

        match self.controller.canvas() {
            Some(raster) => {
                let image = raster.to_color_image();
                match &mut self.texture {
                    Some(texture) => texture.set(image, TextureOptions::NEAREST),
                    None => {
                        self.texture =
                            Some(ctx.load_texture("sketch_canvas", image, TextureOptions::NEAREST));
                    }
                }
            }
            None => self.texture = None,
        }
    }
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for action in input::pressed_shortcuts(ctx) {
            self.handle_shortcut(action);
        }

        toolbar_panel(self, ctx);
        canvas_panel(self, ctx);
    }
}
