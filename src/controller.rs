use std::path::Path;

use egui::{Color32, Pos2};

use crate::config::CanvasConfig;
use crate::error::ExportResult;
use crate::export;
use crate::raster::Raster;
use crate::shape::{PixelPoint, Shape};
use crate::tool::ToolMode;

/// Start and end point of the stroke in progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub start: Pos2,
    pub end: Pos2,
}

impl Anchor {
    fn at(pos: Pos2) -> Self {
        Self { start: pos, end: pos }
    }
}

/// What a save request ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The export raster was written to disk
    Written,
    /// Nothing has been drawn since startup or the last reset
    NothingToSave,
}

/// The on-screen raster and its export twin. They only ever exist
/// together and receive identical draw calls.
#[derive(Debug, Clone)]
struct Surfaces {
    canvas: Raster,
    export: Raster,
}

impl Surfaces {
    fn blank(width: u32, height: u32, background: Color32) -> Self {
        let canvas = Raster::new(width, height, background);
        Self {
            export: canvas.clone(),
            canvas,
        }
    }
}

/// Turns pointer, mode and color events into draw calls on the canvas
/// raster and the export raster.
#[derive(Debug)]
pub struct DrawingController {
    config: CanvasConfig,
    mode: ToolMode,
    color: Color32,
    anchor: Option<Anchor>,
    surface_size: [u32; 2],
    surfaces: Option<Surfaces>,
    /// Bumped whenever the visible raster changes
    revision: u64,
}

impl Default for DrawingController {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl DrawingController {
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            config,
            mode: ToolMode::default(),
            color: Color32::BLACK,
            anchor: None,
            surface_size: [config.width, config.height],
            surfaces: None,
            revision: 0,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn anchor(&self) -> Option<Anchor> {
        self.anchor
    }

    pub fn surface_size(&self) -> [u32; 2] {
        self.surface_size
    }

    /// The raster shown on screen, if anything has been drawn
    pub fn canvas(&self) -> Option<&Raster> {
        self.surfaces.as_ref().map(|surfaces| &surfaces.canvas)
    }

    /// The raster written on save, if anything has been drawn
    pub fn export_raster(&self) -> Option<&Raster> {
        self.surfaces.as_ref().map(|surfaces| &surfaces.export)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_mode(&mut self, mode: ToolMode) {
        if self.mode != mode {
            log::info!("Tool mode: {} -> {}", self.mode, mode);
            self.mode = mode;
        }
    }

    /// Select a mode by its toolbar name. Unknown names leave the mode as is.
    pub fn set_mode_by_name(&mut self, name: &str) -> Option<ToolMode> {
        match ToolMode::from_name(name) {
            Some(mode) => {
                self.set_mode(mode);
                Some(mode)
            }
            None => {
                log::warn!("Ignoring unknown tool mode: {name}");
                None
            }
        }
    }

    pub fn set_color(&mut self, color: Color32) {
        if self.color != color {
            log::debug!("Color: {:?} -> {:?}", self.color, color);
            self.color = color;
        }
    }

    pub fn on_pointer_down(&mut self, pos: Pos2) {
        log::debug!("Pointer down at {pos:?}");
        self.anchor = Some(Anchor::at(pos));
    }

    /// Freehand modes commit one segment per drag event; other modes wait
    /// for pointer-up.
    pub fn on_pointer_drag(&mut self, pos: Pos2) {
        if !self.mode.is_freehand() {
            return;
        }

        let Some(anchor) = self.anchor.as_mut() else {
            // Drag that started outside the canvas: start the stroke here
            self.anchor = Some(Anchor::at(pos));
            return;
        };
        anchor.start = anchor.end;
        anchor.end = pos;
        let (start, end) = (anchor.start, anchor.end);

        self.commit(self.mode, start, end);
    }

    pub fn on_pointer_up(&mut self, pos: Pos2) {
        if self.mode.is_freehand() {
            return;
        }

        let Some(anchor) = self.anchor.as_mut() else {
            log::debug!("Pointer up at {pos:?} without a matching pointer down");
            return;
        };
        anchor.end = pos;
        let (start, end) = (anchor.start, anchor.end);

        self.commit(self.mode, start, end);
    }

    /// Write the export raster to `path` as PNG.
    ///
    /// A failed save leaves both rasters untouched so it can be retried.
    pub fn save(&self, path: &Path) -> ExportResult<SaveOutcome> {
        match self.export_raster() {
            Some(raster) => {
                export::save_png(raster, path)?;
                Ok(SaveOutcome::Written)
            }
            None => {
                log::warn!("Nothing drawn yet, not saving to {}", path.display());
                Ok(SaveOutcome::NothingToSave)
            }
        }
    }

    /// Discard both rasters; the next draw starts from a blank surface
    pub fn reset(&mut self) {
        log::info!("Resetting drawing");
        self.surfaces = None;
        self.revision += 1;
    }

    /// Track the size of the visible surface. A change discards the
    /// current rasters the same way a reset does.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.surface_size == [width, height] {
            return;
        }
        log::debug!(
            "Surface resized from {:?} to {:?}",
            self.surface_size,
            [width, height]
        );
        self.surface_size = [width, height];
        if self.surfaces.take().is_some() {
            self.revision += 1;
        }
    }

    fn stroke_style(&self, mode: ToolMode) -> (Color32, u32) {
        match mode {
            ToolMode::Eraser => (self.config.background, self.config.eraser_width),
            _ => (self.color, self.config.line_width),
        }
    }

    fn commit(&mut self, mode: ToolMode, start: Pos2, end: Pos2) {
        let shape = Shape::from_anchor(mode, PixelPoint::from(start), PixelPoint::from(end));
        let (color, width) = self.stroke_style(mode);

        let [surface_width, surface_height] = self.surface_size;
        let background = self.config.background;
        let surfaces = self.surfaces.get_or_insert_with(|| {
            log::debug!("Initializing {surface_width}x{surface_height} drawing surfaces");
            Surfaces::blank(surface_width, surface_height, background)
        });

        shape.render(&mut surfaces.canvas, color, width);
        shape.render(&mut surfaces.export, color, width);
        self.revision += 1;
    }
}
