use egui::Color32;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::tool::ToolMode;

/// Fixed properties of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasConfig {
    /// Initial surface width in pixels
    pub width: u32,
    /// Initial surface height in pixels
    pub height: u32,
    /// Color a fresh raster is filled with; the eraser paints with it too
    pub background: Color32,
    /// Stroke width for lines and shape outlines
    pub line_width: u32,
    pub eraser_width: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            background: Color32::WHITE,
            line_width: 1,
            eraser_width: 10,
        }
    }
}

/// User choices restored across runs.
/// We derive Deserialize/Serialize so eframe can persist them on shutdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct SketchSettings {
    pub mode: ToolMode,
    pub color: Color32,
    /// Directory the save dialog opens in
    pub last_save_dir: Option<PathBuf>,
}

impl Default for SketchSettings {
    fn default() -> Self {
        Self {
            mode: ToolMode::default(),
            color: Color32::BLACK,
            last_save_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_canvas_matches_window_size() {
        let config = CanvasConfig::default();
        assert_eq!((config.width, config.height), (1280, 720));
        assert_eq!(config.background, Color32::WHITE);
    }

    #[test]
    fn test_default_settings() {
        let settings = SketchSettings::default();
        assert_eq!(settings.mode, ToolMode::FreeLine);
        assert_eq!(settings.color, Color32::BLACK);
        assert!(settings.last_save_dir.is_none());
    }
}
