#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod input;
pub mod panels;
pub mod raster;
pub mod shape;
pub mod tool;

pub use app::SketchApp;
pub use config::{CanvasConfig, SketchSettings};
pub use controller::{Anchor, DrawingController, SaveOutcome};
pub use error::{ExportError, ExportResult};
pub use input::{CanvasEvent, InputHandler, ShortcutAction};
pub use raster::Raster;
pub use shape::{PixelPoint, PixelRect, Shape};
pub use tool::ToolMode;
