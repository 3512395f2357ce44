//! Shape geometry: the normalization rules that turn a pair of anchor
//! points into something a [`Raster`] can draw.

use egui::{Color32, Pos2};

use crate::raster::Raster;
use crate::tool::ToolMode;

/// Pointer coordinates are clamped to this magnitude so extent math on
/// two points can never overflow.
pub const COORD_LIMIT: i64 = 1 << 40;

/// A point in canvas pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelPoint {
    pub x: i64,
    pub y: i64,
}

impl PixelPoint {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

fn to_pixel(coord: f32) -> i64 {
    let limit = COORD_LIMIT as f32;
    // NaN casts to 0
    coord.floor().clamp(-limit, limit) as i64
}

impl From<Pos2> for PixelPoint {
    fn from(pos: Pos2) -> Self {
        Self::new(to_pixel(pos.x), to_pixel(pos.y))
    }
}

/// An axis-aligned box given by its top-left corner and its extent.
///
/// Width and height are not required to be non-negative; rectangle
/// bounds always are, oval bounds may carry a negative height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl PixelRect {
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self { x, y, width, height }
    }

    pub fn top_left(&self) -> PixelPoint {
        PixelPoint::new(self.x, self.y)
    }

    pub fn right(&self) -> i64 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i64 {
        self.y.saturating_add(self.height)
    }
}

/// Bounds of a rectangle dragged from `start` to `end`, normalized so the
/// size is never negative whichever direction the drag went.
pub fn rect_bounds(start: PixelPoint, end: PixelPoint) -> PixelRect {
    PixelRect::new(
        start.x.min(end.x),
        start.y.min(end.y),
        end.x.saturating_sub(start.x).saturating_abs(),
        end.y.saturating_sub(start.y).saturating_abs(),
    )
}

/// Bounding box of an oval dragged from `start` to `end`.
///
/// Only the horizontal axis is normalized: a leftward drag moves the left
/// edge to `end.x`. The top is always `start.y` and the height is always
/// `end.y - start.y`, so an upward drag yields a negative height.
pub fn oval_bounds(start: PixelPoint, end: PixelPoint) -> PixelRect {
    let height = end.y.saturating_sub(start.y);
    if end.x > start.x {
        PixelRect::new(start.x, start.y, end.x.saturating_sub(start.x), height)
    } else {
        let width = start.x.saturating_sub(end.x);
        PixelRect::new(start.x.saturating_sub(width), start.y, width, height)
    }
}

/// A committed shape, ready to be rendered onto any raster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Line { from: PixelPoint, to: PixelPoint },
    Rectangle(PixelRect),
    Oval(PixelRect),
}

impl Shape {
    /// The shape `mode` commits for the given anchors.
    ///
    /// Eraser strokes are plain line segments; the caller picks the
    /// background color for them.
    pub fn from_anchor(mode: ToolMode, start: PixelPoint, end: PixelPoint) -> Self {
        match mode {
            ToolMode::FreeLine | ToolMode::Line | ToolMode::Eraser => Self::Line {
                from: start,
                to: end,
            },
            ToolMode::Rectangle => Self::Rectangle(rect_bounds(start, end)),
            ToolMode::Oval => Self::Oval(oval_bounds(start, end)),
        }
    }

    /// Draw this shape onto `target`. Every raster receives exactly the
    /// same calls, so two rasters fed the same shapes stay identical.
    pub fn render(&self, target: &mut Raster, color: Color32, width: u32) {
        match *self {
            Self::Line { from, to } => target.draw_line(from, to, color, width),
            Self::Rectangle(bounds) => target.draw_rect(bounds, color, width),
            Self::Oval(bounds) => target.draw_oval(bounds, color, width),
        }
    }
}
