use egui::{Color32, ColorImage};
use image::{Rgba, RgbaImage};

use crate::shape::{PixelPoint, PixelRect};

/// An RGBA pixel buffer that shapes are drawn into.
///
/// Coordinates outside the buffer are clipped silently, so callers can
/// pass raw pointer positions without validating them first.
#[derive(Clone, PartialEq)]
pub struct Raster {
    image: RgbaImage,
}

// Custom Debug implementation since dumping every pixel is useless
impl std::fmt::Debug for Raster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba(color.to_srgba_unmultiplied())
}

impl Raster {
    /// Create a raster of the given size filled with `background`
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, to_rgba(background)),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Raw RGBA bytes, row-major
    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Color at (x, y), or None when outside the raster
    pub fn get_pixel(&self, x: i64, y: i64) -> Option<Color32> {
        if !self.contains(x, y) {
            return None;
        }
        let [r, g, b, a] = self.image.get_pixel(x as u32, y as u32).0;
        Some(Color32::from_rgba_unmultiplied(r, g, b, a))
    }

    /// Convert to an egui image for uploading as a texture
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(
            [self.width() as usize, self.height() as usize],
            self.image.as_raw(),
        )
    }

    fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width()) && y < i64::from(self.height())
    }

    fn plot(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        if self.contains(x, y) {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    /// How far a stamp of `width` can reach past its center, plus one
    fn reach(width: u32) -> i64 {
        i64::from(width / 2) + 1
    }

    /// Paint a single pixel, or a filled disc exactly `width` pixels across
    fn stamp(&mut self, x: i64, y: i64, color: Rgba<u8>, width: u32) {
        if width <= 1 {
            self.plot(x, y, color);
            return;
        }

        // Even widths are centered between pixels
        let width = i64::from(width);
        let lo = -(width / 2);
        let hi = lo + width - 1;
        let center = (lo + hi) as f64 / 2.0;
        let radius_squared = (width as f64 / 2.0).powi(2);
        for dy in lo..=hi {
            for dx in lo..=hi {
                let (fx, fy) = (dx as f64 - center, dy as f64 - center);
                if fx * fx + fy * fy <= radius_squared {
                    self.plot(x.saturating_add(dx), y.saturating_add(dy), color);
                }
            }
        }
    }

    /// Draw a straight segment using Bresenham's algorithm, both ends inclusive.
    ///
    /// The segment is clipped to the raster first, so far-away endpoints
    /// cost no more than ones on the canvas.
    pub fn draw_line(&mut self, from: PixelPoint, to: PixelPoint, color: Color32, width: u32) {
        let reach = Self::reach(width);
        let min = PixelPoint::new(-reach, -reach);
        let max = PixelPoint::new(
            i64::from(self.width()) - 1 + reach,
            i64::from(self.height()) - 1 + reach,
        );
        let Some((from, to)) = clip_segment(from, to, min, max) else {
            return;
        };

        let color = to_rgba(color);
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;

        let (mut x, mut y) = (from.x, from.y);
        loop {
            self.stamp(x, y, color, width);
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draw the outline of `bounds`, covering `x..=x+width` and `y..=y+height`
    pub fn draw_rect(&mut self, bounds: PixelRect, color: Color32, width: u32) {
        let top_left = bounds.top_left();
        let top_right = PixelPoint::new(bounds.right(), bounds.y);
        let bottom_right = PixelPoint::new(bounds.right(), bounds.bottom());
        let bottom_left = PixelPoint::new(bounds.x, bounds.bottom());

        self.draw_line(top_left, top_right, color, width);
        self.draw_line(top_right, bottom_right, color, width);
        self.draw_line(bottom_right, bottom_left, color, width);
        self.draw_line(bottom_left, top_left, color, width);
    }

    /// Draw the outline of the ellipse inscribed in `bounds`.
    ///
    /// The curve is solved once per visible row and once per visible
    /// column, so only the part of the ellipse over the raster is visited.
    /// Its extreme pixels land exactly on the box edges. A box with a
    /// negative width or height draws nothing; a zero extent draws a line.
    pub fn draw_oval(&mut self, bounds: PixelRect, color: Color32, width: u32) {
        if bounds.width < 0 || bounds.height < 0 {
            return;
        }
        if bounds.width == 0 || bounds.height == 0 {
            let far_corner = PixelPoint::new(bounds.right(), bounds.bottom());
            self.draw_line(bounds.top_left(), far_corner, color, width);
            return;
        }

        let rgba = to_rgba(color);
        let rx = bounds.width as f64 / 2.0;
        let ry = bounds.height as f64 / 2.0;
        let cx = bounds.x as f64 + rx;
        let cy = bounds.y as f64 + ry;

        let reach = Self::reach(width);
        let last_row = i64::from(self.height()) - 1 + reach;
        let last_column = i64::from(self.width()) - 1 + reach;

        for y in bounds.y.max(-reach)..=bounds.bottom().min(last_row) {
            let v = (y as f64 - cy) / ry;
            let span = 1.0 - v * v;
            if span < 0.0 {
                continue;
            }
            let dx = rx * span.sqrt();
            self.stamp((cx - dx).round() as i64, y, rgba, width);
            self.stamp((cx + dx).round() as i64, y, rgba, width);
        }

        for x in bounds.x.max(-reach)..=bounds.right().min(last_column) {
            let u = (x as f64 - cx) / rx;
            let span = 1.0 - u * u;
            if span < 0.0 {
                continue;
            }
            let dy = ry * span.sqrt();
            self.stamp(x, (cy - dy).round() as i64, rgba, width);
            self.stamp(x, (cy + dy).round() as i64, rgba, width);
        }
    }
}

/// Clip a segment to the box `min..=max` (Liang–Barsky). Returns None
/// when no part of it lies inside.
fn clip_segment(
    from: PixelPoint,
    to: PixelPoint,
    min: PixelPoint,
    max: PixelPoint,
) -> Option<(PixelPoint, PixelPoint)> {
    let inside = |p: PixelPoint| p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y;
    if inside(from) && inside(to) {
        return Some((from, to));
    }

    let (x0, y0) = (from.x as f64, from.y as f64);
    let dx = to.x as f64 - x0;
    let dy = to.y as f64 - y0;
    let edges = [
        (-dx, x0 - min.x as f64),
        (dx, max.x as f64 - x0),
        (-dy, y0 - min.y as f64),
        (dy, max.y as f64 - y0),
    ];

    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let at = |t: f64| {
        PixelPoint::new(
            ((x0 + dx * t).round() as i64).clamp(min.x, max.x),
            ((y0 + dy * t).round() as i64).clamp(min.y, max.y),
        )
    };
    Some((at(t0), at(t1)))
}
