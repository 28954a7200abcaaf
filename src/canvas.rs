//! Drawing primitives for RGBA canvases.
//!
//! A pixel belongs to a curved shape when its centre lies inside it, and to a
//! rectangle when its column and row fall between the truncated corner
//! coordinates, both ends included. Shapes replace the pixels they cover,
//! alpha included, and there is no anti-aliasing, so the 16px variants stay
//! crisp.

use std::ops::Range;

use image::{Rgba, RgbaImage};

/// Axis-aligned rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Rect {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn square(x: f32, y: f32, side: f32) -> Self {
        Self::new(x, y, x + side, y + side)
    }

    /// Rect around a centre point with the given radii.
    pub fn around(cx: f32, cy: f32, rx: f32, ry: f32) -> Self {
        Self::new(cx - rx, cy - ry, cx + rx, cy + ry)
    }

    /// Shrinks every edge by `by`. Negative values grow the rect.
    pub fn inset(&self, by: f32) -> Self {
        Self::new(self.x0 + by, self.y0 + by, self.x1 - by, self.y1 - by)
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    fn contains_rounded(&self, radius: f32, x: f32, y: f32) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        let r = radius.max(0.0).min(self.width().min(self.height()) / 2.0);
        let nearest_x = x.max(self.x0 + r).min(self.x1 - r);
        let nearest_y = y.max(self.y0 + r).min(self.y1 - r);
        let (dx, dy) = (x - nearest_x, y - nearest_y);
        dx * dx + dy * dy <= r * r
    }

    fn contains_ellipse(&self, x: f32, y: f32) -> bool {
        let (rx, ry) = (self.width() / 2.0, self.height() / 2.0);
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }
        let dx = (x - (self.x0 + rx)) / rx;
        let dy = (y - (self.y0 + ry)) / ry;
        dx * dx + dy * dy <= 1.0
    }

    /// Pixel columns and rows this rect can touch, clipped to the canvas.
    fn pixel_span(&self, canvas: &RgbaImage) -> (Range<u32>, Range<u32>) {
        let clip = |lo: f32, hi: f32, limit: u32| {
            let start = lo.floor().max(0.0) as u32;
            let end = (hi.ceil().max(0.0) as u32).min(limit);
            start.min(end)..end
        };
        (
            clip(self.x0, self.x1, canvas.width()),
            clip(self.y0, self.y1, canvas.height()),
        )
    }
}

fn paint(
    canvas: &mut RgbaImage,
    bounds: Rect,
    color: Rgba<u8>,
    inside: impl Fn(f32, f32) -> bool,
) {
    let (xs, ys) = bounds.pixel_span(canvas);
    for y in ys {
        for x in xs.clone() {
            if inside(x as f32 + 0.5, y as f32 + 0.5) {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

/// Columns `trunc(lo)..=trunc(hi)`, clipped to `0..limit`.
fn cells(lo: f32, hi: f32, limit: u32) -> Range<u32> {
    let start = (lo.trunc() as i64).max(0);
    let end = (hi.trunc() as i64 + 1).min(limit as i64);
    if start >= end {
        0..0
    } else {
        start as u32..end as u32
    }
}

/// Fills every pixel from `(trunc(x0), trunc(y0))` to `(trunc(x1), trunc(y1))` inclusive.
pub fn fill_rect(canvas: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    let xs = cells(rect.x0, rect.x1, canvas.width());
    let ys = cells(rect.y0, rect.y1, canvas.height());
    for y in ys {
        for x in xs.clone() {
            canvas.put_pixel(x, y, color);
        }
    }
}

pub fn fill_rounded_rect(canvas: &mut RgbaImage, rect: Rect, radius: f32, color: Rgba<u8>) {
    paint(canvas, rect, color, |x, y| rect.contains_rounded(radius, x, y));
}

/// Outline of a rounded rect, `width` pixels thick, drawn inward from `rect`.
pub fn stroke_rounded_rect(
    canvas: &mut RgbaImage,
    rect: Rect,
    radius: f32,
    width: f32,
    color: Rgba<u8>,
) {
    let hole = rect.inset(width);
    let hole_radius = radius - width;
    paint(canvas, rect, color, |x, y| {
        rect.contains_rounded(radius, x, y) && !hole.contains_rounded(hole_radius, x, y)
    });
}

/// Ellipse inscribed in `rect`.
pub fn fill_ellipse(canvas: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    paint(canvas, rect, color, |x, y| rect.contains_ellipse(x, y));
}

pub fn stroke_ellipse(canvas: &mut RgbaImage, rect: Rect, width: f32, color: Rgba<u8>) {
    let hole = rect.inset(width);
    paint(canvas, rect, color, |x, y| {
        rect.contains_ellipse(x, y) && !hole.contains_ellipse(x, y)
    });
}
