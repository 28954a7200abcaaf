//! Procedural renderer for the translucent "screenshot" app icon.
//!
//! Every measurement is a fraction of the target size, floored to a minimum
//! where a line would otherwise vanish, so the same design holds from 16px to
//! 1024px. The only size-specific switch is the blur pass.

use std::f64::consts::TAU;

use image::{imageops, Rgba, RgbaImage};

use crate::canvas::{self, Rect};

/// Smallest size that gets the softening blur. Below this, blurring smears
/// away the detail.
pub const BLUR_THRESHOLD: u32 = 256;

pub const BLUR_SIGMA: f32 = 0.5;

/// Fixed palette for the icon design.
#[derive(Debug, Clone, PartialEq)]
pub struct IconStyle {
    /// Translucent tint of the rounded background panel.
    pub panel: Rgba<u8>,
    /// Colour of the outermost border ring.
    pub ring_base: [i32; 4],
    /// Per-ring change applied to `ring_base`, channels clamped to `0..=255`.
    pub ring_step: [i32; 4],
    /// Thin highlight just outside the frame.
    pub frame_outline: Rgba<u8>,
    pub band_alpha: u8,
    pub dots: [Rgba<u8>; 4],
    pub shutter_fill: Rgba<u8>,
    pub shutter_rim: Rgba<u8>,
    pub shutter_core: Rgba<u8>,
    pub shutter_highlight: Rgba<u8>,
}

pub const SCREENSHOT_STYLE: IconStyle = IconStyle {
    panel: Rgba([240, 245, 255, 200]),
    ring_base: [100, 150, 255, 150],
    ring_step: [5, 3, -2, -20],
    frame_outline: Rgba([255, 255, 255, 180]),
    band_alpha: 200,
    dots: [
        Rgba([255, 120, 120, 180]),
        Rgba([120, 200, 255, 180]),
        Rgba([120, 255, 180, 180]),
        Rgba([255, 220, 120, 180]),
    ],
    shutter_fill: Rgba([255, 100, 100, 255]),
    shutter_rim: Rgba([255, 255, 255, 200]),
    shutter_core: Rgba([255, 255, 255, 255]),
    shutter_highlight: Rgba([255, 255, 255, 150]),
};

impl Default for IconStyle {
    fn default() -> Self {
        SCREENSHOT_STYLE
    }
}

impl IconStyle {
    pub fn ring_color(&self, ring: u32) -> Rgba<u8> {
        let mut channels = [0u8; 4];
        for (c, out) in channels.iter_mut().enumerate() {
            let value = self.ring_base[c] + self.ring_step[c] * ring as i32;
            *out = value.clamp(0, 255) as u8;
        }
        Rgba(channels)
    }
}

/// A side of the frame, in clockwise drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// Phase, in turns, at which this side's colour sweep starts.
    pub fn phase_offset(self) -> f64 {
        match self {
            Side::Top => 0.0,
            Side::Right => 0.5,
            Side::Bottom => 1.0,
            Side::Left => 1.5,
        }
    }

    /// Area covered by segment `index` of `count` along this side of `frame`.
    pub fn segment_rect(self, frame: Rect, thickness: f32, index: u32, count: u32) -> Rect {
        let step = frame.width() / count as f32;
        let near = index as f32 * step;
        let far = (index + 1) as f32 * step;
        match self {
            Side::Top => Rect::new(frame.x0 + near, frame.y0, frame.x0 + far, frame.y0 + thickness),
            Side::Right => Rect::new(frame.x1 - thickness, frame.y0 + near, frame.x1, frame.y0 + far),
            Side::Bottom => Rect::new(frame.x1 - far, frame.y1 - thickness, frame.x1 - near, frame.y1),
            Side::Left => Rect::new(frame.x0, frame.y1 - far, frame.x0 + thickness, frame.y1 - near),
        }
    }
}

/// Three-phase sinusoid colour at `turns` around the hue circle.
pub fn sweep(turns: f64) -> Rgba<u8> {
    let angle = turns.rem_euclid(1.0) * TAU;
    let channel = |shift: f64| (128.0 + 127.0 * (angle + shift).sin()) as u8;
    Rgba([channel(0.0), channel(TAU / 3.0), channel(2.0 * TAU / 3.0), 255])
}

/// Colour of segment `index` out of `count` on `side`.
pub fn color_at(side: Side, index: u32, count: u32) -> Rgba<u8> {
    sweep(side.phase_offset() + index as f64 / count as f64)
}

pub fn is_blurred(size: u32) -> bool {
    size >= BLUR_THRESHOLD
}

/// Renders the finished icon at `size` x `size`.
pub fn render_icon(size: u32, style: &IconStyle) -> RgbaImage {
    let icon = draw_icon(size, style);
    if is_blurred(size) {
        imageops::blur(&icon, BLUR_SIGMA)
    } else {
        icon
    }
}

/// Draws the icon design without the final blur.
pub fn draw_icon(size: u32, style: &IconStyle) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    let s = size as f32;

    let padding = s * 0.1;
    let icon_size = s - padding * 2.0;
    let center = s / 2.0;

    // Background panel and its gradient border
    let bg_inset = (s - icon_size * 0.95) / 2.0;
    let panel = Rect::new(0.0, 0.0, s, s).inset(bg_inset);
    let panel_radius = s * 0.2;
    canvas::fill_rounded_rect(&mut img, panel, panel_radius, style.panel);

    let rings = (size / 48).max(2);
    for ring in 0..rings {
        let offset = ring as f32;
        canvas::stroke_rounded_rect(
            &mut img,
            panel.inset(offset),
            panel_radius - offset * 0.5,
            1.0,
            style.ring_color(ring),
        );
    }

    // Screenshot frame, nudged above centre to leave room for the shutter
    let frame_size = icon_size * 0.6;
    let frame = Rect::square(
        center - frame_size / 2.0,
        center - frame_size / 2.0 - s * 0.05,
        frame_size,
    );
    let thickness = (size / 32).max(2) as f32;
    let segments = (size / 32).max(4);

    for side in Side::ALL {
        for i in 0..segments {
            let rect = side.segment_rect(frame, thickness, i, segments);
            canvas::fill_rect(&mut img, rect, color_at(side, i, segments));
        }
    }

    canvas::stroke_rounded_rect(
        &mut img,
        frame.inset(-1.0),
        s * 0.08,
        (size / 128).max(1) as f32,
        style.frame_outline,
    );

    let inner = frame.inset(thickness * 2.0);
    draw_bands(&mut img, inner, (size / 32).max(1), style.band_alpha);
    draw_dots(&mut img, inner, size, &style.dots);
    draw_shutter(&mut img, frame, size, style);

    img
}

/// Colour of an interior band at `progress` (0 at the top, 1 at the bottom).
pub fn band_color(progress: f32, alpha: u8) -> Rgba<u8> {
    let ripple = ((progress * std::f32::consts::PI * 4.0).sin() * 15.0) as i32;
    let r = (220.0 + progress * 20.0) as i32 + ripple;
    let g = (230.0 + progress * 15.0) as i32 + ripple;
    let b = (250.0 - progress * 30.0) as i32 + ripple;
    Rgba([
        r.clamp(200, 255) as u8,
        g.clamp(210, 255) as u8,
        b.clamp(220, 255) as u8,
        alpha,
    ])
}

fn draw_bands(img: &mut RgbaImage, inner: Rect, step: u32, alpha: u8) {
    let height = inner.height();
    let top = inner.y0 as i64;
    let bottom = inner.y1 as i64;

    for y in (top..bottom).step_by(step as usize) {
        let progress = if height > 0.0 {
            (y as f32 - inner.y0) / height
        } else {
            0.0
        };
        let y_end = bottom.min(y + step as i64);
        let band = Rect::new(inner.x0, y as f32, inner.x1, y_end as f32);
        canvas::fill_rect(img, band, band_color(progress, alpha));
    }
}

fn draw_dots(img: &mut RgbaImage, inner: Rect, size: u32, palette: &[Rgba<u8>; 4]) {
    let count = (size / 64).max(3);
    let radius = (size / 64).max(1) as f32;
    let (width, height) = (inner.width(), inner.height());

    for i in 0..count {
        let x = inner.x0 + (i + 1) as f32 * width / (count + 1) as f32;
        let y = inner.y0 + height * 0.3 + (i % 2) as f32 * height * 0.4;
        let color = palette[i as usize % palette.len()];
        canvas::fill_ellipse(img, Rect::around(x, y, radius, radius), color);
    }
}

fn draw_shutter(img: &mut RgbaImage, frame: Rect, size: u32, style: &IconStyle) {
    let shutter = size as f32 * 0.15;
    let cx = frame.x1 - shutter * 0.3;
    let cy = frame.y0 - shutter * 0.2;
    let radius = shutter / 2.0;

    let outer = Rect::around(cx, cy, radius, radius);
    canvas::fill_ellipse(img, outer, style.shutter_fill);
    canvas::stroke_ellipse(img, outer, (size / 64).max(1) as f32, style.shutter_rim);

    let core = radius * 0.6;
    canvas::fill_ellipse(img, Rect::around(cx, cy, core, core), style.shutter_core);

    let glint = core * 0.3;
    let shift = core * 0.2;
    canvas::fill_ellipse(
        img,
        Rect::around(cx - shift, cy - shift, glint, glint),
        style.shutter_highlight,
    );
}
