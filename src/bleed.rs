//! Alpha bleeding for source artwork.
//!
//! Fully transparent pixels take the average colour of their already-coloured
//! neighbours, spreading outward from the visible artwork one ring at a time.
//! Alpha stays zero, so the image looks the same, but resampling no longer
//! pulls transparent black into the edges.

use bit_vec::BitVec;
use image::{Rgba, RgbaImage};

pub fn alpha_bleed(img: &mut RgbaImage) {
    let (w, h) = img.dimensions();
    let mut colored = Mask::new(w, h);
    let mut queued = Mask::new(w, h);

    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel.0[3] != 0 {
            colored.set(x, y);
            queued.set(x, y);
        }
    }

    let mut ring = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if !queued.get(x, y) && neighbours(x, y, w, h).any(|(nx, ny)| colored.get(nx, ny)) {
                queued.set(x, y);
                ring.push((x, y));
            }
        }
    }

    while !ring.is_empty() {
        let mut next = Vec::new();

        for &(x, y) in &ring {
            let mut sum = [0u32; 3];
            let mut contributing = 0u32;

            for (nx, ny) in neighbours(x, y, w, h) {
                if colored.get(nx, ny) {
                    let source = img.get_pixel(nx, ny);
                    for (total, channel) in sum.iter_mut().zip(source.0) {
                        *total += channel as u32;
                    }
                    contributing += 1;
                } else if !queued.get(nx, ny) {
                    queued.set(nx, ny);
                    next.push((nx, ny));
                }
            }

            let n = contributing.max(1);
            img.put_pixel(
                x,
                y,
                Rgba([(sum[0] / n) as u8, (sum[1] / n) as u8, (sum[2] / n) as u8, 0]),
            );
        }

        // Pixels in the same ring never sample each other.
        for &(x, y) in &ring {
            colored.set(x, y);
        }
        ring = next;
    }
}

const OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

fn neighbours(x: u32, y: u32, w: u32, h: u32) -> impl Iterator<Item = (u32, u32)> {
    OFFSETS.iter().filter_map(move |&(dx, dy)| {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        (nx < w && ny < h).then_some((nx, ny))
    })
}

/// One bit per pixel.
struct Mask {
    width: u32,
    bits: BitVec,
}

impl Mask {
    fn new(w: u32, h: u32) -> Self {
        Self {
            width: w,
            bits: BitVec::from_elem(w as usize * h as usize, false),
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn get(&self, x: u32, y: u32) -> bool {
        self.bits.get(self.index(x, y)).unwrap_or(false)
    }

    fn set(&mut self, x: u32, y: u32) {
        let i = self.index(x, y);
        self.bits.set(i, true);
    }
}
