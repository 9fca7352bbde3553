//! CPU-side render target.
//!
//! Pixels are packed RGBA (`0xRRGGBBAA`) and stored row-major with row 0 at
//! the bottom of the screen, so the presenter flips rows on the way out.

use crate::sprites::Sprite;

// ── Colour packing ────────────────────────────────────────────────────────────

/// Pack an opaque colour into `0xRRGGBBAA`.
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | 0xFF
}

/// Inverse of [`rgb`]; alpha is dropped.
pub const fn unpack(color: u32) -> (u8, u8, u8) {
    ((color >> 24) as u8, (color >> 16) as u8, (color >> 8) as u8)
}

// ── PixelBuffer ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u32>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize, color: u32) -> Self {
        Self {
            width,
            height,
            data: vec![color; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.data
    }

    pub fn clear(&mut self, color: u32) {
        self.data.fill(color);
    }

    /// Pixel at `(x, y)` with `y` counted from the bottom row.
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y * self.width + x])
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Blit `sprite` with its bottom-left corner at `(x, y)`.
    ///
    /// Stencil row 0 is the top of the sprite, so it lands on buffer row
    /// `y + height - 1`. Zero cells leave the buffer untouched and anything
    /// falling outside the buffer is clipped.
    pub fn draw_sprite(&mut self, sprite: &Sprite, x: i32, y: i32, color: u32) {
        let (w, h) = (sprite.width as i32, sprite.height as i32);
        for yi in 0..h {
            let sy = y + (h - 1 - yi);
            for xi in 0..w {
                if !sprite.is_set(xi as usize, yi as usize) {
                    continue;
                }
                if let Some(i) = self.index(x + xi, sy) {
                    self.data[i] = color;
                }
            }
        }
    }
}
