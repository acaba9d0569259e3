//! Software raster surface the widgets draw onto
//!
//! Pixels are stored as `0x00RRGGBB`, the layout softbuffer presents, so a
//! packed widget color can be written without reordering channels.

use crate::geometry::{Point, Rect};
use crate::util::alpha_blend;

/// Pixel buffer for rendering
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0x000000; width * height],
        }
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width + x as usize])
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        self.pixels[y as usize * self.width + x as usize] = color;
    }

    /// Blend a pixel with alpha
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: u32, alpha: u8) {
        if let Some(bg) = self.pixel(x, y) {
            self.set_pixel(x, y, alpha_blend(bg, color, alpha));
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        if rect.width <= 0 || rect.height <= 0 {
            return;
        }
        let x1 = rect.right();
        let y1 = rect.bottom();
        if x1 <= 0 || y1 <= 0 || rect.x >= self.width as i32 || rect.y >= self.height as i32 {
            return;
        }

        let x_start = rect.x.max(0) as usize;
        let y_start = rect.y.max(0) as usize;
        let x_end = x1.min(self.width as i32) as usize;
        let y_end = y1.min(self.height as i32) as usize;

        for py in y_start..y_end {
            self.pixels[py * self.width + x_start..py * self.width + x_end].fill(color);
        }
    }

    /// One-pixel outline covering the first and last row and column of `rect`.
    pub fn draw_rect_outline(&mut self, rect: Rect, color: u32) {
        if rect.width <= 0 || rect.height <= 0 {
            return;
        }
        // Top
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, 1), color);
        // Bottom
        self.fill_rect(Rect::new(rect.x, rect.bottom() - 1, rect.width, 1), color);
        // Left
        self.fill_rect(Rect::new(rect.x, rect.y, 1, rect.height), color);
        // Right
        self.fill_rect(Rect::new(rect.right() - 1, rect.y, 1, rect.height), color);
    }

    /// Bresenham line, both endpoints inclusive.
    pub fn draw_line(&mut self, from: Point, to: Point, color: u32) {
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (from.x, from.y);

        loop {
            self.set_pixel(x, y, color);
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
}
