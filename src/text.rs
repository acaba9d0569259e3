//! Text measurement and rendering
//!
//! Widgets size themselves from measured label extents, so every engine must
//! agree between `measure` and `draw`. Sizes are in pixels; the context turns
//! the caller's font scale into a pixel size before calling in here.

use crate::error::{Result, UiError};
use crate::framebuffer::FrameBuffer;
use crate::geometry::{Point, Rect};
use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
use fontdue::{Font, FontSettings};

/// Extent of a rendered string. `height` is the cap height above the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextSize {
    pub width: i32,
    pub height: i32,
}

pub trait TextEngine {
    fn measure(&self, text: &str, px: f32) -> TextSize;

    /// Draw `text` with its baseline starting at `origin`.
    fn draw(&self, fb: &mut FrameBuffer, text: &str, origin: Point, px: f32, color: u32);
}

impl<T: TextEngine + ?Sized> TextEngine for Box<T> {
    fn measure(&self, text: &str, px: f32) -> TextSize {
        (**self).measure(text, px)
    }

    fn draw(&self, fb: &mut FrameBuffer, text: &str, origin: Point, px: f32, color: u32) {
        (**self).draw(fb, text, origin, px, color)
    }
}

/// A text engine paired with the scale-to-pixel factor in use.
///
/// Widget code speaks in font scales (0.4 for labels); the pen turns those into
/// pixel sizes for the engine.
#[derive(Clone, Copy)]
pub struct Pen<'a> {
    engine: &'a dyn TextEngine,
    px_per_scale: f32,
}

impl<'a> Pen<'a> {
    pub fn new(engine: &'a dyn TextEngine, px_per_scale: f32) -> Self {
        Self { engine, px_per_scale }
    }

    pub fn px(&self, scale: f64) -> f32 {
        scale as f32 * self.px_per_scale
    }

    pub fn measure(&self, text: &str, scale: f64) -> TextSize {
        self.engine.measure(text, self.px(scale))
    }

    pub fn draw(&self, fb: &mut FrameBuffer, text: &str, origin: Point, scale: f64, color: u32) {
        self.engine.draw(fb, text, origin, self.px(scale), color);
    }
}

/// TrueType text rasterized with fontdue
pub struct FontText {
    font: Font,
}

impl FontText {
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let font = Font::from_bytes(data, FontSettings::default()).map_err(UiError::Font)?;
        Ok(Self { font })
    }

    fn layout(&self, text: &str, x: f32, px: f32) -> Layout {
        let mut layout = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings {
            x,
            y: 0.0,
            ..LayoutSettings::default()
        });
        layout.append(&[&self.font], &TextStyle::new(text, px, 0));
        layout
    }
}

impl TextEngine for FontText {
    fn measure(&self, text: &str, px: f32) -> TextSize {
        let height = self.font.metrics('H', px).height as i32;
        if text.is_empty() {
            return TextSize { width: 0, height };
        }
        let layout = self.layout(text, 0.0, px);
        let width = layout
            .glyphs()
            .last()
            .map(|g| (g.x + g.width as f32).ceil() as i32)
            .unwrap_or(0);
        TextSize { width, height }
    }

    fn draw(&self, fb: &mut FrameBuffer, text: &str, origin: Point, px: f32, color: u32) {
        let layout = self.layout(text, origin.x as f32, px);
        let baseline_in_layout = layout
            .lines()
            .and_then(|lines| lines.first().map(|l| l.baseline_y.round() as i32))
            .unwrap_or(0);
        let dy = origin.y - baseline_in_layout;

        for glyph in layout.glyphs() {
            let (metrics, bitmap) = self.font.rasterize_config(glyph.key);
            let gx = glyph.x.round() as i32;
            let gy = glyph.y.round() as i32 + dy;

            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let alpha = bitmap[row * metrics.width + col];
                    if alpha == 0 {
                        continue;
                    }
                    fb.blend_pixel(gx + col as i32, gy + row as i32, color, alpha);
                }
            }
        }
    }
}

/// Fontless fixed-advance text: every visible character is a solid cell.
///
/// Useful for headless frames where no font file is around, and it makes
/// label geometry predictable.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockText;

impl BlockText {
    pub fn advance(px: f32) -> i32 {
        ((px * 0.55).round() as i32).max(1)
    }

    pub fn cap_height(px: f32) -> i32 {
        ((px * 0.7).round() as i32).max(1)
    }
}

impl TextEngine for BlockText {
    fn measure(&self, text: &str, px: f32) -> TextSize {
        TextSize {
            width: text.chars().count() as i32 * Self::advance(px),
            height: Self::cap_height(px),
        }
    }

    fn draw(&self, fb: &mut FrameBuffer, text: &str, origin: Point, px: f32, color: u32) {
        let advance = Self::advance(px);
        let cap = Self::cap_height(px);
        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let x = origin.x + i as i32 * advance;
            fb.fill_rect(Rect::new(x, origin.y - cap, (advance - 1).max(1), cap), color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_text_measures_per_character() {
        let size = BlockText.measure("OK", 12.8);
        assert_eq!(size, TextSize { width: 14, height: 9 });
        assert_eq!(BlockText.measure("", 12.8).width, 0);
    }

    #[test]
    fn block_text_sits_on_the_baseline() {
        let mut fb = FrameBuffer::new(40, 20);
        BlockText.draw(&mut fb, "A B", Point::new(2, 15), 12.8, 0xFFFFFF);
        // cell rows are [baseline - cap, baseline)
        assert_eq!(fb.pixel(2, 14), Some(0xFFFFFF));
        assert_eq!(fb.pixel(2, 6), Some(0xFFFFFF));
        assert_eq!(fb.pixel(2, 15), Some(0));
        assert_eq!(fb.pixel(2, 5), Some(0));
        // the space leaves its cell empty
        assert_eq!(fb.pixel(9, 10), Some(0));
        assert_eq!(fb.pixel(16, 10), Some(0xFFFFFF));
    }

    #[test]
    fn pen_converts_scale_to_pixels() {
        let pen = Pen::new(&BlockText, 32.0);
        assert_eq!(pen.px(0.4), 12.8);
        assert_eq!(pen.measure("OK", 0.4), BlockText.measure("OK", 12.8));
    }

    #[test]
    fn garbage_font_bytes_are_rejected() {
        assert!(matches!(FontText::from_bytes(b"not a font"), Err(UiError::Font(_))));
    }
}
