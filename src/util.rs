//! Color and series helpers shared by the render primitives

use crate::error::{Result, UiError};

/// Split a packed `0xRRGGBB` color into its channels.
pub fn separate_channels(color: u32) -> (u8, u8, u8) {
    (
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
    )
}

/// Pack channels back into `0xRRGGBB`.
pub fn pack_channels(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

pub fn mix_color(c1: u32, c2: u32, t: f32) -> u32 {
    let (r1, g1, b1) = separate_channels(c1);
    let (r2, g2, b2) = separate_channels(c2);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8;
    pack_channels(mix(r1, r2), mix(g1, g2), mix(b1, b2))
}

/// Blend `src` over `dst` with 8-bit coverage.
pub fn alpha_blend(dst: u32, src: u32, alpha: u8) -> u32 {
    mix_color(dst, src, alpha as f32 / 255.0)
}

/// Smallest and largest value of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesRange {
    pub min: f64,
    pub max: f64,
}

impl SeriesRange {
    /// `max - min`, or `DegenerateRange` when the series is flat.
    pub fn span(&self) -> Result<f64> {
        let span = self.max - self.min;
        if span > 0.0 {
            Ok(span)
        } else {
            Err(UiError::DegenerateRange { value: self.min })
        }
    }

    pub fn midpoint(&self) -> f64 {
        (self.max - self.min) / 2.0 + self.min
    }
}

/// Scan a series for its bounds. `None` for an empty slice.
pub fn find_min_max(values: &[f64]) -> Option<SeriesRange> {
    let first = *values.first()?;
    let range = values.iter().fold(
        SeriesRange { min: first, max: first },
        |acc, &v| SeriesRange {
            min: if v < acc.min { v } else { acc.min },
            max: if v > acc.max { v } else { acc.max },
        },
    );
    Some(range)
}
