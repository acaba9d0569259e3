//! Render primitives for each widget
//!
//! Pure drawing: callers hand in geometry and a visual state, nothing here
//! looks at the mouse or keeps anything between calls.

use crate::framebuffer::FrameBuffer;
use crate::geometry::{Point, Rect};
use crate::text::{Pen, TextSize};
use crate::util::SeriesRange;

/// Font scale for widget labels
pub const LABEL_SCALE: f64 = 0.4;
/// Labels shrink slightly while their button is held down
pub const PRESSED_LABEL_SCALE: f64 = 0.39;

const LABEL_COLOR: u32 = 0xCECECE;
const CHECK_COLOR: u32 = 0x75BFFF;
const COUNTER_FILL: u32 = 0x292929;
const COUNTER_BORDER: u32 = 0x454545;
const WINDOW_BORDER: u32 = 0x4A4A4A;
const WINDOW_TITLE_FILL: u32 = 0x212121;
const WINDOW_BODY_FILL: u32 = 0x313131;

/// Bottom margin kept free below a sparkline's lowest point
pub const SPARKLINE_MARGIN: i32 = 5;

/// Interaction state a widget is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    Idle,
    Over,
    Pressed,
}

/// Outline, inner border and fill, outermost first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub outline: u32,
    pub border: u32,
    pub fill: u32,
}

impl Palette {
    pub fn button(state: VisualState) -> Self {
        Self {
            outline: 0x292929,
            border: 0x4A4A4A,
            fill: match state {
                VisualState::Idle => 0x424242,
                VisualState::Over => 0x525252,
                VisualState::Pressed => 0x323232,
            },
        }
    }

    pub fn checkbox(state: VisualState) -> Self {
        Self {
            outline: match state {
                VisualState::Idle => 0x636363,
                VisualState::Over | VisualState::Pressed => 0x808080,
            },
            border: 0x171717,
            fill: 0x292929,
        }
    }

    /// Outline, then a border one pixel in, then a fill two pixels in.
    fn paint(&self, fb: &mut FrameBuffer, rect: Rect) {
        fb.draw_rect_outline(rect, self.outline);
        fb.draw_rect_outline(rect.inset(1), self.border);
        fb.fill_rect(rect.inset(2), self.fill);
    }
}

pub fn text(fb: &mut FrameBuffer, pen: &Pen<'_>, text: &str, pos: Point, scale: f64, color: u32) {
    pen.draw(fb, text, pos, scale, color);
}

pub fn rect(fb: &mut FrameBuffer, rect: Rect, color: u32) {
    fb.fill_rect(rect, color);
}

pub fn button(fb: &mut FrameBuffer, state: VisualState, rect: Rect) {
    Palette::button(state).paint(fb, rect);
}

/// Centre `label` in `rect`. `size` is the label measured at [`LABEL_SCALE`].
pub fn button_label(
    fb: &mut FrameBuffer,
    pen: &Pen<'_>,
    state: VisualState,
    rect: Rect,
    label: &str,
    size: TextSize,
) {
    let pos = Point::new(
        rect.x + rect.width / 2 - size.width / 2,
        rect.y + rect.height / 2 + size.height / 2,
    );
    let scale = if state == VisualState::Pressed {
        PRESSED_LABEL_SCALE
    } else {
        LABEL_SCALE
    };
    pen.draw(fb, label, pos, scale, LABEL_COLOR);
}

/// Readout box between a counter's buttons
pub fn counter(fb: &mut FrameBuffer, pen: &Pen<'_>, rect: Rect, value: &str) {
    fb.fill_rect(rect, COUNTER_FILL);
    fb.draw_rect_outline(rect, COUNTER_BORDER);

    let size = pen.measure(value, LABEL_SCALE);
    let pos = Point::new(
        rect.x + rect.width / 2 - size.width / 2,
        rect.y + size.height / 2 + rect.height / 2,
    );
    pen.draw(fb, value, pos, LABEL_SCALE, LABEL_COLOR);
}

pub fn checkbox(fb: &mut FrameBuffer, state: VisualState, rect: Rect) {
    Palette::checkbox(state).paint(fb, rect);
}

/// Label to the right of the box, vertically centred on it.
pub fn checkbox_label(
    fb: &mut FrameBuffer,
    pen: &Pen<'_>,
    rect: Rect,
    label: &str,
    size: TextSize,
    color: u32,
) {
    let pos = Point::new(
        rect.right() + 8,
        rect.y + rect.height / 2 + size.height / 2 + 2,
    );
    pen.draw(fb, label, pos, LABEL_SCALE, color);
}

pub fn checkbox_check(fb: &mut FrameBuffer, rect: Rect) {
    fb.fill_rect(rect.inset(3), CHECK_COLOR);
}

pub fn window(fb: &mut FrameBuffer, pen: &Pen<'_>, title_bar: Rect, content: Rect, title: &str) {
    fb.draw_rect_outline(title_bar, WINDOW_BORDER);
    let inner = title_bar.inset(1);
    fb.fill_rect(inner, WINDOW_TITLE_FILL);
    pen.draw(
        fb,
        title,
        Point::new(inner.x + 5, inner.y + 12),
        LABEL_SCALE,
        LABEL_COLOR,
    );

    fb.draw_rect_outline(content, WINDOW_BORDER);
    fb.fill_rect(content.inset(1), WINDOW_BODY_FILL);
}

/// Screen positions of a series scaled into `rect`.
///
/// The lowest value sits `SPARKLINE_MARGIN` above the bottom edge and the
/// highest on the top edge. A flat series maps to the middle of that band.
pub fn sparkline_points(values: &[f64], rect: Rect, range: SeriesRange) -> Vec<Point> {
    if values.is_empty() {
        return Vec::new();
    }
    let gap = rect.width as f64 / values.len() as f64;
    let band = (rect.height - SPARKLINE_MARGIN) as f64;
    let floor = (rect.y + rect.height - SPARKLINE_MARGIN) as f64;
    let span = range.span();

    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = rect.x as f64 + i as f64 * gap;
            let y = match span {
                Ok(span) => floor - (v - range.min) / span * band,
                Err(_) => rect.y as f64 + band / 2.0,
            };
            Point::new(x as i32, y as i32)
        })
        .collect()
}

pub fn sparkline(fb: &mut FrameBuffer, values: &[f64], rect: Rect, range: SeriesRange, color: u32) {
    let points = sparkline_points(values, rect, range);
    match points.as_slice() {
        [] => {}
        [only] => fb.draw_line(*only, Point::new(rect.right() - 1, only.y), color),
        _ => {
            for pair in points.windows(2) {
                fb.draw_line(pair[0], pair[1], color);
            }
        }
    }
}
