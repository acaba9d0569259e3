//! Immediate-mode widgets
//!
//! A [`Context`] carries everything that outlives a single widget call: the
//! pointer state, the row stack, the text engine and the format buffer. Each
//! widget call hit-tests the pointer against bounds it computes on the spot,
//! draws itself and reports what happened this frame. Nothing about a widget
//! is remembered between calls; a checkbox's value or a counter's number lives
//! in the caller's variables.
//!
//! Frame contract for the host:
//!
//! 1. [`Context::init`] once with the window the widgets are shown in.
//! 2. Forward every window event to [`Context::handle_event`] (or feed
//!    [`MouseEvent`]s to [`Context::handle_mouse`] from any other host).
//! 3. Issue the widget calls for the frame.
//! 4. Call [`Context::update`] exactly once after the last widget call.
//!
//! Clicks are edge-triggered: a widget reports one only on the frame where the
//! button was released over it. Skipping step 4 keeps that edge raised and
//! every following frame would report the click again. A widget area that
//! reports the same edge twice is taken as that symptom and logged once.

use crate::config::UiConfig;
use crate::error::Result;
use crate::format::{FormatArg, FormatBuffer, FormatSpec};
use crate::framebuffer::FrameBuffer;
use crate::geometry::{Point, Rect};
use crate::layout::RowStack;
use crate::mouse::{self, MouseEvent, MouseState};
use crate::render::{self, VisualState, LABEL_SCALE};
use crate::text::{Pen, TextEngine};
use crate::util::find_min_max;
use std::fmt;
use winit::event::Event;
use winit::window::WindowId;

/// Height of a window's title bar
pub const TITLE_BAR_HEIGHT: i32 = 20;
/// Side of a checkbox's box
pub const CHECKBOX_SIZE: i32 = 15;
/// Side of a counter's `-`/`+` buttons
pub const COUNTER_BUTTON_SIZE: i32 = 22;
/// Width of a counter's readout
pub const COUNTER_READOUT_WIDTH: i32 = 48;

pub const SPARKLINE_COLOR: u32 = 0x00FF00;
const CHART_LABEL_COLOR: u32 = 0x717171;
const CHART_LABEL_SCALE: f64 = 0.25;

/// Padding added around a measured label by [`Context::button`]
const BUTTON_PAD_X: i32 = 30;
const BUTTON_PAD_Y: i32 = 18;

/// Numbers a counter can step. Integer steps saturate at the type's bounds.
pub trait CounterValue: Copy {
    fn format_arg(self) -> FormatArg;
    fn step_up(self, step: Self) -> Self;
    fn step_down(self, step: Self) -> Self;
}

macro_rules! counter_int {
    ($($t:ty),*) => {$(
        impl CounterValue for $t {
            fn format_arg(self) -> FormatArg {
                FormatArg::Int(self as i64)
            }
            fn step_up(self, step: Self) -> Self {
                self.saturating_add(step)
            }
            fn step_down(self, step: Self) -> Self {
                self.saturating_sub(step)
            }
        }
    )*};
}

macro_rules! counter_float {
    ($($t:ty),*) => {$(
        impl CounterValue for $t {
            fn format_arg(self) -> FormatArg {
                FormatArg::Float(self as f64)
            }
            fn step_up(self, step: Self) -> Self {
                self + step
            }
            fn step_down(self, step: Self) -> Self {
                self - step
            }
        }
    )*};
}

counter_int!(i32, i64);
counter_float!(f32, f64);

pub struct Context<T: TextEngine> {
    text: T,
    config: UiConfig,
    mouse: MouseState,
    rows: RowStack,
    format: FormatBuffer,
    window: Option<WindowId>,
    /// Frames closed by `update`
    frame: u64,
    /// Widget areas that have reported the current release edge
    edge_readers: Vec<Rect>,
    /// The current edge has already been logged as stale
    edge_stale: bool,
}

impl<T: TextEngine> Context<T> {
    pub fn new(text: T, config: UiConfig) -> Self {
        Self {
            rows: RowStack::new(config.row_capacity),
            format: FormatBuffer::new(config.format_capacity),
            text,
            config,
            mouse: MouseState::default(),
            window: None,
            frame: 0,
            edge_readers: Vec::new(),
            edge_stale: false,
        }
    }

    pub fn mouse(&self) -> &MouseState {
        &self.mouse
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn row_depth(&self) -> usize {
        self.rows.depth()
    }

    fn pen(&self) -> Pen<'_> {
        Pen::new(&self.text, self.config.px_per_scale)
    }

    // ------------------------------------------------------------------
    // Frame lifecycle
    // ------------------------------------------------------------------

    /// Bind the context to the window whose pointer events it should track.
    pub fn init(&mut self, window: WindowId) {
        log::debug!("pixui bound to window {:?}", window);
        self.window = Some(window);
    }

    /// Feed a winit event. Returns true when it was a pointer event for the
    /// bound window and has been applied.
    pub fn handle_event<E: 'static>(&mut self, event: &Event<'_, E>) -> bool {
        let Event::WindowEvent { window_id, event } = event else {
            return false;
        };
        let Some(m) = mouse::from_window_event(event, self.mouse.position) else {
            return false;
        };
        match self.window {
            Some(bound) if bound == *window_id => {
                self.handle_mouse(m);
                true
            }
            Some(_) => false,
            None => {
                log::warn!("pointer event before init; call Context::init with the window first");
                false
            }
        }
    }

    /// Apply one pointer event.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        self.mouse.handle(event);
        if let MouseEvent::Up(_) = event {
            self.edge_readers.clear();
            self.edge_stale = false;
        }
    }

    /// Close the frame: the release edge is dropped and the next frame starts.
    pub fn update(&mut self) {
        self.mouse.end_frame();
        self.edge_readers.clear();
        self.edge_stale = false;
        self.frame += 1;
        if self.rows.depth() > 0 {
            log::warn!("{} row(s) left open at end of frame", self.rows.depth());
        }
    }

    /// Release edge as seen by the widget occupying `hit`. The same area
    /// reading one edge twice means a frame went by without `update()`.
    fn released(&mut self, hit: Rect) -> bool {
        if !self.mouse.just_released {
            return false;
        }
        if self.edge_readers.contains(&hit) {
            if !self.edge_stale {
                log::warn!(
                    "release edge reported twice by the widget at ({}, {}) in frame {}; is update() called every frame?",
                    hit.x,
                    hit.y,
                    self.frame
                );
                self.edge_stale = true;
            }
        } else {
            self.edge_readers.push(hit);
        }
        true
    }

    fn visual_state(&self, hit: Rect) -> (bool, VisualState) {
        let over = hit.contains(self.mouse.position);
        let state = match (over, self.mouse.is_pressed) {
            (true, true) => VisualState::Pressed,
            (true, false) => VisualState::Over,
            (false, _) => VisualState::Idle,
        };
        (over, state)
    }

    // ------------------------------------------------------------------
    // Widgets
    // ------------------------------------------------------------------

    /// Button sized to its label. Returns true on the frame it is clicked.
    pub fn button(&mut self, fb: &mut FrameBuffer, x: i32, y: i32, label: &str) -> bool {
        let size = self.pen().measure(label, LABEL_SCALE);
        self.button_sized(
            fb,
            x,
            y,
            size.width + BUTTON_PAD_X,
            size.height + BUTTON_PAD_Y,
            label,
        )
    }

    pub fn button_sized(
        &mut self,
        fb: &mut FrameBuffer,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        label: &str,
    ) -> bool {
        let rect = Rect::new(x, y, width, height);
        let (over, state) = self.visual_state(rect);

        let pen = self.pen();
        let size = pen.measure(label, LABEL_SCALE);
        render::button(fb, state, rect);
        render::button_label(fb, &pen, state, rect, label, size);

        over && self.released(rect)
    }

    /// Checkbox bound to `checked`, toggled by a click on the box or label.
    /// Returns the value after this frame's toggle, if any.
    pub fn checkbox(
        &mut self,
        fb: &mut FrameBuffer,
        x: i32,
        y: i32,
        label: &str,
        checked: &mut bool,
        color: u32,
    ) -> bool {
        let rect = Rect::new(x, y, CHECKBOX_SIZE, CHECKBOX_SIZE);
        let size = self.pen().measure(label, LABEL_SCALE);
        let hit = Rect::new(x, y, CHECKBOX_SIZE + size.width, CHECKBOX_SIZE);
        let over = hit.contains(self.mouse.position);

        if over && self.released(hit) {
            *checked = !*checked;
        }

        let pen = self.pen();
        let state = if over { VisualState::Over } else { VisualState::Idle };
        render::checkbox(fb, state, rect);
        render::checkbox_label(fb, &pen, rect, label, size, color);
        if *checked {
            render::checkbox_check(fb, rect);
        }

        *checked
    }

    /// `-` button, readout, `+` button. Each completed click moves `value` by
    /// `step`; the readout is `value` through the printf-style `format`.
    ///
    /// A readout that cannot be formatted leaves the box empty; both buttons
    /// are still handled and the error is returned after them.
    pub fn counter<V: CounterValue>(
        &mut self,
        fb: &mut FrameBuffer,
        x: i32,
        y: i32,
        value: &mut V,
        step: V,
        format: &str,
    ) -> Result<V> {
        let readout = Rect::new(x + COUNTER_BUTTON_SIZE, y + 1, COUNTER_READOUT_WIDTH, 21);

        if self.button_sized(fb, x, y, COUNTER_BUTTON_SIZE, COUNTER_BUTTON_SIZE, "-") {
            *value = value.step_down(step);
        }

        let formatted = FormatSpec::parse(format)
            .and_then(|spec| self.format.format_value(&spec, value.format_arg()).map(str::to_owned));
        let pen = self.pen();
        let outcome = match formatted {
            Ok(text) => {
                render::counter(fb, &pen, readout, &text);
                Ok(())
            }
            Err(e) => {
                log::debug!("counter readout at ({}, {}) not drawn: {}", x, y, e);
                render::counter(fb, &pen, readout, "");
                Err(e)
            }
        };

        if self.button_sized(
            fb,
            readout.right(),
            y,
            COUNTER_BUTTON_SIZE,
            COUNTER_BUTTON_SIZE,
            "+",
        ) {
            *value = value.step_up(step);
        }

        outcome.map(|()| *value)
    }

    /// Text with its baseline starting at (x, y).
    pub fn text(&mut self, fb: &mut FrameBuffer, x: i32, y: i32, text: &str, scale: f64, color: u32) {
        render::text(fb, &self.pen(), text, Point::new(x, y), scale, color);
    }

    /// Format into the bounded buffer and draw the result like [`Context::text`].
    pub fn printf(
        &mut self,
        fb: &mut FrameBuffer,
        x: i32,
        y: i32,
        scale: f64,
        color: u32,
        args: fmt::Arguments<'_>,
    ) -> Result<()> {
        let pen = Pen::new(&self.text, self.config.px_per_scale);
        let text = self.format.format(args)?;
        render::text(fb, &pen, text, Point::new(x, y), scale, color);
        Ok(())
    }

    /// Title bar of fixed height with a content panel below it.
    pub fn window(&mut self, fb: &mut FrameBuffer, x: i32, y: i32, width: i32, height: i32, title: &str) {
        let title_bar = Rect::new(x, y, width, TITLE_BAR_HEIGHT);
        let content = Rect::new(x, y + TITLE_BAR_HEIGHT, width, height - TITLE_BAR_HEIGHT);
        render::window(fb, &self.pen(), title_bar, content, title);
    }

    pub fn rect(&mut self, fb: &mut FrameBuffer, x: i32, y: i32, width: i32, height: i32, color: u32) {
        render::rect(fb, Rect::new(x, y, width, height), color);
    }

    /// Polyline of `values` scaled into the rectangle by their own min and max.
    pub fn sparkline(
        &mut self,
        fb: &mut FrameBuffer,
        values: &[f64],
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: u32,
    ) {
        let Some(range) = find_min_max(values) else {
            log::debug!("sparkline at ({}, {}) has no values", x, y);
            return;
        };
        if let Err(e) = range.span() {
            log::debug!("sparkline at ({}, {}) drawn flat: {}", x, y, e);
        }
        render::sparkline(fb, values, Rect::new(x, y, width, height), range, color);
    }

    /// Sparkline with its max, midpoint and min written along the left edge.
    pub fn sparkline_chart(
        &mut self,
        fb: &mut FrameBuffer,
        values: &[f64],
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<()> {
        let Some(range) = find_min_max(values) else {
            return Ok(());
        };
        self.sparkline(fb, values, x, y, width, height, SPARKLINE_COLOR);

        let labels = [
            (y + 8, range.max),
            (y + height / 2, range.midpoint()),
            (y + height - 5, range.min),
        ];
        for (label_y, v) in labels {
            self.printf(
                fb,
                x + 2,
                label_y,
                CHART_LABEL_SCALE,
                CHART_LABEL_COLOR,
                format_args!("{:.1}", v),
            )?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Rows
    // ------------------------------------------------------------------

    /// Open a row; row-scoped draws go left to right from (x, y).
    pub fn begin_row(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<()> {
        self.rows.push(Rect::new(x, y, width, height))?;
        log::debug!("row opened at ({}, {}), depth {}", x, y, self.rows.depth());
        Ok(())
    }

    pub fn end_row(&mut self) -> Result<()> {
        self.rows.pop()?;
        Ok(())
    }

    /// Text at the innermost row's cursor; the cursor then moves right.
    pub fn row_text(&mut self, fb: &mut FrameBuffer, text: &str, scale: f64, color: u32) -> Result<()> {
        let cursor = self.rows.current()?.cursor;
        let pen = self.pen();
        render::text(fb, &pen, text, Point::new(cursor.x, cursor.y), scale, color);

        let width = pen.measure(text, scale).width;
        let step = self.config.row_advance.step(width);
        self.rows.advance(step)
    }
}
