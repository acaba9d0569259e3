//! pixui: immediate-mode debug widgets for software framebuffers
//!
//! Buttons, checkboxes, counters, windows and sparklines drawn straight onto
//! a `0x00RRGGBB` pixel buffer every frame. There is no widget tree: each call
//! draws, hit-tests against the current pointer and returns what happened.
//!
//! ```no_run
//! use pixui::{BlockText, Context, FrameBuffer, UiConfig};
//!
//! let mut ui = Context::new(BlockText, UiConfig::default());
//! let mut fb = FrameBuffer::new(320, 240);
//! let mut enabled = false;
//! let mut level = 3;
//!
//! // once per frame, after forwarding the window's pointer events:
//! ui.window(&mut fb, 10, 10, 200, 120, "Settings");
//! if ui.button(&mut fb, 20, 40, "Reset") {
//!     level = 0;
//! }
//! ui.checkbox(&mut fb, 20, 80, "Enabled", &mut enabled, 0xCECECE);
//! ui.counter(&mut fb, 100, 80, &mut level, 1, "%d")?;
//! ui.update();
//! # Ok::<(), pixui::UiError>(())
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod framebuffer;
pub mod geometry;
pub mod layout;
pub mod mouse;
pub mod render;
pub mod text;
pub mod ui;
pub mod util;

pub use config::{ConfigError, UiConfig};
pub use error::{Result, UiError};
pub use framebuffer::FrameBuffer;
pub use geometry::{Point, Rect};
pub use layout::RowAdvance;
pub use mouse::{MouseEvent, MouseState};
pub use render::VisualState;
pub use text::{BlockText, FontText, TextEngine, TextSize};
pub use ui::{Context, CounterValue};
