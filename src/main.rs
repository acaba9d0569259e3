//! pixui demo - every widget on one software-rendered window
//!
//! Usage: pixui-demo [config.toml]
//! Without an argument, `pixui.toml` in the working directory is used when it
//! exists, otherwise built-in defaults.

use pixui::{BlockText, Context, FontText, FrameBuffer, TextEngine, UiConfig};
use serde::Deserialize;
use softbuffer::{Context as SurfaceContext, Surface};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::time::Instant;
use winit::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

const DEFAULT_CONFIG: &str = "pixui.toml";
const BACKGROUND: u32 = 0x202020;
const MAX_SAMPLES: usize = 120;

#[derive(Debug, Deserialize)]
#[serde(default)]
struct WindowConfig {
    width: u32,
    height: u32,
    title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 420,
            title: "pixui demo".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DemoConfig {
    window: WindowConfig,
    /// TrueType font for labels; block glyphs when absent
    font_path: Option<PathBuf>,
    ui: UiConfig,
}

impl DemoConfig {
    fn load(path: &Path) -> Result<Self, pixui::ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| pixui::ConfigError::Parse(e.to_string()))
    }
}

/// Caller-owned widget values
struct DemoState {
    show_chart: bool,
    frozen: bool,
    count: i32,
    gain: f64,
    samples: Vec<f64>,
    clicks: u32,
    started: Instant,
}

impl DemoState {
    fn new() -> Self {
        Self {
            show_chart: true,
            frozen: false,
            count: 5,
            gain: 1.0,
            samples: Vec::with_capacity(MAX_SAMPLES),
            clicks: 0,
            started: Instant::now(),
        }
    }

    fn tick(&mut self) {
        if self.frozen {
            return;
        }
        let t = self.started.elapsed().as_secs_f64();
        if self.samples.len() == MAX_SAMPLES {
            self.samples.remove(0);
        }
        self.samples
            .push(self.gain * (t * 2.0).sin() + 0.3 * (t * 7.0 + self.count as f64).sin());
    }
}

fn text_engine(font_path: Option<&Path>) -> Box<dyn TextEngine> {
    let Some(path) = font_path else {
        log::info!("no font_path configured, using block glyphs");
        return Box::new(BlockText);
    };
    let loaded = std::fs::read(path)
        .map_err(|e| e.to_string())
        .and_then(|bytes| FontText::from_bytes(&bytes).map_err(|e| e.to_string()));
    match loaded {
        Ok(font) => {
            log::info!("loaded font {}", path.display());
            Box::new(font)
        }
        Err(e) => {
            log::warn!("font {} unusable ({}), using block glyphs", path.display(), e);
            Box::new(BlockText)
        }
    }
}

fn draw_frame(ui: &mut Context<Box<dyn TextEngine>>, fb: &mut FrameBuffer, state: &mut DemoState) {
    fb.clear(BACKGROUND);

    ui.window(fb, 10, 10, 300, 230, "Controls");
    if ui.button(fb, 20, 40, "Reset") {
        state.count = 5;
        state.gain = 1.0;
        state.samples.clear();
        state.clicks += 1;
    }
    if ui.button_sized(fb, 100, 40, 90, 27, if state.frozen { "Resume" } else { "Freeze" }) {
        state.frozen = !state.frozen;
    }

    ui.checkbox(fb, 20, 85, "Show chart", &mut state.show_chart, 0xCECECE);

    ui.text(fb, 20, 125, "Phase", 0.4, 0xCECECE);
    if let Err(e) = ui.counter(fb, 90, 110, &mut state.count, 1, "%d") {
        log::warn!("phase counter: {}", e);
    }
    ui.text(fb, 20, 160, "Gain", 0.4, 0xCECECE);
    if let Err(e) = ui.counter(fb, 90, 145, &mut state.gain, 0.1, "%.1f") {
        log::warn!("gain counter: {}", e);
    }

    let mouse = *ui.mouse();
    if let Err(e) = ui.printf(
        fb,
        20,
        200,
        0.4,
        0x9A9A9A,
        format_args!(
            "mouse ({}, {}) {} resets {}",
            mouse.position.x,
            mouse.position.y,
            if mouse.is_pressed { "down" } else { "up" },
            state.clicks
        ),
    ) {
        log::warn!("status line: {}", e);
    }

    if state.show_chart {
        ui.window(fb, 320, 10, 300, 150, "Signal");
        if let Err(e) = ui.sparkline_chart(fb, &state.samples, 325, 35, 290, 120) {
            log::warn!("chart labels: {}", e);
        }
    }

    let row = ui
        .begin_row(20, 280, 600, 20)
        .and_then(|()| ui.row_text(fb, "pixui", 0.4, 0x75BFFF))
        .and_then(|()| ui.row_text(fb, "immediate-mode", 0.4, 0xCECECE))
        .and_then(|()| ui.row_text(fb, "widgets", 0.4, 0xCECECE))
        .and_then(|()| ui.end_row());
    if let Err(e) = row {
        log::warn!("footer row: {}", e);
    }
}

fn main() {
    env_logger::init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let config = if config_path.exists() {
        match DemoConfig::load(&config_path) {
            Ok(c) => c,
            Err(e) => {
                log::error!("failed to load {}: {}", config_path.display(), e);
                std::process::exit(1);
            }
        }
    } else {
        log::info!("{} not found, using defaults", config_path.display());
        DemoConfig::default()
    };

    let mut ui = Context::new(text_engine(config.font_path.as_deref()), config.ui.clone());
    let mut state = DemoState::new();

    // Create window and graphics context
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_inner_size(PhysicalSize::new(config.window.width, config.window.height))
        .with_title(&config.window.title)
        .build(&event_loop)
        .expect("Failed to create window");
    ui.init(window.id());

    let context = unsafe { SurfaceContext::new(&window) }.expect("Failed to create softbuffer context");
    let mut surface = unsafe { Surface::new(&context, &window) }.expect("Failed to create surface");

    let size = window.inner_size();
    surface
        .resize(
            NonZeroU32::new(size.width.max(1)).expect("width nonzero"),
            NonZeroU32::new(size.height.max(1)).expect("height nonzero"),
        )
        .expect("Failed to size surface");
    let mut fb = FrameBuffer::new(size.width.max(1) as usize, size.height.max(1) as usize);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        if ui.handle_event(&event) {
            return;
        }

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    let width = NonZeroU32::new(new_size.width.max(1)).expect("width nonzero");
                    let height = NonZeroU32::new(new_size.height.max(1)).expect("height nonzero");
                    surface
                        .resize(width, height)
                        .expect("Failed to resize surface");
                    fb = FrameBuffer::new(width.get() as usize, height.get() as usize);
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                state.tick();
                draw_frame(&mut ui, &mut fb, &mut state);
                ui.update();

                // Present framebuffer
                let mut buffer = surface.buffer_mut().expect("buffer mut");
                debug_assert_eq!(buffer.len(), fb.pixels.len());
                buffer.copy_from_slice(&fb.pixels);
                buffer.present().expect("present");
            }
            _ => {}
        }
    });
}
