//! Warnings the context logs when the host breaks the frame contract.

use log::{Level, LevelFilter, Log, Metadata, Record};
use pixui::{BlockText, Context, FrameBuffer, MouseEvent, Point, UiConfig};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Once;

struct EdgeWarnings {
    count: AtomicUsize,
}

impl Log for EdgeWarnings {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record<'_>) {
        if record.level() == Level::Warn && record.args().to_string().contains("release edge") {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn flush(&self) {}
}

static LOGGER: EdgeWarnings = EdgeWarnings {
    count: AtomicUsize::new(0),
};
static INSTALL: Once = Once::new();

fn edge_warnings() -> usize {
    INSTALL.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Warn);
    });
    LOGGER.count.load(Ordering::SeqCst)
}

fn click(ui: &mut Context<BlockText>, at: Point) {
    ui.handle_mouse(MouseEvent::Down(at));
    ui.handle_mouse(MouseEvent::Up(at));
}

// one test per binary keeps the global logger count free of races
#[test]
fn stale_release_edge_is_logged_once_per_edge() {
    let before = edge_warnings();
    let mut ui = Context::new(BlockText, UiConfig::default());
    let mut fb = FrameBuffer::new(200, 60);

    // well-behaved frames: two distinct widgets share one edge, then update()
    click(&mut ui, Point::new(5, 5));
    assert!(ui.button_sized(&mut fb, 0, 0, 50, 30, "a"));
    assert!(!ui.button_sized(&mut fb, 100, 0, 50, 30, "b"));
    ui.update();
    assert!(!ui.button_sized(&mut fb, 0, 0, 50, 30, "a"));
    ui.update();
    assert_eq!(edge_warnings(), before);

    // update() skipped: the same button keeps reporting the click
    click(&mut ui, Point::new(5, 5));
    for _ in 0..5 {
        assert!(ui.button_sized(&mut fb, 0, 0, 50, 30, "a"));
    }
    assert_eq!(edge_warnings(), before + 1);

    // a fresh release starts a new edge that may be logged again
    click(&mut ui, Point::new(5, 5));
    assert!(ui.button_sized(&mut fb, 0, 0, 50, 30, "a"));
    assert!(ui.button_sized(&mut fb, 0, 0, 50, 30, "a"));
    assert_eq!(edge_warnings(), before + 2);

    ui.update();
    click(&mut ui, Point::new(5, 5));
    assert!(ui.button_sized(&mut fb, 0, 0, 50, 30, "a"));
    assert_eq!(edge_warnings(), before + 2);
}
