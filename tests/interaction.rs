//! Frame-by-frame interaction tests driven through the public API

use approx::assert_relative_eq;
use pixui::{BlockText, Context, FrameBuffer, MouseEvent, Point, UiConfig, UiError};

const BUTTON: (i32, i32, i32, i32) = (20, 20, 60, 30);

fn ui() -> Context<BlockText> {
    Context::new(BlockText, UiConfig::default())
}

/// One frame containing a single sized button, with `events` delivered first.
fn button_frame(ui: &mut Context<BlockText>, fb: &mut FrameBuffer, events: &[MouseEvent]) -> bool {
    for &e in events {
        ui.handle_mouse(e);
    }
    let (x, y, w, h) = BUTTON;
    let clicked = ui.button_sized(fb, x, y, w, h, "Apply");
    ui.update();
    clicked
}

#[test]
fn button_outside_never_clicks() {
    let mut ui = ui();
    let mut fb = FrameBuffer::new(200, 100);
    let outside = [
        Point::new(19, 30),
        Point::new(80, 30),
        Point::new(50, 19),
        Point::new(50, 50),
        Point::new(0, 0),
        Point::new(150, 90),
    ];
    for p in outside {
        assert!(!button_frame(&mut ui, &mut fb, &[MouseEvent::Move(p)]));
        assert!(!button_frame(&mut ui, &mut fb, &[MouseEvent::Down(p)]));
        assert!(!button_frame(&mut ui, &mut fb, &[MouseEvent::Up(p)]));
        assert!(!button_frame(
            &mut ui,
            &mut fb,
            &[MouseEvent::Down(p), MouseEvent::Up(p)]
        ));
    }
}

#[test]
fn button_clicks_only_on_the_release_frame() {
    let mut ui = ui();
    let mut fb = FrameBuffer::new(200, 100);
    let inside = Point::new(40, 30);

    assert!(!button_frame(&mut ui, &mut fb, &[MouseEvent::Move(inside)]));
    assert!(!button_frame(&mut ui, &mut fb, &[MouseEvent::Down(inside)]));
    assert!(!button_frame(&mut ui, &mut fb, &[]));
    assert!(button_frame(&mut ui, &mut fb, &[MouseEvent::Up(inside)]));
    assert!(!button_frame(&mut ui, &mut fb, &[]));
    assert!(!button_frame(&mut ui, &mut fb, &[MouseEvent::Move(inside)]));
}

#[test]
fn dragging_out_before_release_cancels_the_click() {
    let mut ui = ui();
    let mut fb = FrameBuffer::new(200, 100);

    assert!(!button_frame(&mut ui, &mut fb, &[MouseEvent::Down(Point::new(40, 30))]));
    assert!(!button_frame(&mut ui, &mut fb, &[MouseEvent::Move(Point::new(120, 30))]));
    assert!(!button_frame(&mut ui, &mut fb, &[MouseEvent::Up(Point::new(120, 30))]));
    // coming back afterwards does not resurrect it
    assert!(!button_frame(&mut ui, &mut fb, &[MouseEvent::Move(Point::new(40, 30))]));
}

#[test]
fn button_draws_every_frame_in_its_state() {
    let mut ui = ui();
    let mut fb = FrameBuffer::new(200, 100);
    let (x, y, ..) = BUTTON;
    let fill = |fb: &FrameBuffer| fb.pixel(x + 3, y + 3);

    button_frame(&mut ui, &mut fb, &[MouseEvent::Move(Point::new(0, 0))]);
    assert_eq!(fill(&fb), Some(0x424242));
    button_frame(&mut ui, &mut fb, &[MouseEvent::Move(Point::new(40, 30))]);
    assert_eq!(fill(&fb), Some(0x525252));
    button_frame(&mut ui, &mut fb, &[MouseEvent::Down(Point::new(40, 30))]);
    assert_eq!(fill(&fb), Some(0x323232));
    button_frame(&mut ui, &mut fb, &[MouseEvent::Up(Point::new(40, 30))]);
    assert_eq!(fill(&fb), Some(0x525252));
}

#[test]
fn checkbox_toggles_once_per_completed_click() {
    let mut ui = ui();
    let mut fb = FrameBuffer::new(200, 60);
    let mut checked = false;
    let mut frame = |ui: &mut Context<BlockText>, events: &[MouseEvent], checked: &mut bool| {
        for &e in events {
            ui.handle_mouse(e);
        }
        let r = ui.checkbox(&mut fb, 10, 10, "Show grid", checked, 0xCECECE);
        ui.update();
        r
    };

    // hovering, even for many frames, changes nothing
    for _ in 0..5 {
        assert!(!frame(&mut ui, &[MouseEvent::Move(Point::new(15, 15))], &mut checked));
    }
    assert!(!frame(&mut ui, &[MouseEvent::Down(Point::new(15, 15))], &mut checked));
    assert!(frame(&mut ui, &[MouseEvent::Up(Point::new(15, 15))], &mut checked));
    assert!(checked);
    assert!(frame(&mut ui, &[], &mut checked));

    // the label is part of the hit area
    assert!(!frame(
        &mut ui,
        &[MouseEvent::Down(Point::new(60, 15)), MouseEvent::Up(Point::new(60, 15))],
        &mut checked
    ));
    assert!(!checked);

    // release outside the hit area
    assert!(!frame(
        &mut ui,
        &[MouseEvent::Down(Point::new(15, 15)), MouseEvent::Up(Point::new(15, 40))],
        &mut checked
    ));
    assert!(!checked);
}

#[test]
fn checked_box_shows_its_mark() {
    let mut ui = ui();
    let mut fb = FrameBuffer::new(120, 40);
    let mut checked = true;
    ui.checkbox(&mut fb, 10, 10, "On", &mut checked, 0xFFFFFF);
    assert_eq!(fb.pixel(17, 17), Some(0x75BFFF));

    let mut fb = FrameBuffer::new(120, 40);
    let mut checked = false;
    ui.checkbox(&mut fb, 10, 10, "On", &mut checked, 0xFFFFFF);
    assert_eq!(fb.pixel(17, 17), Some(0x292929));
}

fn click(ui: &mut Context<BlockText>, p: Point) {
    ui.handle_mouse(MouseEvent::Down(p));
    ui.handle_mouse(MouseEvent::Up(p));
}

#[test]
fn integer_counter_steps_by_one_click_at_a_time() {
    let mut ui = ui();
    let mut fb = FrameBuffer::new(200, 40);
    let mut v = 5;

    // "+" spans x in [70, 92)
    click(&mut ui, Point::new(80, 10));
    assert_eq!(ui.counter(&mut fb, 0, 0, &mut v, 1, "%d"), Ok(6));
    assert_eq!(v, 6);
    ui.update();

    // no new click, no change
    assert_eq!(ui.counter(&mut fb, 0, 0, &mut v, 1, "%d"), Ok(6));
    ui.update();

    // "-" spans x in [0, 22)
    click(&mut ui, Point::new(5, 10));
    assert_eq!(ui.counter(&mut fb, 0, 0, &mut v, 3, "%d"), Ok(3));
    ui.update();

    // the readout itself is not a button
    click(&mut ui, Point::new(40, 10));
    assert_eq!(ui.counter(&mut fb, 0, 0, &mut v, 3, "%d"), Ok(3));
    ui.update();
}

#[test]
fn float_counter_shares_layout_and_behaviour() {
    let mut ui = ui();
    let mut fb = FrameBuffer::new(200, 40);
    let mut v = 0.5f64;

    click(&mut ui, Point::new(80, 10));
    let out = ui.counter(&mut fb, 0, 0, &mut v, 0.25, "%.2f").unwrap();
    assert_relative_eq!(out, 0.75);
    ui.update();

    click(&mut ui, Point::new(5, 10));
    ui.counter(&mut fb, 0, 0, &mut v, 0.25, "%.2f").unwrap();
    ui.update();
    click(&mut ui, Point::new(5, 10));
    ui.counter(&mut fb, 0, 0, &mut v, 0.25, "%.2f").unwrap();
    assert_relative_eq!(v, 0.25);
}

#[test]
fn oversized_readout_is_a_format_overflow() {
    let config = UiConfig {
        format_capacity: 4,
        ..UiConfig::default()
    };
    let mut ui = Context::new(BlockText, config);
    let mut fb = FrameBuffer::new(200, 40);
    let mut v = 123_456;

    let err = ui.counter(&mut fb, 0, 0, &mut v, 1, "%d").unwrap_err();
    assert_eq!(err, UiError::FormatOverflow { needed: 6, capacity: 4 });
    // the readout box is still drawn, only empty
    assert_eq!(fb.pixel(40, 10), Some(0x292929));

    let err = ui
        .printf(&mut fb, 0, 30, 0.4, 0xFFFFFF, format_args!("{}", "long text"))
        .unwrap_err();
    assert_eq!(err, UiError::FormatOverflow { needed: 9, capacity: 4 });
}

#[test]
fn flat_sparkline_sits_mid_band() {
    let mut ui = ui();
    let mut fb = FrameBuffer::new(100, 50);
    // band is y in [0, 35], its middle 17
    ui.sparkline(&mut fb, &[1.0, 1.0, 1.0], 0, 0, 90, 40, 0x00FF00);

    for x in 0..=60 {
        assert_eq!(fb.pixel(x, 17), Some(0x00FF00), "x = {x}");
    }
    assert!((0..100).all(|x| fb.pixel(x, 16) == Some(0)));
    assert!((0..100).all(|x| fb.pixel(x, 18) == Some(0)));
}

#[test]
fn sparkline_reaches_top_and_bottom_of_band() {
    let mut ui = ui();
    let mut fb = FrameBuffer::new(100, 50);
    ui.sparkline(&mut fb, &[0.0, 10.0], 0, 0, 100, 45, 0xFF0000);
    assert_eq!(fb.pixel(0, 40), Some(0xFF0000));
    assert_eq!(fb.pixel(50, 0), Some(0xFF0000));
}

#[test]
fn empty_sparkline_draws_nothing() {
    let mut ui = ui();
    let mut fb = FrameBuffer::new(50, 50);
    ui.sparkline(&mut fb, &[], 0, 0, 50, 50, 0xFF0000);
    assert!(ui.sparkline_chart(&mut fb, &[], 0, 0, 50, 50).is_ok());
    assert!(fb.pixels.iter().all(|&p| p == 0));
}

#[test]
fn sparkline_chart_labels_the_range() {
    let mut ui = ui();
    let mut fb = FrameBuffer::new(200, 100);
    ui.sparkline_chart(&mut fb, &[2.0, 8.0, 5.0], 0, 0, 200, 100).unwrap();
    // labels are grey cells at x = 2 just above each baseline
    assert_eq!(fb.pixel(2, 7), Some(0x717171));
    assert_eq!(fb.pixel(2, 49), Some(0x717171));
    assert_eq!(fb.pixel(2, 94), Some(0x717171));
}

#[test]
fn end_row_without_begin_is_underflow() {
    let mut ui = ui();
    assert_eq!(ui.end_row(), Err(UiError::StackUnderflow));

    ui.begin_row(0, 0, 100, 20).unwrap();
    assert_eq!(ui.end_row(), Ok(()));
    assert_eq!(ui.end_row(), Err(UiError::StackUnderflow));
    assert_eq!(ui.row_depth(), 0);
}

#[test]
fn rows_past_capacity_overflow() {
    let config = UiConfig {
        row_capacity: 3,
        ..UiConfig::default()
    };
    let mut ui = Context::new(BlockText, config);
    for _ in 0..3 {
        ui.begin_row(0, 0, 100, 20).unwrap();
    }
    assert_eq!(
        ui.begin_row(0, 0, 100, 20),
        Err(UiError::StackOverflow { capacity: 3 })
    );
    assert_eq!(ui.row_depth(), 3);
}

#[test]
fn measured_row_text_packs_elements() {
    let mut ui = ui();
    let mut fb = FrameBuffer::new(200, 40);
    ui.begin_row(10, 30, 180, 20).unwrap();
    // "ab" is two 7px cells, then 4px spacing: "c" starts at 10 + 14 + 4
    ui.row_text(&mut fb, "ab", 0.4, 0xFFFFFF).unwrap();
    ui.row_text(&mut fb, "c", 0.4, 0xFFFFFF).unwrap();
    ui.end_row().unwrap();

    assert_eq!(fb.pixel(10, 25), Some(0xFFFFFF));
    assert_eq!(fb.pixel(28, 25), Some(0xFFFFFF));
    assert_eq!(fb.pixel(27, 25), Some(0));
}

#[test]
fn window_and_rect_are_pure_drawing() {
    let mut ui = ui();
    let mut fb = FrameBuffer::new(120, 100);
    ui.handle_mouse(MouseEvent::Down(Point::new(50, 50)));
    ui.handle_mouse(MouseEvent::Up(Point::new(50, 50)));
    ui.window(&mut fb, 0, 0, 120, 80, "Stats");
    ui.rect(&mut fb, 10, 85, 20, 10, 0x123456);

    assert_eq!(fb.pixel(60, 50), Some(0x313131));
    assert_eq!(fb.pixel(15, 90), Some(0x123456));
    assert!(ui.mouse().just_released);
}
