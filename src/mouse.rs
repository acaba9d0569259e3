//! Pointer state tracked across a frame
//!
//! The host forwards pointer events as they arrive; widget calls read the
//! resulting state during the frame. `just_released` is an edge: it is raised
//! by a button-up and cleared by the end-of-frame `update`.

use crate::geometry::Point;
use winit::event::{ElementState, MouseButton, WindowEvent};

/// Host-neutral pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEvent {
    Move(Point),
    Down(Point),
    Up(Point),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseState {
    pub position: Point,
    pub is_pressed: bool,
    pub just_released: bool,
}

impl MouseState {
    pub fn handle(&mut self, event: MouseEvent) {
        match event {
            MouseEvent::Move(p) => self.position = p,
            MouseEvent::Down(p) => {
                self.position = p;
                self.is_pressed = true;
            }
            MouseEvent::Up(p) => {
                self.position = p;
                self.is_pressed = false;
                self.just_released = true;
            }
        }
    }

    /// Drop the release edge at the end of a frame.
    pub fn end_frame(&mut self) {
        self.just_released = false;
    }
}

/// Map a winit window event to a pointer event.
///
/// winit reports button transitions without a position, so the last known
/// cursor position is used for them. Left and right buttons both count.
pub fn from_window_event(event: &WindowEvent<'_>, last: Point) -> Option<MouseEvent> {
    match event {
        WindowEvent::CursorMoved { position, .. } => {
            Some(MouseEvent::Move(Point::new(position.x as i32, position.y as i32)))
        }
        WindowEvent::MouseInput { state, button, .. } => match button {
            MouseButton::Left | MouseButton::Right => Some(match state {
                ElementState::Pressed => MouseEvent::Down(last),
                ElementState::Released => MouseEvent::Up(last),
            }),
            _ => None,
        },
        _ => None,
    }
}
