//! Input events coming from the platform shell

use glam::Vec2;

use crate::sim::Direction;

/// Drags shorter than this are treated as jitter
pub const DRAG_DEADZONE: f32 = 0.5;

/// A discrete input action
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// D-pad press
    Direction(Direction),
    /// Center key (select in menus, pause in play)
    Select,
    /// "C" key (back / quit)
    Back,
    /// Tap on a menu row
    Tap(usize),
    /// Swipe on the board (screen coordinates, y grows downward)
    Drag(Vec2),
}

/// Resolve a swipe to its dominant axis. Ties go to the vertical axis.
pub fn drag_direction(delta: Vec2) -> Option<Direction> {
    if delta.length() < DRAG_DEADZONE {
        return None;
    }
    let dir = if delta.x.abs() > delta.y.abs() {
        if delta.x > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if delta.y > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    };
    Some(dir)
}
