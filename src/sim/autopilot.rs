//! Attract-mode pilot
//!
//! Greedy food chaser used for demo runs. It never picks a move that is
//! fatal on the very next tick, but makes no attempt to avoid dead ends.

use super::state::{Direction, GameMode, GameState, Point};
use crate::consts::GRID_SIZE;
use crate::{in_bounds, on_border, wrap_point};

/// Pick the next heading, or `None` if every option is fatal
pub fn choose_direction(state: &GameState) -> Option<Direction> {
    let target = state.food.map(|f| f.pos);
    let current = state.direction;

    Direction::ALL
        .into_iter()
        .filter(|&d| !current.is_opposite(d))
        .filter(|&d| !is_fatal(state, d))
        .min_by_key(|&d| {
            let next = wrap_point(state.head() + d.delta());
            let dist = target.map_or(0, |t| distance(state.mode, next, t));
            // Prefer going straight on ties
            (dist, d != current)
        })
}

fn is_fatal(state: &GameState, dir: Direction) -> bool {
    let stepped = state.head() + dir.delta();
    if state.mode == GameMode::Standard && !in_bounds(stepped) {
        return true;
    }
    let next = wrap_point(stepped);
    if state.is_obstacle(next) {
        return true;
    }
    // The tail still counts: collisions are checked before it moves
    state.is_snake(next) && !(state.mode == GameMode::NoWalls && on_border(next))
}

fn distance(mode: GameMode, a: Point, b: Point) -> i32 {
    let d = (a - b).abs();
    if mode.wraps() {
        d.x.min(GRID_SIZE - d.x) + d.y.min(GRID_SIZE - d.y)
    } else {
        d.x + d.y
    }
}
