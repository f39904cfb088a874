//! Randomized placement of food and maze obstacles

use glam::IVec2;
use rand::Rng;

use super::state::{Food, FoodType, GameState, Point};
use crate::consts::*;

/// Drop a new food on a random free cell.
///
/// Picks uniformly among cells not covered by the snake or an obstacle, so it
/// always terminates. A full board leaves no food at all.
pub fn place_food(state: &mut GameState) {
    let free: Vec<Point> = (0..GRID_SIZE)
        .flat_map(|y| (0..GRID_SIZE).map(move |x| IVec2::new(x, y)))
        .filter(|&p| state.is_free(p))
        .collect();

    if free.is_empty() {
        log::warn!("No free cell left for food");
        state.food = None;
        return;
    }

    let pos = free[state.rng.random_range(0..free.len())];
    let kind = if state.rng.random_range(0..100) < BOOSTER_SPAWN_PERCENT {
        FoodType::Booster
    } else {
        FoodType::Regular
    };

    if kind == FoodType::Booster {
        state.booster_ticks = BOOSTER_TICKS;
    }
    state.food = Some(Food { pos, kind });
}

/// Scatter `count` clusters of 3-5 obstacles around random interior points.
///
/// Cells on the snake or already blocked are skipped, so a cluster may come
/// out smaller. Food buried under a new obstacle is moved.
pub fn add_maze_obstacles(state: &mut GameState, count: u32) {
    let lo = 1;
    let hi = GRID_SIZE - 2;
    let before = state.obstacles.len();

    for _ in 0..count {
        let base = IVec2::new(
            state.rng.random_range(lo..=hi),
            state.rng.random_range(lo..=hi),
        );
        let cluster_size = state.rng.random_range(3..=5);

        for _ in 0..cluster_size {
            let offset = IVec2::new(
                state.rng.random_range(-1..=1),
                state.rng.random_range(-1..=1),
            );
            let cell = (base + offset).clamp(IVec2::splat(lo), IVec2::splat(hi));

            if !state.is_snake(cell) && !state.is_obstacle(cell) {
                state.obstacles.push(cell);
            }
        }
    }

    log::debug!(
        "Added {} obstacle cells in {} clusters",
        state.obstacles.len() - before,
        count
    );

    if state.food.is_some_and(|f| state.is_obstacle(f.pos)) {
        place_food(state);
    }
}
