//! Discrete simulation tick
//!
//! Advances the snake exactly one cell. Callers decide how often.

use rand::Rng;

use super::spawn::place_food;
use super::state::{Collision, FoodType, GameMode, GameState, TickOutcome};
use crate::consts::*;
use crate::{in_bounds, on_border, wrap_point};

/// Advance the game state by one step
pub fn tick(state: &mut GameState) -> TickOutcome {
    if state.is_game_over || state.is_paused {
        return TickOutcome::Skipped;
    }

    state.animation_tick += 1;
    state.direction = state.pending_direction;

    let stepped = state.head() + state.direction.delta();
    let new_head = wrap_point(stepped);

    if state.mode == GameMode::Standard && !in_bounds(stepped) {
        return die(state, Collision::Wall);
    }

    if state.is_obstacle(new_head) {
        return die(state, Collision::Obstacle);
    }

    // No Walls lets the snake slip over itself on the outer ring
    let phases_through = state.mode == GameMode::NoWalls && on_border(new_head);
    if state.is_snake(new_head) && !phases_through {
        return die(state, Collision::SelfBite);
    }

    let eaten = state.food.filter(|f| f.pos == new_head);

    state.snake.push_front(new_head);
    let outcome = match eaten {
        Some(food) => {
            let points = food.kind.points();
            state.score += points;
            place_food(state);
            TickOutcome::Ate {
                kind: food.kind,
                points,
            }
        }
        None => {
            state.snake.pop_back();
            TickOutcome::Moved
        }
    };

    update_booster(state);

    outcome
}

fn die(state: &mut GameState, cause: Collision) -> TickOutcome {
    log::debug!(
        "Snake died ({:?}) at tick {} with score {}",
        cause,
        state.animation_tick,
        state.score
    );
    state.is_game_over = true;
    TickOutcome::Died(cause)
}

/// Count down an active booster, otherwise maybe upgrade regular food
fn update_booster(state: &mut GameState) {
    if state.booster_ticks > 0 {
        state.booster_ticks -= 1;
        return;
    }

    let roll = state.rng.random_range(0..100);
    if roll < BOOSTER_UPGRADE_PERCENT {
        if let Some(food) = state.food.as_mut() {
            if food.kind == FoodType::Regular {
                food.kind = FoodType::Booster;
                state.booster_ticks = BOOSTER_TICKS;
            }
        }
    }
}
