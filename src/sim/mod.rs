//! Grid simulation module
//!
//! All gameplay logic lives here:
//! - One cell per tick, no notion of wall-clock time
//! - Randomness only through the state's seeded RNG
//! - No rendering, audio or menu dependencies

pub mod autopilot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::choose_direction;
pub use spawn::{add_maze_obstacles, place_food};
pub use state::{
    Collision, Direction, Food, FoodType, GameMode, GameState, Point, SimRng, TickOutcome,
};
pub use tick::tick;
