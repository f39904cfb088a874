//! Retro Snake - a handset-style snake game core
//!
//! Core modules:
//! - `sim`: Grid simulation (movement, collisions, food, obstacles)
//! - `menu`: Screen/menu state machine
//! - `session`: Orchestrator tying the simulation to the menu and the clock
//! - `settings`: Levels and tunable configuration
//! - `input` / `audio`: Event types exchanged with the platform shell

pub mod audio;
pub mod input;
pub mod menu;
pub mod session;
pub mod settings;
pub mod sim;

pub use menu::{Menu, Screen};
pub use session::{Session, Snapshot};
pub use settings::{GameLevel, Settings};

use glam::IVec2;

/// Game configuration constants
pub mod consts {
    /// Side length of the square playfield
    pub const GRID_SIZE: i32 = 20;
    /// Segments in a freshly reset snake
    pub const INITIAL_SNAKE_LENGTH: i32 = 4;

    /// Tick interval at level 1 with zero score (milliseconds)
    pub const BASE_TICK_MS: u64 = 300;
    /// Score-based speedup never goes below this fraction of the level rate
    pub const MIN_SPEED_FACTOR: f32 = 0.5;
    /// Speedup per point of raw score
    pub const SPEEDUP_PER_POINT: f32 = 0.01;
    /// Maximum ticks per `advance` call to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Points for food
    pub const REGULAR_POINTS: u64 = 1;
    pub const BOOSTER_POINTS: u64 = 3;
    /// Ticks a booster countdown runs for
    pub const BOOSTER_TICKS: u32 = 50;
    /// Percent chance a new food spawns as a booster
    pub const BOOSTER_SPAWN_PERCENT: u32 = 10;
    /// Percent chance per tick that regular food turns into a booster
    pub const BOOSTER_UPGRADE_PERCENT: u32 = 2;
}

/// Wrap a grid coordinate onto the torus [0, GRID_SIZE)²
#[inline]
pub fn wrap_point(p: IVec2) -> IVec2 {
    p.rem_euclid(IVec2::splat(consts::GRID_SIZE))
}

/// True if the point lies inside the playfield
#[inline]
pub fn in_bounds(p: IVec2) -> bool {
    (0..consts::GRID_SIZE).contains(&p.x) && (0..consts::GRID_SIZE).contains(&p.y)
}

/// True if the point lies on the outermost ring of cells
#[inline]
pub fn on_border(p: IVec2) -> bool {
    let last = consts::GRID_SIZE - 1;
    p.x == 0 || p.y == 0 || p.x == last || p.y == last
}
