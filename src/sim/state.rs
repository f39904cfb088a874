//! Game state and core simulation types
//!
//! Everything a renderer needs to draw the board lives here.

use std::collections::VecDeque;
use std::ops::{Deref, DerefMut};

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn;
use crate::consts::*;

/// A cell on the grid
pub type Point = IVec2;

/// Heading of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit displacement (screen coordinates, y grows downward)
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Right => IVec2::new(1, 0),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// True if turning from self to other would be a 180-degree turn
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Food variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FoodType {
    #[default]
    Regular,
    Booster,
}

impl FoodType {
    pub fn points(self) -> u64 {
        match self {
            FoodType::Regular => REGULAR_POINTS,
            FoodType::Booster => BOOSTER_POINTS,
        }
    }
}

/// The single piece of food on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub pos: Point,
    pub kind: FoodType,
}

/// Wall and collision policy of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Leaving the board is fatal
    #[default]
    Standard,
    /// Edges wrap around; the snake may cross itself on border cells
    NoWalls,
    /// Edges wrap around; obstacle clusters are scattered on the board
    Maze,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::Standard, GameMode::NoWalls, GameMode::Maze];

    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn from_ordinal(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Standard => "Standard",
            GameMode::NoWalls => "No Walls",
            GameMode::Maze => "Maze",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['_', '-', ' '], "").as_str() {
            "standard" => Some(GameMode::Standard),
            "nowalls" => Some(GameMode::NoWalls),
            "maze" => Some(GameMode::Maze),
            _ => None,
        }
    }

    /// Whether stepping off the board wraps instead of killing the snake
    pub fn wraps(self) -> bool {
        self != GameMode::Standard
    }
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    Wall,
    Obstacle,
    SelfBite,
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused or already over; nothing changed
    Skipped,
    /// Snake advanced one cell without eating
    Moved,
    /// Snake ate and grew
    Ate { kind: FoodType, points: u64 },
    /// Run ended this tick
    Died(Collision),
}

/// Complete engine state for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Snake cells, head first
    pub snake: VecDeque<Point>,
    /// Active food (None only when the board is full)
    pub food: Option<Food>,
    /// Obstacle cells (Maze runs only)
    pub obstacles: Vec<Point>,
    /// Raw score (before level multiplier)
    pub score: u64,
    pub is_game_over: bool,
    pub is_paused: bool,
    /// Collision policy
    pub mode: GameMode,
    /// Direction committed on the last tick
    pub direction: Direction,
    /// Direction to commit on the next tick
    pub pending_direction: Direction,
    /// Live ticks since reset
    pub animation_tick: u64,
    /// Remaining booster countdown ticks
    pub booster_ticks: u32,
    /// Seeded RNG, stored as its seed
    #[serde(rename = "seed")]
    pub(crate) rng: SimRng,
}

/// PCG stream that serializes as the seed it was created from.
/// A restored state restarts the stream at that seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub struct SimRng {
    seed: u64,
    rng: Pcg32,
}

impl SimRng {
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl From<u64> for SimRng {
    fn from(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl From<SimRng> for u64 {
    fn from(rng: SimRng) -> Self {
        rng.seed
    }
}

impl Deref for SimRng {
    type Target = Pcg32;

    fn deref(&self) -> &Pcg32 {
        &self.rng
    }
}

impl DerefMut for SimRng {
    fn deref_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }
}

impl GameState {
    /// Create a freshly reset board with the given seed
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            snake: VecDeque::with_capacity((GRID_SIZE * GRID_SIZE) as usize),
            food: None,
            obstacles: Vec::new(),
            score: 0,
            is_game_over: false,
            is_paused: false,
            mode: GameMode::Standard,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            animation_tick: 0,
            booster_ticks: 0,
            rng: SimRng::from(seed),
        };
        state.reset();
        state
    }

    /// Create a board seeded from entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed the RNG was created from
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn head(&self) -> Point {
        self.snake.front().copied().unwrap_or_default()
    }

    /// Put the snake back in the middle heading right and drop a new food.
    /// Obstacles survive only in Maze mode.
    pub fn reset(&mut self) {
        let start = IVec2::splat(GRID_SIZE / 2);
        self.snake.clear();
        self.snake
            .extend((0..INITIAL_SNAKE_LENGTH).map(|i| start - IVec2::new(i, 0)));

        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.score = 0;
        self.is_game_over = false;
        self.is_paused = false;
        self.animation_tick = 0;
        self.booster_ticks = 0;

        if self.mode != GameMode::Maze {
            self.obstacles.clear();
        }

        spawn::place_food(self);
    }

    /// Queue a turn for the next tick. Reversals are ignored.
    pub fn set_direction(&mut self, dir: Direction) {
        if !self.direction.is_opposite(dir) {
            self.pending_direction = dir;
        }
    }

    pub fn toggle_pause(&mut self) {
        self.is_paused = !self.is_paused;
    }

    /// Scatter `count` obstacle clusters (cumulative)
    pub fn add_maze_obstacles(&mut self, count: u32) {
        spawn::add_maze_obstacles(self, count);
    }

    pub fn clear_obstacles(&mut self) {
        self.obstacles.clear();
    }

    /// Advance one tick
    pub fn update(&mut self) -> TickOutcome {
        super::tick::tick(self)
    }

    pub fn is_snake(&self, p: Point) -> bool {
        self.snake.contains(&p)
    }

    pub fn is_obstacle(&self, p: Point) -> bool {
        self.obstacles.contains(&p)
    }

    /// Cell is free for food or obstacles
    pub fn is_free(&self, p: Point) -> bool {
        !self.is_snake(p) && !self.is_obstacle(p)
    }
}
