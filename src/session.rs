//! Session orchestration
//!
//! Owns the simulation and the menu, routes input to whichever one is
//! active, and turns elapsed time into ticks. Single-threaded: a driver
//! calls `handle_input` and `advance` from one loop.

use std::time::Duration;

use serde::Serialize;

use crate::audio::SoundEffect;
use crate::consts::*;
use crate::input::{InputEvent, drag_direction};
use crate::menu::{Menu, Screen};
use crate::settings::{GameLevel, Settings};
use crate::sim::{Direction, Food, GameMode, GameState, Point, TickOutcome};

/// Read-only view of everything a renderer draws
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub screen: Screen,
    pub options: Vec<&'static str>,
    pub selected: usize,
    pub level: GameLevel,
    pub mode: GameMode,
    pub high_score: u64,
    pub snake: Vec<Point>,
    pub food: Option<Food>,
    pub obstacles: Vec<Point>,
    pub score: u64,
    pub final_score: u64,
    pub is_game_over: bool,
    pub is_paused: bool,
    pub direction: Direction,
    pub animation_tick: u64,
}

/// One play session: menus, the current run and the tick clock
pub struct Session {
    game: GameState,
    menu: Menu,
    settings: Settings,
    /// Level the current run was started at
    run_level: GameLevel,
    /// A run has been started and can be continued
    run_started: bool,
    accumulator: Duration,
    sounds: Vec<SoundEffect>,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        let game = match settings.seed {
            Some(seed) => GameState::new(seed),
            None => GameState::from_entropy(),
        };
        log::info!("Session started (seed {})", game.seed());

        Self {
            game,
            menu: Menu::new(settings.level, settings.mode),
            run_level: settings.level,
            settings,
            run_started: false,
            accumulator: Duration::ZERO,
            sounds: vec![SoundEffect::Startup],
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn screen(&self) -> Screen {
        self.menu.screen
    }

    pub fn run_level(&self) -> GameLevel {
        self.run_level
    }

    /// Current score scaled by the run's level
    pub fn final_score(&self) -> u64 {
        self.run_level.final_score(self.game.score)
    }

    /// Time between ticks for the current level and score
    pub fn tick_interval(&self) -> Duration {
        let level = self.run_level.speed_multiplier();
        let speedup = (1.0 - self.game.score as f32 * SPEEDUP_PER_POINT).max(MIN_SPEED_FACTOR);
        let ms = (self.settings.base_tick_ms as f32 * level * speedup) as u64;
        Duration::from_millis(ms.max(1))
    }

    /// Route one input action to the engine or the menu
    pub fn handle_input(&mut self, event: InputEvent) {
        self.sounds.push(SoundEffect::Click);
        let from = self.menu.screen;

        match event {
            InputEvent::Direction(dir) if from == Screen::Playing => self.game.set_direction(dir),
            InputEvent::Direction(Direction::Up) => self.menu.navigate(true),
            InputEvent::Direction(Direction::Down) => self.menu.navigate(false),
            InputEvent::Direction(_) => {}
            InputEvent::Drag(delta) => {
                if from == Screen::Playing {
                    if let Some(dir) = drag_direction(delta) {
                        self.game.set_direction(dir);
                    }
                }
            }
            InputEvent::Select => self.menu.select(),
            InputEvent::Back => self.menu.back(),
            InputEvent::Tap(index) => {
                if from.is_menu() {
                    self.menu.select_index(index);
                }
            }
        }

        self.apply_transition(from);
    }

    /// Feed elapsed wall time; runs as many ticks as are due.
    /// Returns the number of ticks run.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if self.menu.screen != Screen::Playing {
            self.accumulator = Duration::ZERO;
            return 0;
        }

        self.accumulator += dt;
        let mut substeps = 0;
        while self.menu.screen == Screen::Playing && substeps < MAX_SUBSTEPS {
            let interval = self.tick_interval();
            if self.accumulator < interval {
                break;
            }
            self.accumulator -= interval;
            self.tick();
            substeps += 1;
        }

        // Drop the backlog instead of fast-forwarding through it later
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(self.tick_interval());
        }

        substeps
    }

    /// Run one simulation tick and react to it. Only `Playing` ticks.
    fn tick(&mut self) -> TickOutcome {
        if self.menu.screen != Screen::Playing {
            return TickOutcome::Skipped;
        }
        let outcome = self.game.update();

        match outcome {
            TickOutcome::Moved | TickOutcome::Ate { .. } => {
                let every = self.settings.move_cue_every;
                if every > 0 && self.game.animation_tick % every == 0 {
                    self.sounds.push(SoundEffect::Move);
                }
                if let TickOutcome::Ate { kind, points } = outcome {
                    log::debug!("Ate {:?} (+{}), score {}", kind, points, self.game.score);
                    self.sounds.push(SoundEffect::EatFood);
                    self.record_score();
                }
            }
            TickOutcome::Died(cause) => {
                log::info!(
                    "Game over ({:?}): score {} (final {})",
                    cause,
                    self.game.score,
                    self.final_score()
                );
                self.sounds.push(SoundEffect::GameOver);
                self.record_score();
                self.menu.show_game_over();
                self.accumulator = Duration::ZERO;
            }
            TickOutcome::Skipped => {}
        }

        outcome
    }

    /// Take the cues queued since the last call
    pub fn drain_sounds(&mut self) -> Vec<SoundEffect> {
        std::mem::take(&mut self.sounds)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            screen: self.menu.screen,
            options: self.menu.options(),
            selected: self.menu.selected,
            level: self.menu.level,
            mode: self.menu.mode,
            high_score: self.menu.high_score,
            snake: self.game.snake.iter().copied().collect(),
            food: self.game.food,
            obstacles: self.game.obstacles.clone(),
            score: self.game.score,
            final_score: self.final_score(),
            is_game_over: self.game.is_game_over,
            is_paused: self.game.is_paused,
            direction: self.game.direction,
            animation_tick: self.game.animation_tick,
        }
    }

    fn record_score(&mut self) {
        let score = self.final_score();
        if self.menu.record_score(score) {
            log::info!("New high score: {}", score);
        }
    }

    /// Keep the engine in step with a screen change
    fn apply_transition(&mut self, from: Screen) {
        let to = self.menu.screen;
        if from == to {
            return;
        }
        log::info!("Screen {:?} -> {:?}", from, to);

        match (from, to) {
            (Screen::MainMenu, Screen::Playing) => {
                if self.menu.has_saved_game && self.can_resume() {
                    log::info!("Continuing run at tick {}", self.game.animation_tick);
                    self.game.is_paused = false;
                } else {
                    self.start_run();
                }
                self.menu.has_saved_game = false;
            }
            (Screen::GameOver, Screen::Playing) => self.start_run(),
            (Screen::Paused, Screen::Playing) => self.game.is_paused = false,
            (Screen::Playing, Screen::Paused) => self.game.is_paused = true,
            _ => {}
        }

        if to != Screen::Playing {
            self.accumulator = Duration::ZERO;
        }
    }

    fn can_resume(&self) -> bool {
        self.run_started && !self.game.is_game_over
    }

    /// Fresh run with the mode and level chosen in the menu
    fn start_run(&mut self) {
        self.run_level = self.menu.level;
        self.game.mode = self.menu.mode;
        self.game.clear_obstacles();
        self.game.reset();
        if self.game.mode == GameMode::Maze {
            self.game.add_maze_obstacles(self.run_level.maze_clusters());
        }
        self.run_started = true;
        self.accumulator = Duration::ZERO;

        log::info!(
            "New run: {} / {}, tick {:?}",
            self.run_level.as_str(),
            self.game.mode.as_str(),
            self.tick_interval()
        );
    }
}
