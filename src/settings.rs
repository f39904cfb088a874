//! Difficulty levels and tunable settings
//!
//! Settings load from an optional JSON file; anything missing or broken
//! falls back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::BASE_TICK_MS;
use crate::sim::GameMode;

/// Difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameLevel {
    #[default]
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
    Level6,
    Level7,
    Level8,
    Level9,
}

impl GameLevel {
    pub const ALL: [GameLevel; 9] = [
        GameLevel::Level1,
        GameLevel::Level2,
        GameLevel::Level3,
        GameLevel::Level4,
        GameLevel::Level5,
        GameLevel::Level6,
        GameLevel::Level7,
        GameLevel::Level8,
        GameLevel::Level9,
    ];

    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn from_ordinal(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameLevel::Level1 => "Level 1",
            GameLevel::Level2 => "Level 2",
            GameLevel::Level3 => "Level 3",
            GameLevel::Level4 => "Level 4",
            GameLevel::Level5 => "Level 5",
            GameLevel::Level6 => "Level 6",
            GameLevel::Level7 => "Level 7",
            GameLevel::Level8 => "Level 8",
            GameLevel::Level9 => "Level 9",
        }
    }

    /// Accepts "3", "level3", "Level 3" or "level_3"
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.to_lowercase().replace(['_', '-', ' '], "");
        let digits = s.strip_prefix("level").unwrap_or(&s);
        let n: usize = digits.parse().ok()?;
        n.checked_sub(1).and_then(Self::from_ordinal)
    }

    /// Tick interval scale (smaller is faster)
    pub fn speed_multiplier(&self) -> f32 {
        match self {
            GameLevel::Level1 => 1.0,
            GameLevel::Level2 => 0.9,
            GameLevel::Level3 => 0.8,
            GameLevel::Level4 => 0.7,
            GameLevel::Level5 => 0.6,
            GameLevel::Level6 => 0.5,
            GameLevel::Level7 => 0.4,
            GameLevel::Level8 => 0.3,
            GameLevel::Level9 => 0.2,
        }
    }

    /// Final score scale
    pub fn score_multiplier(&self) -> f32 {
        match self {
            GameLevel::Level1 => 1.0,
            GameLevel::Level2 => 1.2,
            GameLevel::Level3 => 1.5,
            GameLevel::Level4 => 1.8,
            GameLevel::Level5 => 2.0,
            GameLevel::Level6 => 2.5,
            GameLevel::Level7 => 3.0,
            GameLevel::Level8 => 4.0,
            GameLevel::Level9 => 5.0,
        }
    }

    /// Obstacle clusters scattered at the start of a Maze run
    pub fn maze_clusters(&self) -> u32 {
        2 + 2 * (self.ordinal() as u32).saturating_sub(5)
    }

    /// Raw score scaled by this level's multiplier
    pub fn final_score(&self, raw: u64) -> u64 {
        (raw as f32 * self.score_multiplier()).floor() as u64
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Timing ===
    /// Tick interval at level 1 with zero score (ms)
    pub base_tick_ms: u64,
    /// Play the move cue every N live ticks (0 disables it)
    pub move_cue_every: u64,

    // === Menu defaults ===
    pub level: GameLevel,
    pub mode: GameMode,
    /// Fixed RNG seed for reproducible runs (random if unset)
    pub seed: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_tick_ms: BASE_TICK_MS,
            move_cue_every: 3,

            level: GameLevel::Level1,
            mode: GameMode::Standard,
            seed: None,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Clamp values into their usable ranges
    pub fn sanitized(mut self) -> Self {
        if self.base_tick_ms == 0 {
            log::warn!("base_tick_ms must be positive, using {}", BASE_TICK_MS);
            self.base_tick_ms = BASE_TICK_MS;
        }
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self
    }

    /// Parse settings JSON, falling back to defaults on error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                log::warn!("Invalid settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loaded settings from {}", path.display());
                Self::from_json(&json)
            }
            Err(e) => {
                log::warn!("Could not read {} ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_tables_are_monotonic() {
        for pair in GameLevel::ALL.windows(2) {
            assert!(pair[0].speed_multiplier() > pair[1].speed_multiplier());
            assert!(pair[0].score_multiplier() < pair[1].score_multiplier());
        }
    }

    #[test]
    fn test_level_parse() {
        assert_eq!(GameLevel::from_str("3"), Some(GameLevel::Level3));
        assert_eq!(GameLevel::from_str("Level 9"), Some(GameLevel::Level9));
        assert_eq!(GameLevel::from_str("level_1"), Some(GameLevel::Level1));
        assert_eq!(GameLevel::from_str("0"), None);
        assert_eq!(GameLevel::from_str("10"), None);
        assert_eq!(GameLevel::from_str("hard"), None);
    }

    #[test]
    fn test_maze_clusters() {
        assert_eq!(GameLevel::Level1.maze_clusters(), 2);
        assert_eq!(GameLevel::Level6.maze_clusters(), 2);
        assert_eq!(GameLevel::Level7.maze_clusters(), 4);
        assert_eq!(GameLevel::Level9.maze_clusters(), 8);
    }

    #[test]
    fn test_final_score() {
        assert_eq!(GameLevel::Level1.final_score(7), 7);
        assert_eq!(GameLevel::Level2.final_score(7), 8);
        assert_eq!(GameLevel::Level9.final_score(7), 35);
        assert_eq!(GameLevel::Level4.final_score(10), 18);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "level": "Level4", "mode": "Maze", "seed": 12 }"#);
        assert_eq!(settings.level, GameLevel::Level4);
        assert_eq!(settings.mode, GameMode::Maze);
        assert_eq!(settings.seed, Some(12));
        assert_eq!(settings.base_tick_ms, BASE_TICK_MS);
    }

    #[test]
    fn test_bad_json_falls_back() {
        assert_eq!(Settings::from_json("{ nope"), Settings::default());
    }

    #[test]
    fn test_sanitize_clamps() {
        let settings = Settings::from_json(r#"{ "base_tick_ms": 0, "master_volume": 3.0 }"#);
        assert_eq!(settings.base_tick_ms, BASE_TICK_MS);
        assert_eq!(settings.master_volume, 1.0);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load(Path::new("/definitely/not/here.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings {
            level: GameLevel::Level5,
            seed: Some(3),
            ..Default::default()
        };
        assert_eq!(Settings::from_json(&settings.to_json()), settings);
    }
}
