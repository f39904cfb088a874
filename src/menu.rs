//! Screen and menu state machine
//!
//! | Screen        | Select                                   | Back                         |
//! |---------------|------------------------------------------|------------------------------|
//! | `MainMenu`    | by option: new / continue / level / type | -                            |
//! | `LevelSelect` | commit level, back to main menu          | main menu                    |
//! | `GameType`    | commit mode, back to main menu           | main menu                    |
//! | `Playing`     | pause                                    | -                            |
//! | `Paused`      | resume                                   | main menu, "Continue" armed  |
//! | `GameOver`    | restart                                  | main menu                    |

use serde::{Deserialize, Serialize};

use crate::settings::GameLevel;
use crate::sim::GameMode;

/// Which surface is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    MainMenu,
    LevelSelect,
    GameType,
    Playing,
    Paused,
    GameOver,
}

impl Screen {
    /// Screens that show a selectable option list
    pub fn is_menu(self) -> bool {
        matches!(self, Screen::MainMenu | Screen::LevelSelect | Screen::GameType)
    }
}

pub const MAIN_MENU_OPTIONS: [&str; 4] = ["New game", "Continue", "Level", "Game type"];

const NEW_GAME: usize = 0;
const CONTINUE: usize = 1;
const LEVEL: usize = 2;
const GAME_TYPE: usize = 3;

/// Navigation state of the handset menus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub screen: Screen,
    pub selected: usize,
    pub level: GameLevel,
    pub mode: GameMode,
    /// Set when the next entry into `Playing` should resume the parked run
    pub has_saved_game: bool,
    /// Best level-scaled score this session
    pub high_score: u64,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new(GameLevel::default(), GameMode::default())
    }
}

impl Menu {
    pub fn new(level: GameLevel, mode: GameMode) -> Self {
        Self {
            screen: Screen::MainMenu,
            selected: 0,
            level,
            mode,
            has_saved_game: false,
            high_score: 0,
        }
    }

    /// Option labels for the current screen
    pub fn options(&self) -> Vec<&'static str> {
        match self.screen {
            Screen::MainMenu => MAIN_MENU_OPTIONS.to_vec(),
            Screen::LevelSelect => GameLevel::ALL.iter().map(|l| l.as_str()).collect(),
            Screen::GameType => GameMode::ALL.iter().map(|m| m.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    /// Move the highlight one row, wrapping at either end
    pub fn navigate(&mut self, up: bool) {
        let len = self.options().len();
        if len == 0 {
            return;
        }
        self.selected = if up {
            (self.selected + len - 1) % len
        } else {
            (self.selected + 1) % len
        };
    }

    /// Highlight and select option `index`; out-of-range taps are ignored
    pub fn select_index(&mut self, index: usize) -> bool {
        if index >= self.options().len() {
            return false;
        }
        self.selected = index;
        self.select();
        true
    }

    pub fn select(&mut self) {
        match self.screen {
            Screen::MainMenu => match self.selected {
                NEW_GAME => {
                    self.has_saved_game = false;
                    self.screen = Screen::Playing;
                }
                CONTINUE => {
                    self.has_saved_game = true;
                    self.screen = Screen::Playing;
                }
                LEVEL => {
                    self.screen = Screen::LevelSelect;
                    self.selected = self.level.ordinal();
                }
                GAME_TYPE => {
                    self.screen = Screen::GameType;
                    self.selected = self.mode.ordinal();
                }
                _ => {}
            },
            Screen::LevelSelect => {
                if let Some(level) = GameLevel::from_ordinal(self.selected) {
                    self.level = level;
                }
                self.return_to_main_menu(0);
            }
            Screen::GameType => {
                if let Some(mode) = GameMode::from_ordinal(self.selected) {
                    self.mode = mode;
                }
                self.return_to_main_menu(0);
            }
            Screen::Playing => self.screen = Screen::Paused,
            Screen::Paused => self.screen = Screen::Playing,
            Screen::GameOver => {
                self.has_saved_game = false;
                self.screen = Screen::Playing;
            }
        }
    }

    pub fn back(&mut self) {
        match self.screen {
            Screen::LevelSelect | Screen::GameType | Screen::GameOver => {
                self.return_to_main_menu(0)
            }
            Screen::Paused => {
                self.has_saved_game = true;
                self.return_to_main_menu(CONTINUE);
            }
            Screen::MainMenu | Screen::Playing => {}
        }
    }

    /// The run ended while playing
    pub fn show_game_over(&mut self) {
        self.screen = Screen::GameOver;
        self.selected = 0;
    }

    /// Raise the session best; returns true on a new record
    pub fn record_score(&mut self, score: u64) -> bool {
        if score > self.high_score {
            self.high_score = score;
            true
        } else {
            false
        }
    }

    fn return_to_main_menu(&mut self, selected: usize) {
        self.screen = Screen::MainMenu;
        self.selected = selected;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(screen: Screen) -> Menu {
        Menu {
            screen,
            ..Menu::default()
        }
    }

    #[test]
    fn test_options_per_screen() {
        assert_eq!(
            at(Screen::MainMenu).options(),
            vec!["New game", "Continue", "Level", "Game type"]
        );
        assert_eq!(at(Screen::LevelSelect).options().len(), 9);
        assert_eq!(at(Screen::LevelSelect).options()[4], "Level 5");
        assert_eq!(
            at(Screen::GameType).options(),
            vec!["Standard", "No Walls", "Maze"]
        );
        for screen in [Screen::Playing, Screen::Paused, Screen::GameOver] {
            assert!(at(screen).options().is_empty());
        }
    }

    #[test]
    fn test_navigate_wraps() {
        let mut menu = Menu::default();
        menu.navigate(true);
        assert_eq!(menu.selected, 3);
        menu.navigate(false);
        assert_eq!(menu.selected, 0);
        menu.navigate(false);
        assert_eq!(menu.selected, 1);
    }

    #[test]
    fn test_navigate_without_options_is_noop() {
        let mut menu = at(Screen::Playing);
        menu.selected = 2;
        menu.navigate(true);
        assert_eq!(menu.selected, 2);
    }

    #[test]
    fn test_main_menu_level_preselects_current() {
        let mut menu = Menu::new(GameLevel::Level4, GameMode::Maze);
        menu.selected = 2;
        menu.select();
        assert_eq!(menu.screen, Screen::LevelSelect);
        assert_eq!(menu.selected, 3);

        menu.back();
        menu.selected = 3;
        menu.select();
        assert_eq!(menu.screen, Screen::GameType);
        assert_eq!(menu.selected, 2);
    }

    #[test]
    fn test_commit_level_and_mode() {
        let mut menu = at(Screen::LevelSelect);
        menu.selected = 6;
        menu.select();
        assert_eq!(menu.level, GameLevel::Level7);
        assert_eq!(menu.screen, Screen::MainMenu);
        assert_eq!(menu.selected, 0);

        menu.screen = Screen::GameType;
        menu.selected = 1;
        menu.select();
        assert_eq!(menu.mode, GameMode::NoWalls);
        assert_eq!(menu.screen, Screen::MainMenu);
    }

    #[test]
    fn test_new_game_and_continue() {
        let mut menu = Menu::default();
        menu.has_saved_game = true;
        menu.select();
        assert_eq!(menu.screen, Screen::Playing);
        assert!(!menu.has_saved_game);

        let mut menu = Menu::default();
        menu.selected = 1;
        menu.select();
        assert_eq!(menu.screen, Screen::Playing);
        assert!(menu.has_saved_game);
    }

    #[test]
    fn test_pause_resume_and_restart() {
        let mut menu = at(Screen::Playing);
        menu.select();
        assert_eq!(menu.screen, Screen::Paused);
        menu.select();
        assert_eq!(menu.screen, Screen::Playing);

        let mut menu = at(Screen::GameOver);
        menu.has_saved_game = true;
        menu.select();
        assert_eq!(menu.screen, Screen::Playing);
        assert!(!menu.has_saved_game);
    }

    #[test]
    fn test_back_actions() {
        let mut menu = at(Screen::Paused);
        menu.back();
        assert_eq!(menu.screen, Screen::MainMenu);
        assert_eq!(menu.selected, 1);
        assert!(menu.has_saved_game);

        for screen in [Screen::LevelSelect, Screen::GameType, Screen::GameOver] {
            let mut menu = at(screen);
            menu.selected = 2;
            menu.back();
            assert_eq!(menu.screen, Screen::MainMenu);
            assert_eq!(menu.selected, 0);
        }

        for screen in [Screen::MainMenu, Screen::Playing] {
            let mut menu = at(screen);
            let before = menu.clone();
            menu.back();
            assert_eq!(menu, before);
        }
    }

    #[test]
    fn test_tap_out_of_range_ignored() {
        let mut menu = Menu::default();
        assert!(!menu.select_index(4));
        assert_eq!(menu, Menu::default());

        assert!(menu.select_index(2));
        assert_eq!(menu.screen, Screen::LevelSelect);
    }

    #[test]
    fn test_high_score_never_drops() {
        let mut menu = Menu::default();
        assert!(menu.record_score(10));
        assert!(!menu.record_score(4));
        assert_eq!(menu.high_score, 10);
    }
}
