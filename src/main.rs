//! Retro Snake entry point
//!
//! Headless attract mode: drives one run through the full session (menus,
//! clock, audio cues) with the autopilot at the controls, then prints the
//! final board as JSON. Pass a settings JSON path as the first argument.

use std::path::PathBuf;
use std::time::Duration;

use retro_snake::audio::{AudioManager, LogSink};
use retro_snake::input::InputEvent;
use retro_snake::sim::choose_direction;
use retro_snake::{Screen, Session, Settings};

/// Simulated frame time (~60 Hz)
const FRAME: Duration = Duration::from_millis(16);
/// Stop a run that never ends after this many frames
const MAX_FRAMES: u32 = 500_000;

fn main() {
    env_logger::init();
    log::info!("Retro Snake (headless) starting...");

    let settings = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .map(|path| Settings::load(&path))
        .unwrap_or_default();

    let mut audio = AudioManager::from_settings(LogSink, &settings);
    let mut session = Session::new(settings);
    audio.play_all(session.drain_sounds());

    // Main menu opens on "New game"
    session.handle_input(InputEvent::Select);

    let mut frames = 0;
    while session.screen() == Screen::Playing && frames < MAX_FRAMES {
        if let Some(dir) = choose_direction(session.game()) {
            if dir != session.game().pending_direction {
                session.handle_input(InputEvent::Direction(dir));
            }
        }
        session.advance(FRAME);
        audio.play_all(session.drain_sounds());
        frames += 1;
    }

    if frames == MAX_FRAMES {
        log::warn!("Run still alive after {} frames, stopping", frames);
    }

    match serde_json::to_string_pretty(&session.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to encode snapshot: {}", e),
    }

    log::info!(
        "Run over after {} ticks: score {} (high score {})",
        session.game().animation_tick,
        session.final_score(),
        session.menu().high_score
    );
}
