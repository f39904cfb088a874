//! Audio cues
//!
//! The core only names the cues. `AudioManager` applies volume and mute
//! and hands audible cues to a `CueSink`; the default sink logs them.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Snake stepped (throttled)
    Move,
    /// Food eaten
    EatFood,
    /// Run ended
    GameOver,
    /// Any key press or tap
    Click,
    /// Application started
    Startup,
}

impl SoundEffect {
    /// Relative loudness of each cue
    pub fn base_volume(self) -> f32 {
        match self {
            SoundEffect::Move => 0.5,
            SoundEffect::Click => 0.8,
            SoundEffect::EatFood | SoundEffect::GameOver | SoundEffect::Startup => 1.0,
        }
    }
}

/// Playback backend
pub trait CueSink {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Sink that writes cues to the log
#[derive(Debug, Default)]
pub struct LogSink;

impl CueSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("cue {:?} at {:.2}", effect, volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<S: CueSink = LogSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(LogSink)
    }
}

impl<S: CueSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    pub fn from_settings(sink: S, settings: &Settings) -> Self {
        let mut audio = Self::new(sink);
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect; returns false if it was inaudible
    pub fn play(&mut self, effect: SoundEffect) -> bool {
        let vol = self.effective_volume() * effect.base_volume();
        if vol <= 0.0 {
            return false;
        }
        self.sink.play(effect, vol);
        true
    }

    pub fn play_all(&mut self, effects: impl IntoIterator<Item = SoundEffect>) {
        for effect in effects {
            self.play(effect);
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<(SoundEffect, f32)>);

    impl CueSink for Recorder {
        fn play(&mut self, effect: SoundEffect, volume: f32) {
            self.0.push((effect, volume));
        }
    }

    #[test]
    fn test_volume_scaling() {
        let mut audio = AudioManager::new(Recorder::default());
        audio.set_master_volume(0.5);
        assert!(audio.play(SoundEffect::Move));
        let (effect, vol) = audio.sink().0[0];
        assert_eq!(effect, SoundEffect::Move);
        assert!((vol - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_muted_plays_nothing() {
        let settings = Settings {
            muted: true,
            ..Default::default()
        };
        let mut audio = AudioManager::from_settings(Recorder::default(), &settings);
        audio.play_all([SoundEffect::Click, SoundEffect::Startup]);
        assert!(audio.sink().0.is_empty());
    }

    #[test]
    fn test_volume_clamped() {
        let mut audio = AudioManager::new(Recorder::default());
        audio.set_master_volume(4.0);
        audio.set_sfx_volume(-1.0);
        assert!(!audio.play(SoundEffect::EatFood));
    }
}
