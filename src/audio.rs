//! Sound cue dispatch
//!
//! The simulation only emits [`GameEvent`]s. This module turns them into sound
//! effects and hands them to whatever backend the frontend plugs in.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits a wall or the platform
    Bump,
    /// Block destroyed
    Pickup,
    /// Every block cleared
    Win,
    /// Ball lost off the bottom
    Lose,
}

impl SoundEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::Bump => "bump",
            SoundEffect::Pickup => "pickup",
            SoundEffect::Win => "win",
            SoundEffect::Lose => "lose",
        }
    }
}

impl From<GameEvent> for SoundEffect {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::Bump => SoundEffect::Bump,
            GameEvent::Pickup => SoundEffect::Pickup,
            GameEvent::Win => SoundEffect::Win,
            GameEvent::Lose => SoundEffect::Lose,
        }
    }
}

/// Playback backend
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Backend that only logs cues (headless runs)
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("Sound cue: {} (volume {:.2})", effect.as_str(), volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    /// Manager using the default audio preferences
    pub fn new(sink: S) -> Self {
        Self::from_settings(sink, &Settings::default())
    }

    pub fn from_settings(sink: S, settings: &Settings) -> Self {
        let mut manager = Self {
            sink,
            master_volume: 1.0,
            sfx_volume: 1.0,
            muted: settings.muted,
        };
        manager.set_master_volume(settings.master_volume);
        manager.set_sfx_volume(settings.sfx_volume);
        manager
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

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.sink.play(effect, vol);
    }

    /// Play the cue for every event of a tick, in order
    pub fn play_events(&mut self, events: &[GameEvent]) {
        for &event in events {
            self.play(event.into());
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
    struct RecordingSink {
        played: Vec<(SoundEffect, f32)>,
    }

    impl AudioSink for RecordingSink {
        fn play(&mut self, effect: SoundEffect, volume: f32) {
            self.played.push((effect, volume));
        }
    }

    #[test]
    fn test_events_map_to_cues() {
        let mut audio = AudioManager::new(RecordingSink::default());
        audio.set_master_volume(1.0);

        audio.play_events(&[GameEvent::Pickup, GameEvent::Win]);

        assert_eq!(
            audio.sink().played,
            vec![(SoundEffect::Pickup, 1.0), (SoundEffect::Win, 1.0)]
        );
    }

    #[test]
    fn test_muted_plays_nothing() {
        let settings = Settings {
            muted: true,
            ..Default::default()
        };
        let mut audio = AudioManager::from_settings(RecordingSink::default(), &settings);

        audio.play_events(&[GameEvent::Bump, GameEvent::Lose]);

        assert!(audio.sink().played.is_empty());
    }

    #[test]
    fn test_volume_is_clamped() {
        let mut audio = AudioManager::new(RecordingSink::default());
        audio.set_master_volume(3.0);
        audio.set_sfx_volume(0.5);

        audio.play(SoundEffect::Bump);

        assert_eq!(audio.sink().played, vec![(SoundEffect::Bump, 0.5)]);
    }

    #[test]
    fn test_new_uses_default_settings() {
        let mut audio = AudioManager::new(RecordingSink::default());
        audio.play(SoundEffect::Pickup);

        let defaults = Settings::default();
        let expected = defaults.master_volume * defaults.sfx_volume;
        assert_eq!(audio.sink().played, vec![(SoundEffect::Pickup, expected)]);
    }

    #[test]
    fn test_cue_names() {
        assert_eq!(SoundEffect::from(GameEvent::Lose).as_str(), "lose");
        assert_eq!(SoundEffect::from(GameEvent::Pickup).as_str(), "pickup");
    }
}
