//! Fire-and-forget sound effects.
//!
//! A clip that fails to load is reported once at startup. Playing it later
//! does nothing.

use macroquad::audio::{Sound, load_sound, play_sound_once};

use crate::config::Config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Clip {
    /// Cell edits, reset, save and load
    Click,
    /// Run, pause and pause toggle
    Toggle,
}

pub trait AudioSink {
    fn play(&mut self, clip: Clip);
}

/// Backend that never makes a sound
#[derive(Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _clip: Clip) {}
}

/// Clips played through macroquad's mixer
pub struct ClipPlayer {
    click: Option<Sound>,
    toggle: Option<Sound>,
}

impl ClipPlayer {
    /// Load both clips from the configured paths
    pub async fn load() -> Self {
        Self {
            click: load_clip(Config::CLICK_SOUND).await,
            toggle: load_clip(Config::TOGGLE_SOUND).await,
        }
    }
}

async fn load_clip(path: &str) -> Option<Sound> {
    match load_sound(path).await {
        Ok(sound) => Some(sound),
        Err(err) => {
            log::warn!("Sound file {} not available, clip disabled: {}", path, err);
            None
        }
    }
}

impl AudioSink for ClipPlayer {
    fn play(&mut self, clip: Clip) {
        let sound = match clip {
            Clip::Click => self.click.as_ref(),
            Clip::Toggle => self.toggle.as_ref(),
        };
        if let Some(sound) = sound {
            play_sound_once(sound);
        }
    }
}
