use std::collections::HashSet;
use std::path::Path;

use super::{Caption, Character, Host, Position};
use crate::audio::renderer;
use crate::noise::NoiseEvent;

/// Host used by the command line: a single character standing at the origin,
/// audio through the system player and everything else printed to stdout.
#[derive(Debug)]
pub struct ConsoleHost {
    character: Character,
    mute: bool,
    volume: f32,
    actions: HashSet<String>,
    captured: HashSet<String>,
}

impl ConsoleHost {
    pub fn new(mute: bool, volume: f32) -> Self {
        Self {
            character: Character {
                id: 1,
                team: 0,
                position: Position::default(),
            },
            mute,
            volume,
            actions: HashSet::from([crate::lifecycle::NOISE_ACTION.to_string()]),
            captured: HashSet::new(),
        }
    }
}

impl Host for ConsoleHost {
    fn main_character(&self) -> Option<Character> {
        Some(self.character)
    }

    fn play_sound(&mut self, path: &Path) {
        println!("sound: {}", path.display());
        if self.mute {
            return;
        }
        if let Err(err) = renderer::play_file(path, self.volume) {
            tracing::warn!(error = ?err, "audio playback failed");
        }
    }

    fn make_sound(&mut self, noise: NoiseEvent) {
        println!("noise: {} radius={}", noise.sound_type, noise.radius);
    }

    fn show_caption(&mut self, caption: Caption) {
        if caption.is_hide() {
            println!("caption: (hidden)");
        } else {
            println!("caption: {}", caption.text);
        }
    }

    fn capture_action(&mut self, action: &str) -> bool {
        if !self.actions.contains(action) {
            return false;
        }
        self.captured.insert(action.to_string());
        true
    }

    fn release_action(&mut self, action: &str) {
        self.captured.remove(action);
    }
}
