#![allow(dead_code)]

use custom_noise::host::{Caption, Character, Host, Position};
use custom_noise::noise::NoiseEvent;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Play(PathBuf),
    Noise(NoiseEvent),
    Caption(Caption),
    Capture(String),
    Release(String),
}

/// Host that records every call instead of doing anything.
#[derive(Debug)]
pub struct RecordingHost {
    pub character: Option<Character>,
    pub has_action: bool,
    pub calls: Vec<Call>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            character: Some(Character {
                id: 7,
                team: 2,
                position: Position::new(1.0, 0.0, -3.5),
            }),
            has_action: true,
            calls: Vec::new(),
        }
    }

    pub fn without_character() -> Self {
        Self {
            character: None,
            ..Self::new()
        }
    }

    pub fn captions(&self) -> Vec<&Caption> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Caption(caption) => Some(caption),
                _ => None,
            })
            .collect()
    }

    pub fn hides(&self) -> usize {
        self.captions().iter().filter(|c| c.is_hide()).count()
    }

    pub fn played(&self) -> Vec<&Path> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Play(path) => Some(path.as_path()),
                _ => None,
            })
            .collect()
    }

    pub fn noises(&self) -> Vec<&NoiseEvent> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Noise(noise) => Some(noise),
                _ => None,
            })
            .collect()
    }
}

impl Host for RecordingHost {
    fn main_character(&self) -> Option<Character> {
        self.character
    }

    fn play_sound(&mut self, path: &Path) {
        self.calls.push(Call::Play(path.to_path_buf()));
    }

    fn make_sound(&mut self, noise: NoiseEvent) {
        self.calls.push(Call::Noise(noise));
    }

    fn show_caption(&mut self, caption: Caption) {
        self.calls.push(Call::Caption(caption));
    }

    fn capture_action(&mut self, action: &str) -> bool {
        if !self.has_action {
            return false;
        }
        self.calls.push(Call::Capture(action.to_string()));
        true
    }

    fn release_action(&mut self, action: &str) {
        self.calls.push(Call::Release(action.to_string()));
    }
}

/// Install directory with a `sounds/` folder holding the given files and an
/// optional `config.json`.
pub fn install_dir(config: Option<&str>, sounds: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    let sounds_dir = dir.path().join("sounds");
    fs::create_dir_all(&sounds_dir).unwrap();
    for sound in sounds {
        let path = sounds_dir.join(sound);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"OggS").unwrap();
    }
    if let Some(config) = config {
        fs::write(dir.path().join("config.json"), config).unwrap();
    }
    dir
}

pub fn sound_path(dir: &TempDir, sound: &str) -> String {
    dir.path()
        .join("sounds")
        .join(sound)
        .to_path_buf()
        .to_string_lossy()
        .into_owned()
}
