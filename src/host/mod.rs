pub mod console;

use serde::Serialize;
use std::path::Path;

use crate::noise::NoiseEvent;

pub type CharacterId = u64;
pub type Team = i32;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// The player's character as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Character {
    pub id: CharacterId,
    pub team: Team,
    pub position: Position,
}

/// A caption shown above a world position.
///
/// `speed` and `duration` left as `None` use the host's defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Caption {
    pub text: String,
    pub target: Position,
    pub speed: Option<f32>,
    pub duration: Option<f32>,
}

impl Caption {
    pub fn show(text: impl Into<String>, target: Position) -> Self {
        Self {
            text: text.into(),
            target,
            speed: None,
            duration: None,
        }
    }

    /// The caption widget has no hide call, so an empty caption that appears
    /// and vanishes instantly stands in for one.
    pub fn hide(target: Position) -> Self {
        Self {
            text: String::new(),
            target,
            speed: Some(0.0),
            duration: Some(0.0),
        }
    }

    pub fn is_hide(&self) -> bool {
        self.text.is_empty() && self.duration == Some(0.0)
    }
}

/// Game services the mod calls into.
pub trait Host {
    /// The live player character, if there is one.
    fn main_character(&self) -> Option<Character>;

    fn play_sound(&mut self, path: &Path);

    fn make_sound(&mut self, noise: NoiseEvent);

    fn show_caption(&mut self, caption: Caption);

    /// Disables the host's own binding for `action` and routes its trigger to
    /// the mod. Returns false when the host has no such action.
    fn capture_action(&mut self, action: &str) -> bool;

    fn release_action(&mut self, action: &str);
}
