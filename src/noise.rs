use serde::{Deserialize, Serialize};

use crate::host::{CharacterId, Position, Team};

/// Noise category understood by the AI awareness system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SoundType {
    #[default]
    #[serde(rename = "unknowNoise")]
    UnknownNoise,
    #[serde(rename = "combat")]
    Combat,
    #[serde(rename = "grenadeDropSound")]
    GrenadeDropSound,
}

impl SoundType {
    pub const ALL: [SoundType; 3] = [
        SoundType::UnknownNoise,
        SoundType::Combat,
        SoundType::GrenadeDropSound,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SoundType::UnknownNoise => "unknowNoise",
            SoundType::Combat => "combat",
            SoundType::GrenadeDropSound => "grenadeDropSound",
        }
    }

    /// Case-insensitive lookup by category name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for SoundType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A noise reported to the AI awareness system.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoiseEvent {
    pub from_character: CharacterId,
    pub from_team: Team,
    pub position: Position,
    pub sound_type: SoundType,
    pub radius: f32,
}
