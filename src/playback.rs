use rand::Rng;
use serde::Serialize;
use std::path::Path;

use crate::config::SoundGroup;
use crate::host::{Caption, Character, Host};
use crate::noise::NoiseEvent;
use crate::selector::{self, SelectedSound};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptionChange {
    Shown,
    Hidden,
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum TriggerOutcome {
    NoCharacter,
    NoSelection,
    Triggered {
        group: Option<String>,
        played: bool,
        caption: CaptionChange,
    },
}

/// Turns a selection into host calls and remembers whether a caption is
/// currently up.
#[derive(Debug, Default)]
pub struct PlaybackCoordinator {
    caption_shown: bool,
}

impl PlaybackCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn caption_shown(&self) -> bool {
        self.caption_shown
    }

    pub fn trigger<H, R>(
        &mut self,
        groups: &[SoundGroup],
        host: &mut H,
        rng: &mut R,
    ) -> TriggerOutcome
    where
        H: Host + ?Sized,
        R: Rng + ?Sized,
    {
        let Some(character) = host.main_character() else {
            tracing::debug!("no live character; trigger ignored");
            return TriggerOutcome::NoCharacter;
        };

        let Some(selected) = selector::pick(groups, rng) else {
            tracing::info!(groups = groups.len(), "no selectable sound group");
            return TriggerOutcome::NoSelection;
        };

        self.play(&selected, &character, host)
    }

    pub fn play<H>(
        &mut self,
        selected: &SelectedSound,
        character: &Character,
        host: &mut H,
    ) -> TriggerOutcome
    where
        H: Host + ?Sized,
    {
        let played = match selected.sound() {
            Some(sound) => {
                tracing::debug!(sound, group = ?selected.name, "playing sound");
                host.play_sound(Path::new(sound));
                host.make_sound(NoiseEvent {
                    from_character: character.id,
                    from_team: character.team,
                    position: character.position,
                    sound_type: selected.sound_type,
                    radius: selected.radius,
                });
                true
            }
            None => false,
        };

        let caption = match selected.caption() {
            Some(text) => {
                host.show_caption(Caption::show(text, character.position));
                self.caption_shown = true;
                CaptionChange::Shown
            }
            None if self.caption_shown => {
                host.show_caption(Caption::hide(character.position));
                self.caption_shown = false;
                CaptionChange::Hidden
            }
            None => CaptionChange::Unchanged,
        };

        TriggerOutcome::Triggered {
            group: selected.name.clone(),
            played,
            caption,
        }
    }
}
