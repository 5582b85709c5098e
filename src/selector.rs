use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::config::SoundGroup;
use crate::noise::SoundType;

/// Result of one draw. Built per trigger and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedSound {
    pub name: Option<String>,
    pub sound: Option<String>,
    pub text: Option<String>,
    pub sound_type: SoundType,
    pub radius: f32,
}

impl SelectedSound {
    /// The chosen sound path, unless the draw landed on a null or blanked entry.
    pub fn sound(&self) -> Option<&str> {
        self.sound.as_deref().filter(|sound| !sound.is_empty())
    }

    pub fn caption(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// Picks a group by weight, then one sound and one caption from it
/// independently.
pub fn pick<R: Rng + ?Sized>(groups: &[SoundGroup], rng: &mut R) -> Option<SelectedSound> {
    let group = pick_group(groups, rng)?;

    Some(SelectedSound {
        name: group.name.clone(),
        sound: group.sounds.choose(rng).cloned().flatten(),
        text: group.texts.choose(rng).cloned().flatten(),
        sound_type: group.resolved_type,
        radius: group.radius,
    })
}

pub fn pick_group<'a, R: Rng + ?Sized>(
    groups: &'a [SoundGroup],
    rng: &mut R,
) -> Option<&'a SoundGroup> {
    pick_index(groups, rng).map(|index| &groups[index])
}

/// Cumulative-weight draw over `groups` in stored order. Negative weights
/// count as zero; a zero total selects nothing.
pub fn pick_index<R: Rng + ?Sized>(groups: &[SoundGroup], rng: &mut R) -> Option<usize> {
    let total = total_weight(groups);
    if total <= 0 {
        return None;
    }

    let roll = rng.gen_range(0..total);
    let mut sum = 0i64;
    for (index, group) in groups.iter().enumerate() {
        sum += effective_weight(group);
        if roll < sum {
            return Some(index);
        }
    }

    None
}

pub fn total_weight(groups: &[SoundGroup]) -> i64 {
    groups.iter().map(effective_weight).sum()
}

/// Runs `draws` group draws and counts how often each index won.
pub fn tally<R: Rng + ?Sized>(groups: &[SoundGroup], draws: usize, rng: &mut R) -> Vec<usize> {
    let mut counts = vec![0; groups.len()];
    for _ in 0..draws {
        if let Some(index) = pick_index(groups, rng) {
            counts[index] += 1;
        }
    }
    counts
}

fn effective_weight(group: &SoundGroup) -> i64 {
    i64::from(group.weight.max(0))
}
