use crate::noise::SoundType;
use crate::paths::InstallPaths;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_RADIUS: f32 = 15.0;
pub const UNSET_WEIGHT: i32 = -1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {} does not exist", .0.display())]
    Missing(PathBuf),
    #[error("config file {} is empty", .0.display())]
    Empty(PathBuf),
    #[error("read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config file {} contains no sound groups", .0.display())]
    GroupsEmpty(PathBuf),
}

/// Root of `config.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigRoot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sound_groups: Vec<Option<SoundGroup>>,
}

/// One bucket of interchangeable sound and caption variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundGroup {
    #[serde(default)]
    pub name: Option<String>,
    /// Sound paths. After validation each non-null entry is either an absolute
    /// path to an existing file or the empty sentinel.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sounds: Vec<Option<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub texts: Vec<Option<String>>,
    /// Raw tag as written; anything other than a string is kept as `None`.
    #[serde(default, deserialize_with = "lenient_tag")]
    pub sound_type: Option<String>,
    #[serde(skip_deserializing)]
    pub resolved_type: SoundType,
    #[serde(default = "default_radius", deserialize_with = "radius_or_default")]
    pub radius: f32,
    #[serde(default = "default_weight", deserialize_with = "weight_or_default")]
    pub weight: i32,
}

impl Default for SoundGroup {
    fn default() -> Self {
        Self {
            name: None,
            sounds: Vec::new(),
            texts: Vec::new(),
            sound_type: None,
            resolved_type: SoundType::default(),
            radius: DEFAULT_RADIUS,
            weight: UNSET_WEIGHT,
        }
    }
}

impl SoundGroup {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed")
    }

    /// Number of sound entries that point at a verified file.
    pub fn playable_sounds(&self) -> usize {
        self.sounds
            .iter()
            .filter(|sound| sound.as_deref().is_some_and(|s| !s.is_empty()))
            .count()
    }

    /// Weight used when none is configured: one unit per sound/caption pairing.
    pub fn default_weight(&self) -> i32 {
        let pairings = self.sounds.len().max(1).saturating_mul(self.texts.len().max(1));
        i32::try_from(pairings).unwrap_or(i32::MAX)
    }

    /// Resolves sound paths against `sounds_dir`, normalizes the sound type and
    /// fills in an unset weight. Running it again on a validated group changes
    /// nothing.
    pub fn validate(&mut self, sounds_dir: &Path) {
        for entry in self.sounds.iter_mut() {
            let Some(sound) = entry.as_mut() else {
                continue;
            };
            if sound.is_empty() {
                continue;
            }

            match resolve_sound(sounds_dir, sound.as_str()) {
                Some(resolved) => {
                    tracing::debug!(
                        sound = %sound,
                        path = %resolved.display(),
                        "sound file verified"
                    );
                    *sound = resolved.to_string_lossy().into_owned();
                }
                None => {
                    tracing::warn!(
                        sound = %sound,
                        path = %sounds_dir.join(&*sound).display(),
                        "sound file missing; entry blanked"
                    );
                    sound.clear();
                }
            }
        }

        self.resolved_type = self
            .sound_type
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .and_then(SoundType::from_name)
            .unwrap_or_default();

        if self.weight < 0 {
            self.weight = self.default_weight();
        }

        tracing::info!(
            group = self.display_name(),
            playable = self.playable_sounds(),
            total = self.sounds.len(),
            weight = self.weight,
            sound_type = %self.resolved_type,
            "sound group validated"
        );
    }
}

/// Loads and validates `<base>/config.json`. Every failure is logged and
/// yields an empty list.
pub fn load(base: &Path) -> Vec<SoundGroup> {
    load_groups(&InstallPaths::from_base(base))
}

pub fn load_groups(paths: &InstallPaths) -> Vec<SoundGroup> {
    match try_load(paths) {
        Ok(groups) => groups,
        Err(err) => {
            match &err {
                ConfigError::Missing(_) | ConfigError::Read { .. } | ConfigError::Parse(_) => {
                    tracing::error!(error = %err, "config not loaded")
                }
                ConfigError::Empty(_) | ConfigError::GroupsEmpty(_) => {
                    tracing::warn!(error = %err, "config not loaded")
                }
            }
            Vec::new()
        }
    }
}

pub fn try_load(paths: &InstallPaths) -> Result<Vec<SoundGroup>, ConfigError> {
    let path = paths
        .config_file()
        .ok_or_else(|| ConfigError::Missing(PathBuf::from(crate::paths::CONFIG_FILE)))?;
    if !path.is_file() {
        return Err(ConfigError::Missing(path));
    }

    tracing::debug!(path = %path.display(), "loading config");
    let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw.as_str());
    if raw.trim().is_empty() {
        return Err(ConfigError::Empty(path));
    }

    let mut groups = parse(raw)?;
    if groups.is_empty() {
        return Err(ConfigError::GroupsEmpty(path));
    }

    validate_groups(&mut groups, paths.sounds_dir());
    tracing::info!(count = groups.len(), "sound groups loaded");
    Ok(groups)
}

/// Decodes a config document without touching the filesystem. `null` groups
/// are dropped; a `null` document has no groups.
pub fn parse(raw: &str) -> Result<Vec<SoundGroup>, ConfigError> {
    let root: Option<ConfigRoot> = serde_json::from_str(raw)?;
    Ok(root
        .unwrap_or_default()
        .sound_groups
        .into_iter()
        .flatten()
        .collect())
}

pub fn validate_groups(groups: &mut [SoundGroup], sounds_dir: &Path) {
    for group in groups.iter_mut() {
        group.validate(sounds_dir);
    }
}

fn resolve_sound(sounds_dir: &Path, sound: &str) -> Option<PathBuf> {
    if sounds_dir.as_os_str().is_empty() {
        return None;
    }
    let resolved = std::path::absolute(sounds_dir.join(sound)).ok()?;
    resolved.is_file().then_some(resolved)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTag {
    Text(String),
    Other(IgnoredAny),
}

fn lenient_tag<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawTag>::deserialize(deserializer)? {
        Some(RawTag::Text(tag)) => Some(tag),
        Some(RawTag::Other(_)) | None => None,
    })
}

fn radius_or_default<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f32>::deserialize(deserializer)?.unwrap_or(DEFAULT_RADIUS))
}

fn weight_or_default<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or(UNSET_WEIGHT))
}

fn default_radius() -> f32 {
    DEFAULT_RADIUS
}

fn default_weight() -> i32 {
    UNSET_WEIGHT
}
