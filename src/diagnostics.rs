//! Operator-facing diagnostics log kept next to the installation.

use anyhow::Context;
use chrono::Utc;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::SoundGroup;
use crate::paths::InstallPaths;

pub const LOG_FILE: &str = "custom-noise.log";

pub fn log_path(paths: &InstallPaths) -> Option<PathBuf> {
    paths.is_resolved().then(|| paths.base_dir().join(LOG_FILE))
}

pub fn open_log(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Appends a timestamped, pretty-printed copy of the validated groups.
pub fn dump_groups(path: &Path, groups: &[SoundGroup]) -> anyhow::Result<()> {
    let pretty = serde_json::to_string_pretty(groups).context("serialize sound groups")?;
    let mut file =
        open_log(path).with_context(|| format!("open diagnostics log {}", path.display()))?;
    writeln!(
        file,
        "{} validated config ({} groups):\n{pretty}",
        Utc::now().to_rfc3339(),
        groups.len()
    )
    .context("write config dump")?;
    Ok(())
}
