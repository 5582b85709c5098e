use anyhow::{bail, Context};
use std::path::Path;
use std::process::Command;

#[cfg(target_os = "macos")]
const PLAYER: &str = "afplay";
#[cfg(not(target_os = "macos"))]
const PLAYER: &str = "paplay";

pub fn play_file(path: &Path, volume: f32) -> anyhow::Result<()> {
    let status = player_command(path, volume)
        .status()
        .with_context(|| format!("play audio with {PLAYER}: {}", path.display()))?;

    if !status.success() {
        bail!("{PLAYER} exited with status {status}");
    }

    Ok(())
}

fn player_command(path: &Path, volume: f32) -> Command {
    let mut cmd = Command::new(PLAYER);
    if cfg!(target_os = "macos") {
        cmd.arg("-v").arg(volume.to_string());
    } else {
        // paplay takes a linear volume where 65536 is 100%.
        let scaled = (volume.clamp(0.0, 1.0) * 65536.0).round() as u32;
        cmd.arg(format!("--volume={scaled}"));
    }
    cmd.arg(path);
    cmd
}
