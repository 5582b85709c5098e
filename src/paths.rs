use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub const CONFIG_FILE: &str = "config.json";
pub const SOUNDS_DIR: &str = "sounds";

static INSTALLED: OnceLock<InstallPaths> = OnceLock::new();

/// Installation directory and the sounds directory below it.
///
/// Both are empty when the installation directory could not be determined.
/// An empty sounds directory means no sound is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPaths {
    base: PathBuf,
    sounds: PathBuf,
}

impl InstallPaths {
    /// Paths for the directory holding the running executable, computed once.
    pub fn installed() -> &'static InstallPaths {
        INSTALLED.get_or_init(Self::detect)
    }

    pub fn detect() -> Self {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .map(Self::from_base)
            .unwrap_or_else(Self::unresolved)
    }

    pub fn from_base(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        if base.as_os_str().is_empty() {
            return Self::unresolved();
        }
        let sounds = base.join(SOUNDS_DIR);
        Self { base, sounds }
    }

    pub fn unresolved() -> Self {
        Self {
            base: PathBuf::new(),
            sounds: PathBuf::new(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        !self.base.as_os_str().is_empty()
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn sounds_dir(&self) -> &Path {
        &self.sounds
    }

    pub fn config_file(&self) -> Option<PathBuf> {
        self.is_resolved().then(|| self.base.join(CONFIG_FILE))
    }
}
