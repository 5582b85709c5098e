use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{self, SoundGroup};
use crate::host::Host;
use crate::paths::InstallPaths;
use crate::playback::{PlaybackCoordinator, TriggerOutcome};

/// Input action the mod takes over from the host.
pub const NOISE_ACTION: &str = "Quack";

/// Hooks the host invokes around the mod's lifetime.
pub trait ModLifecycle {
    fn on_load(&mut self);
    fn on_enable(&mut self);
    fn on_disable(&mut self);
}

/// State that lives from one enable to the matching disable.
#[derive(Debug)]
pub struct Session {
    groups: Vec<SoundGroup>,
    coordinator: PlaybackCoordinator,
    rng: StdRng,
}

impl Session {
    pub fn new(groups: Vec<SoundGroup>, rng: StdRng) -> Self {
        Self {
            groups,
            coordinator: PlaybackCoordinator::new(),
            rng,
        }
    }

    pub fn start(paths: &InstallPaths, rng: StdRng) -> Self {
        Self::new(config::load_groups(paths), rng)
    }

    pub fn groups(&self) -> &[SoundGroup] {
        &self.groups
    }

    pub fn caption_shown(&self) -> bool {
        self.coordinator.caption_shown()
    }

    pub fn trigger<H: Host + ?Sized>(&mut self, host: &mut H) -> TriggerOutcome {
        self.coordinator.trigger(&self.groups, host, &mut self.rng)
    }
}

/// Wires the noise pipeline to a host.
pub struct NoiseMod<H: Host> {
    host: H,
    paths: InstallPaths,
    seed: Option<u64>,
    session: Option<Session>,
    captured: bool,
}

impl<H: Host> NoiseMod<H> {
    pub fn new(host: H, paths: InstallPaths) -> Self {
        Self {
            host,
            paths,
            seed: None,
            session: None,
            captured: false,
        }
    }

    /// Seeds every session's RNG so trigger sequences repeat.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn paths(&self) -> &InstallPaths {
        &self.paths
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.captured && self.session.is_some()
    }

    /// Handles one press of the captured action. Returns `None` while the mod
    /// is inert.
    pub fn on_trigger(&mut self) -> Option<TriggerOutcome> {
        if !self.captured {
            return None;
        }
        let session = self.session.as_mut()?;
        Some(session.trigger(&mut self.host))
    }

    fn session_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl<H: Host> ModLifecycle for NoiseMod<H> {
    fn on_load(&mut self) {
        tracing::info!(
            base = %self.paths.base_dir().display(),
            sounds = %self.paths.sounds_dir().display(),
            "custom noise loaded"
        );
    }

    fn on_enable(&mut self) {
        if self.session.is_some() {
            self.on_disable();
        }

        let session = Session::start(&self.paths, self.session_rng());
        let empty = session.groups().is_empty();
        self.session = Some(session);

        if empty {
            tracing::warn!("no sound groups available; the mod will have no effect");
            return;
        }

        if !self.host.capture_action(NOISE_ACTION) {
            tracing::warn!(
                action = NOISE_ACTION,
                "input action not found; the mod will have no effect"
            );
            return;
        }

        self.captured = true;
        tracing::info!(action = NOISE_ACTION, "custom noise enabled");
    }

    fn on_disable(&mut self) {
        if self.captured {
            self.host.release_action(NOISE_ACTION);
            self.captured = false;
        }
        self.session = None;
        tracing::info!("custom noise disabled");
    }
}
