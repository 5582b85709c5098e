pub mod audio;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod host;
pub mod lifecycle;
pub mod noise;
pub mod paths;
pub mod playback;
pub mod selector;

use anyhow::{bail, Context};
use cli::{Cli, Commands};
use host::console::ConsoleHost;
use lifecycle::{ModLifecycle, NoiseMod};
use paths::InstallPaths;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::Path;
use std::sync::Mutex;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let paths = match &cli.dir {
        Some(dir) => InstallPaths::from_base(dir),
        None => InstallPaths::installed().clone(),
    };
    setup_tracing(cli.verbose, diagnostics::log_path(&paths).as_deref());

    match cli.command {
        Commands::Trigger(args) => trigger(paths, args),
        Commands::Check(args) => check(&paths, args),
        Commands::Paths(args) => show_paths(&paths, args),
        Commands::Simulate(args) => simulate(&paths, args),
    }
}

fn setup_tracing(verbose: bool, log_file: Option<&Path>) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose { "debug" } else { "info" };
    let file_layer = log_file
        .and_then(|path| diagnostics::open_log(path).ok())
        .map(|file| {
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
        });

    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();
}

fn trigger(paths: InstallPaths, args: cli::TriggerArgs) -> anyhow::Result<()> {
    if !(0.0..=1.0).contains(&args.volume) {
        bail!("volume must be between 0.0 and 1.0");
    }

    let host = ConsoleHost::new(args.mute, args.volume);
    let mut noise_mod = NoiseMod::new(host, paths);
    if let Some(seed) = args.seed {
        noise_mod = noise_mod.with_seed(seed);
    }

    noise_mod.on_load();
    noise_mod.on_enable();

    if !noise_mod.is_active() {
        println!("custom noise is inactive: no sound groups available");
        noise_mod.on_disable();
        return Ok(());
    }

    for press in 1..=args.count {
        if let Some(outcome) = noise_mod.on_trigger() {
            tracing::debug!(press, ?outcome, "trigger handled");
        }
    }

    noise_mod.on_disable();
    Ok(())
}

fn check(paths: &InstallPaths, args: cli::CheckArgs) -> anyhow::Result<()> {
    let groups = config::try_load(paths).context("load sound groups")?;

    if args.dump {
        let log = diagnostics::log_path(paths).context("installation directory is unknown")?;
        diagnostics::dump_groups(&log, &groups)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    for (index, group) in groups.iter().enumerate() {
        println!(
            "{}. {} (weight {}, {}, radius {}): {}/{} sounds, {} captions",
            index + 1,
            group.display_name(),
            group.weight,
            group.resolved_type,
            group.radius,
            group.playable_sounds(),
            group.sounds.len(),
            group.texts.len()
        );
    }

    let selectable = groups.iter().filter(|group| group.weight > 0).count();
    println!("{} groups, {} selectable", groups.len(), selectable);
    Ok(())
}

#[derive(Debug, Serialize)]
struct PathsInfo<'a> {
    base: &'a Path,
    sounds: &'a Path,
    config: Option<std::path::PathBuf>,
    log: Option<std::path::PathBuf>,
}

fn show_paths(paths: &InstallPaths, args: cli::PathsArgs) -> anyhow::Result<()> {
    let info = PathsInfo {
        base: paths.base_dir(),
        sounds: paths.sounds_dir(),
        config: paths.config_file(),
        log: diagnostics::log_path(paths),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    if !paths.is_resolved() {
        println!("Installation directory could not be determined");
        return Ok(());
    }

    println!("Install dir: {}", info.base.display());
    println!("Sounds dir: {}", info.sounds.display());
    if let Some(config) = &info.config {
        println!("Config: {}", config.display());
    }
    if let Some(log) = &info.log {
        println!("Log: {}", log.display());
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct GroupShare {
    name: Option<String>,
    weight: i32,
    count: usize,
    expected: f64,
    observed: f64,
}

fn simulate(paths: &InstallPaths, args: cli::SimulateArgs) -> anyhow::Result<()> {
    let groups = config::load_groups(paths);
    let total = selector::total_weight(&groups);
    if total <= 0 {
        println!("no selectable sound groups");
        return Ok(());
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let counts = selector::tally(&groups, args.draws, &mut rng);

    let draws = args.draws.max(1) as f64;
    let shares: Vec<GroupShare> = groups
        .iter()
        .zip(counts)
        .map(|(group, count)| GroupShare {
            name: group.name.clone(),
            weight: group.weight,
            count,
            expected: f64::from(group.weight.max(0)) / total as f64,
            observed: count as f64 / draws,
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&shares)?);
        return Ok(());
    }

    for share in &shares {
        println!(
            "{}: {} draws, observed {:.3}, expected {:.3}",
            share.name.as_deref().unwrap_or("unnamed"),
            share.count,
            share.observed,
            share.expected
        );
    }
    Ok(())
}
