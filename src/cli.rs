use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "custom-noise",
    version,
    about = "Weighted sound and caption variants for the noise action"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "DIR",
        help = "Installation directory (defaults to the executable's directory)"
    )]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Trigger(TriggerArgs),
    Check(CheckArgs),
    Paths(PathsArgs),
    Simulate(SimulateArgs),
}

#[derive(Args, Debug)]
pub struct TriggerArgs {
    #[arg(long, default_value_t = 1, help = "Number of presses to simulate")]
    pub count: usize,

    #[arg(long, help = "Seed for reproducible picks")]
    pub seed: Option<u64>,

    #[arg(long, help = "Print sounds instead of playing them")]
    pub mute: bool,

    #[arg(long, default_value_t = 0.8, help = "Playback volume between 0.0 and 1.0")]
    pub volume: f32,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[arg(long, help = "Output validated groups as JSON")]
    pub json: bool,

    #[arg(long, help = "Append validated groups to the diagnostics log")]
    pub dump: bool,
}

#[derive(Args, Debug)]
pub struct PathsArgs {
    #[arg(long, help = "Output as JSON")]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    #[arg(long, default_value_t = 10_000, help = "Number of draws")]
    pub draws: usize,

    #[arg(long, help = "Seed for reproducible draws")]
    pub seed: Option<u64>,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,
}
