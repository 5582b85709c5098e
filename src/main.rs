use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = custom_noise::cli::Cli::parse();
    custom_noise::run(cli)
}
