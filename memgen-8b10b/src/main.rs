//! Generates the `.mem` files for the 8B/10B encoder and decoder modules.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use memgen::{Config, DEFAULT_INPUT, DEFAULT_OUT_DIR};
use tracing::Level;

/// 8B/10B code group memory file generator
#[derive(Debug, Parser)]
#[command(name = "generate_8b10b_mem")]
#[command(version)]
struct Cli {
    /// Code-group table to read
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Directory receiving the memory files
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// Fail on lines with the wrong number of fields and on decoder collisions
    #[arg(long)]
    strict: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self { Config { input: cli.input, out_dir: cli.out_dir, strict: cli.strict } }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).with_target(false).without_time().init();

    tracing::info!("8B/10B Code Group Memory File Generator");

    let config = Config::from(cli);
    let summary = memgen::generate(&config)
        .with_context(|| format!("failed to generate memory files from {}", config.input.display()))?;

    for path in &summary.written {
        tracing::info!("- {}", path.display());
    }

    Ok(())
}
