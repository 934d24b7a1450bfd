use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fpga_snake::config::GameConfig;
use fpga_snake::game::SnakeGame;
use fpga_snake::term::{self, TermKeys, TermRenderer};
use fpga_snake::SnakeError;

#[derive(Parser)]
#[command(name = "fpga-snake")]
#[command(version, about = "Snake on a 32x24 board, steered with the arrow keys or WASD")]
struct Cli {
    /// Seed for feed placement (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = GameConfig::default();
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut renderer = TermRenderer::open(&config).context("Failed to open the display")?;
    let mut keys = TermKeys::new();

    let result = term::in_session(term::setup, term::restore, || {
        run(config, &mut renderer, &mut keys, rng)
    });

    match result {
        Ok(score) => info!(score, "exiting"),
        Err(SnakeError::Interrupted) => info!("interrupted"),
        Err(err) => return Err(err).context("Terminal session failed"),
    }

    Ok(())
}

fn run(
    config: GameConfig,
    renderer: &mut TermRenderer,
    keys: &mut TermKeys,
    rng: StdRng,
) -> fpga_snake::Result<u32> {
    let score = SnakeGame::new(config, renderer, keys, rng).play()?;

    // Hold the game-over screen until the player dismisses it.
    keys.wait_for_key()?;
    Ok(score)
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}
