//! dungen: procedural dungeon layout generator
//!
//! Main entry point for the command-line front end.

mod render;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use dungen_core::{DungeonError, DungeonRng, GeneratorConfig, ProbabilityPolicy, generate_with_rng};

/// Generate a connected dungeon layout and print it
#[derive(Parser, Debug)]
#[command(name = "dungen")]
#[command(author, version, about = "Dungen - grow a dungeon one room at a time", long_about = None)]
struct Args {
    /// JSON generator config; flags below override its values
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(short = 'W', long = "width")]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(short = 'H', long = "height")]
    height: Option<usize>,

    /// Maximum number of rooms, Start included
    #[arg(short = 'r', long = "rooms")]
    rooms: Option<usize>,

    /// Seed for a reproducible layout
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Favor rooms around the grid center instead of around the Start room
    #[arg(long = "centered")]
    centered: bool,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

/// Errors reported by the command-line front end
#[derive(Error, Debug)]
enum CliError {
    #[error("could not read config '{path}': {source}")]
    ReadConfig {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config '{path}': {source}")]
    ParseConfig {
        path: String,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Dungeon(#[from] DungeonError),
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dungen: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; `RUST_LOG` takes precedence over `--verbose`
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), CliError> {
    let config = build_config(args)?;
    let mut rng = match config.seed {
        Some(seed) => DungeonRng::new(seed),
        None => DungeonRng::from_entropy(),
    };
    let grid = generate_with_rng(&config, &mut rng)?;

    print!("{}", render::grid_dump(&grid));
    println!("{}", render::summary(&grid, rng.seed()));
    Ok(())
}

/// Merge the optional config file with command-line overrides
fn build_config(args: &Args) -> Result<GeneratorConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => GeneratorConfig::default(),
    };

    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(rooms) = args.rooms {
        config.room_cap = rooms;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if args.centered {
        config.policy = ProbabilityPolicy::centered();
    }

    tracing::debug!(?config, "configuration resolved");
    Ok(config)
}

fn load_config(path: &Path) -> Result<GeneratorConfig, CliError> {
    let display = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::ParseConfig {
        path: display,
        source,
    })
}
