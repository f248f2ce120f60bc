use std::path::PathBuf;

use antfarm::{Simulation, SimulationConfig};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the headless runner.
#[derive(Parser)]
#[command(name = "antfarm", version, about = "Competing ant colonies, run headless")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed, overrides the config file.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many ticks, overrides the config file.
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

/// Loads the simulation configuration from a TOML file or uses defaults.
fn load_config(path: Option<PathBuf>) -> Result<SimulationConfig> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
            let config: SimulationConfig =
                toml::from_str(&content).context("Failed to parse config file")?;
            info!("Loaded config from '{}'", path.display());
            Ok(config)
        }
        None => {
            info!("No config file provided, using defaults.");
            Ok(SimulationConfig::default())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let mut config = load_config(cli.config)?;
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(max_ticks) = cli.max_ticks {
        config.max_ticks = max_ticks;
    }
    info!("Config: {:?}", config);

    let max_ticks = config.max_ticks;
    let mut sim = Simulation::new(config).context("Invalid configuration")?;
    let winner = sim.run(max_ticks);

    println!("Finished after {} ticks (seed {})", sim.tick, sim.seed);
    for colony in &sim.colonies {
        if let Some(nest) = sim.nest_of(colony) {
            println!(
                "  {}: nest at {}, food {}, ants carrying {}",
                colony.colony_id,
                nest.position(),
                nest.total_food(),
                colony.carrying_count()
            );
        }
    }
    match winner {
        Some(colony_id) => println!("Winner: {}", colony_id),
        None => println!("No colony reached {} food", sim.config.food_target),
    }
    Ok(())
}
