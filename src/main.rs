//! SAVANNA - CLI Entry Point
//!
//! Predator-prey pursuit simulation.

use clap::{Parser, Subcommand};
use savanna::{benchmark, Config, World};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "savanna")]
#[command(version)]
#[command(about = "Predator-prey pursuit simulation with vision-cone hunting")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation
    Run {
        /// Configuration file (YAML)
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,

        /// Number of ticks to simulate
        #[arg(short, long, default_value = "10000")]
        ticks: u64,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// Write the stats history to this JSON file
        #[arg(long)]
        stats_out: Option<PathBuf>,

        /// Quiet mode (minimal output)
        #[arg(short, long)]
        quiet: bool,
    },

    /// Run performance benchmark
    Benchmark {
        /// Number of ticks
        #[arg(short, long, default_value = "1000")]
        ticks: u64,

        /// Prey population size
        #[arg(short, long, default_value = "1000")]
        prey: usize,
    },

    /// Generate default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "config.yaml")]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            ticks,
            seed,
            stats_out,
            quiet,
        } => run_simulation(config, ticks, seed, stats_out, quiet),

        Commands::Benchmark { ticks, prey } => run_benchmark(ticks, prey),

        Commands::Init { output } => generate_config(output),
    }
}

fn run_simulation(
    config_path: PathBuf,
    ticks: u64,
    seed: Option<u64>,
    stats_out: Option<PathBuf>,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Load or create config
    let config = if config_path.exists() {
        println!("Loading config from: {:?}", config_path);
        Config::from_file(&config_path)?
    } else {
        println!("Using default configuration");
        Config::default()
    };

    // Create world
    let mut world = if let Some(s) = seed {
        println!("Using seed: {}", s);
        World::new_with_seed(config.clone(), s)
    } else {
        World::new(config.clone())
    };

    println!("Starting simulation");
    println!("  Prey: {}", world.prey_remaining());
    println!("  Predators: {}", world.predators.len());
    println!(
        "  World: {:.0}x{:.0}, view distance {:.0}",
        config.world.width, config.world.height, config.world.view_distance
    );
    println!("  Ticks: {}", ticks);
    println!();

    let start = Instant::now();
    let stats_interval = config.logging.stats_interval;

    for i in 0..ticks {
        world.step();

        if !quiet && i % stats_interval == 0 {
            println!("{}", world.stats.summary());
        }

        if world.is_prey_extinct() {
            println!("\nAll prey captured at tick {}", world.tick);
            break;
        }
    }

    let elapsed = start.elapsed();
    let ticks_per_sec = world.tick as f64 / elapsed.as_secs_f64();

    println!();
    println!("=== Simulation Complete ===");
    println!("Time: {:.2}s", elapsed.as_secs_f64());
    println!("Ticks: {}", world.tick);
    println!("Speed: {:.1} ticks/s", ticks_per_sec);
    println!("Prey remaining: {}", world.prey_remaining());
    println!("Captures: {}", world.captures_total());
    println!("Seed: {}", world.seed());

    if let Some(path) = stats_out {
        world
            .stats_history
            .save(path.to_str().ok_or("invalid stats path")?)?;
        println!("Stats history: {:?}", path);
    }

    Ok(())
}

fn run_benchmark(ticks: u64, prey: usize) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== SAVANNA Benchmark ===");
    println!("Ticks: {}", ticks);
    println!("Prey: {}", prey);
    println!();

    let result = benchmark(ticks, prey);
    println!("{}", result);

    Ok(())
}

fn generate_config(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    config.save(&output)?;
    println!("Configuration saved to: {:?}", output);
    Ok(())
}
