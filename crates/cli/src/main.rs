//! Loop-tiling cache simulator CLI.
//!
//! This binary provides a single entry point for both simulation modes. It performs:
//! 1. **Replay:** Run one traversal order (naive or blocked) and report hit
//!    statistics, optionally pacing step by step with live counters.
//! 2. **Search:** Brute-force every block-size triple for the best hit ratio.

use clap::{Args, Parser, Subcommand};
use std::time::Duration;
use std::{fs, process, thread};
use tracing_subscriber::EnvFilter;

use tilesim_core::config::SimConfig;
use tilesim_core::sim::optimizer::find_best_tiling;
use tilesim_core::sim::runner::SimulationRunner;
use tilesim_core::traversal::{BlockSizes, TraversalOrder};

/// Command-line interface definition.
#[derive(Parser, Debug)]
#[command(
    name = "tilesim",
    version,
    about = "Cache-locality simulator for loop tilings of matrix multiplication",
    long_about = "Replay a traversal order against a simulated LRU cache, or brute-force the\nblock sizes with the best hit ratio.\n\nConfiguration comes from a JSON file (--config) with per-flag overrides, or\nbuilt-in defaults.\n\nExamples:\n  tilesim run --rows1 50 --common 50 --cols2 50 --blocks 8,10,1\n  tilesim run --blocks 4,4,4 --delay-ms 5\n  tilesim tile --config search.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Configuration source and overrides shared by both subcommands.
#[derive(Args, Debug)]
struct ConfigArgs {
    /// JSON configuration file; the flags below override its values.
    #[arg(short, long)]
    config: Option<String>,

    /// Rows of the left operand (and the result).
    #[arg(long)]
    rows1: Option<usize>,

    /// Shared dimension: columns of the left operand, rows of the right.
    #[arg(long)]
    common: Option<usize>,

    /// Columns of the right operand (and the result).
    #[arg(long)]
    cols2: Option<usize>,

    /// Cache capacity, in lines.
    #[arg(long)]
    capacity: Option<usize>,

    /// Cache-line size, in matrix cells.
    #[arg(long)]
    line: Option<usize>,

    /// Starting misalignment within the first line (0 <= offset < line).
    #[arg(long)]
    offset: Option<usize>,
}

impl ConfigArgs {
    /// Loads the JSON file (or defaults) and applies flag overrides.
    ///
    /// Exits the process with code 1 when the file cannot be read or parsed.
    fn resolve(&self) -> SimConfig {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path).unwrap_or_else(|e| {
                    eprintln!("Error reading config {path}: {e}");
                    process::exit(1);
                });
                serde_json::from_str(&text).unwrap_or_else(|e| {
                    eprintln!("Error parsing config {path}: {e}");
                    process::exit(1);
                })
            }
            None => SimConfig::default(),
        };
        if let Some(v) = self.rows1 {
            config.matrix.rows1 = v;
        }
        if let Some(v) = self.common {
            config.matrix.common = v;
        }
        if let Some(v) = self.cols2 {
            config.matrix.cols2 = v;
        }
        if let Some(v) = self.capacity {
            config.cache.capacity_lines = v;
        }
        if let Some(v) = self.line {
            config.cache.line_cells = v;
        }
        if let Some(v) = self.offset {
            config.cache.offset = v;
        }
        config
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay one traversal order and report hit statistics.
    Run {
        /// Configuration source and overrides.
        #[command(flatten)]
        config: ConfigArgs,

        /// Block sizes "b1,b2,b3" for the blocked order; omit for naive.
        #[arg(long)]
        blocks: Option<String>,

        /// Milliseconds to sleep between steps, printing live counters.
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Brute-force every block-size triple for the best hit ratio.
    Tile {
        /// Configuration source and overrides.
        #[command(flatten)]
        config: ConfigArgs,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            config,
            blocks,
            delay_ms,
        } => cmd_run(&config, blocks.as_deref(), delay_ms),
        Commands::Tile { config } => cmd_tile(&config),
    }
}

/// Replays one traversal and prints the statistics report.
///
/// With pacing (CLI flag or config), each step prints a live counter line
/// and the thread sleeps between steps; the kernel itself never sleeps.
fn cmd_run(config_args: &ConfigArgs, blocks: Option<&str>, delay_ms: Option<u64>) {
    let config = config_args.resolve();
    let order = match blocks {
        Some(raw) => match parse_blocks(raw) {
            Some(b) => TraversalOrder::Blocked(b),
            None => {
                eprintln!(
                    "Error: --blocks expects three comma-separated positive integers, e.g. 8,10,1"
                );
                process::exit(1);
            }
        },
        None => TraversalOrder::Naive,
    };

    let mut runner = match SimulationRunner::new(order, &config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    println!(
        "[*] Replay: {}x{}x{} | cache {} lines x {} cells, offset {} | order {:?}",
        config.matrix.rows1,
        config.matrix.common,
        config.matrix.cols2,
        config.cache.capacity_lines,
        config.cache.line_cells,
        config.cache.offset,
        order
    );

    let delay = delay_ms.or(config.step_delay_ms);
    while let Some(event) = runner.step() {
        if let Some(ms) = delay {
            let c = event.counters;
            println!(
                "step ({:>3}, {:>3}, {:>3})   hits {:<8} misses {:<8} ratio {:.5}",
                event.step.row,
                event.step.col,
                event.step.k,
                c.hits,
                c.misses,
                c.hit_ratio()
            );
            thread::sleep(Duration::from_millis(ms));
        }
    }
    runner.stats().print();
}

/// Runs the brute-force search and prints the winning tiling.
fn cmd_tile(config_args: &ConfigArgs) {
    let config = config_args.resolve();
    println!(
        "[*] Tiling search: {}x{}x{} | cache {} lines x {} cells, offset {}",
        config.matrix.rows1,
        config.matrix.common,
        config.matrix.cols2,
        config.cache.capacity_lines,
        config.cache.line_cells,
        config.cache.offset
    );

    match find_best_tiling(&config) {
        Ok(result) => {
            println!("best hit ratio        {:.5}", result.best_hit_ratio);
            println!(
                "best block sizes      b1={} b2={} b3={}",
                result.best_blocks.b1, result.best_blocks.b2, result.best_blocks.b3
            );
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

/// Parses "b1,b2,b3" into block sizes.
fn parse_blocks(raw: &str) -> Option<BlockSizes> {
    let mut parts = raw.split(',').map(|p| p.trim().parse::<usize>().ok());
    let b1 = parts.next()??;
    let b2 = parts.next()??;
    let b3 = parts.next()??;
    if parts.next().is_some() {
        return None;
    }
    Some(BlockSizes { b1, b2, b3 })
}
