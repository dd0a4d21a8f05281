//! FxLab CLI — event-driven backtest sweeps over historical FX ticks.
//!
//! Commands:
//! - `sweep` — run a hyperparameter sweep from a TOML config or flags
//! - `generate` — write a synthetic price CSV for smoke runs

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use fxlab_core::feed::{generate_ticks, write_price_file};
use fxlab_runner::{CsvTrialFactory, GridConfig, ParamGrid, SweepConfig, SweepRunner};

#[derive(Parser)]
#[command(name = "fxlab", about = "FxLab CLI — event-driven FX backtest sweeps")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a parameter sweep from a TOML config file or command-line flags.
    Sweep {
        /// Path to a TOML config file. Overrides all other flags.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Instruments to trade (e.g. GBPUSD EURUSD); the strategy trades the first.
        #[arg(long, num_args = 1..)]
        instruments: Vec<String>,

        /// Short-window values for the grid.
        #[arg(long, num_args = 1.., value_delimiter = ',')]
        short_windows: Vec<usize>,

        /// Long-window values for the grid.
        #[arg(long, num_args = 1.., value_delimiter = ',')]
        long_windows: Vec<usize>,

        /// Starting equity per trial.
        #[arg(long, default_value_t = 100_000.0)]
        equity: f64,

        /// Units per order.
        #[arg(long, default_value_t = 100_000.0)]
        trade_units: f64,

        /// Pacing delay per iteration, in milliseconds.
        #[arg(long, default_value_t = 0)]
        heartbeat_ms: u64,

        /// Iteration cap per trial.
        #[arg(long, default_value_t = 10_000_000_000)]
        max_iterations: u64,

        /// Directory holding <instrument>.csv price files.
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        /// Result log destination.
        #[arg(long, default_value = "results/sweep.csv")]
        output: PathBuf,
    },
    /// Generate a synthetic price CSV for one instrument.
    Generate {
        /// Instrument identifier (names the output file).
        #[arg(long)]
        instrument: String,

        /// Number of ticks to generate.
        #[arg(long, default_value_t = 10_000)]
        ticks: u64,

        /// Random-walk seed.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Directory to write <instrument>.csv into.
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sweep {
            config,
            instruments,
            short_windows,
            long_windows,
            equity,
            trade_units,
            heartbeat_ms,
            max_iterations,
            data_dir,
            output,
        } => {
            let config = match config {
                Some(path) => SweepConfig::from_toml_file(&path)
                    .with_context(|| format!("loading sweep config {}", path.display()))?,
                None => {
                    if instruments.is_empty() || short_windows.is_empty() || long_windows.is_empty()
                    {
                        bail!(
                            "either --config or --instruments, --short-windows and \
                             --long-windows are required"
                        );
                    }
                    let config = SweepConfig {
                        instruments,
                        equity,
                        trade_units,
                        heartbeat_ms,
                        max_iterations,
                        data_dir,
                        output,
                        grid: GridConfig {
                            short_windows,
                            long_windows,
                        },
                    };
                    config.validate()?;
                    config
                }
            };
            run_sweep_cmd(&config)
        }
        Commands::Generate {
            instrument,
            ticks,
            seed,
            data_dir,
        } => run_generate(&instrument, ticks, seed, &data_dir),
    }
}

fn run_sweep_cmd(config: &SweepConfig) -> Result<()> {
    let grid = ParamGrid::from_config(&config.grid);
    println!("Sweep fingerprint: {}", config.fingerprint());
    println!(
        "Grid: {} combinations over {:?} x {:?}",
        grid.size(),
        config.grid.short_windows,
        config.grid.long_windows
    );

    let runner = SweepRunner::new(
        CsvTrialFactory::new(config),
        std::time::Duration::from_millis(config.heartbeat_ms),
        config.max_iterations,
    );
    let results = runner.run_with_progress(&grid, &config.output, |index, total, result| {
        println!(
            "Trial {}/{}: short={} long={} return={:.2}% sharpe={:.2}",
            index + 1,
            total,
            result.short_window,
            result.long_window,
            result.total_return,
            result.sharpe
        );
    })?;

    if let Some(best) = results.iter().max_by(|a, b| {
        a.sharpe
            .partial_cmp(&b.sharpe)
            .unwrap_or(std::cmp::Ordering::Equal)
    }) {
        println!(
            "Best by Sharpe: short={} long={} sharpe={:.2}",
            best.short_window, best.long_window, best.sharpe
        );
    }
    println!("Results written to {}", config.output.display());
    Ok(())
}

fn run_generate(instrument: &str, ticks: u64, seed: u64, data_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("creating data dir {}", data_dir.display()))?;
    let path = data_dir.join(format!("{instrument}.csv"));
    let series = generate_ticks(instrument, ticks, seed);
    write_price_file(&path, &series)?;
    println!("Wrote {} ticks to {}", series.len(), path.display());
    Ok(())
}
