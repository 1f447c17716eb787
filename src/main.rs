//! Command-line driver for percolation threshold experiments.
//! Arguments:
//! - grid-size: side length N of the N×N grid
//! - trials: number of independent trials
//! - seed: RNG seed; drawn at random and logged when omitted

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use u_percolation::experiment::{run_percolate, PercolationStats};
use u_percolation::random::{create_rng, entropy_seed};

/// Arguments for the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Side length of the square grid
    #[arg(short = 'n', long, default_value_t = 200)]
    grid_size: usize,

    /// Independent trials; more than one prints mean, stddev and 95% interval
    #[arg(short, long, default_value_t = 1)]
    trials: usize,

    /// Seed for the random site generator
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(entropy_seed);
    log::info!(
        "grid {}x{}, {} trial(s), seed {seed}",
        args.grid_size,
        args.grid_size,
        args.trials
    );
    let mut rng = create_rng(seed);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.trials == 1 {
        run_percolate(args.grid_size, &mut rng, &mut out)
            .with_context(|| format!("percolation trial on a {} grid", args.grid_size))?;
    } else {
        let stats = PercolationStats::run(args.grid_size, args.trials, &mut rng)
            .with_context(|| format!("{} trials on a {} grid", args.trials, args.grid_size))?;
        stats.write_summary(&mut out).context("writing summary")?;
    }
    out.flush().context("flushing stdout")?;
    Ok(())
}
