//! Monte Carlo trials: open random sites until the grid percolates.
//!
//! A single trial yields one estimate of the percolation threshold, the
//! fraction of sites open at the moment the top row first connects to the
//! bottom row. [`PercolationStats`] repeats independent trials and
//! summarises the estimates.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use rand::Rng;

use crate::error::{PercolationError, Result};
use crate::grid::PercolationGrid;
use crate::random::random_site;
use crate::stats::{self, WelfordAccumulator};

/// z-score of the two-sided 95% confidence interval.
const CONFIDENCE_95: f64 = 1.96;

/// Outcome of one percolation trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialReport {
    pub grid_size: usize,
    /// Open sites at the moment percolation was first detected.
    pub open_sites: usize,
    /// `open_sites / N²`.
    pub threshold: f64,
    pub elapsed: Duration,
}

/// Runs one trial on a fresh `n × n` grid.
///
/// Sites are drawn with replacement; drawing an already-open site costs an
/// iteration and changes nothing. The loop ends at the latest when every
/// site is open.
///
/// # Errors
/// [`PercolationError::InvalidSize`] if `n` is not a valid grid size.
///
/// # Examples
/// ```
/// use u_percolation::experiment::run_trial;
/// use u_percolation::random::create_rng;
///
/// let mut rng = create_rng(42);
/// let report = run_trial(10, &mut rng).unwrap();
/// assert!(report.open_sites >= 10 && report.open_sites <= 100);
/// assert!(report.threshold > 0.0 && report.threshold <= 1.0);
/// ```
pub fn run_trial<R: Rng>(n: usize, rng: &mut R) -> Result<TrialReport> {
    let start = Instant::now();
    let mut grid = PercolationGrid::new(n)?;

    while !grid.percolates() {
        let (row, col) = random_site(n, rng);
        grid.open(row, col)?;
    }

    let open_sites = grid.number_of_open_sites();
    let report = TrialReport {
        grid_size: n,
        open_sites,
        threshold: open_sites as f64 / grid.site_count() as f64,
        elapsed: start.elapsed(),
    };
    log::debug!(
        "trial on {n}x{n}: {} open sites, threshold {:.4}, {:?}",
        report.open_sites,
        report.threshold,
        report.elapsed
    );
    Ok(report)
}

/// Runs one trial and writes three lines to `out`: the open-site count,
/// the threshold estimate and the elapsed wall-clock seconds.
///
/// # Errors
/// - [`PercolationError::InvalidSize`] for an invalid `n`; nothing is written.
/// - [`PercolationError::Io`] if `out` rejects a write.
pub fn run_percolate<R: Rng, W: Write>(n: usize, rng: &mut R, out: &mut W) -> Result<TrialReport> {
    let report = run_trial(n, rng)?;
    writeln!(out, "{}", report.open_sites)?;
    writeln!(out, "{}", report.threshold)?;
    writeln!(out, "{}", report.elapsed.as_secs_f64())?;
    Ok(report)
}

/// Summary of repeated independent trials on the same grid size.
///
/// # Examples
/// ```
/// use u_percolation::experiment::PercolationStats;
/// use u_percolation::random::create_rng;
///
/// let mut rng = create_rng(7);
/// let stats = PercolationStats::run(20, 30, &mut rng).unwrap();
/// assert_eq!(stats.trials(), 30);
/// let (lo, hi) = (stats.confidence_lo().unwrap(), stats.confidence_hi().unwrap());
/// assert!(lo <= stats.mean() && stats.mean() <= hi);
/// ```
#[derive(Debug, Clone)]
pub struct PercolationStats {
    grid_size: usize,
    thresholds: Vec<f64>,
    mean: f64,
    stddev: Option<f64>,
    elapsed: Duration,
}

impl PercolationStats {
    /// Performs `trials` independent trials on `n × n` grids.
    ///
    /// # Errors
    /// - [`PercolationError::InvalidTrialCount`] if `trials == 0`.
    /// - [`PercolationError::InvalidSize`] if `n` is not a valid grid size.
    pub fn run<R: Rng>(n: usize, trials: usize, rng: &mut R) -> Result<Self> {
        if trials == 0 {
            return Err(PercolationError::InvalidTrialCount { trials });
        }

        let start = Instant::now();
        let mut acc = WelfordAccumulator::new();
        let mut thresholds = Vec::with_capacity(trials);
        for _ in 0..trials {
            let report = run_trial(n, rng)?;
            acc.update(report.threshold);
            thresholds.push(report.threshold);
        }

        // Thresholds lie in (0, 1], so the mean always exists.
        let mean = stats::mean(&thresholds).unwrap_or_default();
        let summary = Self {
            grid_size: n,
            thresholds,
            mean,
            stddev: acc.sample_std_dev(),
            elapsed: start.elapsed(),
        };
        log::info!(
            "{trials} trials on {n}x{n}: mean {:.6}, stddev {:?}",
            summary.mean,
            summary.stddev
        );
        Ok(summary)
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Per-trial threshold estimates, in the order they were run.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Sample mean of the threshold estimates.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation; `None` with fewer than two trials.
    pub fn stddev(&self) -> Option<f64> {
        self.stddev
    }

    /// Lower end of the 95% confidence interval.
    pub fn confidence_lo(&self) -> Option<f64> {
        self.half_width().map(|h| self.mean - h)
    }

    /// Upper end of the 95% confidence interval.
    pub fn confidence_hi(&self) -> Option<f64> {
        self.half_width().map(|h| self.mean + h)
    }

    /// Wall-clock time spent across all trials.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Writes the summary as `key = value` lines.
    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "mean                    = {}", self.mean)?;
        match self.stddev {
            Some(s) => writeln!(out, "stddev                  = {s}")?,
            None => writeln!(out, "stddev                  = n/a")?,
        }
        match (self.confidence_lo(), self.confidence_hi()) {
            (Some(lo), Some(hi)) => writeln!(out, "95% confidence interval = [{lo}, {hi}]")?,
            _ => writeln!(out, "95% confidence interval = n/a")?,
        }
        writeln!(out, "elapsed                 = {}", self.elapsed.as_secs_f64())
    }

    fn half_width(&self) -> Option<f64> {
        self.stddev
            .map(|s| CONFIDENCE_95 * s / (self.thresholds.len() as f64).sqrt())
    }
}
