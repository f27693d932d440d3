// src/paths/ensemble.rs
//! Ensemble statistics over many independent paths
//!
//! A single animated run shows one realisation; these helpers run many of
//! them and summarise the net move `price[last] - price[0]`, which is how
//! the classroom claims ("zero force means no trend on average") are checked.
//!
//! # Expected values
//!
//! For `n = steps - 1` increments:
//! ```text
//! Force walk:     E[ΔS] = f·n,  Var[ΔS] = n
//! Brownian path:  E[ΔS] = 0,    Var[ΔS] = σ²·n
//! ```

use super::{BrownianPath, ForceDrivenPath};
use crate::error::{LabError, LabResult};
use crate::models::force::validate_force;
use crate::rng::RngFactory;
use rayon::prelude::*;

/// Initial price used for ensemble runs; the net move does not depend on it
const ENSEMBLE_INITIAL_PRICE: f64 = 100.0;

/// Sample statistics of the net move of each run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriftStats {
    pub runs: usize,
    pub mean: f64,
    pub variance: f64,
}

impl DriftStats {
    fn from_samples(samples: &[f64]) -> Self {
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = if samples.len() > 1 {
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0)
        } else {
            0.0
        };
        DriftStats {
            runs: samples.len(),
            mean,
            variance,
        }
    }

    /// Standard error of the mean
    pub fn std_error(&self) -> f64 {
        (self.variance / self.runs as f64).sqrt()
    }
}

fn validate_runs(runs: usize) -> LabResult<()> {
    if runs == 0 {
        return Err(LabError::InvalidConfiguration {
            field: "runs".to_string(),
            reason: "must be greater than 0".to_string(),
        });
    }
    Ok(())
}

/// Net move of `runs` force-driven paths under a constant force
pub fn force_drift_stats(force: f64, runs: usize, steps: usize, seed: u64) -> LabResult<DriftStats> {
    validate_force(force)?;
    validate_runs(runs)?;
    let factory = RngFactory::new(seed);

    let moves = (0..runs)
        .into_par_iter()
        .map(|i| -> LabResult<f64> {
            let mut path = ForceDrivenPath::with_rng(ENSEMBLE_INITIAL_PRICE, steps, factory.create_std_rng(i as u64))?;
            let mut last = ENSEMBLE_INITIAL_PRICE;
            while let Some(point) = path.next_with_force(force)? {
                last = point.price;
            }
            Ok(last - ENSEMBLE_INITIAL_PRICE)
        })
        .collect::<LabResult<Vec<f64>>>()?;

    let stats = DriftStats::from_samples(&moves);
    tracing::debug!(force, runs, steps, mean = stats.mean, "force ensemble finished");
    Ok(stats)
}

/// Net move of `runs` Brownian paths with volatility `sigma`
pub fn brownian_drift_stats(sigma: f64, runs: usize, steps: usize, seed: u64) -> LabResult<DriftStats> {
    validate_runs(runs)?;
    let factory = RngFactory::new(seed);

    let moves = (0..runs)
        .into_par_iter()
        .map(|i| -> LabResult<f64> {
            let path = BrownianPath::with_rng(ENSEMBLE_INITIAL_PRICE, sigma, steps, factory.create_std_rng(i as u64))?;
            let last = path.last().map_or(ENSEMBLE_INITIAL_PRICE, |p| p.price);
            Ok(last - ENSEMBLE_INITIAL_PRICE)
        })
        .collect::<LabResult<Vec<f64>>>()?;

    let stats = DriftStats::from_samples(&moves);
    tracing::debug!(sigma, runs, steps, mean = stats.mean, "brownian ensemble finished");
    Ok(stats)
}
