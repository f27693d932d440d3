// src/config.rs
//! Input ranges and session settings
//!
//! Every widget on the dashboard has a declared range. The front end either
//! snaps a value into range with [`ParamRange::clamp`] or refuses it with
//! [`ParamRange::check`] before anything reaches the formulas.

use crate::error::{validation::*, LabError, LabResult};
use crate::paths::DEFAULT_STEPS;
use std::path::PathBuf;

/// Declared slider/number-input range
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

impl ParamRange {
    pub const fn new(min: f64, max: f64, default: f64, step: f64) -> Self {
        ParamRange {
            min,
            max,
            default,
            step,
        }
    }

    /// Snap into [min, max]; NaN falls back to the default
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            tracing::warn!(value, default = self.default, "non-numeric input replaced by default");
            return self.default;
        }
        let clamped = value.max(self.min).min(self.max);
        if clamped != value {
            tracing::warn!(value, clamped, "input clamped into range");
        }
        clamped
    }

    /// Reject values outside [min, max]
    pub fn check(&self, name: &str, value: f64) -> LabResult<f64> {
        validate_range(name, value, self.min, self.max)?;
        Ok(value)
    }

    fn validate(&self, field: &str) -> LabResult<()> {
        if !(self.min <= self.default && self.default <= self.max) || !(self.step > 0.0) {
            return Err(LabError::InvalidConfiguration {
                field: field.to_string(),
                reason: format!(
                    "range [{}, {}] with default {} and step {} is inconsistent",
                    self.min, self.max, self.default, self.step
                ),
            });
        }
        Ok(())
    }
}

/// Ranges for the Black-Scholes calculator and Greeks pages
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricingRanges {
    pub spot: ParamRange,
    pub strike: ParamRange,
    pub maturity: ParamRange,
    pub rate: ParamRange,
    pub sigma: ParamRange,
}

impl Default for PricingRanges {
    fn default() -> Self {
        PricingRanges {
            spot: ParamRange::new(50.0, 150.0, 100.0, 1.0),
            strike: ParamRange::new(50.0, 150.0, 100.0, 1.0),
            maturity: ParamRange::new(0.1, 2.0, 1.0, 0.1),
            rate: ParamRange::new(0.0, 0.1, 0.05, 0.01),
            sigma: ParamRange::new(0.01, 0.5, 0.2, 0.01),
        }
    }
}

/// Ranges for the option profit simulator
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PayoffRanges {
    pub spot: ParamRange,
    pub strike: ParamRange,
    pub premium: ParamRange,
}

impl Default for PayoffRanges {
    fn default() -> Self {
        PayoffRanges {
            spot: ParamRange::new(0.0, 200.0, 100.0, 1.0),
            strike: ParamRange::new(0.0, 200.0, 100.0, 1.0),
            premium: ParamRange::new(0.0, 50.0, 10.0, 0.5),
        }
    }
}

/// Ranges for the probability and simulation pages
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationRanges {
    pub normal_mu: ParamRange,
    pub normal_sigma: ParamRange,
    pub brownian_sigma: ParamRange,
    pub initial_price: ParamRange,
    pub force: ParamRange,
}

impl Default for SimulationRanges {
    fn default() -> Self {
        SimulationRanges {
            normal_mu: ParamRange::new(-5.0, 5.0, 0.0, 0.1),
            normal_sigma: ParamRange::new(0.1, 3.0, 1.0, 0.1),
            brownian_sigma: ParamRange::new(0.1, 0.5, 0.2, 0.01),
            initial_price: ParamRange::new(50.0, 150.0, 100.0, 1.0),
            force: ParamRange::new(-1.0, 1.0, 0.0, 0.1),
        }
    }
}

#[derive(Clone, Debug)]
pub struct LabConfig {
    pub pricing: PricingRanges,
    pub payoff: PayoffRanges,
    pub simulation: SimulationRanges,
    pub steps: usize,              // Points per animated run
    pub frame_delay_ms: u64,       // Pause between animation frames
    pub seed: Option<u64>,         // Fixed seed, or fresh entropy per run
    pub greek_curve_points: usize, // Spot grid for Greek/price curves
    pub payoff_points: usize,      // Terminal price grid for the payoff diagram
    pub normal_points: usize,      // Grid for the density plot
    pub image_path: PathBuf,
    pub video_path: PathBuf,
}

impl Default for LabConfig {
    fn default() -> Self {
        LabConfig {
            pricing: PricingRanges::default(),
            payoff: PayoffRanges::default(),
            simulation: SimulationRanges::default(),
            steps: DEFAULT_STEPS,
            frame_delay_ms: 100,
            seed: None,
            greek_curve_points: 100,
            payoff_points: 1000,
            normal_points: 1000,
            image_path: PathBuf::from("images/IMG_1269.jpg"),
            video_path: PathBuf::from("videos/galton_board.mp4"),
        }
    }
}

impl LabConfig {
    /// Defaults overridden by `BS_LAB_*` variables (a `.env` file is honoured)
    pub fn from_env() -> LabResult<Self> {
        dotenvy::dotenv().ok();
        let mut cfg = LabConfig::default();

        if let Some(v) = env_var("BS_LAB_STEPS") {
            cfg.steps = parse_var("BS_LAB_STEPS", &v)?;
        }
        if let Some(v) = env_var("BS_LAB_FRAME_DELAY_MS") {
            cfg.frame_delay_ms = parse_var("BS_LAB_FRAME_DELAY_MS", &v)?;
        }
        if let Some(v) = env_var("BS_LAB_SEED") {
            cfg.seed = Some(parse_var("BS_LAB_SEED", &v)?);
        }
        if let Some(v) = env_var("BS_LAB_IMAGE_PATH") {
            cfg.image_path = PathBuf::from(v);
        }
        if let Some(v) = env_var("BS_LAB_VIDEO_PATH") {
            cfg.video_path = PathBuf::from(v);
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> LabResult<()> {
        validate_steps("steps", self.steps)?;
        validate_steps("greek_curve_points", self.greek_curve_points)?;
        validate_steps("payoff_points", self.payoff_points)?;
        validate_steps("normal_points", self.normal_points)?;

        let ranges = [
            ("pricing.spot", self.pricing.spot),
            ("pricing.strike", self.pricing.strike),
            ("pricing.maturity", self.pricing.maturity),
            ("pricing.rate", self.pricing.rate),
            ("pricing.sigma", self.pricing.sigma),
            ("payoff.spot", self.payoff.spot),
            ("payoff.strike", self.payoff.strike),
            ("payoff.premium", self.payoff.premium),
            ("simulation.normal_mu", self.simulation.normal_mu),
            ("simulation.normal_sigma", self.simulation.normal_sigma),
            ("simulation.brownian_sigma", self.simulation.brownian_sigma),
            ("simulation.initial_price", self.simulation.initial_price),
            ("simulation.force", self.simulation.force),
        ];
        for (field, range) in ranges {
            range.validate(field)?;
        }
        Ok(())
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T>(key: &str, value: &str) -> LabResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| LabError::InvalidConfiguration {
        field: key.to_string(),
        reason: e.to_string(),
    })
}
