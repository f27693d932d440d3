//! Option Payoff at Expiry
//!
//! # Mathematical Definitions
//!
//! Profit of a long option held to expiry, net of the premium paid:
//! - **Call**: max(S_T - K, 0) - premium
//! - **Put**: max(K - S_T, 0) - premium
//!
//! The diagram samples S_T over [0, 2K] and splits the result into a profit
//! segment (payoff ≥ 0) and a loss segment (payoff < 0) so the renderer can
//! shade them separately.

use crate::analytics::bs_analytic::OptionKind;
use crate::error::{validation::*, LabResult};
use crate::math_utils::linspace;
use ndarray::Array1;

/// Net profit of a long option at expiry
pub fn payoff_at_expiry(kind: OptionKind, s_t: f64, strike: f64, premium: f64) -> f64 {
    match kind {
        OptionKind::Call => (s_t - strike).max(0.0) - premium,
        OptionKind::Put => (strike - s_t).max(0.0) - premium,
    }
}

/// Profit/loss profile of one option over terminal prices
#[derive(Clone, Debug)]
pub struct PayoffDiagram {
    pub kind: OptionKind,
    pub strike: f64,
    pub premium: f64,
    pub terminal_prices: Array1<f64>,
    pub payoff: Array1<f64>,
}

impl PayoffDiagram {
    pub fn new(kind: OptionKind, strike: f64, premium: f64, points: usize) -> LabResult<Self> {
        validate_non_negative("strike", strike)?;
        validate_non_negative("premium", premium)?;
        validate_steps("points", points)?;

        let terminal_prices = linspace(0.0, 2.0 * strike, points);
        let payoff = terminal_prices.mapv(|s_t| payoff_at_expiry(kind, s_t, strike, premium));

        Ok(PayoffDiagram {
            kind,
            strike,
            premium,
            terminal_prices,
            payoff,
        })
    }

    /// Payoff where it is non-negative, `None` elsewhere
    pub fn profit_segment(&self) -> Vec<Option<f64>> {
        self.payoff.iter().map(|&v| (v >= 0.0).then_some(v)).collect()
    }

    /// Payoff where it is negative, `None` elsewhere
    pub fn loss_segment(&self) -> Vec<Option<f64>> {
        self.payoff.iter().map(|&v| (v < 0.0).then_some(v)).collect()
    }

    /// Terminal price at which the position breaks even
    pub fn breakeven(&self) -> f64 {
        match self.kind {
            OptionKind::Call => self.strike + self.premium,
            OptionKind::Put => self.strike - self.premium,
        }
    }

    /// Lowest and highest payoff on the grid, used to size the strike marker
    pub fn payoff_range(&self) -> (f64, f64) {
        self.payoff
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }

    pub fn points(&self) -> Vec<(f64, f64)> {
        self.terminal_prices
            .iter()
            .copied()
            .zip(self.payoff.iter().copied())
            .collect()
    }
}
