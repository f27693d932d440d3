// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes formulas for European options and Greeks
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! The risk-neutral pricing formula gives:
//! ```text
//! V(S,t) = e^(-r(T-t)) * E^Q[payoff(S_T) | S_t = S]
//! ```
//!
//! For European options, this has closed-form solutions involving
//! the cumulative normal distribution function Φ(x).
//!
//! Every formula divides by σ√T and takes ln(S/K), so [`OptionParams`] can
//! only be built from inputs that keep both well defined.

use crate::error::{validation::*, LabError, LabResult};
use crate::math_utils::{norm_cdf, norm_pdf};
use bitflags::bitflags;
use std::fmt;
use std::str::FromStr;

/// Call or put
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionKind {
    Call,
    Put,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Call => write!(f, "Call"),
            OptionKind::Put => write!(f, "Put"),
        }
    }
}

impl FromStr for OptionKind {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "call" => Ok(OptionKind::Call),
            "put" => Ok(OptionKind::Put),
            other => Err(LabError::InvalidConfiguration {
                field: "option_kind".to_string(),
                reason: format!("unknown option kind '{}' (expected Call or Put)", other),
            }),
        }
    }
}

/// Sensitivity selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Greek {
    Delta,
    Gamma,
    Theta,
    Vega,
    Rho,
}

impl Greek {
    pub const ALL: [Greek; 5] = [Greek::Delta, Greek::Gamma, Greek::Theta, Greek::Vega, Greek::Rho];

    fn flag(self) -> GreekSet {
        match self {
            Greek::Delta => GreekSet::DELTA,
            Greek::Gamma => GreekSet::GAMMA,
            Greek::Theta => GreekSet::THETA,
            Greek::Vega => GreekSet::VEGA,
            Greek::Rho => GreekSet::RHO,
        }
    }
}

impl fmt::Display for Greek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Greek::Delta => "Delta",
            Greek::Gamma => "Gamma",
            Greek::Theta => "Theta",
            Greek::Vega => "Vega",
            Greek::Rho => "Rho",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Greek {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "delta" => Ok(Greek::Delta),
            "gamma" => Ok(Greek::Gamma),
            "theta" => Ok(Greek::Theta),
            "vega" => Ok(Greek::Vega),
            "rho" => Ok(Greek::Rho),
            other => Err(LabError::InvalidConfiguration {
                field: "greek".to_string(),
                reason: format!("unknown Greek '{}'", other),
            }),
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct GreekSet: u32 {
        const NONE  = 0;
        const DELTA = 1 << 0;
        const GAMMA = 1 << 1;
        const THETA = 1 << 2;
        const VEGA  = 1 << 3;
        const RHO   = 1 << 4;
    }
}

/// European option contract under Black-Scholes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OptionParams {
    pub spot: f64,     // Current asset price S
    pub strike: f64,   // Strike K
    pub maturity: f64, // Time to expiry T in years
    pub rate: f64,     // Risk-free rate r
    pub sigma: f64,    // Volatility σ
    pub kind: OptionKind,
}

impl OptionParams {
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        sigma: f64,
        kind: OptionKind,
    ) -> LabResult<Self> {
        let params = OptionParams {
            spot,
            strike,
            maturity,
            rate,
            sigma,
            kind,
        };
        params.validate()?;
        Ok(params)
    }

    /// Reject inputs for which σ√T = 0 or ln(S/K) is undefined
    pub fn validate(&self) -> LabResult<()> {
        validate_positive("spot", self.spot)?;
        validate_positive("strike", self.strike)?;
        validate_positive("maturity", self.maturity)?;
        validate_finite("rate", self.rate)?;
        validate_positive("sigma", self.sigma)?;
        Ok(())
    }

    /// Same contract with a different spot, used when sweeping a curve
    pub fn with_spot(&self, spot: f64) -> LabResult<Self> {
        OptionParams::new(spot, self.strike, self.maturity, self.rate, self.sigma, self.kind)
    }

    pub fn with_kind(&self, kind: OptionKind) -> Self {
        OptionParams { kind, ..*self }
    }

    fn sigma_sqrt_t(&self) -> f64 {
        self.sigma * self.maturity.sqrt()
    }

    fn discount(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// ```text
    /// d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
    /// ```
    pub fn d1(&self) -> f64 {
        ((self.spot / self.strike).ln() + (self.rate + 0.5 * self.sigma * self.sigma) * self.maturity)
            / self.sigma_sqrt_t()
    }

    /// ```text
    /// d₂ = d₁ - σ√T
    /// ```
    pub fn d2(&self) -> f64 {
        self.d1() - self.sigma_sqrt_t()
    }

    /// Option premium
    ///
    /// # Formula
    /// ```text
    /// C = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
    /// P = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
    /// ```
    pub fn price(&self) -> f64 {
        let d1 = self.d1();
        let d2 = d1 - self.sigma_sqrt_t();
        match self.kind {
            OptionKind::Call => self.spot * norm_cdf(d1) - self.strike * self.discount() * norm_cdf(d2),
            OptionKind::Put => self.strike * self.discount() * norm_cdf(-d2) - self.spot * norm_cdf(-d1),
        }
    }

    /// Delta (∂V/∂S)
    ///
    /// # Formula
    /// ```text
    /// Δ_call = Φ(d₁)
    /// Δ_put  = Φ(d₁) - 1
    /// ```
    ///
    /// # Interpretation
    /// - Hedge ratio: number of shares to hold per option
    /// - Range: [0, 1] for calls, [-1, 0] for puts
    pub fn delta(&self) -> f64 {
        let d1 = self.d1();
        match self.kind {
            OptionKind::Call => norm_cdf(d1),
            OptionKind::Put => norm_cdf(d1) - 1.0,
        }
    }

    /// Gamma (∂²V/∂S²)
    ///
    /// # Formula
    /// ```text
    /// Γ = φ(d₁) / (S * σ * √T)
    /// ```
    ///
    /// # Interpretation
    /// - Rate of change of Delta w.r.t. underlying price
    /// - Maximum at-the-money
    /// - Same for calls and puts
    pub fn gamma(&self) -> f64 {
        norm_pdf(self.d1()) / (self.spot * self.sigma_sqrt_t())
    }

    /// Theta (∂V/∂t), per year
    ///
    /// # Formula
    /// ```text
    /// Θ_call = -S*φ(d₁)*σ/(2√T) - r*K*e^(-rT)*Φ(d₂)
    /// Θ_put  = -S*φ(d₁)*σ/(2√T) + r*K*e^(-rT)*Φ(-d₂)
    /// ```
    pub fn theta(&self) -> f64 {
        let d1 = self.d1();
        let d2 = d1 - self.sigma_sqrt_t();
        let decay = -self.spot * norm_pdf(d1) * self.sigma / (2.0 * self.maturity.sqrt());
        let carry = self.rate * self.strike * self.discount();
        match self.kind {
            OptionKind::Call => decay - carry * norm_cdf(d2),
            OptionKind::Put => decay + carry * norm_cdf(-d2),
        }
    }

    /// Vega (∂V/∂σ), per 1 percentage point of volatility
    ///
    /// # Formula
    /// ```text
    /// ν = S * φ(d₁) * √T / 100
    /// ```
    pub fn vega(&self) -> f64 {
        self.spot * norm_pdf(self.d1()) * self.maturity.sqrt() / 100.0
    }

    /// Rho (∂V/∂r), per 1 percentage point of rate
    ///
    /// # Formula
    /// ```text
    /// d₂ = [ln(S/K) + (r - σ²/2)T] / (σ√T)
    /// ρ_call =  K * T * e^(-rT) * Φ(d₂) / 100
    /// ρ_put  = -K * T * e^(-rT) * Φ(-d₂) / 100
    /// ```
    ///
    /// d₂ is evaluated from its own closed form here, not as d₁ - σ√T, so it
    /// can differ from [`OptionParams::d2`] in the last bits.
    pub fn rho(&self) -> f64 {
        let d2 = ((self.spot / self.strike).ln()
            + (self.rate - 0.5 * self.sigma * self.sigma) * self.maturity)
            / self.sigma_sqrt_t();
        let scale = self.strike * self.maturity * self.discount();
        let rho = match self.kind {
            OptionKind::Call => scale * norm_cdf(d2),
            OptionKind::Put => -scale * norm_cdf(-d2),
        };
        rho / 100.0
    }

    /// Value of a single Greek
    pub fn greek(&self, greek: Greek) -> f64 {
        match greek {
            Greek::Delta => self.delta(),
            Greek::Gamma => self.gamma(),
            Greek::Theta => self.theta(),
            Greek::Vega => self.vega(),
            Greek::Rho => self.rho(),
        }
    }

    /// Selected Greeks in canonical order (Delta, Gamma, Theta, Vega, Rho)
    pub fn greeks_table(&self, set: GreekSet) -> Vec<(Greek, f64)> {
        Greek::ALL
            .iter()
            .filter(|g| set.contains(g.flag()))
            .map(|&g| (g, self.greek(g)))
            .collect()
    }

    /// Intermediate values shown on the worked-formula page
    pub fn breakdown(&self) -> FormulaBreakdown {
        let d1 = self.d1();
        FormulaBreakdown {
            d1,
            d2: d1 - self.sigma_sqrt_t(),
            price: self.price(),
        }
    }
}

/// d₁, d₂ and the resulting price for one contract
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormulaBreakdown {
    pub d1: f64,
    pub d2: f64,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atm(kind: OptionKind) -> OptionParams {
        OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2, kind).expect("Valid parameters")
    }

    #[test]
    fn test_reference_breakdown() {
        let b = atm(OptionKind::Call).breakdown();
        assert!((b.d1 - 0.35).abs() < 1e-12);
        assert!((b.d2 - 0.15).abs() < 1e-12);
        assert!((b.price - 10.450583572185565).abs() < 1e-9);
    }

    #[test]
    fn test_put_reference_price() {
        let put = atm(OptionKind::Put).price();
        assert!((put - 5.573526022256971).abs() < 1e-9, "put = {}", put);
    }

    #[test]
    fn test_theta_reference() {
        let call = atm(OptionKind::Call).theta();
        let put = atm(OptionKind::Put).theta();
        assert!((call - -6.414027546438197).abs() < 1e-7);
        assert!((put - -1.6578804).abs() < 1e-5, "put theta = {}", put);
    }

    #[test]
    fn test_vega_and_rho_are_scaled_per_point() {
        let call = atm(OptionKind::Call);
        assert!((call.vega() - 0.37524034691693792).abs() < 1e-9);
        assert!((call.rho() - 0.5323248).abs() < 1e-5, "rho = {}", call.rho());
    }

    #[test]
    fn test_greek_dispatch_matches_methods() {
        let put = atm(OptionKind::Put);
        assert_eq!(put.greek(Greek::Delta), put.delta());
        assert_eq!(put.greek(Greek::Gamma), put.gamma());
        assert_eq!(put.greek(Greek::Theta), put.theta());
        assert_eq!(put.greek(Greek::Vega), put.vega());
        assert_eq!(put.greek(Greek::Rho), put.rho());
    }

    #[test]
    fn test_greeks_table_order_and_filter() {
        let call = atm(OptionKind::Call);
        let table = call.greeks_table(GreekSet::RHO | GreekSet::DELTA);
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].0, Greek::Delta);
        assert_eq!(table[1].0, Greek::Rho);
        assert!(call.greeks_table(GreekSet::NONE).is_empty());
        assert_eq!(call.greeks_table(GreekSet::all()).len(), 5);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        assert!(OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.0, OptionKind::Call).is_err());
        assert!(OptionParams::new(100.0, 100.0, 0.0, 0.05, 0.2, OptionKind::Call).is_err());
        assert!(OptionParams::new(0.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call).is_err());
        assert!(OptionParams::new(100.0, -5.0, 1.0, 0.05, 0.2, OptionKind::Put).is_err());
        assert!(OptionParams::new(100.0, 100.0, 1.0, f64::NAN, 0.2, OptionKind::Put).is_err());
        // zero rate is allowed
        assert!(OptionParams::new(100.0, 100.0, 1.0, 0.0, 0.2, OptionKind::Put).is_ok());
    }

    #[test]
    fn test_selector_parsing() {
        assert_eq!("Call".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!("put".parse::<OptionKind>().unwrap(), OptionKind::Put);
        assert!("straddle".parse::<OptionKind>().is_err());
        assert_eq!("VEGA".parse::<Greek>().unwrap(), Greek::Vega);
        assert!("vanna".parse::<Greek>().is_err());
        assert_eq!(Greek::Theta.to_string(), "Theta");
    }
}
