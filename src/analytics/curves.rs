// src/analytics/curves.rs
//! Plot-ready series for the dashboard pages
//!
//! Each function samples a closed-form quantity over an `ndarray` grid and
//! returns a [`Curve`] the renderer can draw as-is.

use crate::analytics::bs_analytic::{Greek, OptionParams};
use crate::error::{validation::*, LabResult};
use crate::math_utils::{linspace, normal_pdf};
use ndarray::Array1;

/// Sampled (x, y) series
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    pub x: Array1<f64>,
    pub y: Array1<f64>,
}

impl Curve {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }
}

/// Spot grid centred on the strike: [0.5K, 1.5K]
fn spot_grid(params: &OptionParams, points: usize) -> LabResult<Array1<f64>> {
    validate_steps("points", points)?;
    Ok(linspace(0.5 * params.strike, 1.5 * params.strike, points))
}

fn sweep_spot<F>(params: &OptionParams, points: usize, f: F) -> LabResult<Curve>
where
    F: Fn(&OptionParams) -> f64,
{
    params.validate()?;
    let x = spot_grid(params, points)?;
    let mut y = Array1::zeros(points);
    for (yi, &s) in y.iter_mut().zip(x.iter()) {
        *yi = f(&params.with_spot(s)?);
    }
    tracing::debug!(points, strike = params.strike, "swept spot grid");
    Ok(Curve { x, y })
}

/// Selected Greek against spot price
pub fn greek_curve(params: &OptionParams, greek: Greek, points: usize) -> LabResult<Curve> {
    sweep_spot(params, points, |p| p.greek(greek))
}

/// Option premium against spot price
pub fn price_curve(params: &OptionParams, points: usize) -> LabResult<Curve> {
    sweep_spot(params, points, |p| p.price())
}

/// Density of N(mu, sigma²) over the fixed window [-10, 10]
pub fn normal_density_curve(mu: f64, sigma: f64, points: usize) -> LabResult<Curve> {
    validate_finite("mu", mu)?;
    validate_positive("sigma", sigma)?;
    validate_steps("points", points)?;
    let x = linspace(-10.0, 10.0, points);
    let y = x.mapv(|v| normal_pdf(v, mu, sigma));
    Ok(Curve { x, y })
}
