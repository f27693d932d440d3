// src/models/brownian.rs
use super::model::SdeModel;
use crate::error::{validation::*, LabResult};

/// Driftless arithmetic Brownian motion: dS = σ dW
///
/// Unlike GBM the noise is additive, so the price can in principle go
/// negative over long horizons.
#[derive(Clone, Copy, Debug)]
pub struct ArithmeticBrownian {
    pub sigma: f64,
}

impl ArithmeticBrownian {
    /// σ = 0 is allowed and yields a constant path
    pub fn new(sigma: f64) -> LabResult<Self> {
        validate_non_negative("sigma", sigma)?;
        Ok(ArithmeticBrownian { sigma })
    }
}

impl SdeModel for ArithmeticBrownian {
    fn drift(&self, _s: f64, _t: f64) -> f64 {
        0.0
    }

    fn diffusion(&self, _s: f64, _t: f64) -> f64 {
        self.sigma
    }
}
