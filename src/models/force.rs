// src/models/force.rs
use super::model::SdeModel;
use crate::error::{validation::*, LabResult};

pub const MIN_FORCE: f64 = -1.0;
pub const MAX_FORCE: f64 = 1.0;

/// Buyer/seller pressure walk: dS = f dt + dW
///
/// `force` is the net pressure in [-1, 1]; positive means buyers dominate.
#[derive(Clone, Copy, Debug)]
pub struct ForceWalk {
    pub force: f64,
}

impl ForceWalk {
    pub fn new(force: f64) -> LabResult<Self> {
        validate_force(force)?;
        Ok(ForceWalk { force })
    }
}

pub fn validate_force(force: f64) -> LabResult<()> {
    validate_range("force", force, MIN_FORCE, MAX_FORCE)
}

impl SdeModel for ForceWalk {
    fn drift(&self, _s: f64, _t: f64) -> f64 {
        self.force
    }

    fn diffusion(&self, _s: f64, _t: f64) -> f64 {
        1.0
    }
}
