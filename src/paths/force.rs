// src/paths/force.rs
use super::{PathPoint, DT};
use crate::error::{validation::*, LabResult};
use crate::models::force::{validate_force, ForceWalk};
use crate::rng;
use crate::solvers::euler_maruyama::EulerMaruyama;
use rand::rngs::StdRng;
use rand::Rng;

/// Path point together with the force that produced it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForcedPoint {
    pub step: usize,
    pub price: f64,
    pub force: f64,
}

impl From<ForcedPoint> for PathPoint {
    fn from(p: ForcedPoint) -> Self {
        PathPoint {
            step: p.step,
            price: p.price,
        }
    }
}

/// Buyer/seller force path: price[i] = price[i-1] + N(force_i, 1)
///
/// The force is an argument of every step, so a caller that re-reads a
/// slider between steps always applies the latest value.
pub struct ForceDrivenPath<R: Rng> {
    price: f64,
    next_step: usize,
    steps: usize,
    rng: R,
}

impl ForceDrivenPath<StdRng> {
    pub fn new(initial_price: f64, steps: usize, seed: Option<u64>) -> LabResult<Self> {
        Self::with_rng(initial_price, steps, rng::session_rng(seed))
    }
}

impl<R: Rng> ForceDrivenPath<R> {
    pub fn with_rng(initial_price: f64, steps: usize, rng: R) -> LabResult<Self> {
        validate_positive("initial_price", initial_price)?;
        validate_steps("steps", steps)?;
        tracing::debug!(initial_price, steps, "starting force-driven path");
        Ok(ForceDrivenPath {
            price: initial_price,
            next_step: 0,
            steps,
            rng,
        })
    }

    pub fn is_finished(&self) -> bool {
        self.next_step >= self.steps
    }

    pub fn remaining(&self) -> usize {
        self.steps - self.next_step
    }

    /// Advance one step under `force`
    ///
    /// Step 0 returns the initial price unchanged and only records the force.
    /// An out-of-range force is rejected without consuming the step.
    pub fn next_with_force(&mut self, force: f64) -> LabResult<Option<ForcedPoint>> {
        if self.is_finished() {
            return Ok(None);
        }
        validate_force(force)?;
        let step = self.next_step;
        if step > 0 {
            let walk = ForceWalk { force };
            EulerMaruyama::step(&walk, &mut self.price, (step - 1) as f64 * DT, DT, &mut self.rng);
        }
        self.next_step += 1;
        Ok(Some(ForcedPoint {
            step,
            price: self.price,
            force,
        }))
    }

    /// Iterate, asking `source` for the force before each step
    pub fn with_force_source<F>(self, source: F) -> ForceSourced<R, F>
    where
        F: FnMut(usize) -> f64,
    {
        ForceSourced {
            path: self,
            source,
            failed: false,
        }
    }
}

/// Iterator over a [`ForceDrivenPath`] fed by a force source
///
/// Stops after the first invalid force.
pub struct ForceSourced<R: Rng, F> {
    path: ForceDrivenPath<R>,
    source: F,
    failed: bool,
}

impl<R, F> Iterator for ForceSourced<R, F>
where
    R: Rng,
    F: FnMut(usize) -> f64,
{
    type Item = LabResult<ForcedPoint>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.path.is_finished() {
            return None;
        }
        let force = (self.source)(self.path.next_step);
        match self.path.next_with_force(force) {
            Ok(point) => point.map(Ok),
            Err(e) => {
                tracing::warn!(force, error = %e, "force source produced an invalid value");
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
