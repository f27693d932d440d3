// src/paths/brownian.rs
use super::{PathPoint, DT};
use crate::error::{validation::*, LabResult};
use crate::models::brownian::ArithmeticBrownian;
use crate::rng;
use crate::solvers::euler_maruyama::EulerMaruyama;
use rand::rngs::StdRng;
use rand::Rng;

/// Brownian price path: price[i] = price[i-1] + N(0, σ·√Δt)
///
/// Consumed by iteration; start a new path to run again.
pub struct BrownianPath<R: Rng> {
    model: ArithmeticBrownian,
    price: f64,
    next_step: usize,
    steps: usize,
    rng: R,
}

impl BrownianPath<StdRng> {
    /// Path seeded from `seed`, or from OS entropy when `None`
    pub fn new(initial_price: f64, sigma: f64, steps: usize, seed: Option<u64>) -> LabResult<Self> {
        Self::with_rng(initial_price, sigma, steps, rng::session_rng(seed))
    }
}

impl<R: Rng> BrownianPath<R> {
    pub fn with_rng(initial_price: f64, sigma: f64, steps: usize, rng: R) -> LabResult<Self> {
        validate_positive("initial_price", initial_price)?;
        validate_steps("steps", steps)?;
        let model = ArithmeticBrownian::new(sigma)?;
        tracing::debug!(initial_price, sigma, steps, "starting brownian path");
        Ok(BrownianPath {
            model,
            price: initial_price,
            next_step: 0,
            steps,
            rng,
        })
    }

    pub fn sigma(&self) -> f64 {
        self.model.sigma
    }
}

impl<R: Rng> Iterator for BrownianPath<R> {
    type Item = PathPoint;

    fn next(&mut self) -> Option<PathPoint> {
        if self.next_step >= self.steps {
            return None;
        }
        let step = self.next_step;
        if step > 0 {
            EulerMaruyama::step(&self.model, &mut self.price, (step - 1) as f64 * DT, DT, &mut self.rng);
        }
        self.next_step += 1;
        Some(PathPoint {
            step,
            price: self.price,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps - self.next_step;
        (remaining, Some(remaining))
    }
}

impl<R: Rng> ExactSizeIterator for BrownianPath<R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::DEFAULT_STEPS;

    #[test]
    fn test_zero_volatility_path_is_flat() {
        let path: Vec<PathPoint> = BrownianPath::new(100.0, 0.0, DEFAULT_STEPS, Some(1))
            .unwrap()
            .collect();
        assert_eq!(path.len(), DEFAULT_STEPS);
        assert!(path.iter().all(|p| p.price == 100.0));
    }

    #[test]
    fn test_steps_are_numbered_from_zero() {
        let path: Vec<PathPoint> = BrownianPath::new(80.0, 0.3, 5, Some(3)).unwrap().collect();
        let steps: Vec<usize> = path.iter().map(|p| p.step).collect();
        assert_eq!(steps, vec![0, 1, 2, 3, 4]);
        assert_eq!(path[0].price, 80.0);
    }

    #[test]
    fn test_same_seed_same_path() {
        let a: Vec<PathPoint> = BrownianPath::new(100.0, 0.2, 50, Some(9)).unwrap().collect();
        let b: Vec<PathPoint> = BrownianPath::new(100.0, 0.2, 50, Some(9)).unwrap().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_exhausted_path_stays_exhausted() {
        let mut path = BrownianPath::new(100.0, 0.2, 3, Some(2)).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.by_ref().count(), 3);
        assert!(path.next().is_none());
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(BrownianPath::new(100.0, -0.1, 200, None).is_err());
        assert!(BrownianPath::new(0.0, 0.2, 200, None).is_err());
        assert!(BrownianPath::new(100.0, 0.2, 0, None).is_err());
    }
}
