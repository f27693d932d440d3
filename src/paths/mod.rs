//! Step-by-step price path simulators
//!
//! Both simulators are lazy and finite: they yield one [`PathPoint`] per
//! pull, starting with the initial price at step 0, and stop after `steps`
//! points. They never sleep; animation pacing belongs to whoever pulls.

pub mod brownian;
pub mod ensemble;
pub mod force;

pub use brownian::BrownianPath;
pub use force::{ForceDrivenPath, ForcedPoint};

/// Number of points in one animated run, initial price included
pub const DEFAULT_STEPS: usize = 200;

/// Time increment between consecutive points
pub const DT: f64 = 1.0;

/// One (time-step, price) sample
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathPoint {
    pub step: usize,
    pub price: f64,
}
