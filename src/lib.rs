//! # bs-lab: Black-Scholes Teaching Toolkit
//!
//! The numeric core of an interactive option-pricing tutorial. Every value a
//! lesson page shows comes from here; drawing it is left to the front end.
//!
//! ## Key Features
//!
//! - **Closed-form pricing**: European call/put premiums and the d₁/d₂ breakdown
//! - **Greeks**: Delta, Gamma, Theta, Vega (per vol point), Rho (per rate point)
//! - **Plot series**: Greek and price curves, payoff diagrams, normal density
//! - **Animated paths**: lazy Brownian and buyer/seller-force random walks
//! - **Validated inputs**: invalid contracts are rejected before any formula runs
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_lab::analytics::bs_analytic::{Greek, OptionKind, OptionParams};
//!
//! let call = OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call)
//!     .expect("Valid parameters");
//!
//! println!("Call price: {:.2}", call.price()); // 10.45
//! println!("Delta: {:.4}", call.greek(Greek::Delta));
//! ```
//!
//! ## Animating a path
//!
//! ```rust
//! use bs_lab::paths::BrownianPath;
//!
//! let path = BrownianPath::new(100.0, 0.2, 200, Some(42)).expect("Valid parameters");
//! for point in path {
//!     // hand (point.step, point.price) to the chart, then wait one frame
//!     let _ = point;
//! }
//! ```

// Module declarations
pub mod analytics;
pub mod assets;
pub mod config;
pub mod error;
pub mod math_utils;
pub mod models;
pub mod output;
pub mod paths;
pub mod rng;
pub mod solvers;

// Re-export commonly used types for convenience
pub use analytics::bs_analytic::{Greek, GreekSet, OptionKind, OptionParams};
pub use config::LabConfig;
pub use error::{LabError, LabResult};
