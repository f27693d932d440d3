// src/solvers/euler_maruyama.rs
//! Euler-Maruyama Scheme for SDE Integration
//!
//! # Mathematical Framework
//!
//! For a general SDE:
//! ```text
//! dX_t = a(X_t, t) dt + b(X_t, t) dW_t
//! ```
//!
//! The Euler-Maruyama scheme provides the discretization:
//! ```text
//! X_{n+1} = X_n + a(X_n, t_n) Δt + b(X_n, t_n) ΔW_n
//! ```
//!
//! Where `ΔW_n ~ N(0, Δt)` are independent normal increments.
//!
//! For the constant-coefficient walks in this crate the scheme is exact:
//! with Δt = 1 a step is simply `X_{n+1} = X_n + N(a, b²)`.

use crate::models::model::SdeModel;
use crate::rng;
use rand::Rng;

/// Euler-Maruyama numerical scheme for SDE integration
pub struct EulerMaruyama;

impl EulerMaruyama {
    /// Single Euler-Maruyama step
    ///
    /// # Algorithm
    ///
    /// 1. Generate normal random draw: Z ~ N(0,1)
    /// 2. Compute drift: a(X_n, t_n) * Δt
    /// 3. Compute diffusion: b(X_n, t_n) * √Δt * Z
    /// 4. Update: X_{n+1} = X_n + drift + diffusion
    pub fn step<M: SdeModel, R: Rng + ?Sized>(model: &M, s: &mut f64, t: f64, dt: f64, rng: &mut R) {
        let normal_draw = rng::get_normal_draw(rng);
        let drift_term = model.drift(*s, t) * dt;
        let diffusion_term = model.diffusion(*s, t) * dt.sqrt() * normal_draw;
        *s += drift_term + diffusion_term;
    }
}
