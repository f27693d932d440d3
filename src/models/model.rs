// src/models/model.rs
/// Coefficients of an SDE dX_t = a(X_t, t) dt + b(X_t, t) dW_t
pub trait SdeModel {
    fn drift(&self, s: f64, t: f64) -> f64;
    fn diffusion(&self, s: f64, t: f64) -> f64;
}
