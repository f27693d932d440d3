// src/math_utils.rs
use ndarray::Array1;
use statrs::function::erf;
use std::f64::consts::{PI, SQRT_2};

/// Standard normal cumulative distribution function Φ(x)
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf::erf(x / SQRT_2))
}

/// Standard normal probability density function
///
/// # Formula
/// ```text
/// φ(x) = (1/√(2π)) * exp(-x²/2)
/// ```
pub fn norm_pdf(x: f64) -> f64 {
    (1.0 / (2.0 * PI).sqrt()) * (-0.5 * x * x).exp()
}

/// Density of N(mu, sigma²) at x
pub fn normal_pdf(x: f64, mu: f64, sigma: f64) -> f64 {
    norm_pdf((x - mu) / sigma) / sigma
}

/// `n` evenly spaced points over `[start, end]`, both ends included
pub fn linspace(start: f64, end: f64, n: usize) -> Array1<f64> {
    Array1::linspace(start, end, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_cdf_reference_points() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
        assert!((norm_cdf(1.96) - 0.975_002_104_851_780).abs() < 1e-9);
        assert!((norm_cdf(-1.0) + norm_cdf(1.0) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_normal_pdf_matches_standard() {
        assert!((normal_pdf(0.3, 0.0, 1.0) - norm_pdf(0.3)).abs() < 1e-15);
        // peak of N(2, 0.5²) is 1/(0.5·√(2π))
        let peak = normal_pdf(2.0, 2.0, 0.5);
        assert!((peak - 0.797_884_560_802_865).abs() < 1e-12);
    }

    #[test]
    fn test_linspace_endpoints() {
        let grid = linspace(50.0, 150.0, 101);
        assert_eq!(grid.len(), 101);
        assert_eq!(grid[0], 50.0);
        assert!((grid[100] - 150.0).abs() < 1e-12);
        assert!((grid[1] - 51.0).abs() < 1e-12);
    }
}
