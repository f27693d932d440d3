// tests/greeks_test.rs
use bs_lab::analytics::bs_analytic::{Greek, OptionKind, OptionParams};

fn pair(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> (OptionParams, OptionParams) {
    let call = OptionParams::new(s, k, t, r, sigma, OptionKind::Call).expect("Valid parameters");
    (call, call.with_kind(OptionKind::Put))
}

fn parameter_grid() -> Vec<(f64, f64, f64, f64, f64)> {
    let mut grid = Vec::new();
    for &s in &[50.0, 90.0, 100.0, 110.0, 150.0] {
        for &k in &[60.0, 100.0, 140.0] {
            for &t in &[0.1, 1.0, 2.0] {
                for &r in &[0.0, 0.05, 0.1] {
                    for &sigma in &[0.01, 0.2, 0.5] {
                        grid.push((s, k, t, r, sigma));
                    }
                }
            }
        }
    }
    grid
}

#[test]
fn test_reference_scenario() {
    let (call, put) = pair(100.0, 100.0, 1.0, 0.05, 0.2);
    let b = call.breakdown();

    println!("\nd1 = {}, d2 = {}", b.d1, b.d2);
    println!("Call = {}, Put = {}", call.price(), put.price());

    assert!((b.d1 - 0.35).abs() < 1e-9);
    assert!((b.d2 - 0.15).abs() < 1e-9);
    assert!((call.price() - 10.45).abs() < 0.005);
    assert!((put.price() - 5.57).abs() < 0.005);
}

#[test]
fn test_put_call_parity() {
    for (s, k, t, r, sigma) in parameter_grid() {
        let (call, put) = pair(s, k, t, r, sigma);
        let lhs = call.price() - put.price();
        let rhs = s - k * (-r * t).exp();
        assert!(
            (lhs - rhs).abs() < 1e-9,
            "parity broken at S={} K={} T={} r={} σ={}: {} vs {}",
            s, k, t, r, sigma, lhs, rhs
        );
    }
}

#[test]
fn test_delta_call_minus_put_is_one() {
    for (s, k, t, r, sigma) in parameter_grid() {
        let (call, put) = pair(s, k, t, r, sigma);
        assert!((call.delta() - put.delta() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn test_gamma_and_vega_independent_of_kind() {
    for (s, k, t, r, sigma) in parameter_grid() {
        let (call, put) = pair(s, k, t, r, sigma);
        assert_eq!(call.gamma(), put.gamma());
        assert_eq!(call.greek(Greek::Vega), put.greek(Greek::Vega));
    }
}

#[test]
fn test_rho_call_minus_put() {
    // ρ_call - ρ_put = K T e^(-rT) / 100
    for (s, k, t, r, sigma) in parameter_grid() {
        let (call, put) = pair(s, k, t, r, sigma);
        let expected = k * t * (-r * t).exp() / 100.0;
        assert!((call.rho() - put.rho() - expected).abs() < 1e-9);
    }
}

#[test]
fn test_rho_d2_agrees_with_breakdown_d2() {
    let (call, _) = pair(120.0, 100.0, 0.5, 0.03, 0.35);
    let d2_direct = ((120.0f64 / 100.0).ln() + (0.03 - 0.5 * 0.35 * 0.35) * 0.5) / (0.35 * 0.5f64.sqrt());
    assert!((call.d2() - d2_direct).abs() < 1e-12);
}

#[test]
fn test_near_expiry_boundary() {
    let t = 1e-8;

    let (itm_call, _) = pair(110.0, 100.0, t, 0.05, 0.2);
    let intrinsic = 110.0 - 100.0 * (-0.05 * t).exp();
    assert!((itm_call.price() - intrinsic).abs() < 1e-6, "ITM call = {}", itm_call.price());

    let (otm_call, _) = pair(90.0, 100.0, t, 0.05, 0.2);
    assert!(otm_call.price().abs() < 1e-9, "OTM call = {}", otm_call.price());
}

#[test]
fn test_greeks_are_finite_over_input_ranges() {
    for (s, k, t, r, sigma) in parameter_grid() {
        let (call, put) = pair(s, k, t, r, sigma);
        for g in Greek::ALL {
            assert!(call.greek(g).is_finite(), "{} call at S={} K={}", g, s, k);
            assert!(put.greek(g).is_finite(), "{} put at S={} K={}", g, s, k);
        }
    }
}

#[test]
fn test_theta_matches_finite_difference() {
    let (call, _) = pair(105.0, 100.0, 1.0, 0.05, 0.25);
    let h = 1e-5;
    let later = OptionParams::new(105.0, 100.0, 1.0 - h, 0.05, 0.25, OptionKind::Call).unwrap();
    let earlier = OptionParams::new(105.0, 100.0, 1.0 + h, 0.05, 0.25, OptionKind::Call).unwrap();
    // Θ = -∂V/∂T
    let fd_theta = -(earlier.price() - later.price()) / (2.0 * h);

    let rel_error = (call.theta() - fd_theta).abs() / fd_theta.abs();
    println!("\nAnalytic Theta: {}, FD Theta: {}", call.theta(), fd_theta);
    assert!(rel_error < 1e-5, "Relative error for Theta exceeds tolerance: {}", rel_error);
}
