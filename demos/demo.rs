// demos/demo.rs
use bs_lab::analytics::bs_analytic::{Greek, GreekSet, OptionKind, OptionParams};
use bs_lab::analytics::curves::greek_curve;
use bs_lab::analytics::payoff::PayoffDiagram;
use bs_lab::paths::ensemble::force_drift_stats;
use bs_lab::paths::{BrownianPath, ForceDrivenPath};

fn main() {
    println!("bs-lab walkthrough\n");

    let call = OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call).expect("Valid parameters");
    let put = call.with_kind(OptionKind::Put);

    let b = call.breakdown();
    println!("--- Black-Scholes ---");
    println!("d1 = {:.4}, d2 = {:.4}", b.d1, b.d2);
    println!("Call: {:.4}", call.price());
    println!("Put:  {:.4}", put.price());
    println!(
        "Parity check C - P = {:.6}, S - K e^(-rT) = {:.6}",
        call.price() - put.price(),
        call.spot - call.strike * (-call.rate * call.maturity).exp()
    );

    println!("\n--- Greeks ---");
    println!("{:<8}{:>12}{:>12}", "Greek", "Call", "Put");
    for ((g, c), (_, p)) in call
        .greeks_table(GreekSet::all())
        .into_iter()
        .zip(put.greeks_table(GreekSet::all()))
    {
        println!("{:<8}{:>12.6}{:>12.6}", g.to_string(), c, p);
    }

    println!("\n--- Gamma vs spot (every 10th point) ---");
    let curve = greek_curve(&call, Greek::Gamma, 100).expect("Valid grid");
    for (s, g) in curve.points().into_iter().step_by(10) {
        println!("S = {:>7.2}  Gamma = {:.6}", s, g);
    }

    println!("\n--- Payoff at expiry (call, K = 100, premium = 10) ---");
    let diagram = PayoffDiagram::new(OptionKind::Call, 100.0, 10.0, 1000).expect("Valid payoff");
    let (lo, hi) = diagram.payoff_range();
    println!("Breakeven: {:.2}, payoff range [{:.2}, {:.2}]", diagram.breakeven(), lo, hi);

    println!("\n--- Brownian path (σ = 0.2, seed 42) ---");
    let path: Vec<_> = BrownianPath::new(100.0, 0.2, 200, Some(42)).expect("Valid path").collect();
    let last = path.last().expect("Non-empty path");
    println!("{} points, final price {:.4} at step {}", path.len(), last.price, last.step);

    println!("\n--- Force-driven path (buyers strengthen halfway) ---");
    let points: Vec<_> = ForceDrivenPath::new(100.0, 200, Some(42))
        .expect("Valid path")
        .with_force_source(|step| if step < 100 { 0.0 } else { 0.5 })
        .collect::<Result<_, _>>()
        .expect("Forces in range");
    println!("Price at step 99: {:.4}", points[99].price);
    println!("Price at step 199: {:.4}", points[199].price);

    println!("\n--- Average net move over 2,000 runs ---");
    for force in [-0.5, 0.0, 0.5] {
        let stats = force_drift_stats(force, 2_000, 200, 7).expect("Valid ensemble");
        println!(
            "force {:>5.2}: mean {:>8.3} ± {:.3} (expected {:.1})",
            force,
            stats.mean,
            stats.std_error(),
            force * 199.0
        );
    }
}
