// demos/error_handling_demo.rs
use bs_lab::analytics::bs_analytic::{OptionKind, OptionParams};
use bs_lab::assets::{load_asset, AssetKind, AssetStatus};
use bs_lab::config::LabConfig;
use bs_lab::error::LabError;
use bs_lab::paths::ForceDrivenPath;
use std::path::Path;

fn main() {
    println!("Error Handling Demo for bs-lab");
    println!("==============================\n");

    // Test 1: zero volatility
    println!("1. Testing zero volatility...");
    match OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.0, OptionKind::Call) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: expired contract
    println!("\n2. Testing zero time to maturity...");
    match OptionParams::new(100.0, 100.0, 0.0, 0.05, 0.2, OptionKind::Put) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: non-positive spot
    println!("\n3. Testing negative spot price...");
    match OptionParams::new(-100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(LabError::InvalidParameters { parameter, .. }) => {
            println!("   ✓ Rejected parameter '{}'", parameter)
        }
        Err(e) => println!("   Unexpected error kind: {}", e),
    }

    // Test 4: out-of-range force, clamped vs rejected
    println!("\n4. Testing force outside [-1, 1]...");
    let cfg = LabConfig::default();
    println!("   Clamped by the front end: 3.0 -> {}", cfg.simulation.force.clamp(3.0));
    let mut path = ForceDrivenPath::new(100.0, 10, Some(1)).expect("Valid path");
    match path.next_with_force(3.0) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 5: missing asset is not fatal
    println!("\n5. Testing a missing video...");
    match load_asset(Path::new("videos/does_not_exist.mp4"), AssetKind::Video) {
        AssetStatus::Loaded { .. } => println!("   Unexpected: file exists"),
        AssetStatus::Missing { notice, .. } => println!("   ✓ Inline notice: {}", notice),
    }

    println!("\n6. Valid parameters still work...");
    match OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call) {
        Ok(p) => println!("   ✓ Call price: {:.4}", p.price()),
        Err(e) => println!("   Unexpected error: {}", e),
    }
}
