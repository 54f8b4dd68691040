//! LOESS Batch Smoothing Examples
//!
//! This example walks through the common smoothing scenarios:
//! - Basic smoothing at the observed x-positions
//! - Smoothing on a regular query grid between observations
//! - The effect of the bandwidth on a noisy curve
//! - Handling the errors a query point can raise
//!
//! Run with `RUST_LOG`-style logging by installing any `log` backend.

use loess::prelude::*;
use std::time::Instant;

fn main() -> Result<(), LoessError> {
    println!("{}", "=".repeat(80));
    println!("LOESS Batch Smoothing - Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_basic_smoothing()?;
    example_2_query_grid()?;
    example_3_bandwidth_sweep()?;
    example_4_error_handling();
    example_5_benchmark()?;

    Ok(())
}

/// Example 1: Basic Smoothing
/// Smooths a short, nearly linear series at its own x-positions.
fn example_1_basic_smoothing() -> Result<(), LoessError> {
    println!("Example 1: Basic Smoothing");
    println!("{}", "-".repeat(80));

    let x = vec![0.5578196, 2.0217271, 2.5773252, 3.4140288, 4.3014084, 4.7448394, 5.1073781];
    let y = vec![18.63654, 103.49646, 150.35391, 190.51031, 208.70115, 213.71135, 228.49353];
    let observations = Observation::from_arrays(&x, &y)?;

    let model = Loess::new().bandwidth(0.8).build()?;
    let result = model.fit(&x, &observations)?;
    println!("{}", result);

    /* Expected Output:
    Summary:
      Observations: 7
      Query points: 7
      Bandwidth:    0.8

    Smoothed Data:
           X     Y_smooth
    ---------------------
        0.56    18.636540
        2.02   103.618049
        2.58   142.905537
        3.41   181.818694
        4.30   208.201091
        4.74   217.508351
        5.11   226.493925
    */

    println!();
    Ok(())
}

/// Example 2: Query Grid
/// Query points need not coincide with observations.
fn example_2_query_grid() -> Result<(), LoessError> {
    println!("Example 2: Query Grid");
    println!("{}", "-".repeat(80));

    let observations: Vec<Observation<f64>> = (0..20)
        .map(|i| {
            let x = i as f64 * 0.5;
            Observation::new(x, x.sin())
        })
        .collect();

    let grid: Vec<f64> = (0..=18).map(|i| 0.25 + i as f64 * 0.5).collect();
    let curve = smooth(&grid, &observations, 0.3)?;

    for p in &curve {
        println!("  x = {:>5.2}  y = {:>9.5}  sin(x) = {:>9.5}", p.x, p.y, p.x.sin());
    }

    println!();
    Ok(())
}

/// Example 3: Bandwidth Sweep
/// Wider windows trade detail for smoothness.
fn example_3_bandwidth_sweep() -> Result<(), LoessError> {
    println!("Example 3: Bandwidth Sweep");
    println!("{}", "-".repeat(80));

    // Deterministic "noise" so the output is reproducible
    let x: Vec<f64> = (0..50).map(|i| i as f64 * 0.2).collect();
    let y: Vec<f64> = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| 2.0 * xi + if i % 2 == 0 { 0.8 } else { -0.8 })
        .collect();
    let observations = Observation::from_arrays(&x, &y)?;

    for bandwidth in [0.1, 0.3, 0.6, 1.0] {
        let result = Loess::new().bandwidth(bandwidth).build()?.fit(&x, &observations)?;
        let rmse = (result
            .points
            .iter()
            .zip(&x)
            .map(|(p, &xi)| (p.y - 2.0 * xi).powi(2))
            .sum::<f64>()
            / x.len() as f64)
            .sqrt();
        println!("  bandwidth {:.1}: RMSE against the true line = {:.4}", bandwidth, rmse);
    }

    println!();
    Ok(())
}

/// Example 4: Error Handling
/// A failing query point aborts the whole call.
fn example_4_error_handling() {
    println!("Example 4: Error Handling");
    println!("{}", "-".repeat(80));

    let observations = vec![
        Observation::new(0.0, 0.0),
        Observation::new(1.0, 1.0),
        Observation::new(3.0, 3.0),
        Observation::new(4.0, 4.0),
    ];

    let cases: [(&str, f64, f64); 3] = [
        ("bandwidth out of range", 1.5, 1.0),
        ("empty window", 0.25, 2.0),
        ("all neighbors at the window edge", 0.25, 0.5),
    ];

    for (label, bandwidth, query) in cases {
        match smooth(&[query], &observations, bandwidth) {
            Ok(points) => println!("  {label}: {:?}", points),
            Err(e) => println!("  {label}: {e}"),
        }
    }

    println!();
}

/// Example 5: Benchmark
/// Times a larger smoothing run.
fn example_5_benchmark() -> Result<(), LoessError> {
    println!("Example 5: Benchmark");
    println!("{}", "-".repeat(80));

    let n = 10_000;
    let observations: Vec<Observation<f64>> = (0..n)
        .map(|i| {
            let x = i as f64 / n as f64 * 10.0;
            Observation::new(x, x.cos() + 0.1 * (i % 7) as f64)
        })
        .collect();
    let queries: Vec<f64> = observations.iter().map(|o| o.x).collect();

    let start = Instant::now();
    let result = Loess::new().bandwidth(0.05).build()?.fit(&queries, &observations)?;
    println!("  smoothed {} points in {:?}", result.len(), start.elapsed());

    println!();
    Ok(())
}
