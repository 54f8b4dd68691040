//! fastLoess Parallel Smoothing Examples
//!
//! This example demonstrates:
//! - Smoothing ndarray data on all CPU cores
//! - Comparing parallel and sequential timings on the same model settings
//!
//! Run with `RUST_LOG=debug cargo run --example parallel_smoothing` to see the
//! per-run diagnostics.

use fastLoess::prelude::*;
use ndarray::Array1;
use std::time::Instant;

fn main() -> Result<(), LoessError> {
    env_logger::init();

    println!("{}", "=".repeat(80));
    println!("fastLoess Parallel Smoothing - Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_ndarray()?;
    example_2_parallel_vs_sequential()?;

    Ok(())
}

/// Example 1: ndarray input
/// Smooths a noisy sine wave held in ndarray arrays.
fn example_1_ndarray() -> Result<(), LoessError> {
    println!("Example 1: ndarray Input");
    println!("{}", "-".repeat(80));

    let x = Array1::linspace(0.0, 2.0 * std::f64::consts::PI, 200);
    let y = x.mapv(|v: f64| v.sin() + 0.1 * (17.0 * v).sin());
    let grid = Array1::linspace(0.0, 2.0 * std::f64::consts::PI, 25);

    let model = Loess::new().bandwidth(0.2).build()?;
    let result = model.fit_arrays(&grid, &x, &y)?;

    println!("{}", result);
    Ok(())
}

/// Example 2: Parallel vs Sequential
/// Times the same large smoothing run with and without worker threads.
fn example_2_parallel_vs_sequential() -> Result<(), LoessError> {
    println!("Example 2: Parallel vs Sequential");
    println!("{}", "-".repeat(80));

    let n = 20_000;
    let x: Vec<f64> = (0..n).map(|i| i as f64 / 1000.0).collect();
    let y: Vec<f64> = x.iter().map(|&v| (v / 5.0).sin() * 10.0 + (v * 3.0).cos()).collect();
    let observations = Observation::from_arrays(&x, &y)?;

    let parallel = Loess::new().bandwidth(0.05).build()?;
    let sequential = Loess::new().bandwidth(0.05).parallel(false).build()?;

    let start = Instant::now();
    let par_result = parallel.fit(&x, &observations)?;
    let par_time = start.elapsed();

    let start = Instant::now();
    let seq_result = sequential.fit(&x, &observations)?;
    let seq_time = start.elapsed();

    println!("Points:     {}", n);
    println!("Parallel:   {:?}", par_time);
    println!("Sequential: {:?}", seq_time);
    println!("Identical:  {}", par_result == seq_result);
    println!();
    Ok(())
}
