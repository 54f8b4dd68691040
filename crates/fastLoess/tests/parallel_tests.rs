#![cfg(feature = "dev")]
//! Tests for parallel LOESS execution.
//!
//! The parallel pass must be a drop-in replacement for the sequential one:
//! same values, same order, same errors.
//!
//! ## Test Organization
//!
//! 1. **Consistency** - parallel vs sequential output
//! 2. **Ordering** - results follow query order
//! 3. **Errors** - failures propagate from worker threads
//! 4. **Builder** - parallel flag and duplicates

use approx::assert_relative_eq;

use fastLoess::internals::api::{LoessError, Observation, ParallelLoessBuilder};
use fastLoess::internals::engine::executor::smooth_pass_parallel;
use loess::internals::engine::executor::LoessExecutor;
use loess::internals::primitives::sorting::sort_by_x;

fn wavy_observations(n: usize) -> Vec<Observation<f64>> {
    (0..n)
        .map(|i| {
            let x = i as f64 * 0.05;
            Observation::new(x, x.sin() + 0.3 * (7.0 * x).cos())
        })
        .collect()
}

// ============================================================================
// Consistency Tests
// ============================================================================

/// The parallel pass gives exactly the sequential values.
#[test]
fn test_parallel_matches_sequential_pass() {
    let observations = wavy_observations(400);
    let sorted = sort_by_x(&observations);
    let queries: Vec<f64> = (0..250).map(|i| i as f64 * 0.08).collect();

    let sequential = LoessExecutor::smooth_pass(&queries, &sorted, 0.2).unwrap();
    let parallel = smooth_pass_parallel(&queries, &sorted, 0.2).unwrap();

    assert_eq!(sequential, parallel);
}

/// Parallel and serial models agree across bandwidths.
#[test]
fn test_parallel_matches_serial_model() {
    let observations = wavy_observations(300);
    let queries: Vec<f64> = observations.iter().map(|o| o.x).collect();

    for bw in [0.05, 0.2, 0.5, 1.0] {
        let parallel = ParallelLoessBuilder::new()
            .bandwidth(bw)
            .build()
            .unwrap()
            .fit(&queries, &observations)
            .unwrap();
        let serial = ParallelLoessBuilder::new()
            .bandwidth(bw)
            .parallel(false)
            .build()
            .unwrap()
            .fit(&queries, &observations)
            .unwrap();

        assert_eq!(parallel, serial, "bandwidth {bw}");
    }
}

/// Parallel results match the plain `loess` crate.
#[test]
fn test_parallel_matches_loess_crate() {
    let observations = wavy_observations(200);
    let queries = [0.0, 1.3, 2.7, 5.5, 9.95];

    let parallel = ParallelLoessBuilder::new()
        .bandwidth(0.3)
        .build()
        .unwrap()
        .fit(&queries[..], &observations)
        .unwrap();
    let direct = loess::smooth(&queries, &observations, 0.3).unwrap();

    assert_eq!(parallel.points, direct);
}

// ============================================================================
// Ordering Tests
// ============================================================================

/// Results come back in query order even when queries are shuffled.
#[test]
fn test_query_order_preserved() {
    let observations = wavy_observations(500);
    let queries: Vec<f64> = (0..1000).map(|i| ((i * 37) % 1000) as f64 * 0.0249).collect();

    let result = ParallelLoessBuilder::new()
        .bandwidth(0.1)
        .build()
        .unwrap()
        .fit(&queries, &observations)
        .unwrap();

    assert_eq!(result.x(), queries);
}

/// Linear data is recovered exactly by every worker.
#[test]
fn test_parallel_linear_recovery() {
    let observations: Vec<Observation<f64>> = (0..1000)
        .map(|i| Observation::new(i as f64, 0.5 * i as f64 + 4.0))
        .collect();
    let queries: Vec<f64> = (0..999).map(|i| i as f64 + 0.5).collect();

    let result = ParallelLoessBuilder::new()
        .bandwidth(0.01)
        .build()
        .unwrap()
        .fit(&queries, &observations)
        .unwrap();

    for p in &result.points {
        assert_relative_eq!(p.y, 0.5 * p.x + 4.0, epsilon = 1e-8);
    }
}

// ============================================================================
// Error Tests
// ============================================================================

/// A single empty window fails the whole parallel run.
#[test]
fn test_error_propagates() {
    let observations = vec![
        Observation::new(0.0, 0.0),
        Observation::new(1.0, 1.0),
        Observation::new(3.0, 3.0),
        Observation::new(4.0, 4.0),
    ];
    let mut queries: Vec<f64> = (0..200).map(|i| i as f64 * 0.005).collect();
    queries.push(2.0);

    let model = ParallelLoessBuilder::new().bandwidth(0.25).build().unwrap();
    let err = model.fit(&queries, &observations).unwrap_err();

    assert!(matches!(
        err,
        LoessError::EmptyNeighborhood { .. } | LoessError::DegenerateWeights
    ));
    assert_eq!(
        model.fit(&[2.0][..], &observations).unwrap_err(),
        LoessError::EmptyNeighborhood { query: 2.0 }
    );
}

/// Validation happens before any worker starts.
#[test]
fn test_validation_before_parallel_pass() {
    let model = ParallelLoessBuilder::new().bandwidth(0.5).build().unwrap();

    let empty: Vec<Observation<f64>> = Vec::new();
    assert_eq!(
        model.fit(&[1.0][..], &empty).unwrap_err(),
        LoessError::EmptyInput
    );

    let observations = wavy_observations(10);
    assert!(matches!(
        model.fit(&[f64::NAN][..], &observations),
        Err(LoessError::InvalidNumericValue(_))
    ));
}

// ============================================================================
// Builder Tests
// ============================================================================

/// Parallel execution is on unless turned off or compiled out.
#[test]
fn test_parallel_default() {
    let model = ParallelLoessBuilder::<f64>::new().build().unwrap();
    assert_eq!(model.is_parallel(), cfg!(feature = "cpu"));
    assert_relative_eq!(model.bandwidth(), 0.67);

    let model = ParallelLoessBuilder::<f64>::new()
        .parallel(false)
        .build()
        .unwrap();
    assert!(!model.is_parallel());

    let model = ParallelLoessBuilder::<f64>::new()
        .parallel(true)
        .build()
        .unwrap();
    assert_eq!(model.is_parallel(), cfg!(feature = "cpu"));
}

/// Parameters may only be set once.
#[test]
fn test_duplicate_parameters() {
    let err = ParallelLoessBuilder::<f64>::new()
        .parallel(true)
        .parallel(false)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        LoessError::DuplicateParameter {
            parameter: "parallel"
        }
    );

    let err = ParallelLoessBuilder::new()
        .bandwidth(0.3)
        .bandwidth(0.4)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        LoessError::DuplicateParameter {
            parameter: "bandwidth"
        }
    );
}

/// Invalid bandwidths fail at build time.
#[test]
fn test_invalid_bandwidth() {
    let result = ParallelLoessBuilder::new().bandwidth(1.01).build();
    assert!(matches!(result, Err(LoessError::InvalidBandwidth(_))));
}
