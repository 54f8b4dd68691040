//! Tests that the prelude and stage modules expose a usable surface.

use loess::prelude::*;
use loess::stages::{LocalFit, compute_weights, select_neighbors, to_arrays};

/// The prelude alone is enough to build, fit and report.
#[test]
fn test_prelude_fit() -> Result<(), LoessError> {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [2.0, 4.1, 5.9, 8.2, 9.8];
    let observations = Observation::from_arrays(&x, &y)?;

    let model: LoessModel<f64> = Loess::new().bandwidth(0.5).build()?;
    let result: LoessResult<f64> = model.fit(&x, &observations)?;

    assert_eq!(result.y(), y.to_vec());
    Ok(())
}

/// The stages compose into the same estimate as `smooth`.
#[test]
fn test_stages_compose() -> Result<(), LoessError> {
    let observations = vec![
        Observation::new(0.0, 0.0),
        Observation::new(1.0, 1.1),
        Observation::new(2.0, 1.9),
        Observation::new(3.0, 3.2),
    ];

    let neighbors = select_neighbors(&observations, 1.5, 1.0)?;
    let weights = compute_weights(&neighbors);
    let fit = LocalFit::fit(&neighbors, &weights)?;

    let via_smooth: Vec<SmoothedPoint<f64>> = smooth(&[1.5], &observations, 1.0)?;
    assert!((fit.predict(1.5) - via_smooth[0].y).abs() < 1e-12);

    let (xs, _) = to_arrays(&observations);
    assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0]);
    Ok(())
}
