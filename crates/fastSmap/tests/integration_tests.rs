//! Integration tests for the parallel S-map API.
//!
//! These tests verify the fastSmap public surface:
//! - Parallel and sequential batch prediction
//! - Parallel theta sweeps
//! - ndarray input handling
//! - Error propagation from the core crate
//!
//! ## Test Organization
//!
//! 1. **Batch Prediction** - Parallel default, sequential fallback
//! 2. **Sweep Evaluation** - Parallel grid, ordering
//! 3. **Input Handling** - ndarray, slices, vectors
//! 4. **Error Propagation** - Core validation surfaces unchanged

use approx::assert_relative_eq;
use fastSmap::prelude::*;
use ndarray::Array1;

// ============================================================================
// Helper Functions
// ============================================================================

fn logistic_map(n: usize) -> Vec<f64> {
    let mut series = Vec::with_capacity(n);
    series.push(0.23);
    for i in 0..n - 1 {
        let x = series[i];
        series.push(3.8 * x * (1.0 - x));
    }
    series
}

// ============================================================================
// Batch Prediction Tests
// ============================================================================

/// Test parallel prediction (the default) on a linear ramp.
#[test]
fn test_batch_parallel() {
    let library: Vec<f64> = (0..30).map(|t| t as f64).collect();
    let target: Vec<f64> = (50..60).map(|t| t as f64).collect();

    let result = Smap::new()
        .theta(0.0)
        .adapter(Batch)
        .build()
        .unwrap()
        .predict(&library, &target)
        .unwrap();

    assert_eq!(result.predictions.len(), 9);
    for (i, &p) in result.predictions.iter().enumerate() {
        assert_relative_eq!(p, 52.0 + i as f64, epsilon = 1e-7);
    }
}

/// Test explicit sequential fallback produces the same predictions.
#[test]
fn test_batch_sequential_matches_parallel() {
    let series = logistic_map(300);
    let (library, target) = series.split_at(200);

    let parallel = Smap::new()
        .theta(3.0)
        .adapter(Batch)
        .parallel(true)
        .build()
        .unwrap()
        .predict(library, target)
        .unwrap();

    let sequential = Smap::new()
        .theta(3.0)
        .adapter(Batch)
        .parallel(false)
        .build()
        .unwrap()
        .predict(library, target)
        .unwrap();

    assert_eq!(parallel.predictions.len(), sequential.predictions.len());
    for (&p, &s) in parallel.predictions.iter().zip(sequential.predictions.iter()) {
        assert_eq!(p.is_nan(), s.is_nan());
        if p.is_finite() {
            assert_relative_eq!(p, s);
        }
    }
}

/// Test skill computation through the parallel path.
#[test]
fn test_batch_parallel_skill() {
    let series = logistic_map(400);
    let (library, target) = series.split_at(250);

    let result = Smap::new()
        .theta(9.0)
        .return_skill()
        .adapter(Batch)
        .build()
        .unwrap()
        .predict(library, target)
        .unwrap();

    let skill = result.skill.expect("skill requested");
    assert!(skill.rho > 0.9, "rho = {}", skill.rho);
}

/// Test the gap sentinel survives the parallel pass.
#[test]
fn test_parallel_gap_sentinel() {
    let series: Vec<f64> = vec![0.2, 0.7, 0.5];

    let result = Smap::new()
        .theta(1.0)
        .adapter(Batch)
        .build()
        .unwrap()
        .predict(&series, &series)
        .unwrap();

    assert_eq!(result.predictions.len(), 2);
    assert_eq!(result.gap_count(), 1);
    assert!(result.predictions[0].is_nan());
}

// ============================================================================
// Sweep Evaluation Tests
// ============================================================================

/// Test the parallel sweep preserves grid order.
#[test]
fn test_sweep_parallel_order() {
    let series = logistic_map(300);
    let (library, target) = series.split_at(180);

    let thetas = vec![5.0, 0.0, 2.0, 9.0];
    let table = Smap::new()
        .thetas(thetas.clone())
        .adapter(Sweep)
        .build()
        .unwrap()
        .evaluate(library, target)
        .unwrap();

    assert_eq!(table.len(), thetas.len());
    for (entry, &theta) in table.iter().zip(thetas.iter()) {
        assert_eq!(entry.theta, theta);
    }
}

/// Test parallel and sequential sweeps agree.
#[test]
fn test_sweep_parallel_matches_sequential() {
    let series = logistic_map(250);
    let (library, target) = series.split_at(150);
    let thetas = vec![0.0, 1.0, 4.0];

    let parallel = Smap::new()
        .thetas(thetas.clone())
        .adapter(Sweep)
        .parallel(true)
        .build()
        .unwrap()
        .evaluate(library, target)
        .unwrap();

    let sequential = Smap::new()
        .thetas(thetas)
        .adapter(Sweep)
        .parallel(false)
        .build()
        .unwrap()
        .evaluate(library, target)
        .unwrap();

    for (p, s) in parallel.iter().zip(sequential.iter()) {
        assert_eq!(p.theta, s.theta);
        assert_relative_eq!(p.skill.rho, s.skill.rho);
        assert_relative_eq!(p.skill.rmse, s.skill.rmse);
        assert_eq!(p.skill.n, s.skill.n);
    }
}

// ============================================================================
// Input Handling Tests
// ============================================================================

/// Test ndarray inputs.
#[test]
fn test_ndarray_integration() {
    let series = logistic_map(120);
    let library = Array1::from_vec(series[..80].to_vec());
    let target = Array1::from_vec(series[80..].to_vec());

    let result = Smap::new()
        .theta(2.0)
        .adapter(Batch)
        .build()
        .unwrap()
        .predict(&library, &target)
        .unwrap();

    assert_eq!(result.predictions.len(), target.len() - 1);
}

/// Test that ndarray and slice inputs give identical predictions.
#[test]
fn test_ndarray_matches_slice() {
    let series = logistic_map(120);
    let (library, target) = series.split_at(80);

    let from_slice = Smap::new()
        .theta(1.0)
        .adapter(Batch)
        .build()
        .unwrap()
        .predict(library, target)
        .unwrap();

    let lib_arr = Array1::from_vec(library.to_vec());
    let tgt_arr = Array1::from_vec(target.to_vec());
    let from_array = Smap::new()
        .theta(1.0)
        .adapter(Batch)
        .build()
        .unwrap()
        .predict(&lib_arr, &tgt_arr)
        .unwrap();

    for (&a, &b) in from_slice.predictions.iter().zip(from_array.predictions.iter()) {
        assert_relative_eq!(a, b);
    }
}

/// Test non-contiguous ndarray views are rejected.
#[test]
fn test_non_contiguous_ndarray_rejected() {
    let series = logistic_map(120);
    let arr = Array1::from_vec(series);

    // A strided view is not contiguous in memory.
    let strided = arr.slice(ndarray::s![..;2]);
    let target = Array1::from_vec(logistic_map(40));

    let res = Smap::new()
        .adapter(Batch)
        .build()
        .unwrap()
        .predict(&strided, &target);

    assert!(matches!(res, Err(SmapError::InvalidInput(_))));
}

// ============================================================================
// Error Propagation Tests
// ============================================================================

/// Test that core validation errors surface through fastSmap.
#[test]
fn test_error_propagation() {
    assert!(matches!(
        Smap::<f64>::new().embedding_dim(0).adapter(Batch).build(),
        Err(SmapError::InvalidEmbeddingDim(0))
    ));

    let library = vec![0.1_f64, 0.2];
    let target = vec![0.3_f64, 0.4];
    let model = Smap::new().adapter(Batch).build().unwrap();
    let res = model.predict(&library, &target);
    assert!(matches!(res, Err(SmapError::SeriesTooShort { .. })));
}
