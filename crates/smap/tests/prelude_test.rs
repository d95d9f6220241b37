//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports all necessary types and
//! traits for convenient usage of the S-map API. The prelude should provide
//! a one-stop import for common forecasting functionality.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Type Usage** - Types can be used without qualification
//! 3. **Builder Pattern** - Complete workflows work with prelude imports

use smap::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that all prelude imports work correctly.
///
/// Verifies that the prelude exports all necessary types for S-map usage.
#[test]
fn test_prelude_imports() {
    let series: Vec<f64> = (0..40).map(|t| (t as f64 * 0.3).sin()).collect();
    let (library, target) = series.split_at(25);

    let result = Smap::new()
        .adapter(Batch)
        .build()
        .unwrap()
        .predict(library, target);

    assert!(result.is_ok(), "Basic predict should work with prelude imports");
}

/// Test SelfMatchPolicy variants are available.
#[test]
fn test_prelude_self_match_policy() {
    let _ = Smap::<f64>::new().self_matches(Exclude);
    let _ = Smap::<f64>::new().self_matches(Allow);
    let _: SelfMatchPolicy = SelfMatchPolicy::default();
}

/// Test adapter types are available.
#[test]
fn test_prelude_adapters() {
    let series: Vec<f64> = (0..30).map(|t| (t as f64 * 0.5).cos()).collect();
    let (library, target) = series.split_at(20);

    // Batch adapter
    let _ = Smap::<f64>::new()
        .adapter(Batch)
        .build()
        .unwrap()
        .predict(library, target);

    // Sweep adapter
    let _ = Smap::<f64>::new()
        .thetas(vec![0.0, 1.0])
        .adapter(Sweep)
        .build();
}

/// Test result and skill types are available unqualified.
#[test]
fn test_prelude_result_types() {
    let series: Vec<f64> = (0..40).map(|t| (t as f64 * 0.3).sin()).collect();
    let (library, target) = series.split_at(25);

    let result: SmapResult<f64> = Smap::new()
        .return_skill()
        .adapter(Batch)
        .build()
        .unwrap()
        .predict(library, target)
        .unwrap();

    let skill: ForecastSkill<f64> = result.skill.unwrap();
    assert!(skill.n > 0);
}

/// Test the sweep table type is available unqualified.
#[test]
fn test_prelude_theta_skill() {
    let series: Vec<f64> = (0..60).map(|t| (t as f64 * 0.3).sin()).collect();
    let (library, target) = series.split_at(40);

    let table: Vec<ThetaSkill<f64>> = Smap::new()
        .thetas(vec![0.0, 2.0])
        .adapter(Sweep)
        .build()
        .unwrap()
        .evaluate(library, target)
        .unwrap();

    assert_eq!(table.len(), 2);
}

/// Test the one-shot function is available.
#[test]
fn test_prelude_one_shot() {
    let series: Vec<f64> = (0..50).map(|t| (t as f64 * 0.2).sin()).collect();
    let (library, target) = series.split_at(30);

    let predictions = smap(library, target, 2, 1, 1, 1.0).unwrap();
    assert_eq!(predictions.len(), target.len() - 1);
}

/// Test error types are available.
///
/// Verifies that error handling works with prelude imports.
#[test]
fn test_prelude_error_handling() {
    let library: Vec<f64> = vec![];
    let target: Vec<f64> = vec![0.1, 0.2];

    let result = Smap::<f64>::new()
        .adapter(Batch)
        .build()
        .unwrap()
        .predict(&library, &target);

    assert!(matches!(result, Err(SmapError::EmptyInput)));
}
