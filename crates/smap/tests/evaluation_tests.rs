#![cfg(feature = "dev")]
//! Tests for forecast skill metrics and the theta sweep.
//!
//! These tests verify the evaluation layer:
//! - Pearson rho, RMSE, and MAE against hand-computed values
//! - Gap (NaN) skipping in scoring
//! - Streaming correlation state
//! - Theta-grid sweep ordering and the nonlinearity signature
//!
//! ## Test Organization
//!
//! 1. **Skill Metrics** - Exact values on small inputs
//! 2. **Gap Handling** - Non-finite predictions skipped
//! 3. **Correlation State** - Streaming accumulator
//! 4. **Theta Sweep** - Grid order, skill profile

use approx::assert_relative_eq;

use smap::internals::algorithms::neighbors::SelfMatchPolicy;
use smap::internals::engine::executor::SmapConfig;
use smap::internals::evaluation::skill::ForecastSkill;
use smap::internals::evaluation::sweep::sweep_sequential;
use smap::internals::math::stats::CorrcoefState;

// ============================================================================
// Skill Metric Tests
// ============================================================================

/// Test perfect predictions yield rho 1 and zero error.
#[test]
fn test_skill_perfect() {
    let predicted = vec![1.0, 2.0, 3.0, 4.0];
    let observed = vec![1.0, 2.0, 3.0, 4.0];

    let skill = ForecastSkill::compute(&predicted, &observed);

    assert_eq!(skill.n, 4);
    assert_relative_eq!(skill.rho, 1.0, epsilon = 1e-12);
    assert_relative_eq!(skill.rmse, 0.0);
    assert_relative_eq!(skill.mae, 0.0);
}

/// Test anti-correlated predictions yield rho -1.
#[test]
fn test_skill_anticorrelated() {
    let predicted = vec![3.0, 2.0, 1.0];
    let observed = vec![1.0, 2.0, 3.0];

    let skill = ForecastSkill::compute(&predicted, &observed);

    assert_relative_eq!(skill.rho, -1.0, epsilon = 1e-12);
}

/// Test RMSE and MAE against hand-computed values.
#[test]
fn test_skill_error_values() {
    let predicted = vec![1.0, 2.0, 3.0];
    let observed = vec![2.0, 2.0, 5.0];

    let skill = ForecastSkill::compute(&predicted, &observed);

    // errors: -1, 0, -2
    assert_relative_eq!(skill.mae, 1.0, epsilon = 1e-12);
    assert_relative_eq!(skill.rmse, (5.0_f64 / 3.0).sqrt(), epsilon = 1e-12);
}

// ============================================================================
// Gap Handling Tests
// ============================================================================

/// Test that NaN predictions are skipped, not scored.
#[test]
fn test_skill_skips_gaps() {
    let predicted = vec![1.0, f64::NAN, 3.0];
    let observed = vec![1.0, 99.0, 3.0];

    let skill = ForecastSkill::compute(&predicted, &observed);

    assert_eq!(skill.n, 2);
    assert_relative_eq!(skill.rmse, 0.0);
}

/// Test all-gap predictions yield undefined skill.
#[test]
fn test_skill_all_gaps() {
    let predicted = vec![f64::NAN, f64::NAN];
    let observed = vec![1.0, 2.0];

    let skill = ForecastSkill::compute(&predicted, &observed);

    assert_eq!(skill.n, 0);
    assert!(skill.rho.is_nan());
    assert!(skill.rmse.is_nan());
}

// ============================================================================
// Correlation State Tests
// ============================================================================

/// Test the streaming accumulator on an exact linear relationship.
#[test]
fn test_corrcoef_linear() {
    let mut state = CorrcoefState::new();
    for i in 0..10 {
        let a = i as f64;
        state.add(a, 2.0 * a + 1.0);
    }

    assert_relative_eq!(state.rho(), 1.0, epsilon = 1e-12);
}

/// Test degenerate inputs yield NaN.
#[test]
fn test_corrcoef_degenerate() {
    let mut single = CorrcoefState::<f64>::new();
    single.add(1.0, 2.0);
    assert!(single.rho().is_nan());

    let mut flat = CorrcoefState::<f64>::new();
    flat.add(1.0, 5.0);
    flat.add(2.0, 5.0); // zero variance in b
    assert!(flat.rho().is_nan());
}

// ============================================================================
// Theta Sweep Tests
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

fn base_config() -> SmapConfig<f64> {
    SmapConfig {
        embedding_dim: 2,
        lag: 1,
        horizon: 1,
        theta: 0.0,
        self_match: SelfMatchPolicy::Exclude,
        return_skill: true,
        custom_predict_pass: None,
    }
}

/// Test that results come back in grid order with matching thetas.
#[test]
fn test_sweep_grid_order() {
    let series = logistic_map(200);
    let (library, target) = series.split_at(120);

    let thetas = vec![2.0, 0.0, 5.0];
    let table = sweep_sequential(library, target, &base_config(), &thetas);

    assert_eq!(table.len(), 3);
    for (entry, &theta) in table.iter().zip(thetas.iter()) {
        assert_eq!(entry.theta, theta);
        assert!(entry.skill.n > 0);
    }
}

/// Test the nonlinearity signature on a chaotic series.
///
/// For the logistic map, local linear maps beat the single global one, so
/// skill at high theta must exceed skill at theta 0, and the best skill in
/// the profile must be high.
#[test]
fn test_sweep_nonlinearity_signature() {
    let series = logistic_map(400);
    let (library, target) = series.split_at(250);

    let thetas = vec![0.0, 0.5, 1.0, 2.0, 4.0, 9.0];
    let table = sweep_sequential(library, target, &base_config(), &thetas);

    let rho_global = table[0].skill.rho;
    let rho_best = table
        .iter()
        .map(|e| e.skill.rho)
        .fold(f64::NEG_INFINITY, f64::max);

    assert!(rho_best > 0.9, "best rho = {}", rho_best);
    assert!(
        table[5].skill.rho > rho_global,
        "rho(9) = {} should exceed rho(0) = {}",
        table[5].skill.rho,
        rho_global
    );
}
