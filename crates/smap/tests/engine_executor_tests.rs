#![cfg(feature = "dev")]
//! Tests for the S-map execution engine.
//!
//! These tests verify the full per-call pipeline: embedding, continuation
//! pairing, neighbor exclusion, per-row prediction, and output alignment.
//!
//! ## Test Organization
//!
//! 1. **Output Shape** - Prediction count and alignment
//! 2. **Exact Dynamics** - Linear and constant series recovered exactly
//! 3. **Gap Sentinel** - NaN for rows with no usable neighbor
//! 4. **Self-Match Exclusion** - Policy behavior on identical series
//! 5. **Skill** - Scoring wiring

use approx::assert_relative_eq;

use smap::internals::algorithms::neighbors::SelfMatchPolicy;
use smap::internals::engine::executor::{SmapConfig, SmapExecutor};

// ============================================================================
// Helper Functions
// ============================================================================

fn config(theta: f64) -> SmapConfig<f64> {
    SmapConfig {
        embedding_dim: 2,
        lag: 1,
        horizon: 1,
        theta,
        self_match: SelfMatchPolicy::Exclude,
        return_skill: false,
        custom_predict_pass: None,
    }
}

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
// Output Shape Tests
// ============================================================================

/// Test one prediction per target embedding row.
#[test]
fn test_prediction_count() {
    let library = logistic_map(60);
    let target = logistic_map(31).split_off(1);

    let output = SmapExecutor::run_with_config(&library, &target, config(1.0));

    // rows = target.len() - (E-1)*tau
    assert_eq!(output.predictions.len(), target.len() - 1);
    assert!(output.skill.is_none());
}

// ============================================================================
// Exact Dynamics Tests
// ============================================================================

/// Test exact one-step forecasts on a linear ramp.
///
/// The embedded ramp's continuation map is affine, so every prediction is
/// exact; prediction i must equal target[i + offset + 1].
#[test]
fn test_linear_ramp_predictions_exact() {
    let library: Vec<f64> = (0..30).map(|t| t as f64).collect();
    let target: Vec<f64> = (100..110).map(|t| t as f64).collect();

    let output = SmapExecutor::run_with_config(&library, &target, config(0.0));

    assert_eq!(output.predictions.len(), 9);
    for (i, &p) in output.predictions.iter().enumerate() {
        // Target row i sits at time i+1, so its continuation is target time
        // i+2, i.e. the value 102 + i.
        assert_relative_eq!(p, 102.0 + i as f64, epsilon = 1e-7);
    }
}

/// Test a constant series predicts the constant.
///
/// All distances are zero, so the kernel falls back to uniform weights and
/// the degenerate regression still reproduces the constant exactly.
#[test]
fn test_constant_series() {
    let library = vec![0.4; 12];
    let target = vec![0.4; 6];

    let output = SmapExecutor::run_with_config(&library, &target, config(2.0));

    assert_eq!(output.predictions.len(), 5);
    for &p in &output.predictions {
        assert_relative_eq!(p, 0.4, epsilon = 1e-8);
    }
}

/// Test high-theta forecasts track chaotic dynamics.
#[test]
fn test_logistic_map_high_theta() {
    let series = logistic_map(300);
    let (library, target) = series.split_at(200);

    let mut cfg = config(9.0);
    cfg.return_skill = true;

    let output = SmapExecutor::run_with_config(library, target, cfg);
    let skill = output.skill.expect("skill requested");

    assert!(skill.n > 0);
    assert!(skill.rho.is_finite());
    assert!(skill.rho > 0.9, "rho = {}", skill.rho);
}

// ============================================================================
// Gap Sentinel Tests
// ============================================================================

/// Test the NaN gap for a row whose only candidate is excluded.
///
/// With a three-point library predicting itself, only row 0 has a defined
/// continuation, and target row 0 is its own temporal coincidence. The
/// output keeps one slot per row, with the gap marked NaN.
#[test]
fn test_gap_sentinel() {
    let series = vec![0.2, 0.7, 0.5];

    let output = SmapExecutor::run_with_config(&series, &series, config(1.0));

    assert_eq!(output.predictions.len(), 2);
    assert!(output.predictions[0].is_nan());
    assert!(output.predictions[1].is_finite());
}

// ============================================================================
// Self-Match Exclusion Tests
// ============================================================================

/// Test that Allow keeps the coincident neighbor.
///
/// With the coincident row allowed, the gap from the exclusion test
/// disappears.
#[test]
fn test_self_match_allow() {
    let series = vec![0.2, 0.7, 0.5];

    let mut cfg = config(1.0);
    cfg.self_match = SelfMatchPolicy::Allow;

    let output = SmapExecutor::run_with_config(&series, &series, cfg);

    assert!(output.predictions[0].is_finite());
}

/// Test that exclusion only applies when the series are the same.
///
/// A distinct target with identical parameters must not trigger temporal
/// exclusion even where values happen to collide.
#[test]
fn test_no_exclusion_for_distinct_series() {
    let library = logistic_map(50);
    let mut target = library[..20].to_vec();
    target[19] += 1e-9; // same prefix, different series

    let output = SmapExecutor::run_with_config(&library, &target, config(1.0));

    assert!(output.predictions.iter().all(|p| p.is_finite()));
}

// ============================================================================
// Skill Tests
// ============================================================================

/// Test skill alignment: predictions score against Tp-shifted observations.
#[test]
fn test_skill_alignment_on_ramp() {
    let library: Vec<f64> = (0..30).map(|t| t as f64).collect();
    let target: Vec<f64> = (50..60).map(|t| t as f64).collect();

    let mut cfg = config(0.0);
    cfg.return_skill = true;

    let output = SmapExecutor::run_with_config(&library, &target, cfg);
    let skill = output.skill.expect("skill requested");

    // 10 target points, offset 1, horizon 1 => 8 scored pairs, all exact.
    assert_eq!(skill.n, 8);
    assert_relative_eq!(skill.rmse, 0.0, epsilon = 1e-7);
    assert_relative_eq!(skill.rho, 1.0, epsilon = 1e-9);
}
