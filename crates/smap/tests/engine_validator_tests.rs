#![cfg(feature = "dev")]
//! Tests for input validation utilities.
//!
//! These tests verify the validation functions used in S-map for:
//! - Series validation (emptiness, numeric validity)
//! - Parameter validation (embedding dimension, lag, horizon, theta)
//! - Length requirements for library and target
//! - Error reporting
//!
//! ## Test Organization
//!
//! 1. **Series Validation** - Emptiness, NaN/Inf rejection
//! 2. **Parameter Validation** - Bounds on E, tau, Tp, theta
//! 3. **Length Requirements** - Minimum series lengths
//! 4. **Builder Validation** - Duplicate parameter detection

use smap::internals::engine::validator::Validator;
use smap::internals::primitives::errors::SmapError;

// ============================================================================
// Series Validation Tests
// ============================================================================

/// Test validation rejects an empty series.
#[test]
fn test_validate_empty_series() {
    let series: Vec<f64> = vec![];
    let res = Validator::validate_series(&series, "library");

    assert!(matches!(res, Err(SmapError::EmptyInput)));
}

/// Test validation rejects NaN values with position context.
#[test]
fn test_validate_nan_value() {
    let series = vec![1.0, f64::NAN, 3.0];
    let res = Validator::validate_series(&series, "target");

    match res {
        Err(SmapError::InvalidNumericValue(msg)) => {
            assert!(msg.contains("target"), "message names the series: {}", msg);
            assert!(msg.contains('1'), "message names the index: {}", msg);
        }
        other => panic!("expected InvalidNumericValue, got {:?}", other),
    }
}

/// Test validation rejects infinite values.
#[test]
fn test_validate_infinite_value() {
    let series = vec![1.0, f64::INFINITY];
    let res = Validator::validate_series(&series, "library");

    assert!(matches!(res, Err(SmapError::InvalidNumericValue(_))));
}

/// Test validation accepts a finite series.
#[test]
fn test_validate_valid_series() {
    let series = vec![0.1, -5.0, 1e300];
    assert!(Validator::validate_series(&series, "library").is_ok());
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// Test embedding dimension bounds.
#[test]
fn test_validate_embedding_dim() {
    assert!(matches!(
        Validator::validate_embedding_dim(0),
        Err(SmapError::InvalidEmbeddingDim(0))
    ));
    assert!(Validator::validate_embedding_dim(1).is_ok());
    assert!(Validator::validate_embedding_dim(10).is_ok());
}

/// Test lag bounds.
#[test]
fn test_validate_lag() {
    assert!(matches!(
        Validator::validate_lag(0),
        Err(SmapError::InvalidLag(0))
    ));
    assert!(Validator::validate_lag(1).is_ok());
}

/// Test horizon bounds.
#[test]
fn test_validate_horizon() {
    assert!(matches!(
        Validator::validate_horizon(0),
        Err(SmapError::InvalidHorizon(0))
    ));
    assert!(Validator::validate_horizon(1).is_ok());
}

/// Test theta must be finite and non-negative.
#[test]
fn test_validate_theta() {
    assert!(Validator::validate_theta(0.0).is_ok());
    assert!(Validator::validate_theta(9.0).is_ok());

    assert!(matches!(
        Validator::validate_theta(-0.5),
        Err(SmapError::InvalidTheta(_))
    ));
    assert!(matches!(
        Validator::validate_theta(f64::NAN),
        Err(SmapError::InvalidTheta(_))
    ));
    assert!(matches!(
        Validator::validate_theta(f64::INFINITY),
        Err(SmapError::InvalidTheta(_))
    ));
}

/// Test theta grid validation.
#[test]
fn test_validate_thetas() {
    let empty: Vec<f64> = vec![];
    assert!(matches!(
        Validator::validate_thetas(&empty),
        Err(SmapError::InvalidInput(_))
    ));

    assert!(Validator::validate_thetas(&[0.0, 1.0, 9.0]).is_ok());
    assert!(Validator::validate_thetas(&[0.0, -1.0]).is_err());
}

// ============================================================================
// Length Requirement Tests
// ============================================================================

/// Test the library minimum length.
///
/// The library needs at least one embedded row with a Tp-ahead
/// continuation: (E-1)*tau + Tp + 1 points.
#[test]
fn test_validate_library_len() {
    // E=2, tau=1, Tp=1 => minimum 3 points
    assert!(matches!(
        Validator::validate_library_len(2, 2, 1, 1),
        Err(SmapError::SeriesTooShort {
            which: "library",
            got: 2,
            min: 3
        })
    ));
    assert!(Validator::validate_library_len(3, 2, 1, 1).is_ok());

    // E=3, tau=2, Tp=2 => minimum 7 points
    assert!(Validator::validate_library_len(6, 3, 2, 2).is_err());
    assert!(Validator::validate_library_len(7, 3, 2, 2).is_ok());
}

/// Test the target minimum length.
///
/// The target needs at least one embedded row: (E-1)*tau + 1 points.
#[test]
fn test_validate_target_len() {
    assert!(matches!(
        Validator::validate_target_len(1, 2, 1),
        Err(SmapError::SeriesTooShort {
            which: "target",
            got: 1,
            min: 2
        })
    ));
    assert!(Validator::validate_target_len(2, 2, 1).is_ok());
}

// ============================================================================
// Builder Validation Tests
// ============================================================================

/// Test duplicate parameter detection.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());

    let res = Validator::validate_no_duplicates(Some("theta"));
    assert!(matches!(
        res,
        Err(SmapError::DuplicateParameter { parameter: "theta" })
    ));
}

/// Test error messages are informative.
#[test]
fn test_error_messages() {
    let err = SmapError::SeriesTooShort {
        which: "library",
        got: 2,
        min: 3,
    };
    let msg = format!("{}", err);
    assert!(msg.contains("library"));
    assert!(msg.contains('2'));
    assert!(msg.contains('3'));

    let msg = format!("{}", SmapError::InvalidTheta(-1.0));
    assert!(msg.contains("-1"));
}
