//! fastSmap Parallel Forecasting Examples
//!
//! This example demonstrates features specific to `fastSmap`:
//! - Parallel execution using `rayon`
//! - Sequential fallback
//! - `ndarray` integration
//! - Parallel theta sweeps for nonlinearity detection

use fastSmap::prelude::*;
use ndarray::Array1;
use std::time::Instant;

fn main() -> Result<(), SmapError> {
    println!("{}", "=".repeat(80));
    println!("fastSmap Parallel Forecasting Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_parallel_prediction()?;
    example_2_sequential_fallback()?;
    example_3_ndarray_integration()?;
    example_4_theta_sweep()?;

    Ok(())
}

/// Generate a chaotic logistic-map series of the given length.
fn logistic_map(n: usize) -> Vec<f64> {
    let mut series = Vec::with_capacity(n);
    series.push(0.23);
    for i in 0..n - 1 {
        let x = series[i];
        series.push(3.8 * x * (1.0 - x));
    }
    series
}

/// Example 1: Parallel Prediction
/// Demonstrates the default parallel execution mode
fn example_1_parallel_prediction() -> Result<(), SmapError> {
    println!("Example 1: Parallel Prediction");
    println!("{}", "-".repeat(80));

    let series = logistic_map(20_000);
    let (library, target) = series.split_at(10_000);

    let start = Instant::now();
    let model = Smap::new()
        .embedding_dim(2) // 2 lagged coordinates per state vector
        .theta(2.0) // Kernel nonlinearity
        .return_skill() // Score predictions against observations
        .adapter(Batch) // Parallel by default
        .build()?;

    let result = model.predict(library, target)?;
    let duration = start.elapsed();

    println!("Predicted {} points in {:?}", result.predictions.len(), duration);
    println!("Execution mode: Parallel");
    if let Some(skill) = &result.skill {
        println!("{}", skill);
    }

    println!();
    Ok(())
}

/// Example 2: Sequential Fallback
/// Demonstrates explicitly disabling parallelism
fn example_2_sequential_fallback() -> Result<(), SmapError> {
    println!("Example 2: Sequential Fallback");
    println!("{}", "-".repeat(80));

    let series = logistic_map(20_000);
    let (library, target) = series.split_at(10_000);

    let start = Instant::now();
    let model = Smap::new()
        .embedding_dim(2)
        .theta(2.0)
        .adapter(Batch)
        .parallel(false) // Disable parallel execution
        .build()?;

    let result = model.predict(library, target)?;
    let duration = start.elapsed();

    println!("Predicted {} points in {:?}", result.predictions.len(), duration);
    println!("Execution mode: Sequential");

    println!();
    Ok(())
}

/// Example 3: ndarray Integration
/// Demonstrates zero-copy prediction from ndarray inputs
fn example_3_ndarray_integration() -> Result<(), SmapError> {
    println!("Example 3: ndarray Integration");
    println!("{}", "-".repeat(80));

    let series = logistic_map(2_000);
    let library = Array1::from_vec(series[..1_000].to_vec());
    let target = Array1::from_vec(series[1_000..].to_vec());

    let model = Smap::new().embedding_dim(2).theta(1.0).adapter(Batch).build()?;

    let result = model.predict(&library, &target)?;
    println!("Predicted {} points from ndarray input", result.predictions.len());

    println!();
    Ok(())
}

/// Example 4: Parallel Theta Sweep
/// Demonstrates the skill-versus-theta profile used to detect nonlinearity
fn example_4_theta_sweep() -> Result<(), SmapError> {
    println!("Example 4: Parallel Theta Sweep");
    println!("{}", "-".repeat(80));

    let series = logistic_map(2_000);
    let (library, target) = series.split_at(1_000);

    let thetas = vec![0.0, 0.01, 0.1, 0.3, 0.5, 0.75, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];

    let table = Smap::new()
        .embedding_dim(2)
        .thetas(thetas)
        .adapter(Sweep)
        .build()?
        .evaluate(library, target)?;

    println!("{:>8} {:>10} {:>10}", "Theta", "Rho", "RMSE");
    println!("{}", "-".repeat(30));
    for entry in &table {
        println!(
            "{:>8.2} {:>10.4} {:>10.4}",
            entry.theta, entry.skill.rho, entry.skill.rmse
        );
    }

    println!();
    Ok(())
}
