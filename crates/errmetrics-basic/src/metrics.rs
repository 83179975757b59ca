use errmetrics_core::{MetricsError, PairedSeries, Result};

/// Mean Squared Error.
pub fn mse(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    let pairs = PairedSeries::new(actual, predicted)?;
    Ok(pairs.mean_of(|a, p| (a - p).powi(2)))
}

/// Sum of Squared Errors.
pub fn sse(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    let pairs = PairedSeries::new(actual, predicted)?;
    Ok(pairs.sum_of(|a, p| (a - p).powi(2)))
}

/// Root Mean Squared Error, in the units of the inputs.
pub fn rmse(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    mse(actual, predicted).map(f64::sqrt)
}

/// Mean Absolute Error.
pub fn mae(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    let pairs = PairedSeries::new(actual, predicted)?;
    Ok(pairs.mean_of(|a, p| (a - p).abs()))
}

/// Mean Absolute Percentage Error, as a fraction (not ×100).
///
/// Each absolute error is scaled by the forecast: `|a - p| / |p|`.
/// A zero forecast value fails with `DivisionByZero`.
pub fn mape(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    let pairs = PairedSeries::new(actual, predicted)?;
    let mut total = 0.0;
    for (i, (a, p)) in pairs.iter().enumerate() {
        if p == 0.0 {
            return Err(MetricsError::DivisionByZero(format!(
                "mape: predicted[{i}] is zero"
            )));
        }
        total += (a - p).abs() / p.abs();
    }
    Ok(total / pairs.len() as f64)
}

/// Symmetric MAPE, as a fraction in `[0, 2]`.
///
/// `|a - p| / ((|a| + |p|) / 2)`; fails with `DivisionByZero` where both
/// values are zero.
pub fn smape(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    let pairs = PairedSeries::new(actual, predicted)?;
    let mut total = 0.0;
    for (i, (a, p)) in pairs.iter().enumerate() {
        let denom = (a.abs() + p.abs()) / 2.0;
        if denom == 0.0 {
            return Err(MetricsError::DivisionByZero(format!(
                "smape: actual[{i}] and predicted[{i}] are both zero"
            )));
        }
        total += (a - p).abs() / denom;
    }
    Ok(total / pairs.len() as f64)
}

/// Log Quotient Error: `Σ ln(a / p)`.
///
/// Negative when the forecast runs high, positive when it runs low; swapping
/// the arguments flips the sign. Non-positive values fail with `Undefined`.
pub fn lqe(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    let pairs = PairedSeries::new(actual, predicted)?;
    let mut total = 0.0;
    for (i, (a, p)) in pairs.iter().enumerate() {
        if a <= 0.0 || p <= 0.0 {
            return Err(MetricsError::Undefined(format!(
                "lqe: log of non-positive value at index {i} (actual {a}, predicted {p})"
            )));
        }
        total += a.ln() - p.ln();
    }
    Ok(total)
}
