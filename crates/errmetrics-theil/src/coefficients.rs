use errmetrics_basic::rmse;
use errmetrics_core::{checked_div, MetricsError, PairedSeries, Result};

/// Theil's U1: `rmse / (rms(actual) + rms(predicted))`.
///
/// Lies in `[0, 1]`, 0 for a perfect forecast. All-zero inputs fail with
/// `DivisionByZero`.
pub fn u1(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    let rmse = rmse(actual, predicted)?;
    let pairs = PairedSeries::new(actual, predicted)?;
    let rms_actual = pairs.mean_of(|a, _| a * a).sqrt();
    let rms_predicted = pairs.mean_of(|_, p| p * p).sqrt();
    checked_div(rmse, rms_actual + rms_predicted, "u1: both series are all zero")
}

/// Theil's U2 as `rmse / rms(predicted)`.
///
/// Needs at least two observations. An all-zero forecast fails with
/// `DivisionByZero`.
pub fn u2(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    let rmse = rmse(actual, predicted)?;
    let pairs = PairedSeries::new(actual, predicted)?;
    pairs.require(2)?;
    let rms_predicted = pairs.mean_of(|_, p| p * p).sqrt();
    checked_div(rmse, rms_predicted, "u2: predicted is all zero")
}

/// Theil's U2 against the naive no-change forecast.
///
/// Compares forecast errors with the errors of predicting `a[t+1] = a[t]`,
/// both relative to the last actual value:
///
/// ```text
/// sqrt( Σ ((p[t+1] - a[t+1]) / a[t])² / Σ ((a[t+1] - a[t]) / a[t])² )
/// ```
///
/// Below 1 the forecast beats the naive one; exactly 1 for the naive forecast
/// itself. Fails with `DivisionByZero` on a zero actual value (other than the
/// last) or a constant actual series.
pub fn u2_naive(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    let pairs = PairedSeries::new(actual, predicted)?;
    pairs.require(2)?;

    let a = pairs.actual();
    let p = pairs.predicted();
    let mut forecast_sq = 0.0;
    let mut naive_sq = 0.0;
    for t in 0..a.len() - 1 {
        if a[t] == 0.0 {
            return Err(MetricsError::DivisionByZero(format!(
                "u2_naive: actual[{t}] is zero"
            )));
        }
        forecast_sq += ((p[t + 1] - a[t + 1]) / a[t]).powi(2);
        naive_sq += ((a[t + 1] - a[t]) / a[t]).powi(2);
    }

    checked_div(forecast_sq, naive_sq, "u2_naive: actual series is constant").map(f64::sqrt)
}
