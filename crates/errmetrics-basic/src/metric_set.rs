use errmetrics_core::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::metrics::{lqe, mae, mape, mse, smape, sse};

/// A complete set of basic accuracy metrics for one forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSet {
    /// Mean Squared Error
    pub mse: f64,
    /// Sum of Squared Errors
    pub sse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Error
    pub mae: f64,
    /// Mean Absolute Percentage Error (fraction, scaled by the forecast)
    pub mape: f64,
    /// Symmetric MAPE (fraction, 0–2)
    pub smape: f64,
    /// Log Quotient Error (signed; negative = over-forecast)
    pub lqe: f64,
}

/// Compute every basic metric for `predicted` against `actual`.
///
/// The first metric that cannot be computed decides the error; MAPE and LQE
/// are the ones that reject zero or non-positive forecasts.
pub fn compute_metrics(actual: &[f64], predicted: &[f64]) -> Result<MetricSet> {
    let mse = mse(actual, predicted)?;
    let set = MetricSet {
        mse,
        sse: sse(actual, predicted)?,
        rmse: mse.sqrt(),
        mae: mae(actual, predicted)?,
        mape: mape(actual, predicted)?,
        smape: smape(actual, predicted)?,
        lqe: lqe(actual, predicted)?,
    };

    debug!(
        n = actual.len(),
        rmse = format!("{:.4}", set.rmse),
        mae = format!("{:.4}", set.mae),
        mape = format!("{:.4}", set.mape),
        "Basic metrics computed"
    );

    Ok(set)
}
