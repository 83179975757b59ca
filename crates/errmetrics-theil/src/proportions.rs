use errmetrics_core::{checked_div, PairedSeries, Result};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use tracing::debug;

/// Theil's partition of mean squared error into three proportions.
///
/// `bias + var + noise == 1` up to rounding. `bias` and `var` are never
/// negative, but `noise` is a remainder: `var` uses sample standard
/// deviations, so for short, strongly correlated series it can exceed the
/// spread share of the population decomposition and push `noise` below zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TheilDecomposition {
    /// `(mean(p) - mean(a))² / mse`
    pub bias: f64,
    /// `(std(p) - std(a))² / mse`, sample standard deviations (ddof = 1)
    pub var: f64,
    /// `1 - bias - var`; may be slightly negative
    pub noise: f64,
}

/// Split the squared error of `predicted` into bias, variance and noise shares.
///
/// Needs at least two observations for the standard deviations. A perfect
/// forecast (`mse == 0`) fails with `DivisionByZero`.
pub fn decompose(actual: &[f64], predicted: &[f64]) -> Result<TheilDecomposition> {
    let pairs = PairedSeries::new(actual, predicted)?;
    pairs.require(2)?;

    let mse = pairs.mean_of(|a, p| (a - p).powi(2));
    let bias = bias_share(&pairs, mse)?;
    let spread = pairs.predicted().iter().std_dev() - pairs.actual().iter().std_dev();
    let var = checked_div(spread.powi(2), mse, "var: mse is zero")?;

    let decomposition = TheilDecomposition {
        bias,
        var,
        noise: 1.0 - bias - var,
    };

    debug!(
        n = pairs.len(),
        bias = format!("{:.4}", decomposition.bias),
        var = format!("{:.4}", decomposition.var),
        noise = format!("{:.4}", decomposition.noise),
        "Theil decomposition computed"
    );

    Ok(decomposition)
}

/// Bias proportion: share of squared error from a systematic level offset.
///
/// Defined for a single observation (it is then 1 for any miss).
pub fn bias(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    let pairs = PairedSeries::new(actual, predicted)?;
    let mse = pairs.mean_of(|a, p| (a - p).powi(2));
    bias_share(&pairs, mse)
}

/// Variance proportion: share of squared error from mismatched spread.
pub fn var(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    decompose(actual, predicted).map(|d| d.var)
}

/// Noise proportion: the unsystematic remainder.
pub fn noise(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    decompose(actual, predicted).map(|d| d.noise)
}

fn bias_share(pairs: &PairedSeries, mse: f64) -> Result<f64> {
    let offset = pairs.predicted().iter().mean() - pairs.actual().iter().mean();
    checked_div(offset.powi(2), mse, "bias: mse is zero")
}
