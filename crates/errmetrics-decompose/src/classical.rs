use errmetrics_core::{DecompositionConfig, MetricsError, Result};
use tracing::{debug, warn};

use crate::period::{infer_period, linear_fit};
use crate::{Decomposition, SeriesDecomposer};

/// Classical additive decomposition.
///
/// Trend is a centered moving average over one season (a 2×p average for
/// even periods), extended flat to the edges. The seasonal component is the
/// per-phase mean of the detrended series, shifted to sum to zero over a
/// season. When no usable period exists the trend is a least-squares line
/// and the seasonal component is zero.
#[derive(Debug, Clone)]
pub struct ClassicalDecomposer {
    period: Option<usize>,
    max_period: usize,
}

impl ClassicalDecomposer {
    /// Decomposer that infers the period from each series.
    pub fn new() -> Self {
        Self::from_validated(&DecompositionConfig::default())
    }

    /// Decomposer with a fixed seasonal period.
    pub fn with_period(period: usize) -> Result<Self> {
        Self::from_config(&DecompositionConfig {
            period: Some(period),
            ..Default::default()
        })
    }

    pub fn from_config(config: &DecompositionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: &DecompositionConfig) -> Self {
        Self {
            period: config.period,
            max_period: config.max_period,
        }
    }

    fn select_period(&self, series: &[f64]) -> Option<usize> {
        let period = self
            .period
            .or_else(|| infer_period(series).filter(|&p| p <= self.max_period))?;
        // a season must repeat at least twice
        (period >= 2 && series.len() >= 2 * period).then_some(period)
    }
}

impl Default for ClassicalDecomposer {
    fn default() -> Self {
        Self::new()
    }
}

impl SeriesDecomposer for ClassicalDecomposer {
    fn decompose(&self, series: &[f64]) -> Result<Decomposition> {
        if series.is_empty() {
            return Err(MetricsError::EmptyInput(
                "cannot decompose an empty series".into(),
            ));
        }
        if let Some(i) = series.iter().position(|v| !v.is_finite()) {
            return Err(MetricsError::Decomposition(format!(
                "non-finite value at index {i}: {}",
                series[i]
            )));
        }

        let Some(period) = self.select_period(series) else {
            warn!(
                data_length = series.len(),
                requested_period = ?self.period,
                "No usable seasonal period, falling back to linear trend"
            );
            return linear_decomposition(series);
        };

        let trend = moving_average_trend(series, period);
        let seasonal = seasonal_component(series, &trend, period);
        let residual: Vec<f64> = series
            .iter()
            .zip(trend.iter().zip(&seasonal))
            .map(|(v, (t, s))| v - t - s)
            .collect();

        debug!(
            period = period,
            data_length = series.len(),
            "Classical decomposition complete"
        );

        Decomposition::new(trend, seasonal, residual, Some(period))
    }
}

fn linear_decomposition(series: &[f64]) -> Result<Decomposition> {
    let (slope, intercept) = linear_fit(series);
    let trend: Vec<f64> = (0..series.len())
        .map(|i| intercept + slope * i as f64)
        .collect();
    let residual = series.iter().zip(&trend).map(|(v, t)| v - t).collect();
    Decomposition::new(trend, vec![0.0; series.len()], residual, None)
}

/// Centered moving average; requires `series.len() > period`.
fn moving_average_trend(series: &[f64], period: usize) -> Vec<f64> {
    let n = series.len();
    let half = period / 2;
    let even = period % 2 == 0;

    let mut trend = vec![f64::NAN; n];
    for (i, slot) in trend.iter_mut().enumerate().take(n - half).skip(half) {
        let window = &series[i - half..=i + half];
        *slot = if even {
            // 2×p average: half weight on the two end points
            let inner: f64 = window[1..window.len() - 1].iter().sum();
            (inner + 0.5 * (window[0] + window[window.len() - 1])) / period as f64
        } else {
            window.iter().sum::<f64>() / period as f64
        };
    }

    let first = trend[half];
    let last = trend[n - half - 1];
    trend[..half].fill(first);
    trend[n - half..].fill(last);
    trend
}

fn seasonal_component(series: &[f64], trend: &[f64], period: usize) -> Vec<f64> {
    let mut sums = vec![0.0; period];
    let mut counts = vec![0usize; period];
    for (i, (v, t)) in series.iter().zip(trend).enumerate() {
        sums[i % period] += v - t;
        counts[i % period] += 1;
    }

    let phase_means: Vec<f64> = sums
        .iter()
        .zip(&counts)
        .map(|(s, &c)| if c > 0 { s / c as f64 } else { 0.0 })
        .collect();
    let offset = phase_means.iter().sum::<f64>() / period as f64;

    (0..series.len())
        .map(|i| phase_means[i % period] - offset)
        .collect()
}
