//! Seasonal-trend decomposition used as the baseline for the STL component
//! metric.

mod classical;
mod fixed;
mod period;

pub use classical::ClassicalDecomposer;
pub use fixed::FixedDecomposer;
pub use period::infer_period;

use errmetrics_core::{MetricsError, Result};

/// Trait for splitting a series into trend, seasonal and residual parts.
pub trait SeriesDecomposer: Send + Sync {
    /// Decompose `series`; every component has `series.len()` values.
    fn decompose(&self, series: &[f64]) -> Result<Decomposition>;
}

/// Additive decomposition: `series = trend + seasonal + residual`.
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition {
    pub trend: Vec<f64>,
    pub seasonal: Vec<f64>,
    pub residual: Vec<f64>,
    /// Seasonal period used, `None` when no seasonal component was fitted.
    pub period: Option<usize>,
}

impl Decomposition {
    /// Build a decomposition, checking the components are aligned.
    pub fn new(
        trend: Vec<f64>,
        seasonal: Vec<f64>,
        residual: Vec<f64>,
        period: Option<usize>,
    ) -> Result<Self> {
        if trend.len() != seasonal.len() || trend.len() != residual.len() {
            return Err(MetricsError::Decomposition(format!(
                "components are not aligned: trend {}, seasonal {}, residual {}",
                trend.len(),
                seasonal.len(),
                residual.len()
            )));
        }
        Ok(Self {
            trend,
            seasonal,
            residual,
            period,
        })
    }

    pub fn len(&self) -> usize {
        self.trend.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trend.is_empty()
    }

    /// Trend plus seasonal component, i.e. the series with the residual removed.
    pub fn fitted(&self) -> Vec<f64> {
        self.trend
            .iter()
            .zip(&self.seasonal)
            .map(|(t, s)| t + s)
            .collect()
    }
}
