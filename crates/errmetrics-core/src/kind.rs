use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::MetricsError;

/// A single Theil statistic.
///
/// Declaration order is the order used by `MetricKind::ALL` and by the
/// ordered maps returned for aggregate requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// Theil's first inequality coefficient.
    U1,
    /// Theil's second inequality coefficient.
    U2,
    /// Share of squared error from a level offset.
    Bias,
    /// Share of squared error from mismatched spread.
    Var,
    /// Unsystematic share of squared error.
    Noise,
    /// Forecast error relative to the trend+seasonal baseline.
    #[serde(rename = "stlcomp")]
    StlComp,
}

impl MetricKind {
    pub const ALL: [MetricKind; 6] = [
        MetricKind::U1,
        MetricKind::U2,
        MetricKind::Bias,
        MetricKind::Var,
        MetricKind::Noise,
        MetricKind::StlComp,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::U1 => "u1",
            MetricKind::U2 => "u2",
            MetricKind::Bias => "bias",
            MetricKind::Var => "var",
            MetricKind::Noise => "noise",
            MetricKind::StlComp => "stlcomp",
        }
    }

    /// Whether computing this statistic needs the reference time series.
    pub fn needs_series(&self) -> bool {
        matches!(self, MetricKind::StlComp)
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MetricKind {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| MetricsError::UnknownMetricKind(s.to_string()))
    }
}

/// What a caller asked the aggregate dispatcher for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TheilRequest {
    One(MetricKind),
    All,
}

impl TheilRequest {
    /// Statistics covered by this request, in `MetricKind::ALL` order.
    pub fn kinds(&self) -> Vec<MetricKind> {
        match self {
            TheilRequest::One(kind) => vec![*kind],
            TheilRequest::All => MetricKind::ALL.to_vec(),
        }
    }
}

impl FromStr for TheilRequest {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(TheilRequest::All);
        }
        s.parse().map(TheilRequest::One)
    }
}
