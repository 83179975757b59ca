use std::collections::BTreeMap;

use errmetrics_core::{MetricKind, MetricsError, PairedSeries, Result, TheilRequest};
use serde::Serialize;
use tracing::debug;

use crate::coefficients::{u1, u2};
use crate::proportions::{bias, noise, var};
use crate::stl::stlcomp;

/// Result of a dispatcher call: one value, or every statistic by name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TheilOutput {
    Single(f64),
    All(BTreeMap<MetricKind, f64>),
}

impl TheilOutput {
    pub fn as_single(&self) -> Option<f64> {
        match self {
            TheilOutput::Single(value) => Some(*value),
            TheilOutput::All(_) => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<MetricKind, f64>> {
        match self {
            TheilOutput::Single(_) => None,
            TheilOutput::All(map) => Some(map),
        }
    }
}

type Handler = fn(&[f64], &[f64], Option<&[f64]>) -> Result<f64>;

fn handler(kind: MetricKind) -> Handler {
    match kind {
        MetricKind::U1 => |a, p, _| u1(a, p),
        MetricKind::U2 => |a, p, _| u2(a, p),
        MetricKind::Bias => |a, p, _| bias(a, p),
        MetricKind::Var => |a, p, _| var(a, p),
        MetricKind::Noise => |a, p, _| noise(a, p),
        MetricKind::StlComp => |a, p, ts| {
            let ts = ts.ok_or(MetricsError::MissingSeries(MetricKind::StlComp))?;
            stlcomp(a, p, ts)
        },
    }
}

/// Compute one statistic.
///
/// `time_series` is the trend+seasonal baseline used by `StlComp`
/// (tail-aligned with the window); the other statistics ignore it.
pub fn compute(
    kind: MetricKind,
    actual: &[f64],
    predicted: &[f64],
    time_series: Option<&[f64]>,
) -> Result<f64> {
    handler(kind)(actual, predicted, time_series)
}

/// Compute the statistic named by `key`, or all of them for `"all"`.
///
/// Keys are `u1`, `u2`, `bias`, `var`, `noise`, `stlcomp` and `all`; any other
/// key fails with `UnknownMetricKind`. `time_series` is required whenever the
/// request includes `stlcomp`.
pub fn theil_stats(
    key: &str,
    actual: &[f64],
    predicted: &[f64],
    time_series: Option<&[f64]>,
) -> Result<TheilOutput> {
    let request: TheilRequest = key.parse()?;
    let kinds = request.kinds();
    check_inputs(&kinds, actual, predicted, time_series)?;

    debug!(request = key, n = actual.len(), "Dispatching Theil statistics");

    match request {
        TheilRequest::One(kind) => {
            compute(kind, actual, predicted, time_series).map(TheilOutput::Single)
        }
        TheilRequest::All => {
            compute_all(&kinds, actual, predicted, time_series).map(TheilOutput::All)
        }
    }
}

/// Compute several statistics at once.
///
/// `"all"` anywhere in `keys` selects every statistic. Every key is parsed
/// before anything is computed, so one unknown key fails the whole call.
pub fn theil_stats_many(
    keys: &[&str],
    actual: &[f64],
    predicted: &[f64],
    time_series: Option<&[f64]>,
) -> Result<BTreeMap<MetricKind, f64>> {
    let requests = keys
        .iter()
        .map(|key| key.parse::<TheilRequest>())
        .collect::<Result<Vec<_>>>()?;

    let mut kinds: Vec<MetricKind> = if requests.contains(&TheilRequest::All) {
        MetricKind::ALL.to_vec()
    } else {
        requests.iter().flat_map(TheilRequest::kinds).collect()
    };
    kinds.sort();
    kinds.dedup();

    check_inputs(&kinds, actual, predicted, time_series)?;
    debug!(kinds = ?kinds, n = actual.len(), "Dispatching Theil statistics");

    compute_all(&kinds, actual, predicted, time_series)
}

fn check_inputs(
    kinds: &[MetricKind],
    actual: &[f64],
    predicted: &[f64],
    time_series: Option<&[f64]>,
) -> Result<()> {
    PairedSeries::new(actual, predicted)?;
    if time_series.is_none() {
        if let Some(kind) = kinds.iter().find(|k| k.needs_series()) {
            return Err(MetricsError::MissingSeries(*kind));
        }
    }
    Ok(())
}

fn compute_all(
    kinds: &[MetricKind],
    actual: &[f64],
    predicted: &[f64],
    time_series: Option<&[f64]>,
) -> Result<BTreeMap<MetricKind, f64>> {
    kinds
        .iter()
        .map(|&kind| Ok((kind, compute(kind, actual, predicted, time_series)?)))
        .collect()
}

#[cfg(test)]
mod tests;
