use errmetrics_basic::rmse;
use errmetrics_core::{checked_div, tail_aligned, Result};
use errmetrics_decompose::SeriesDecomposer;
use tracing::debug;

/// STL component: forecast error relative to the forecast's distance from a
/// trend+seasonal baseline.
///
/// `rmse(actual, predicted) / rmse(predicted, baseline)`, where `baseline` is
/// tail-aligned: when it is longer than the evaluation window only its last
/// `predicted.len()` values are used. A shorter baseline fails with
/// `LengthMismatch`; a forecast equal to the baseline fails with
/// `DivisionByZero`.
pub fn stlcomp(actual: &[f64], predicted: &[f64], baseline: &[f64]) -> Result<f64> {
    let forecast_error = rmse(actual, predicted)?;
    let baseline = tail_aligned(baseline, predicted.len())?;
    let baseline_distance = rmse(predicted, baseline)?;
    checked_div(
        forecast_error,
        baseline_distance,
        "stlcomp: predicted coincides with the baseline",
    )
}

/// STL component against a baseline decomposed from the full `history`.
///
/// The baseline is the decomposition's trend plus seasonal component
/// (`Decomposition::fitted`), tail aligned with the evaluation window. The
/// residual component is not read: its contribution shows up as the distance
/// between the forecast and that baseline, so the denominator is the forecast's
/// RMS deviation from the systematic part of the history rather than a
/// residual variance. Passing the baseline straight to [`stlcomp`] gives the
/// same value for the same trend+seasonal series.
pub fn stlcomp_with<D>(
    decomposer: &D,
    actual: &[f64],
    predicted: &[f64],
    history: &[f64],
) -> Result<f64>
where
    D: SeriesDecomposer + ?Sized,
{
    let decomposition = decomposer.decompose(history)?;
    debug!(
        history_length = history.len(),
        window = predicted.len(),
        period = ?decomposition.period,
        "Baseline decomposed for STL component"
    );
    stlcomp(actual, predicted, &decomposition.fitted())
}
