use crate::{MetricsError, Result};

/// Validated `(actual, predicted)` observations.
///
/// Positions where either side is NaN are omitted, so every reduction
/// runs over complete pairs only.
#[derive(Debug, Clone)]
pub struct PairedSeries {
    actual: Vec<f64>,
    predicted: Vec<f64>,
}

impl PairedSeries {
    /// Pair up two sequences.
    ///
    /// Fails with `LengthMismatch` before looking at any value, and with
    /// `EmptyInput` when no complete pair remains.
    pub fn new(actual: &[f64], predicted: &[f64]) -> Result<Self> {
        if actual.len() != predicted.len() {
            return Err(MetricsError::LengthMismatch {
                expected: actual.len(),
                got: predicted.len(),
            });
        }
        if actual.is_empty() {
            return Err(MetricsError::EmptyInput(
                "actual and predicted are empty".into(),
            ));
        }

        let (actual, predicted): (Vec<f64>, Vec<f64>) = actual
            .iter()
            .zip(predicted)
            .filter(|(a, p)| !a.is_nan() && !p.is_nan())
            .map(|(&a, &p)| (a, p))
            .unzip();

        if actual.is_empty() {
            return Err(MetricsError::EmptyInput(
                "no complete (actual, predicted) pair after omitting NaN".into(),
            ));
        }

        Ok(Self { actual, predicted })
    }

    /// Number of complete pairs.
    pub fn len(&self) -> usize {
        self.actual.len()
    }

    /// Always false; construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.actual.is_empty()
    }

    pub fn actual(&self) -> &[f64] {
        &self.actual
    }

    pub fn predicted(&self) -> &[f64] {
        &self.predicted
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.actual.iter().copied().zip(self.predicted.iter().copied())
    }

    /// Fail with `InsufficientLength` unless at least `required` pairs exist.
    pub fn require(&self, required: usize) -> Result<()> {
        if self.len() < required {
            return Err(MetricsError::InsufficientLength {
                required,
                got: self.len(),
            });
        }
        Ok(())
    }

    /// Mean of `f(actual_i, predicted_i)` over all pairs.
    pub fn mean_of(&self, f: impl Fn(f64, f64) -> f64) -> f64 {
        self.sum_of(f) / self.len() as f64
    }

    /// Sum of `f(actual_i, predicted_i)` over all pairs.
    pub fn sum_of(&self, f: impl Fn(f64, f64) -> f64) -> f64 {
        self.iter().map(|(a, p)| f(a, p)).sum()
    }
}

/// Divide, failing with `DivisionByZero` when `denominator` is exactly zero.
///
/// The check is not scaled: ratios of tiny but non-zero quantities are valid.
pub fn checked_div(numerator: f64, denominator: f64, what: &str) -> Result<f64> {
    if denominator == 0.0 {
        return Err(MetricsError::DivisionByZero(what.to_string()));
    }
    Ok(numerator / denominator)
}

/// Last `len` values of `series`.
///
/// A full history is matched against an evaluation window by its tail.
pub fn tail_aligned(series: &[f64], len: usize) -> Result<&[f64]> {
    if series.len() < len {
        return Err(MetricsError::LengthMismatch {
            expected: len,
            got: series.len(),
        });
    }
    Ok(&series[series.len() - len..])
}
