use errmetrics_core::{MetricsError, Result};

use crate::{Decomposition, SeriesDecomposer};

/// Decomposer that hands back precomputed components.
///
/// Useful for plugging in a decomposition produced elsewhere (an external
/// STL routine, a stored model) and for tests.
#[derive(Debug, Clone)]
pub struct FixedDecomposer {
    decomposition: Decomposition,
}

impl FixedDecomposer {
    pub fn new(decomposition: Decomposition) -> Self {
        Self { decomposition }
    }
}

impl SeriesDecomposer for FixedDecomposer {
    fn decompose(&self, series: &[f64]) -> Result<Decomposition> {
        if series.len() != self.decomposition.len() {
            return Err(MetricsError::Decomposition(format!(
                "fixed decomposition has {} values, series has {}",
                self.decomposition.len(),
                series.len()
            )));
        }
        Ok(self.decomposition.clone())
    }
}
