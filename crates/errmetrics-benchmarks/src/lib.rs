//! Input generators shared by the criterion benchmarks.

/// Seasonal series with a linear trend: period 24, amplitude 20.
pub fn generate_series(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            100.0 + 0.5 * t + 20.0 * (2.0 * std::f64::consts::PI * t / 24.0).sin()
        })
        .collect()
}

/// A forecast of `actual` with deterministic LCG noise of up to ±`scale`.
pub fn perturb(actual: &[f64], scale: f64, seed: u64) -> Vec<f64> {
    let mut state = seed;
    actual
        .iter()
        .map(|a| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let frac = ((state >> 33) as f64) / (u32::MAX as f64);
            a + scale * (2.0 * frac - 1.0)
        })
        .collect()
}
