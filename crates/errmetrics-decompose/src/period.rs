use num_complex::Complex;
use rustfft::FftPlanner;
use tracing::debug;

/// Estimate the dominant seasonal period of `series` from its periodogram.
///
/// The series is linearly detrended first so a trend does not swamp the
/// low frequencies. Returns `None` for short (< 10 values) or flat series and
/// when no spectral peak reaches 10% of the maximum power.
pub fn infer_period(series: &[f64]) -> Option<usize> {
    let n = series.len();
    if n < 10 {
        return None;
    }

    let (slope, intercept) = linear_fit(series);
    let detrended: Vec<f64> = series
        .iter()
        .enumerate()
        .map(|(i, &v)| v - (slope * i as f64 + intercept))
        .collect();

    let range = series.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
        - series.iter().cloned().fold(f64::INFINITY, f64::min);
    let detrended_var = detrended.iter().map(|v| v * v).sum::<f64>() / n as f64;
    if detrended_var < (range * 0.01).powi(2) {
        return None;
    }

    let mut buffer: Vec<Complex<f64>> = detrended.iter().map(|&v| Complex::new(v, 0.0)).collect();
    let mut planner = FftPlanner::new();
    planner.plan_fft_forward(n).process(&mut buffer);

    let power: Vec<f64> = buffer.iter().map(|c| c.norm_sqr()).collect();
    let half = n / 2;
    if half < 2 {
        return None;
    }

    // bins 1..half are the positive frequencies
    let positive = &power[1..half];
    let threshold = power.iter().cloned().fold(f64::NEG_INFINITY, f64::max) * 0.1;

    let best = find_peaks(positive, threshold).into_iter().max_by(|&a, &b| {
        positive[a]
            .partial_cmp(&positive[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    })?;

    // parabolic interpolation between neighbouring bins
    let refined = if best > 0 && best < positive.len() - 1 {
        let (prev, curr, next) = (positive[best - 1], positive[best], positive[best + 1]);
        let denom = prev - 2.0 * curr + next;
        if denom.abs() > 1e-10 {
            best as f64 + (0.5 * (prev - next) / denom).clamp(-0.5, 0.5)
        } else {
            best as f64
        }
    } else {
        best as f64
    };

    let freq = (refined + 1.0) / n as f64;
    let period = (1.0 / freq).round() as usize;

    debug!(
        period = period,
        frequency = format!("{:.4}", freq),
        "Seasonal period inferred"
    );

    (period >= 2).then_some(period)
}

/// Least-squares line through `(i, series[i])`: returns `(slope, intercept)`.
pub(crate) fn linear_fit(series: &[f64]) -> (f64, f64) {
    let n = series.len() as f64;
    if series.is_empty() {
        return (0.0, 0.0);
    }
    let sum_x: f64 = (0..series.len()).map(|i| i as f64).sum();
    let sum_y: f64 = series.iter().sum();
    let sum_xy: f64 = series.iter().enumerate().map(|(i, y)| i as f64 * y).sum();
    let sum_x2: f64 = (0..series.len()).map(|i| (i * i) as f64).sum();

    let denom = n * sum_x2 - sum_x * sum_x;
    if denom.abs() < 1e-15 {
        return (0.0, sum_y / n);
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denom;
    (slope, (sum_y - slope * sum_x) / n)
}

/// Local maxima at or above `min_height`.
fn find_peaks(data: &[f64], min_height: f64) -> Vec<usize> {
    if data.len() < 3 {
        return vec![];
    }
    (1..data.len() - 1)
        .filter(|&i| data[i] > data[i - 1] && data[i] > data[i + 1] && data[i] >= min_height)
        .collect()
}
