//! End-to-end checks of the documented reference scenario and of the
//! algebraic relations between metrics on generated forecasts.

use errmetrics_basic::{compute_metrics, mae, mse, rmse, sse};
use errmetrics_decompose::ClassicalDecomposer;
use errmetrics_theil::{decompose, stlcomp_with, theil_stats, u1, MetricKind, TheilOutput};

const ACTUAL: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
const PREDICTED: [f64; 5] = [2.0, 5.0, 6.0, 4.0, 9.0];
const TIME_SERIES: [f64; 5] = [1.0, 3.0, 5.0, 2.0, 3.0];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

/// Deterministic pseudo-random forecast pairs (LCG noise around a sine).
fn generated_pairs(n: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut state = seed;
    let mut noise = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((state >> 33) as f64) / (u32::MAX as f64) - 0.25
    };
    let actual: Vec<f64> = (0..n)
        .map(|i| 50.0 + 10.0 * (i as f64 * 0.3).sin())
        .collect();
    let predicted = actual.iter().map(|a| a * 1.05 + 4.0 * noise()).collect();
    (actual, predicted)
}

#[test]
fn reference_scenario_all() {
    init_tracing();

    let out = theil_stats("all", &ACTUAL, &PREDICTED, Some(&TIME_SERIES[..])).unwrap();
    let TheilOutput::All(map) = out else {
        panic!("expected a map for \"all\"");
    };

    let expected = [
        (MetricKind::U1, 0.293687668),
        (MetricKind::U2, 0.464811126),
        (MetricKind::Bias, 0.691428571),
        (MetricKind::Var, 0.144949604),
        (MetricKind::Noise, 0.163621825),
        (MetricKind::StlComp, 0.872278376),
    ];
    assert_eq!(map.len(), expected.len());
    for (kind, value) in expected {
        let got = map[&kind];
        assert!((got - value).abs() < 1e-9, "{kind}: {got} != {value}");
    }
}

#[test]
fn reference_scenario_basic() {
    let m = compute_metrics(&ACTUAL, &PREDICTED).unwrap();
    assert!((m.mse - 7.0).abs() < 1e-12);
    assert!((m.sse - 35.0).abs() < 1e-12);
    assert!((m.rmse - 2.645751311).abs() < 1e-9);
    assert!((m.mae - 2.2).abs() < 1e-12);
    assert!((m.mape - 0.408888889).abs() < 1e-9);
    assert!((m.smape - 0.552380952).abs() < 1e-9);
    assert!((m.lqe + 2.890371758).abs() < 1e-9);
}

#[test]
fn metric_relations_hold_on_generated_data() {
    for seed in [1, 7, 42, 1234] {
        let (a, p) = generated_pairs(64, seed);

        let mse = mse(&a, &p).unwrap();
        assert!((rmse(&a, &p).unwrap() - mse.sqrt()).abs() < 1e-12);
        assert!((sse(&a, &p).unwrap() / a.len() as f64 - mse).abs() < 1e-9);
        assert_eq!(mae(&a, &a).unwrap(), 0.0);

        let d = decompose(&a, &p).unwrap();
        assert!((d.bias + d.var + d.noise - 1.0).abs() < 1e-9);

        let u = u1(&a, &p).unwrap();
        assert!((0.0..=1.0).contains(&u));
    }
}

#[test]
fn stlcomp_against_decomposed_history() {
    init_tracing();

    let pattern = [4.0, 1.0, -2.0, -3.0];
    let history: Vec<f64> = (0..40).map(|i| 20.0 + pattern[i % 4]).collect();
    let actual = history[32..].to_vec();
    let predicted: Vec<f64> = actual.iter().map(|v| v + 0.5).collect();

    let decomposer = ClassicalDecomposer::with_period(4).unwrap();
    let value = stlcomp_with(&decomposer, &actual, &predicted, &history).unwrap();
    assert!((value - 1.0).abs() < 1e-9);
}
