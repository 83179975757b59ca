use super::*;
use approx::assert_relative_eq;

const ACTUAL: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
const PREDICTED: [f64; 5] = [2.0, 5.0, 6.0, 4.0, 9.0];
const TIME_SERIES: [f64; 5] = [1.0, 3.0, 5.0, 2.0, 3.0];

fn expected(kind: MetricKind) -> f64 {
    match kind {
        MetricKind::U1 => 0.293687668,
        MetricKind::U2 => 0.464811126,
        MetricKind::Bias => 0.691428571,
        MetricKind::Var => 0.144949604,
        MetricKind::Noise => 0.163621825,
        MetricKind::StlComp => 0.872278376,
    }
}

#[test]
fn test_single_keys() {
    for kind in MetricKind::ALL {
        let out = theil_stats(kind.name(), &ACTUAL, &PREDICTED, Some(&TIME_SERIES[..])).unwrap();
        let value = out.as_single().expect("single value");
        assert_relative_eq!(value, expected(kind), epsilon = 1e-9);
    }
}

#[test]
fn test_all_returns_every_statistic() {
    let out = theil_stats("all", &ACTUAL, &PREDICTED, Some(&TIME_SERIES[..])).unwrap();
    let map = out.as_map().expect("map");
    assert_eq!(map.len(), 6);
    for kind in MetricKind::ALL {
        assert_relative_eq!(map[&kind], expected(kind), epsilon = 1e-9);
    }
}

#[test]
fn test_all_matches_individual_calls() {
    let out = theil_stats("all", &ACTUAL, &PREDICTED, Some(&TIME_SERIES[..])).unwrap();
    for (kind, value) in out.as_map().unwrap() {
        let single = compute(*kind, &ACTUAL, &PREDICTED, Some(&TIME_SERIES[..])).unwrap();
        assert_eq!(*value, single);
    }
}

#[test]
fn test_unknown_key() {
    for key in ["mse", "U1", "", "theil"] {
        let err = theil_stats(key, &ACTUAL, &PREDICTED, Some(&TIME_SERIES[..])).unwrap_err();
        assert!(matches!(err, MetricsError::UnknownMetricKind(ref k) if k == key));
    }
}

#[test]
fn test_time_series_only_needed_for_stlcomp() {
    assert!(theil_stats("u1", &ACTUAL, &PREDICTED, None).is_ok());
    assert!(matches!(
        theil_stats("stlcomp", &ACTUAL, &PREDICTED, None),
        Err(MetricsError::MissingSeries(MetricKind::StlComp))
    ));
    assert!(matches!(
        theil_stats("all", &ACTUAL, &PREDICTED, None),
        Err(MetricsError::MissingSeries(MetricKind::StlComp))
    ));
    assert!(matches!(
        compute(MetricKind::StlComp, &ACTUAL, &PREDICTED, None),
        Err(MetricsError::MissingSeries(_))
    ));
}

#[test]
fn test_length_mismatch_before_computation() {
    let err = theil_stats("all", &ACTUAL, &PREDICTED[..4], None).unwrap_err();
    assert!(matches!(err, MetricsError::LengthMismatch { .. }));
}

#[test]
fn test_many_subset() {
    let map = theil_stats_many(&["var", "u1", "u1"], &ACTUAL, &PREDICTED, None).unwrap();
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![MetricKind::U1, MetricKind::Var]);
    assert_relative_eq!(map[&MetricKind::Var], expected(MetricKind::Var), epsilon = 1e-9);
}

#[test]
fn test_many_with_all() {
    let map = theil_stats_many(&["bias", "all"], &ACTUAL, &PREDICTED, Some(&TIME_SERIES[..])).unwrap();
    assert_eq!(map.len(), 6);
}

#[test]
fn test_many_unknown_key_fails_whole_call() {
    let err = theil_stats_many(&["u1", "nope"], &ACTUAL, &PREDICTED, None).unwrap_err();
    assert!(matches!(err, MetricsError::UnknownMetricKind(ref k) if k == "nope"));
}

#[test]
fn test_output_serialization() {
    let single = theil_stats("u1", &ACTUAL, &PREDICTED, None).unwrap();
    assert!(serde_json::to_value(&single).unwrap().is_f64());

    let all = theil_stats("all", &ACTUAL, &PREDICTED, Some(&TIME_SERIES[..])).unwrap();
    let json = serde_json::to_value(&all).unwrap();
    let obj = json.as_object().unwrap();
    let mut keys: Vec<_> = obj.keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, vec!["bias", "noise", "stlcomp", "u1", "u2", "var"]);
}
