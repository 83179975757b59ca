use thiserror::Error;

use crate::MetricKind;

#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("length mismatch: expected {expected} values, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("empty input: {0}")]
    EmptyInput(String),

    #[error("insufficient length: need at least {required} observations, got {got}")]
    InsufficientLength { required: usize, got: usize },

    #[error("division by zero: {0}")]
    DivisionByZero(String),

    #[error("undefined: {0}")]
    Undefined(String),

    #[error("unknown metric kind \"{0}\"; use one of u1, u2, bias, var, noise, stlcomp, all")]
    UnknownMetricKind(String),

    #[error("metric {0} requires a time series")]
    MissingSeries(MetricKind),

    #[error("decomposition error: {0}")]
    Decomposition(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MetricsError>;
