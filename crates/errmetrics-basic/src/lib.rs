//! Scale-dependent and scale-independent forecast accuracy metrics.
//!
//! Every function takes `(actual, predicted)` of equal length. Positions
//! where either value is NaN are left out of the reduction.

mod metric_set;
mod metrics;

pub use metric_set::{compute_metrics, MetricSet};
pub use metrics::{lqe, mae, mape, mse, rmse, smape, sse};
