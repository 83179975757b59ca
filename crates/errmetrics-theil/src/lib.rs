//! Theil's inequality coefficients, the bias/variance/noise decomposition of
//! squared error, the STL component and a name-keyed dispatcher over them.

mod coefficients;
mod dispatch;
mod proportions;
mod stl;

pub use coefficients::{u1, u2, u2_naive};
pub use dispatch::{compute, theil_stats, theil_stats_many, TheilOutput};
pub use proportions::{bias, decompose, noise, var, TheilDecomposition};
pub use stl::{stlcomp, stlcomp_with};

pub use errmetrics_core::{MetricKind, MetricsError, Result, TheilRequest};
