use serde::{Deserialize, Serialize};

use crate::{MetricsError, Result};

/// Library-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsConfig {
    #[serde(default)]
    pub decomposition: DecompositionConfig,
}

impl MetricsConfig {
    /// Parse and validate a JSON document; missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: MetricsConfig = serde_json::from_str(json)?;
        config.decomposition.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecompositionConfig {
    /// Explicit seasonal period. `None` infers one from the series.
    #[serde(default)]
    pub period: Option<usize>,

    /// Longest period accepted from inference.
    #[serde(default = "default_max_period")]
    pub max_period: usize,
}

impl DecompositionConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(period) = self.period {
            if period < 2 {
                return Err(MetricsError::Config(format!(
                    "decomposition.period must be at least 2, got {period}"
                )));
            }
        }
        if self.max_period < 2 {
            return Err(MetricsError::Config(format!(
                "decomposition.max_period must be at least 2, got {}",
                self.max_period
            )));
        }
        Ok(())
    }
}

impl Default for DecompositionConfig {
    fn default() -> Self {
        Self {
            period: None,
            max_period: default_max_period(),
        }
    }
}

fn default_max_period() -> usize {
    365
}
