use serde::{Deserialize, Serialize};

use crate::error::AbTestError;

/// Observed parameters for a two-group CTR experiment.
///
/// Rates are fractions on [0, 1]; `sample_size` is the number of visitors in
/// each group (both groups share the same size). `mde` is the minimum
/// detectable effect in absolute terms (0.05 means a 5-point lift).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExperimentInputs {
    pub control_rate: f64,
    pub experimental_rate: f64,
    pub sample_size: u64,
    pub alpha: f64,
    pub mde: f64,
}

impl Default for ExperimentInputs {
    fn default() -> Self {
        Self {
            control_rate: 0.2,
            experimental_rate: 0.3,
            sample_size: 10_000,
            alpha: 0.05,
            mde: 0.1,
        }
    }
}

impl ExperimentInputs {
    /// Validate ranges before running the test.
    pub fn validate(&self) -> Result<(), AbTestError> {
        let unit = |name: &str, v: f64| -> Result<(), AbTestError> {
            if !(0.0..=1.0).contains(&v) || v.is_nan() {
                return Err(AbTestError::InvalidInput(format!(
                    "{name} must be within [0, 1], got {v}"
                )));
            }
            Ok(())
        };

        unit("control_rate", self.control_rate)?;
        unit("experimental_rate", self.experimental_rate)?;
        unit("mde", self.mde)?;

        if self.sample_size < 1 {
            return Err(AbTestError::InvalidInput(
                "sample_size must be at least 1".to_string(),
            ));
        }

        if self.alpha.is_nan() || self.alpha <= 0.0 || self.alpha >= 1.0 {
            return Err(AbTestError::InvalidInput(format!(
                "alpha must be within (0, 1), got {}",
                self.alpha
            )));
        }

        Ok(())
    }

    /// Simulated click count for the control group (truncated, not rounded).
    pub fn clicks_control(&self) -> u64 {
        (self.sample_size as f64 * self.control_rate) as u64
    }

    /// Simulated click count for the experimental group.
    pub fn clicks_experimental(&self) -> u64 {
        (self.sample_size as f64 * self.experimental_rate) as u64
    }
}

/// Wald confidence interval on the difference in proportions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
    /// Confidence level as a percentage, e.g. 95.0 for alpha = 0.05.
    pub level_percent: f64,
}

/// Full result of the pooled two-proportion z-test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignificanceReport {
    pub clicks_control: u64,
    pub clicks_experimental: u64,
    pub pooled_proportion: f64,
    pub standard_error: f64,
    pub z_statistic: f64,
    pub p_value: f64,
    /// Two-sided critical value at the requested alpha.
    pub z_critical: f64,
    /// experimental_rate - control_rate.
    pub rate_difference: f64,
    pub confidence_interval: ConfidenceInterval,
    /// p_value < alpha.
    pub statistically_significant: bool,
    /// CI lower bound exceeds the minimum detectable effect.
    pub practically_significant: bool,
    pub mde: f64,
}
