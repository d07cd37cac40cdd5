//! Staffing health classification.
//!
//! A pure function of utilization — band edges belong to the lower
//! band, so 70 is still Healthy and 85 is still Warning.

use serde::{Deserialize, Serialize};

/// Highest utilization (percent) still classified Healthy.
pub const HEALTHY_MAX_UTILIZATION: f64 = 70.0;

/// Highest utilization (percent) still classified Warning.
pub const WARNING_MAX_UTILIZATION: f64 = 85.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StaffingStatus {
    Healthy,
    Warning,
    Critical,
}

impl StaffingStatus {
    /// Classify a utilization percentage.
    pub fn classify(utilization_percent: f64) -> Self {
        if utilization_percent <= HEALTHY_MAX_UTILIZATION {
            Self::Healthy
        } else if utilization_percent <= WARNING_MAX_UTILIZATION {
            Self::Warning
        } else {
            Self::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}
