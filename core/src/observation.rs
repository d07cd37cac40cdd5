//! Interval observations — the planner's input rows.
//!
//! One observation is one (time bucket, call volume) pair as delivered
//! by an ingestion layer. Ingestion promises `volume > 0` for every row
//! it emits; the estimator tolerates rows that break that promise, so
//! the helpers here are conveniences for callers that stand in for a
//! real ingestion layer (the harness, tests), not a prerequisite.

use crate::types::IntervalLabel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntervalObservation {
    /// Opaque time-bucket label, passed through to the plan unchanged.
    pub interval: IntervalLabel,
    /// Observed or forecast call count for the bucket.
    pub volume: f64,
}

impl IntervalObservation {
    pub fn new(interval: impl Into<IntervalLabel>, volume: f64) -> Self {
        Self {
            interval: interval.into(),
            volume,
        }
    }

    /// True when the row carries real demand: a finite volume strictly
    /// above zero.
    pub fn has_demand(&self) -> bool {
        self.volume.is_finite() && self.volume > 0.0
    }

    /// The volume as the estimator sees it — zero for anything
    /// non-finite or non-positive.
    pub fn effective_volume(&self) -> f64 {
        if self.has_demand() {
            self.volume
        } else {
            0.0
        }
    }
}

/// Apply the ingestion contract: keep only rows with real demand.
pub fn retain_actionable(observations: Vec<IntervalObservation>) -> Vec<IntervalObservation> {
    observations.into_iter().filter(|o| o.has_demand()).collect()
}
