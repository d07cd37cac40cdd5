//! The capacity estimator — per-interval headcount dimensioning.
//!
//! Sizing stacks two margins:
//!   1. Agents are sized at 75% of nominal throughput (the safe
//!      capacity), holding the 85%-occupancy service-level target.
//!   2. The resulting whole-agent count is inflated by a further 30%
//!      to hold the sub-10-second wait-time target.
//!
//! The 30% uplift applies to the already-rounded base headcount:
//! `ceil(ceil(volume / safe) * 1.3)`. In some bands that lands one head
//! above what a single combined ceiling would give — that step behavior
//! is the intended policy, not an artifact.

use crate::{
    observation::IntervalObservation,
    regime::{Regime, RegimeParams},
    status::StaffingStatus,
    types::{Headcount, IntervalLabel},
};
use serde::{Deserialize, Serialize};

/// Multiplicative uplift applied to the base headcount.
pub const SAFETY_FACTOR: f64 = 1.3;

/// One dimensioned interval: one output row per input observation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DimensioningResult {
    pub interval: IntervalLabel,
    /// Input volume at full precision; rounding is presentation-side.
    pub volume: f64,
    pub required_headcount: Headcount,
    pub utilization_percent: f64,
    pub status: StaffingStatus,
}

/// One full estimator invocation: ordered per-interval rows plus
/// summary scalars, recomputed from scratch on every call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DimensioningRun {
    pub regime: Regime,
    pub results: Vec<DimensioningResult>,
    pub total_headcount: u64,
    pub average_utilization_percent: f64,
}

/// The sizing ladder shared by hourly and daily dimensioning: round up
/// to whole agents at safe capacity, apply the uplift, round up again,
/// never drop below one head.
pub(crate) fn size_headcount(volume: f64, safe_capacity_per_agent: f64) -> Headcount {
    let base_headcount = (volume / safe_capacity_per_agent).ceil();
    (base_headcount * SAFETY_FACTOR).ceil().max(1.0) as Headcount
}

/// Offered volume as a percentage of total capacity, clamped to
/// [0, 100]. Callers guarantee `total_capacity > 0`.
pub(crate) fn utilization_against(volume: f64, total_capacity: f64) -> f64 {
    (volume / total_capacity * 100.0).clamp(0.0, 100.0)
}

/// Size one interval under a regime's parameters.
///
/// Never fails and never returns a headcount below 1: rows that break
/// the ingestion contract (non-positive or non-finite volume) are sized
/// as zero demand and flagged in the log, because they indicate a
/// filtering gap upstream.
pub fn dimension_interval(
    observation: &IntervalObservation,
    params: RegimeParams,
) -> DimensioningResult {
    if !observation.has_demand() {
        log::warn!(
            "interval '{}': volume {} is non-positive or non-finite; sized as zero demand",
            observation.interval,
            observation.volume,
        );
    }
    let volume = observation.effective_volume();

    let required = size_headcount(volume, params.safe_hourly_capacity_per_agent);

    // Utilization is measured against nominal capacity: once headcount
    // is fixed, agents can work the full hourly rate.
    let total_capacity = params.hourly_capacity_per_agent * f64::from(required);
    let utilization_percent = utilization_against(volume, total_capacity);

    DimensioningResult {
        interval: observation.interval.clone(),
        volume: observation.volume,
        required_headcount: required,
        utilization_percent,
        status: StaffingStatus::classify(utilization_percent),
    }
}

/// Produce the staffing plan for a sequence of observations under one
/// regime. Pure: same input list, same plan, same order.
pub fn compute_dimensioning(
    observations: &[IntervalObservation],
    regime: Regime,
) -> DimensioningRun {
    let params = regime.params();
    let results: Vec<DimensioningResult> = observations
        .iter()
        .map(|observation| dimension_interval(observation, params))
        .collect();

    let total_headcount: u64 = results
        .iter()
        .map(|r| u64::from(r.required_headcount))
        .sum();

    // The mean over zero intervals is defined as zero, never NaN.
    let average_utilization_percent = if results.is_empty() {
        0.0
    } else {
        results.iter().map(|r| r.utilization_percent).sum::<f64>() / results.len() as f64
    };

    log::debug!(
        "dimensioned {} intervals under {}: total_headcount={} avg_utilization={:.2}%",
        results.len(),
        regime.name(),
        total_headcount,
        average_utilization_percent,
    );

    DimensioningRun {
        regime,
        results,
        total_headcount,
        average_utilization_percent,
    }
}
