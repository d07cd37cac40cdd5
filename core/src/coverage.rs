//! Coverage checks — where plans meet rosters.
//!
//! The estimator says how many agents an interval needs. The helpers
//! here answer the follow-up questions: how hot does an interval run
//! with the headcount actually staffed, and how many agents does a
//! whole day's volume take?
//!
//! Unlike formula-derived plans, whose stacked margins keep
//! utilization inside the Healthy band by construction, a staffed
//! interval can land anywhere, so this is the path on which Warning
//! and Critical statuses show up in practice.

use crate::{
    dimensioning::{dimension_interval, size_headcount, utilization_against},
    observation::IntervalObservation,
    regime::Regime,
    status::StaffingStatus,
    types::Headcount,
};
use serde::{Deserialize, Serialize};

/// How one staffed interval holds up against its offered volume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoverageAssessment {
    pub staffed_headcount: Headcount,
    /// What the sizing ladder would have asked for.
    pub required_headcount: Headcount,
    /// Heads missing against the plan; zero when staffed at or above it.
    pub shortfall: Headcount,
    pub utilization_percent: f64,
    pub status: StaffingStatus,
}

/// Whole-day sizing from a single daily volume figure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyRequirement {
    pub regime: Regime,
    pub daily_volume: f64,
    pub required_headcount: Headcount,
    pub utilization_percent: f64,
    pub status: StaffingStatus,
}

/// Assess an interval staffed with `staffed_headcount` agents against
/// the volume it actually received. Defensive volume handling matches
/// the estimator's.
pub fn assess_coverage(
    observation: &IntervalObservation,
    staffed_headcount: Headcount,
    regime: Regime,
) -> CoverageAssessment {
    let params = regime.params();
    let volume = observation.effective_volume();
    let planned = dimension_interval(observation, params);

    let capacity = params.hourly_capacity_per_agent * f64::from(staffed_headcount);
    // Zero staffed agents have no throughput: any demand is a critical
    // gap, no demand is an idle but healthy interval.
    let utilization_percent = if capacity > 0.0 {
        utilization_against(volume, capacity)
    } else if volume > 0.0 {
        100.0
    } else {
        0.0
    };

    CoverageAssessment {
        staffed_headcount,
        required_headcount: planned.required_headcount,
        shortfall: planned.required_headcount.saturating_sub(staffed_headcount),
        utilization_percent,
        status: StaffingStatus::classify(utilization_percent),
    }
}

/// Size a whole operating day from one daily volume forecast.
///
/// Applies the interval ladder at day granularity: safe daily capacity
/// per agent is safe hourly capacity times the regime's operating
/// hours, and utilization is measured against the nominal daily rate.
pub fn compute_daily_requirement(daily_volume: f64, regime: Regime) -> DailyRequirement {
    let params = regime.params();
    if !(daily_volume.is_finite() && daily_volume > 0.0) {
        log::warn!(
            "daily volume {daily_volume} is non-positive or non-finite; sized as zero demand"
        );
    }
    let volume = if daily_volume.is_finite() && daily_volume > 0.0 {
        daily_volume
    } else {
        0.0
    };

    let required = size_headcount(volume, params.safe_daily_capacity_per_agent());
    let capacity = params.daily_capacity_per_agent() * f64::from(required);
    let utilization_percent = utilization_against(volume, capacity);

    log::debug!(
        "daily requirement under {}: volume={volume:.1} headcount={required} utilization={utilization_percent:.2}%",
        regime.name(),
    );

    DailyRequirement {
        regime,
        daily_volume,
        required_headcount: required,
        utilization_percent,
        status: StaffingStatus::classify(utilization_percent),
    }
}
