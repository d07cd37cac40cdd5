//! Calendar regimes and their fixed throughput assumptions.
//!
//! Two regimes exist: Weekday and Saturday. They differ in hourly
//! throughput per agent and in operating hours per day. The values are
//! business policy, fixed at compile time — there is no runtime
//! configuration surface for them.

use crate::error::{PlanError, PlanResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Fraction of nominal hourly throughput an agent can sustain while
/// holding the 85%-occupancy service-level target.
pub const SAFE_CAPACITY_RATIO: f64 = 0.75;

/// The calendar context of an operating day.
/// Closed set — there is no third regime and no interpolation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    Weekday,
    Saturday,
}

/// The immutable throughput record for one regime.
/// Invariant: `safe_hourly_capacity_per_agent` is always
/// `SAFE_CAPACITY_RATIO * hourly_capacity_per_agent`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RegimeParams {
    /// Calls one agent handles per hour at full tilt.
    pub hourly_capacity_per_agent: f64,
    /// Calls one agent handles per hour at the occupancy target.
    pub safe_hourly_capacity_per_agent: f64,
    /// Staffed hours in one operating day.
    pub operating_hours_per_day: f64,
}

impl Regime {
    /// The fixed parameter record for this regime.
    pub fn params(&self) -> RegimeParams {
        match self {
            Self::Weekday => RegimeParams {
                hourly_capacity_per_agent:      15.0,
                safe_hourly_capacity_per_agent: 11.25,
                operating_hours_per_day:        7.5,
            },
            Self::Saturday => RegimeParams {
                hourly_capacity_per_agent:      11.0,
                safe_hourly_capacity_per_agent: 8.25,
                operating_hours_per_day:        5.5,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Weekday => "weekday",
            Self::Saturday => "saturday",
        }
    }

    /// Both regimes in a stable order, for "for all regimes" sweeps.
    pub fn all() -> [Regime; 2] {
        [Self::Weekday, Self::Saturday]
    }
}

impl FromStr for Regime {
    type Err = PlanError;

    /// Parse a regime label. This is the fail-fast boundary for regime
    /// selection: anything but the two known labels is rejected rather
    /// than silently defaulted, because every downstream headcount
    /// figure depends on the throughput assumptions chosen here.
    fn from_str(s: &str) -> PlanResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekday" => Ok(Self::Weekday),
            "saturday" => Ok(Self::Saturday),
            _ => Err(PlanError::UnknownRegime {
                input: s.to_string(),
            }),
        }
    }
}

impl RegimeParams {
    /// Calls one agent handles across a full operating day at full tilt.
    pub fn daily_capacity_per_agent(&self) -> f64 {
        self.hourly_capacity_per_agent * self.operating_hours_per_day
    }

    /// Calls one agent handles across a full operating day at the
    /// occupancy target.
    pub fn safe_daily_capacity_per_agent(&self) -> f64 {
        self.safe_hourly_capacity_per_agent * self.operating_hours_per_day
    }
}
