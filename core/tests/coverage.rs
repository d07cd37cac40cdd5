//! Coverage assessment tests: staffed intervals against offered volume,
//! and whole-day sizing.

use staffing_core::{
    coverage::{assess_coverage, compute_daily_requirement},
    dimensioning::dimension_interval,
    observation::IntervalObservation,
    regime::Regime,
    status::StaffingStatus,
};

fn busy_hour() -> IntervalObservation {
    IntervalObservation::new("10:00", 100.0)
}

/// 100 weekday calls against 8 staffed agents: 120 calls of capacity,
/// 83.33% utilization, Warning.
#[test]
fn understaffed_interval_lands_in_warning() {
    let assessment = assess_coverage(&busy_hour(), 8, Regime::Weekday);

    assert!(
        (assessment.utilization_percent - 83.3333).abs() < 0.001,
        "Expected ~83.33%, got {:.4}%",
        assessment.utilization_percent
    );
    assert_eq!(assessment.status, StaffingStatus::Warning);
    assert_eq!(assessment.required_headcount, 12);
    assert_eq!(assessment.shortfall, 4, "12 required minus 8 staffed");
}

/// 100 weekday calls against 7 staffed agents: 95.24% utilization,
/// Critical.
#[test]
fn badly_understaffed_interval_lands_in_critical() {
    let assessment = assess_coverage(&busy_hour(), 7, Regime::Weekday);

    assert!(
        (assessment.utilization_percent - 95.2381).abs() < 0.001,
        "Expected ~95.24%, got {:.4}%",
        assessment.utilization_percent
    );
    assert_eq!(assessment.status, StaffingStatus::Critical);
    assert_eq!(assessment.shortfall, 5);
}

/// Staffing at the planned level reproduces the plan's own utilization
/// and stays Healthy.
#[test]
fn staffing_at_plan_matches_plan_utilization() {
    let observation = busy_hour();
    let planned = dimension_interval(&observation, Regime::Weekday.params());
    let assessment =
        assess_coverage(&observation, planned.required_headcount, Regime::Weekday);

    assert_eq!(
        assessment.utilization_percent, planned.utilization_percent,
        "Coverage at plan headcount must equal the plan's utilization"
    );
    assert_eq!(assessment.status, StaffingStatus::Healthy);
    assert_eq!(assessment.shortfall, 0);
}

/// A roster tuned to land right above the Warning band's upper edge:
/// 129 calls against 10 agents is 86% utilization, which is already
/// Critical.
#[test]
fn utilization_just_past_the_warning_edge_is_critical() {
    let observation = IntervalObservation::new("12:00", 129.0);
    let assessment = assess_coverage(&observation, 10, Regime::Weekday);

    assert!(
        (assessment.utilization_percent - 86.0).abs() < 1e-9,
        "129 calls over 150 capacity should be 86%, got {:.10}%",
        assessment.utilization_percent
    );
    assert_eq!(assessment.status, StaffingStatus::Critical);
}

/// Overstaffing never produces a negative shortfall.
#[test]
fn overstaffing_clamps_shortfall_to_zero() {
    let assessment = assess_coverage(&busy_hour(), 20, Regime::Weekday);

    assert_eq!(assessment.shortfall, 0, "Shortfall must not go negative");
    assert_eq!(assessment.status, StaffingStatus::Healthy);
}

/// An overloaded roster saturates at the 100% ceiling instead of
/// reporting a ratio past it: 200 calls against one agent's 15 calls
/// of capacity clamps, it does not read 1333%.
#[test]
fn overloaded_roster_saturates_at_one_hundred_percent() {
    let assessment = assess_coverage(
        &IntervalObservation::new("10:00", 200.0),
        1,
        Regime::Weekday,
    );

    assert_eq!(
        assessment.utilization_percent, 100.0,
        "Utilization must clamp to the ceiling, got {}",
        assessment.utilization_percent
    );
    assert_eq!(assessment.status, StaffingStatus::Critical);
    assert_eq!(assessment.required_headcount, 24);
    assert_eq!(assessment.shortfall, 23);
}

/// Zero staffed agents: any demand is a fully critical gap, no demand
/// is an idle interval.
#[test]
fn zero_staffed_agents_have_no_capacity() {
    let with_demand = assess_coverage(&busy_hour(), 0, Regime::Weekday);
    assert_eq!(with_demand.utilization_percent, 100.0);
    assert_eq!(with_demand.status, StaffingStatus::Critical);
    assert_eq!(
        with_demand.shortfall, with_demand.required_headcount,
        "With nobody staffed the whole requirement is missing"
    );

    let idle = assess_coverage(
        &IntervalObservation::new("07:00", 0.0),
        0,
        Regime::Weekday,
    );
    assert_eq!(idle.utilization_percent, 0.0);
    assert_eq!(idle.status, StaffingStatus::Healthy);
}

/// Defensive volume handling matches the estimator: a garbage row
/// assesses as zero demand.
#[test]
fn garbage_volume_assesses_as_idle() {
    let assessment = assess_coverage(
        &IntervalObservation::new("03:00", f64::NAN),
        5,
        Regime::Saturday,
    );

    assert_eq!(assessment.utilization_percent, 0.0);
    assert_eq!(assessment.status, StaffingStatus::Healthy);
    assert_eq!(assessment.required_headcount, 1);
}

/// Weekday day sizing: 600 daily calls at 84.375 safe calls per
/// agent-day sizes to 11 agents at ~48.48% utilization.
#[test]
fn weekday_day_of_six_hundred_calls_needs_eleven_agents() {
    let daily = compute_daily_requirement(600.0, Regime::Weekday);

    assert_eq!(
        daily.required_headcount, 11,
        "600 calls: base ceil(7.11) = 8, uplifted to ceil(10.4) = 11"
    );
    assert!(
        (daily.utilization_percent - 48.4848).abs() < 0.001,
        "Expected ~48.48%, got {:.4}%",
        daily.utilization_percent
    );
    assert_eq!(daily.status, StaffingStatus::Healthy);
}

/// Saturday day sizing uses the Saturday window: 300 calls size to 10
/// agents.
#[test]
fn saturday_day_of_three_hundred_calls_needs_ten_agents() {
    let daily = compute_daily_requirement(300.0, Regime::Saturday);

    assert_eq!(
        daily.required_headcount, 10,
        "300 calls at 45.375 safe/agent-day: base 7, uplifted to 10"
    );
    assert_eq!(daily.status, StaffingStatus::Healthy);
}

/// Day sizing keeps the one-agent floor and passes the original volume
/// through.
#[test]
fn day_sizing_floors_at_one_agent() {
    let daily = compute_daily_requirement(-40.0, Regime::Weekday);

    assert_eq!(daily.required_headcount, 1);
    assert_eq!(daily.utilization_percent, 0.0);
    assert_eq!(daily.daily_volume, -40.0, "Input volume must pass through");
    assert_eq!(daily.status, StaffingStatus::Healthy);
}

/// Exactly zero daily volume is as defensive as negative volume: same
/// floored headcount, same idle utilization.
#[test]
fn day_sizing_treats_zero_volume_as_idle() {
    let daily = compute_daily_requirement(0.0, Regime::Saturday);

    assert_eq!(daily.required_headcount, 1);
    assert_eq!(daily.utilization_percent, 0.0);
    assert_eq!(daily.daily_volume, 0.0);
    assert_eq!(daily.status, StaffingStatus::Healthy);
}
