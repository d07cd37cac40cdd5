//! plan-runner: headless staffing planner for call-center volumes.
//!
//! Usage:
//!   plan-runner --regime weekday --volumes 120,95,80 --start-hour 9
//!   plan-runner --regime saturday --seed 7 --staffed 8
//!   plan-runner --regime weekday --daily 600 --json

use anyhow::Result;
use staffing_core::{
    coverage::{assess_coverage, compute_daily_requirement, CoverageAssessment, DailyRequirement},
    demand::DemandProfile,
    dimensioning::{compute_dimensioning, DimensioningRun},
    observation::IntervalObservation,
    regime::{Regime, RegimeParams},
};
use std::env;

#[derive(serde::Serialize)]
struct PlanReport {
    generated_at: String,
    regime: Regime,
    params: RegimeParams,
    run: DimensioningRun,
    #[serde(skip_serializing_if = "Option::is_none")]
    coverage: Option<Vec<CoverageAssessment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    daily: Option<DailyRequirement>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    // Regime selection fails fast on unknown labels — every headcount
    // figure downstream depends on the throughput assumptions.
    let regime: Regime = args
        .windows(2)
        .find(|w| w[0] == "--regime")
        .map(|w| w[1].parse())
        .transpose()?
        .unwrap_or(Regime::Weekday);

    let seed = parse_arg(&args, "--seed", 42u64);
    let start_hour = parse_arg(&args, "--start-hour", 8u32);
    let json_mode = args.iter().any(|a| a == "--json");
    let staffed: Option<u32> = find_arg(&args, "--staffed")?;
    let daily_volume: Option<f64> = find_arg(&args, "--daily")?;

    let volumes: Option<Vec<f64>> = match args.windows(2).find(|w| w[0] == "--volumes") {
        Some(w) => Some(
            w[1].split(',')
                .map(|tok| {
                    tok.trim()
                        .parse::<f64>()
                        .map_err(|e| anyhow::anyhow!("bad volume '{tok}': {e}"))
                })
                .collect::<Result<Vec<_>>>()?,
        ),
        None => None,
    };

    let observations: Vec<IntervalObservation> = match volumes {
        Some(vs) => {
            if args.windows(2).any(|w| w[0] == "--seed") {
                log::warn!("--seed has no effect when --volumes is given");
            }
            vs.iter()
                .enumerate()
                .map(|(i, v)| {
                    let hour = (u64::from(start_hour) + i as u64) % 24;
                    IntervalObservation::new(format!("{hour:02}:00"), *v)
                })
                .collect()
        }
        None => {
            let mut profile = DemandProfile::for_regime(regime);
            profile.start_hour = start_hour;
            profile.generate(seed)
        }
    };

    let run = compute_dimensioning(&observations, regime);
    let coverage: Option<Vec<CoverageAssessment>> = staffed.map(|n| {
        observations
            .iter()
            .map(|o| assess_coverage(o, n, regime))
            .collect()
    });
    let daily = daily_volume.map(|v| compute_daily_requirement(v, regime));

    if json_mode {
        let report = PlanReport {
            generated_at: chrono::Utc::now().to_rfc3339(),
            regime,
            params: regime.params(),
            run,
            coverage,
            daily,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_plan(&run);
    if let (Some(n), Some(cov)) = (staffed, coverage.as_deref()) {
        print_coverage(&run, n, cov);
    }
    if let Some(d) = &daily {
        print_daily(d);
    }
    Ok(())
}

fn print_plan(run: &DimensioningRun) {
    println!("=== STAFFING PLAN ({}) ===", run.regime.name());
    println!(
        "  {:<10} {:>8} {:>9} {:>7}  status",
        "interval", "volume", "required", "util%"
    );
    for r in &run.results {
        println!(
            "  {:<10} {:>8.1} {:>9} {:>6.1}%  {}",
            r.interval,
            r.volume,
            r.required_headcount,
            r.utilization_percent,
            r.status.label()
        );
    }
    println!();
    println!("  intervals:       {}", run.results.len());
    println!("  total headcount: {}", run.total_headcount);
    println!("  avg utilization: {:.2}%", run.average_utilization_percent);
}

fn print_coverage(run: &DimensioningRun, staffed: u32, coverage: &[CoverageAssessment]) {
    println!();
    println!("=== COVERAGE (staffed {staffed}) ===");
    println!(
        "  {:<10} {:>8} {:>6} {:>7}  status",
        "interval", "required", "short", "util%"
    );
    for (r, c) in run.results.iter().zip(coverage) {
        println!(
            "  {:<10} {:>8} {:>6} {:>6.1}%  {}",
            r.interval,
            c.required_headcount,
            c.shortfall,
            c.utilization_percent,
            c.status.label()
        );
    }
}

fn print_daily(daily: &DailyRequirement) {
    println!();
    println!("=== DAILY SIZING ({}) ===", daily.regime.name());
    println!("  daily volume:    {:.1}", daily.daily_volume);
    println!("  required agents: {}", daily.required_headcount);
    println!(
        "  utilization:     {:.2}% ({})",
        daily.utilization_percent,
        daily.status.label()
    );
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

// Optional flags have no default to hide behind: a malformed value is
// an error, not a silently skipped output section.
fn find_arg<T: std::str::FromStr>(args: &[String], flag: &str) -> Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| {
            w[1].parse()
                .map_err(|e| anyhow::anyhow!("bad value for {flag} '{}': {e}", w[1]))
        })
        .transpose()
}
