//! Synthetic call demand — deterministic curves for the harness and
//! for seeded sweep tests.
//!
//! RULE: nothing here touches a platform RNG. All randomness flows
//! through one PCG stream seeded by the caller, so a given
//! (profile, seed) pair always reproduces the same observation list.

use crate::{observation::IntervalObservation, regime::Regime};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use serde::{Deserialize, Serialize};

/// A deterministic RNG stream for demand synthesis.
pub struct DemandRng {
    inner: Pcg64Mcg,
}

impl DemandRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Multiplicative jitter factor in [1 - spread, 1 + spread).
    pub fn jitter(&mut self, spread: f64) -> f64 {
        1.0 + (self.next_f64() * 2.0 - 1.0) * spread
    }
}

/// Shape of one synthetic operating day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandProfile {
    /// Hour label of the first bucket (24h clock).
    pub start_hour: u32,
    /// Number of hourly buckets to generate.
    pub buckets: u32,
    /// Volume at the quiet edges of the day.
    pub base_volume: f64,
    /// Volume at the peak bucket before jitter.
    pub peak_volume: f64,
    /// Zero-based index of the peak bucket.
    pub peak_bucket: u32,
    /// Multiplicative jitter spread per bucket (0.0 = none).
    pub jitter: f64,
}

impl DemandProfile {
    /// Default profile for a regime: hourly buckets spanning the
    /// operating window from 08:00, peaking late morning.
    pub fn for_regime(regime: Regime) -> Self {
        let hours = regime.params().operating_hours_per_day.ceil() as u32;
        Self {
            start_hour: 8,
            buckets: hours,
            base_volume: 40.0,
            peak_volume: 120.0,
            peak_bucket: hours / 3,
            jitter: 0.15,
        }
    }

    /// Generate one day of observations. Deterministic in (self, seed).
    pub fn generate(&self, seed: u64) -> Vec<IntervalObservation> {
        let mut rng = DemandRng::new(seed);
        let mut observations = Vec::with_capacity(self.buckets as usize);
        for bucket in 0..self.buckets {
            // Widened sum: start hours beyond the clock wrap, never overflow.
            let hour = (u64::from(self.start_hour) + u64::from(bucket)) % 24;
            let label = format!("{hour:02}:00");
            let shape = self.ramp(bucket);
            let volume = (self.base_volume + (self.peak_volume - self.base_volume) * shape)
                * rng.jitter(self.jitter);
            // Floor at one call so every generated row honors the
            // ingestion contract (volume > 0).
            observations.push(IntervalObservation::new(label, volume.max(1.0)));
        }
        log::debug!(
            "generated {} demand buckets (seed={seed})",
            observations.len()
        );
        observations
    }

    /// Triangular ramp: 0 at the edges of the day, 1 at the peak bucket.
    fn ramp(&self, bucket: u32) -> f64 {
        if self.buckets <= 1 {
            return 1.0;
        }
        let last = (self.buckets - 1) as f64;
        let peak = f64::from(self.peak_bucket.min(self.buckets - 1));
        let i = f64::from(bucket);
        if i <= peak {
            if peak == 0.0 {
                1.0
            } else {
                i / peak
            }
        } else if last == peak {
            1.0
        } else {
            (last - i) / (last - peak)
        }
    }
}
