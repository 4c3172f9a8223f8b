//! Deterministic arrival generation.
//!
//! Arrival rates are pedestrians per second, typically fractional per tick.
//! A per-class fractional accumulator converts them into whole passengers:
//! each active tick adds `rate * dt` and emits the integer part.  No
//! randomness — the same spec always yields the same arrival sequence,
//! which is what makes whole runs reproducible.

use pf_core::PassengerClass;

use crate::error::{SimError, SimResult};

// ── Pattern ───────────────────────────────────────────────────────────────────

/// When arrivals are active within a run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArrivalPattern {
    /// Arrivals flow for the whole window `[0, duration_secs)`.
    Continuous { duration_secs: f64 },
    /// Arrivals flow over `[0, duration_secs)` except during the gap
    /// `[gap_start_secs, gap_end_secs)`.
    Discontinuous {
        duration_secs: f64,
        gap_start_secs: f64,
        gap_end_secs: f64,
    },
}

impl ArrivalPattern {
    /// Is the arrival process active at simulated time `t`?
    pub fn active(&self, t: f64) -> bool {
        match *self {
            ArrivalPattern::Continuous { duration_secs } => t < duration_secs,
            ArrivalPattern::Discontinuous {
                duration_secs,
                gap_start_secs,
                gap_end_secs,
            } => t < duration_secs && !(t >= gap_start_secs && t < gap_end_secs),
        }
    }

    /// End of the last possible arrival (s).
    pub fn duration_secs(&self) -> f64 {
        match *self {
            ArrivalPattern::Continuous { duration_secs }
            | ArrivalPattern::Discontinuous { duration_secs, .. } => duration_secs,
        }
    }

    /// Fail fast on degenerate windows: a gap outside the run's arrival
    /// duration is a configuration error, not a silent no-op.
    pub fn validate(&self) -> SimResult<()> {
        let dur = self.duration_secs();
        if !(dur > 0.0 && dur.is_finite()) {
            return Err(SimError::Config(format!(
                "arrival duration must be positive, got {dur}"
            )));
        }
        if let ArrivalPattern::Discontinuous {
            gap_start_secs,
            gap_end_secs,
            ..
        } = *self
        {
            if !(gap_start_secs >= 0.0 && gap_start_secs < gap_end_secs) {
                return Err(SimError::Config(format!(
                    "gap window must satisfy 0 <= start < end, got [{gap_start_secs}, {gap_end_secs})"
                )));
            }
            if gap_end_secs > dur {
                return Err(SimError::Config(format!(
                    "gap window [{gap_start_secs}, {gap_end_secs}) extends past arrival duration {dur}"
                )));
            }
        }
        Ok(())
    }
}

// ── Spec ──────────────────────────────────────────────────────────────────────

/// Per-run arrival configuration: one rate per passenger class plus the
/// shared activity pattern.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrivalSpec {
    /// Arrival rate of with-luggage passengers (ped/s).
    pub rate_with_luggage: f64,
    /// Arrival rate of without-luggage passengers (ped/s).
    pub rate_without_luggage: f64,
    pub pattern: ArrivalPattern,
}

impl ArrivalSpec {
    /// Continuous arrivals at the given per-class rates for `duration_secs`.
    pub fn continuous(rate_with_luggage: f64, rate_without_luggage: f64, duration_secs: f64) -> Self {
        Self {
            rate_with_luggage,
            rate_without_luggage,
            pattern: ArrivalPattern::Continuous { duration_secs },
        }
    }

    pub fn validate(&self) -> SimResult<()> {
        for (name, rate) in [
            ("rate_with_luggage", self.rate_with_luggage),
            ("rate_without_luggage", self.rate_without_luggage),
        ] {
            if !(rate >= 0.0 && rate.is_finite()) {
                return Err(SimError::Config(format!(
                    "{name} must be finite and non-negative, got {rate}"
                )));
            }
        }
        self.pattern.validate()
    }
}

// ── Generator ─────────────────────────────────────────────────────────────────

/// Fractional-accumulator arrival generator.
///
/// Classes are interleaved within a tick (luggage, no-luggage, luggage, …)
/// so that neither class systematically queues ahead of the other when both
/// emit passengers on the same tick.
#[derive(Clone, Debug)]
pub struct ArrivalGenerator {
    spec: ArrivalSpec,
    tick_len_secs: f64,
    acc_with: f64,
    acc_without: f64,
}

impl ArrivalGenerator {
    pub fn new(spec: ArrivalSpec, tick_len_secs: f64) -> Self {
        Self {
            spec,
            tick_len_secs,
            acc_with: 0.0,
            acc_without: 0.0,
        }
    }

    /// All arrivals beyond `t` are impossible.
    #[inline]
    pub fn exhausted(&self, t: f64) -> bool {
        t >= self.spec.pattern.duration_secs() - 1e-9
    }

    /// Classes of the passengers arriving during the tick starting at `t`.
    ///
    /// Returns an empty vec outside the active window.  The accumulators
    /// keep their fractional remainder across a gap, so a discontinuous
    /// pattern loses no passengers to truncation.
    pub fn generate(&mut self, t: f64) -> Vec<PassengerClass> {
        if !self.spec.pattern.active(t) {
            return Vec::new();
        }
        self.acc_with += self.spec.rate_with_luggage * self.tick_len_secs;
        self.acc_without += self.spec.rate_without_luggage * self.tick_len_secs;

        // The 1e-9 guard keeps repeated binary-fraction addition (e.g.
        // 100 × 0.1) from dropping a passenger that the exact sum produces.
        let n_with = (self.acc_with + 1e-9).floor() as u32;
        let n_without = (self.acc_without + 1e-9).floor() as u32;
        self.acc_with -= n_with as f64;
        self.acc_without -= n_without as f64;

        let mut out = Vec::with_capacity((n_with + n_without) as usize);
        for i in 0..n_with.max(n_without) {
            if i < n_with {
                out.push(PassengerClass::WithLuggage);
            }
            if i < n_without {
                out.push(PassengerClass::WithoutLuggage);
            }
        }
        out
    }
}
