//! Experiment groups and the reference sweep.

use pf_core::GroupId;
use pf_sim::{ArrivalPattern, ArrivalSpec, SimResult};

/// One named arrival configuration within a sweep.
#[derive(Clone, Debug, PartialEq)]
pub struct ExperimentGroup {
    pub id: GroupId,
    /// Human-readable name, also used as the per-group output directory.
    pub label: String,
    pub arrivals: ArrivalSpec,
}

impl ExperimentGroup {
    pub fn new(id: GroupId, label: impl Into<String>, arrivals: ArrivalSpec) -> Self {
        Self {
            id,
            label: label.into(),
            arrivals,
        }
    }

    pub fn validate(&self) -> SimResult<()> {
        self.arrivals.validate()
    }
}

/// The reference ten-group sweep.
///
/// Five class-mix ratios, each run under two arrival patterns over a 60 s
/// window:
///
/// | Groups | Pattern                                    |
/// |--------|--------------------------------------------|
/// | 1–5    | continuous                                 |
/// | 6–10   | discontinuous, flow paused over 20 s–40 s  |
///
/// The per-class rates sweep from luggage-light to luggage-heavy while the
/// combined rate stays at 6 ped/s: (1, 5), (2, 4), (3, 3), (4, 2), (5, 1).
pub fn default_groups() -> Vec<ExperimentGroup> {
    const DURATION_SECS: f64 = 60.0;
    const GAP_START_SECS: f64 = 20.0;
    const GAP_END_SECS: f64 = 40.0;
    const RATES: [(f64, f64); 5] = [
        (1.0, 5.0),
        (2.0, 4.0),
        (3.0, 3.0),
        (4.0, 2.0),
        (5.0, 1.0),
    ];

    let mut groups = Vec::with_capacity(2 * RATES.len());
    for (i, &(with, without)) in RATES.iter().enumerate() {
        let id = GroupId(i as u16 + 1);
        groups.push(ExperimentGroup::new(
            id,
            format!("group-{:02}", id.0),
            ArrivalSpec::continuous(with, without, DURATION_SECS),
        ));
    }
    for (i, &(with, without)) in RATES.iter().enumerate() {
        let id = GroupId((i + RATES.len()) as u16 + 1);
        groups.push(ExperimentGroup::new(
            id,
            format!("group-{:02}", id.0),
            ArrivalSpec {
                rate_with_luggage: with,
                rate_without_luggage: without,
                pattern: ArrivalPattern::Discontinuous {
                    duration_secs: DURATION_SECS,
                    gap_start_secs: GAP_START_SECS,
                    gap_end_secs: GAP_END_SECS,
                },
            },
        ));
    }
    groups
}
