//! `MetricsAggregator` — streaming per-run statistics.

use pf_core::PassengerClass;
use pf_sim::{CompletionRecord, EngineObserver, TickSnapshot};

use crate::summary::{ClassSummary, RunSummary};

/// Running sums and maxima for one completion population.
#[derive(Debug, Clone, Copy, Default)]
struct Acc {
    n: u64,
    sum_total: f64,
    max_total: f64,
    sum_basic: f64,
    max_basic: f64,
    sum_extra: f64,
    max_extra: f64,
}

impl Acc {
    fn add(&mut self, record: &CompletionRecord) {
        self.n += 1;
        self.sum_total += record.total_secs;
        self.max_total = self.max_total.max(record.total_secs);
        self.sum_basic += record.basic_secs;
        self.max_basic = self.max_basic.max(record.basic_secs);
        self.sum_extra += record.extra_secs;
        self.max_extra = self.max_extra.max(record.extra_secs);
    }

    fn summary(&self) -> ClassSummary {
        let mean = |sum: f64| if self.n == 0 { 0.0 } else { sum / self.n as f64 };
        ClassSummary {
            completed: self.n,
            mean_total_secs: mean(self.sum_total),
            max_total_secs: self.max_total,
            mean_basic_secs: mean(self.sum_basic),
            max_basic_secs: self.max_basic,
            mean_extra_secs: mean(self.sum_extra),
            max_extra_secs: self.max_extra,
        }
    }
}

/// An [`EngineObserver`] that folds the snapshot and completion streams into
/// a [`RunSummary`] in constant memory.
///
/// Sums and maxima are updated as events arrive; means are only computed
/// when [`summary`][Self::summary] is called.  Pair with
/// [`TimeSeries`][crate::TimeSeries] via
/// [`ObserverPair`][pf_sim::ObserverPair] when the full tick history is also
/// needed.
#[derive(Debug, Clone, Default)]
pub struct MetricsAggregator {
    overall: Acc,
    with_luggage: Acc,
    without_luggage: Acc,

    peak_queue_len: u32,
    peak_screening_occupied: u32,
    peak_segment1_density: f64,
    peak_segment2_density: f64,

    first_departure_secs: Option<f64>,
    last_departure_secs: Option<f64>,
}

impl MetricsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completions folded in so far.
    pub fn completed(&self) -> u64 {
        self.overall.n
    }

    /// Snapshot the statistics accumulated so far.
    ///
    /// Valid at any point, not just after `run` returns; a run with zero
    /// completions yields the all-zero [`RunSummary`].
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            overall: self.overall.summary(),
            with_luggage: self.with_luggage.summary(),
            without_luggage: self.without_luggage.summary(),
            peak_queue_len: self.peak_queue_len,
            peak_screening_occupied: self.peak_screening_occupied,
            peak_segment1_density: self.peak_segment1_density,
            peak_segment2_density: self.peak_segment2_density,
            first_departure_secs: self.first_departure_secs,
            last_departure_secs: self.last_departure_secs,
        }
    }
}

impl EngineObserver for MetricsAggregator {
    fn on_snapshot(&mut self, snapshot: &TickSnapshot) {
        self.peak_queue_len = self.peak_queue_len.max(snapshot.queue_len);
        self.peak_screening_occupied = self
            .peak_screening_occupied
            .max(snapshot.screening_occupied);
        self.peak_segment1_density = self.peak_segment1_density.max(snapshot.segment1_density);
        self.peak_segment2_density = self.peak_segment2_density.max(snapshot.segment2_density);
    }

    fn on_completion(&mut self, record: &CompletionRecord) {
        self.overall.add(record);
        match record.class {
            PassengerClass::WithLuggage => self.with_luggage.add(record),
            PassengerClass::WithoutLuggage => self.without_luggage.add(record),
        }

        // Completions arrive in tick order, so the first one observed is
        // the earliest departure.
        if self.first_departure_secs.is_none() {
            self.first_departure_secs = Some(record.departure_secs);
        }
        self.last_departure_secs = Some(record.departure_secs);
    }
}
