//! Retained run histories: the full tick series and the completion log.

use pf_model::AreaKind;
use pf_sim::{CompletionRecord, EngineObserver, TickSnapshot};

/// An [`EngineObserver`] that keeps every [`TickSnapshot`] of a run.
///
/// Memory grows linearly with run length (one snapshot per tick), so prefer
/// [`MetricsAggregator`][crate::MetricsAggregator] when only summary numbers
/// are needed.
#[derive(Debug, Clone, Default)]
pub struct TimeSeries {
    snapshots: Vec<TickSnapshot>,
}

impl TimeSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The snapshots in tick order, one per tick, gap-free from tick 0.
    pub fn snapshots(&self) -> &[TickSnapshot] {
        &self.snapshots
    }

    /// Largest occupant count the given area reached at any tick boundary.
    pub fn peak_occupancy(&self, area: AreaKind) -> u32 {
        self.snapshots
            .iter()
            .map(|s| match area {
                AreaKind::Screening => s.screening_occupied,
                AreaKind::Segment1 => s.segment1_occupied,
                AreaKind::Segment2 => s.segment2_occupied,
            })
            .max()
            .unwrap_or(0)
    }

    pub fn peak_queue_len(&self) -> u32 {
        self.snapshots.iter().map(|s| s.queue_len).max().unwrap_or(0)
    }

    /// Time-averaged entrance-queue length over the recorded window.
    pub fn mean_queue_len(&self) -> f64 {
        if self.snapshots.is_empty() {
            return 0.0;
        }
        let sum: u64 = self.snapshots.iter().map(|s| s.queue_len as u64).sum();
        sum as f64 / self.snapshots.len() as f64
    }
}

impl EngineObserver for TimeSeries {
    fn on_snapshot(&mut self, snapshot: &TickSnapshot) {
        self.snapshots.push(*snapshot);
    }
}

/// An [`EngineObserver`] that keeps every [`CompletionRecord`] of a run, in
/// departure order.
#[derive(Debug, Clone, Default)]
pub struct CompletionLog {
    records: Vec<CompletionRecord>,
}

impl CompletionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[CompletionRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<CompletionRecord> {
        self.records
    }
}

impl EngineObserver for CompletionLog {
    fn on_completion(&mut self, record: &CompletionRecord) {
        self.records.push(*record);
    }
}
