//! `DueQueue` — sparse per-tick stage-completion schedule.
//!
//! # Why this exists
//!
//! A passenger's stay in a stage is fixed the moment they enter it (the
//! service duration, or distance over the locked-in speed).  Scanning the
//! whole population every tick for "is your timer up?" would cost O(N) per
//! tick regardless of how many passengers actually transition.
//!
//! `DueQueue` inverts the problem: on stage entry the engine registers the
//! tick at which the passenger completes it.  Each tick the engine drains
//! only the passengers due at that tick — O(due) work instead of O(N).
//!
//! # Performance note
//!
//! `BTreeMap` gives O(log W) insert/pop where W = number of distinct due
//! ticks currently enqueued.  Stage durations cluster around a handful of
//! values (one service time, two transit times), so W stays small.

use std::collections::BTreeMap;

use pf_core::{PassengerId, Tick};

/// Maps simulation ticks → passengers whose current stage completes then.
#[derive(Default)]
pub struct DueQueue {
    inner: BTreeMap<Tick, Vec<PassengerId>>,
    /// Cached total entry count for O(1) `len()`.
    total: usize,
}

impl DueQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `passenger` to complete its current stage at `tick`.
    ///
    /// Each passenger is in at most one stage, so it appears at most once
    /// across the whole queue; the engine re-pushes on every stage entry.
    pub fn push(&mut self, tick: Tick, passenger: PassengerId) {
        self.inner.entry(tick).or_default().push(passenger);
        self.total += 1;
    }

    /// Remove and return all passengers due at exactly `tick`.
    ///
    /// Returns `None` if nothing is due (the common case — avoids
    /// allocation).  Entries come back in insertion order, which follows
    /// stage-entry order and is therefore deterministic.
    pub fn drain_tick(&mut self, tick: Tick) -> Option<Vec<PassengerId>> {
        let due = self.inner.remove(&tick)?;
        self.total -= due.len();
        Some(due)
    }

    /// The earliest tick with at least one due passenger, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Total number of scheduled completions across all future ticks.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
