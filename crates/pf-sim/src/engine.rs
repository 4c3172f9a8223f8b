//! The `Engine` struct and its tick loop.

use std::collections::VecDeque;

use pf_core::{PassengerId, SimClock, Tick};
use pf_model::{CorridorParams, ScreeningZone, SpeedModel, WalkingSegment, try_admit};

use crate::arrivals::ArrivalGenerator;
use crate::due_queue::DueQueue;
use crate::observer::EngineObserver;
use crate::passenger::{Passenger, Stage};
use crate::record::{CompletionRecord, TickSnapshot};

// ── SimParams ─────────────────────────────────────────────────────────────────

/// Loop-level configuration, distinct from the corridor's physical
/// constants.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimParams {
    /// Simulated seconds per tick.
    pub tick_len_secs: f64,
    /// Hard upper bound on the run length, in ticks.  A run that has not
    /// drained by then stops with [`RunOutcome::TickBudgetExhausted`].
    pub max_ticks: u64,
}

impl Default for SimParams {
    /// 0.1 s resolution, 20,000-tick (2,000 s) budget — generous for the
    /// reference experiment groups, which drain within ~400 s.
    fn default() -> Self {
        Self {
            tick_len_secs: 0.1,
            max_ticks: 20_000,
        }
    }
}

// ── Run report ────────────────────────────────────────────────────────────────

/// Why the run stopped.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RunOutcome {
    /// The arrival window closed and every created passenger departed.
    /// A run with zero arrivals also drains — empty output is a legitimate
    /// result, not an error.
    Drained,
    /// `max_ticks` elapsed with passengers still in the system.
    TickBudgetExhausted,
}

/// Summary handed back by [`Engine::run`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub final_tick: Tick,
    /// Passengers created over the whole run.
    pub created: usize,
    /// Passengers that exited the second segment.
    pub departed: usize,
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// The corridor simulation runner.
///
/// Owns all mutable run state — areas, entrance queue, passenger
/// population, clock — and drives the per-tick cycle:
///
/// 1. **Arrivals**: new passengers are created and enqueued at the tail.
/// 2. **Density snapshot**: both walking segments' densities are read
///    once.  Every passenger entering a segment this tick locks in the
///    speed implied by this snapshot; speed is never re-evaluated
///    mid-transit.  (Continuous re-evaluation would need a different
///    integration scheme entirely; the snapshot policy keeps the
///    density→speed→occupancy feedback loop well-defined and testable.)
/// 3. **Completions**: passengers whose stage timer expires this tick move
///    downstream.  A screening exit frees its slot *before* step 4, so the
///    slot is immediately eligible for the next queued passenger in the
///    same tick.
/// 4. **Admissions**: the queue head is admitted while the screening zone
///    has free capacity.  FIFO, no class priority; a rejection leaves the
///    queue untouched until the next tick.
/// 5. **Snapshot**: the settled occupancy/density/queue state goes to the
///    observer.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder].
pub struct Engine {
    pub(crate) corridor: CorridorParams,
    pub(crate) sim: SimParams,
    pub(crate) clock: SimClock,
    pub(crate) speed: SpeedModel,
    pub(crate) arrivals: ArrivalGenerator,

    pub(crate) queue: VecDeque<PassengerId>,
    pub(crate) screening: ScreeningZone,
    pub(crate) segment1: WalkingSegment,
    pub(crate) segment2: WalkingSegment,
    pub(crate) due: DueQueue,

    pub(crate) passengers: Vec<Passenger>,
    pub(crate) departed: usize,
}

impl Engine {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run to completion: until the corridor drains after the arrival
    /// window, or the tick budget runs out.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: EngineObserver>(&mut self, observer: &mut O) -> RunReport {
        let outcome = loop {
            let now = self.clock.current_tick;
            if now.0 >= self.sim.max_ticks {
                break RunOutcome::TickBudgetExhausted;
            }

            observer.on_tick_start(now);
            self.process_tick(now, observer);
            self.clock.advance();

            if self.arrivals.exhausted(self.clock.elapsed_secs())
                && self.departed == self.passengers.len()
            {
                break RunOutcome::Drained;
            }
        };

        let final_tick = self.clock.current_tick;
        observer.on_run_end(final_tick);
        RunReport {
            outcome,
            final_tick,
            created: self.passengers.len(),
            departed: self.departed,
        }
    }

    /// Run exactly `n` ticks from the current position (ignores the drain
    /// condition).  Useful for tests and incremental stepping.
    pub fn run_ticks<O: EngineObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            self.process_tick(now, observer);
            self.clock.advance();
        }
    }

    /// Read-only view of the whole population, indexed by `PassengerId`.
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn corridor(&self) -> &CorridorParams {
        &self.corridor
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: EngineObserver>(&mut self, now: Tick, observer: &mut O) {
        // ── Phase 1: ingest arrivals ──────────────────────────────────────
        let t = self.clock.secs(now);
        for class in self.arrivals.generate(t) {
            let id = PassengerId(self.passengers.len() as u32);
            self.passengers.push(Passenger::arrive(id, class, now));
            self.queue.push_back(id);
        }

        // ── Phase 2: density snapshot ─────────────────────────────────────
        //
        // Read once, before any transition.  All segment entries this tick
        // price their transit off this snapshot, matching the
        // snapshot-then-apply discretization of the density↔speed coupling.
        let density1 = self.segment1.density();
        let density2 = self.segment2.density();

        // ── Phase 3: stage completions (upstream → downstream order is
        // irrelevant here: speeds come from the phase-2 snapshot, and
        // occupancy edits only affect *later* ticks) ──────────────────────
        if let Some(due) = self.due.drain_tick(now) {
            for id in due {
                self.complete_stage(id, now, density1, density2, observer);
            }
        }

        // ── Phase 4: admissions — completions above already freed slots,
        // so a vacated slot is reusable this very tick ────────────────────
        while let Some(&head) = self.queue.front() {
            if !try_admit(&mut self.screening).is_accepted() {
                break;
            }
            self.queue.pop_front();
            let service = self.corridor.service_time_secs;
            let p = &mut self.passengers[head.index()];
            p.stage = Stage::InScreening;
            p.screening_entry = Some(now);
            p.basic_service_secs = service;
            self.due.push(now + self.clock.ticks_for_secs(service).max(1), head);
        }

        // ── Phase 5: emit the settled snapshot ────────────────────────────
        let snapshot = TickSnapshot {
            tick: now,
            time_secs: t,
            queue_len: self.queue.len() as u32,
            screening_occupied: self.screening.occupied(),
            segment1_occupied: self.segment1.occupied(),
            segment1_density: self.segment1.density(),
            segment2_occupied: self.segment2.occupied(),
            segment2_density: self.segment2.density(),
        };
        observer.on_snapshot(&snapshot);
    }

    /// Move one due passenger to its next stage.
    fn complete_stage<O: EngineObserver>(
        &mut self,
        id: PassengerId,
        now: Tick,
        density1: f64,
        density2: f64,
        observer: &mut O,
    ) {
        let p = &mut self.passengers[id.index()];
        match p.stage {
            Stage::InScreening => {
                self.screening.release();
                self.segment1.enter();

                let speed = self.speed.speed(density1);
                let basic = self.corridor.segment1.length_m / speed;
                p.stage = Stage::InSegment1;
                p.segment1_entry = Some(now);
                p.basic_segment1_secs = basic;
                self.due.push(now + self.clock.ticks_for_secs(basic).max(1), id);
            }

            Stage::InSegment1 => {
                self.segment1.leave();
                self.segment2.enter();

                let speed = self.speed.speed(density2);
                let basic = self.corridor.segment2.length_m / speed;
                p.stage = Stage::InSegment2;
                p.segment2_entry = Some(now);
                p.basic_segment2_secs = basic;
                self.due.push(now + self.clock.ticks_for_secs(basic).max(1), id);
            }

            Stage::InSegment2 => {
                self.segment2.leave();
                p.stage = Stage::Departed;
                p.departed_at = Some(now);
                self.departed += 1;

                let arrival_secs = self.clock.secs(p.arrived_at);
                let departure_secs = self.clock.secs(now);
                let total_secs = departure_secs - arrival_secs;
                let basic_secs = p.basic_total_secs();
                let record = CompletionRecord {
                    id,
                    class: p.class,
                    arrival_secs,
                    departure_secs,
                    basic_service_secs: p.basic_service_secs,
                    basic_segment1_secs: p.basic_segment1_secs,
                    basic_segment2_secs: p.basic_segment2_secs,
                    basic_secs,
                    extra_secs: total_secs - basic_secs,
                    total_secs,
                };
                observer.on_completion(&record);
            }

            // Queued passengers are never scheduled in the due queue and a
            // departed passenger is never re-scheduled.
            Stage::Queued | Stage::Departed => {
                debug_assert!(false, "{id} due in stage {:?}", p.stage);
            }
        }
    }
}
