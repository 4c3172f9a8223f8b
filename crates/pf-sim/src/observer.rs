//! Engine observer trait for progress reporting and data collection.

use pf_core::Tick;

use crate::record::{CompletionRecord, TickSnapshot};

/// Callbacks invoked by [`Engine::run`][crate::Engine::run] at key points in
/// the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers are pure consumers: they
/// receive copies/borrows of engine output and can never mutate engine
/// state.
///
/// # Example — queue-length printer
///
/// ```rust,ignore
/// struct QueuePrinter { every: u64 }
///
/// impl EngineObserver for QueuePrinter {
///     fn on_snapshot(&mut self, snap: &TickSnapshot) {
///         if snap.tick.0 % self.every == 0 {
///             println!("{}: queue {}", snap.tick, snap.queue_len);
///         }
///     }
/// }
/// ```
pub trait EngineObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per tick with the settled area state.
    fn on_snapshot(&mut self, _snapshot: &TickSnapshot) {}

    /// Called when a passenger exits the second segment and departs.
    fn on_completion(&mut self, _record: &CompletionRecord) {}

    /// Called once after the final tick completes.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// An [`EngineObserver`] that does nothing.  Use when you need to call `run`
/// but don't want callbacks.
pub struct NoopObserver;

impl EngineObserver for NoopObserver {}

/// Fans engine callbacks out to two observers, `a` first.
///
/// Nest pairs for more than two consumers (e.g. metrics + CSV + progress).
pub struct ObserverPair<'a, A, B> {
    pub a: &'a mut A,
    pub b: &'a mut B,
}

impl<'a, A: EngineObserver, B: EngineObserver> ObserverPair<'a, A, B> {
    pub fn new(a: &'a mut A, b: &'a mut B) -> Self {
        Self { a, b }
    }
}

impl<A: EngineObserver, B: EngineObserver> EngineObserver for ObserverPair<'_, A, B> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.a.on_tick_start(tick);
        self.b.on_tick_start(tick);
    }

    fn on_snapshot(&mut self, snapshot: &TickSnapshot) {
        self.a.on_snapshot(snapshot);
        self.b.on_snapshot(snapshot);
    }

    fn on_completion(&mut self, record: &CompletionRecord) {
        self.a.on_completion(record);
        self.b.on_completion(record);
    }

    fn on_run_end(&mut self, final_tick: Tick) {
        self.a.on_run_end(final_tick);
        self.b.on_run_end(final_tick);
    }
}
