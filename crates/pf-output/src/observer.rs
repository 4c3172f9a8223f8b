//! `OutputObserver<W>` — bridges `EngineObserver` to an `OutputWriter`.

use pf_core::Tick;
use pf_metrics::MetricsAggregator;
use pf_sim::{CompletionRecord, EngineObserver, TickSnapshot};

use crate::row::{CompletionRow, TickRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// An [`EngineObserver`] that streams tick and completion rows to any
/// [`OutputWriter`] backend, and writes the run summary when the run ends.
///
/// A [`MetricsAggregator`] is folded internally to produce the summary, so
/// callers get `summary.csv` without wiring up pf-metrics themselves.
///
/// Errors from the writer are stored internally because `EngineObserver`
/// methods have no return value.  After `engine.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct OutputObserver<W: OutputWriter> {
    writer: W,
    metrics: MetricsAggregator,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> OutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            metrics: MetricsAggregator::new(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `engine.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// The internally folded metrics, e.g. to reuse the summary in code.
    pub fn metrics(&self) -> &MetricsAggregator {
        &self.metrics
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> EngineObserver for OutputObserver<W> {
    fn on_snapshot(&mut self, snapshot: &TickSnapshot) {
        self.metrics.on_snapshot(snapshot);
        let result = self.writer.write_tick(&TickRow::from(snapshot));
        self.store_err(result);
    }

    fn on_completion(&mut self, record: &CompletionRecord) {
        self.metrics.on_completion(record);
        let result = self.writer.write_completion(&CompletionRow::from(record));
        self.store_err(result);
    }

    fn on_run_end(&mut self, _final_tick: Tick) {
        let summary = self.metrics.summary();
        let result = self.writer.write_summary(&summary);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
