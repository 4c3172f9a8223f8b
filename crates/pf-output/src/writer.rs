//! The `OutputWriter` trait implemented by all backend writers.

use pf_metrics::RunSummary;

use crate::{CompletionRow, OutputResult, TickRow};

/// Backend-independent writing surface driven by
/// [`OutputObserver`][crate::OutputObserver].
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`OutputObserver::take_error`][crate::OutputObserver::take_error].
pub trait OutputWriter {
    /// Write one tick-state row.
    fn write_tick(&mut self, row: &TickRow) -> OutputResult<()>;

    /// Write one passenger-completion row.
    fn write_completion(&mut self, row: &CompletionRow) -> OutputResult<()>;

    /// Write the end-of-run summary.
    fn write_summary(&mut self, summary: &RunSummary) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
