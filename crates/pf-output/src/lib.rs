//! `pf-output` — run-output writers for pedflow.
//!
//! One CSV backend producing three files in the configured output
//! directory:
//!
//! | File               | Contents                                   |
//! |--------------------|--------------------------------------------|
//! | `tick_series.csv`  | one row per tick: queue and area state     |
//! | `completions.csv`  | one row per departed passenger             |
//! | `summary.csv`      | per-class transit-time statistics + peaks  |
//!
//! The backend implements [`OutputWriter`] and is driven by
//! [`OutputObserver`], which implements `pf_sim::EngineObserver` and folds a
//! [`MetricsAggregator`][pf_metrics::MetricsAggregator] on the side for the
//! summary file.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pf_output::{CsvWriter, OutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = OutputObserver::new(writer);
//! engine.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::OutputObserver;
pub use row::{CompletionRow, TickRow};
pub use writer::OutputWriter;
