//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `tick_series.csv`
//! - `completions.csv`
//! - `summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use pf_metrics::{ClassSummary, RunSummary};

use crate::writer::OutputWriter;
use crate::{CompletionRow, OutputResult, TickRow};

/// Writes run output to three CSV files.
pub struct CsvWriter {
    ticks: Writer<File>,
    completions: Writer<File>,
    summary: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut ticks = Writer::from_path(dir.join("tick_series.csv"))?;
        ticks.write_record([
            "tick",
            "time_secs",
            "queue_len",
            "screening_occupied",
            "segment1_occupied",
            "segment1_density",
            "segment2_occupied",
            "segment2_density",
        ])?;

        let mut completions = Writer::from_path(dir.join("completions.csv"))?;
        completions.write_record([
            "passenger_id",
            "class",
            "arrival_secs",
            "departure_secs",
            "basic_service_secs",
            "basic_segment1_secs",
            "basic_segment2_secs",
            "basic_secs",
            "extra_secs",
            "total_secs",
        ])?;

        let mut summary = Writer::from_path(dir.join("summary.csv"))?;
        summary.write_record([
            "scope",
            "completed",
            "mean_total_secs",
            "max_total_secs",
            "mean_basic_secs",
            "max_basic_secs",
            "mean_extra_secs",
            "max_extra_secs",
            "peak_queue_len",
            "peak_screening_occupied",
            "peak_segment1_density",
            "peak_segment2_density",
            "first_departure_secs",
            "last_departure_secs",
        ])?;

        Ok(Self {
            ticks,
            completions,
            summary,
            finished: false,
        })
    }

    /// One summary row.  Run-level fields (peaks, departure window) only
    /// appear on the `overall` row; class rows leave them empty.
    fn summary_record(
        scope: &str,
        class: &ClassSummary,
        run: Option<&RunSummary>,
    ) -> Vec<String> {
        let mut record = vec![
            scope.to_string(),
            class.completed.to_string(),
            class.mean_total_secs.to_string(),
            class.max_total_secs.to_string(),
            class.mean_basic_secs.to_string(),
            class.max_basic_secs.to_string(),
            class.mean_extra_secs.to_string(),
            class.max_extra_secs.to_string(),
        ];
        match run {
            Some(run) => {
                record.push(run.peak_queue_len.to_string());
                record.push(run.peak_screening_occupied.to_string());
                record.push(run.peak_segment1_density.to_string());
                record.push(run.peak_segment2_density.to_string());
                record.push(run.first_departure_secs.map_or(String::new(), |s| s.to_string()));
                record.push(run.last_departure_secs.map_or(String::new(), |s| s.to_string()));
            }
            None => record.extend(std::iter::repeat_n(String::new(), 6)),
        }
        record
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick(&mut self, row: &TickRow) -> OutputResult<()> {
        self.ticks.write_record(&[
            row.tick.to_string(),
            row.time_secs.to_string(),
            row.queue_len.to_string(),
            row.screening_occupied.to_string(),
            row.segment1_occupied.to_string(),
            row.segment1_density.to_string(),
            row.segment2_occupied.to_string(),
            row.segment2_density.to_string(),
        ])?;
        Ok(())
    }

    fn write_completion(&mut self, row: &CompletionRow) -> OutputResult<()> {
        self.completions.write_record(&[
            row.passenger_id.to_string(),
            row.class.to_string(),
            row.arrival_secs.to_string(),
            row.departure_secs.to_string(),
            row.basic_service_secs.to_string(),
            row.basic_segment1_secs.to_string(),
            row.basic_segment2_secs.to_string(),
            row.basic_secs.to_string(),
            row.extra_secs.to_string(),
            row.total_secs.to_string(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, summary: &RunSummary) -> OutputResult<()> {
        self.summary.write_record(Self::summary_record(
            "overall",
            &summary.overall,
            Some(summary),
        ))?;
        self.summary.write_record(Self::summary_record(
            "with-luggage",
            &summary.with_luggage,
            None,
        ))?;
        self.summary.write_record(Self::summary_record(
            "without-luggage",
            &summary.without_luggage,
            None,
        ))?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.ticks.flush()?;
        self.completions.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
