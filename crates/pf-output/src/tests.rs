//! Integration tests for pf-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use pf_metrics::RunSummary;

    use crate::csv::CsvWriter;
    use crate::row::{CompletionRow, TickRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn tick_row(tick: u64) -> TickRow {
        TickRow {
            tick,
            time_secs: tick as f64 * 0.1,
            queue_len: 3,
            screening_occupied: 15,
            segment1_occupied: 4,
            segment1_density: 0.5,
            segment2_occupied: 2,
            segment2_density: 0.25,
        }
    }

    fn completion_row(id: u32) -> CompletionRow {
        CompletionRow {
            passenger_id: id,
            class: "with-luggage",
            arrival_secs: 0.0,
            departure_secs: 20.7,
            basic_service_secs: 15.5,
            basic_segment1_secs: 2.83,
            basic_segment2_secs: 2.27,
            basic_secs: 20.6,
            extra_secs: 0.1,
            total_secs: 20.7,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("tick_series.csv").exists());
        assert!(dir.path().join("completions.csv").exists());
        assert!(dir.path().join("summary.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_series.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            [
                "tick",
                "time_secs",
                "queue_len",
                "screening_occupied",
                "segment1_occupied",
                "segment1_density",
                "segment2_occupied",
                "segment2_density",
            ]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("completions.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2[0], "passenger_id");
        assert_eq!(headers2[1], "class");
        assert_eq!(headers2.len(), 10);
    }

    #[test]
    fn csv_tick_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick(&tick_row(0)).unwrap();
        w.write_tick(&tick_row(1)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_series.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "0"); // tick
        assert_eq!(&rows[0][2], "3"); // queue_len
        assert_eq!(&rows[1][0], "1");
    }

    #[test]
    fn csv_completion_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_completion(&completion_row(7)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("completions.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "7");
        assert_eq!(&rows[0][1], "with-luggage");
        assert_eq!(&rows[0][9], "20.7"); // total_secs
    }

    #[test]
    fn csv_summary_three_scopes() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_summary(&RunSummary::default()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("summary.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "overall");
        assert_eq!(&rows[1][0], "with-luggage");
        assert_eq!(&rows[2][0], "without-luggage");
        // Run-level fields only on the overall row; empty departure window
        // for a no-completion summary.
        assert_eq!(&rows[0][8], "0"); // peak_queue_len
        assert_eq!(&rows[0][12], ""); // first_departure_secs
        assert_eq!(&rows[1][8], "");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn integration_csv() {
        use pf_sim::{ArrivalSpec, EngineBuilder, RunOutcome};

        use crate::observer::OutputObserver;

        let mut engine = EngineBuilder::new(ArrivalSpec::continuous(2.0, 3.0, 10.0))
            .build()
            .unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = OutputObserver::new(writer);
        let report = engine.run(&mut obs);
        assert_eq!(report.outcome, RunOutcome::Drained);
        assert!(obs.take_error().is_none(), "no write errors expected");

        // One tick row per tick of the run.
        let mut rdr = csv::Reader::from_path(dir.path().join("tick_series.csv")).unwrap();
        let tick_rows = rdr.records().map(|r| r.unwrap()).count();
        assert_eq!(tick_rows as u64, report.final_tick.0);

        // One completion row per departed passenger.
        let mut rdr2 = csv::Reader::from_path(dir.path().join("completions.csv")).unwrap();
        let completion_rows = rdr2.records().map(|r| r.unwrap()).count();
        assert_eq!(completion_rows, report.departed);

        // The summary's overall completion count agrees.
        let mut rdr3 = csv::Reader::from_path(dir.path().join("summary.csv")).unwrap();
        let rows: Vec<_> = rdr3.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][1], &report.departed.to_string());
    }
}
