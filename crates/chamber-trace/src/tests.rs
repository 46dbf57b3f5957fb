//! Integration tests for chamber-trace.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvTraceWriter;
    use crate::row::{EventRow, SnapshotRow};
    use crate::writer::TraceWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(time_ms: u64, dust_count: usize) -> SnapshotRow {
        SnapshotRow {
            time_ms,
            frequency:     0.5,
            dust_count,
            dust_level:    dust_count as f32 / 500.0,
            overloaded:    false,
            crack_count:   0,
            moss_growth:   0.0,
            patience_secs: 0,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvTraceWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("snapshots.csv").exists());
        assert!(dir.path().join("events.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            [
                "time_ms",
                "frequency",
                "dust_count",
                "dust_level",
                "overloaded",
                "crack_count",
                "moss_growth",
                "patience_secs"
            ]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("events.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["time_ms", "event"]);
    }

    #[test]
    fn csv_snapshot_round_trip() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.write_snapshot(&snap_row(1_000, 12)).unwrap();
        w.write_snapshot(&snap_row(2_000, 15)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "1000"); // time_ms
        assert_eq!(&rows[0][2], "12");   // dust_count
        assert_eq!(&rows[1][2], "15");
    }

    #[test]
    fn csv_event_round_trip() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.write_event(&EventRow {
            time_ms: 4_200,
            event:   "cracks-spawned(4)".into(),
        })
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("events.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "4200");
        assert_eq!(&rows[0][1], "cracks-spawned(4)");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use tempfile::TempDir;

    use chamber_core::{ChamberConfig, Millis};
    use chamber_session::{ChamberInput, SessionBuilder};

    use crate::csv::CsvTraceWriter;
    use crate::observer::SessionTraceObserver;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn full_session_trace() {
        let dir = tmp();
        let config = ChamberConfig::default();
        let max_dust = config.max_dust;
        let mut session = SessionBuilder::new(config).build().unwrap();
        let writer = CsvTraceWriter::new(dir.path()).unwrap();
        let mut obs = SessionTraceObserver::new(writer, max_dust);

        // Idle long enough to gather dust, overload once, then close.
        session.step(5_000, &mut obs);
        session.apply(ChamberInput::SetFrequency(0.99), &mut obs);
        session.step(1_000, &mut obs);
        session.finish(&mut obs);
        assert!(obs.take_error().is_none());

        // Snapshots: one per second for 6 s of stepping, plus the closing
        // row from on_session_end.
        let mut rdr = csv::Reader::from_path(dir.path().join("snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 7);
        let last = rows.last().unwrap();
        assert_eq!(&last[0], "6000"); // time_ms of the closing state
        assert_eq!(&last[4], "1");    // overloaded

        // Events: at least the dust spawns and the crack batch.
        let mut rdr = csv::Reader::from_path(dir.path().join("events.csv")).unwrap();
        let events: Vec<String> = rdr.records().map(|r| r.unwrap()[1].to_owned()).collect();
        assert!(events.iter().any(|e| e.starts_with("dust-spawned")));
        assert!(events.iter().any(|e| e.starts_with("cracks-spawned")));
    }
}
