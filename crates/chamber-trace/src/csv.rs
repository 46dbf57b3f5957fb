//! CSV trace backend.
//!
//! Creates two files in the configured output directory:
//! - `snapshots.csv`
//! - `events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{EventRow, SnapshotRow, TraceResult};

/// Writes the session trace to two CSV files.
pub struct CsvTraceWriter {
    snapshots: Writer<File>,
    events:    Writer<File>,
    finished:  bool,
}

impl CsvTraceWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> TraceResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("snapshots.csv"))?;
        snapshots.write_record([
            "time_ms",
            "frequency",
            "dust_count",
            "dust_level",
            "overloaded",
            "crack_count",
            "moss_growth",
            "patience_secs",
        ])?;

        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(["time_ms", "event"])?;

        Ok(Self {
            snapshots,
            events,
            finished: false,
        })
    }
}

impl TraceWriter for CsvTraceWriter {
    fn write_snapshot(&mut self, row: &SnapshotRow) -> TraceResult<()> {
        self.snapshots.write_record(&[
            row.time_ms.to_string(),
            row.frequency.to_string(),
            row.dust_count.to_string(),
            row.dust_level.to_string(),
            (row.overloaded as u8).to_string(),
            row.crack_count.to_string(),
            row.moss_growth.to_string(),
            row.patience_secs.to_string(),
        ])?;
        Ok(())
    }

    fn write_event(&mut self, row: &EventRow) -> TraceResult<()> {
        self.events
            .write_record(&[row.time_ms.to_string(), row.event.clone()])?;
        Ok(())
    }

    fn finish(&mut self) -> TraceResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
