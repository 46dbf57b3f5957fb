//! `chamber-trace` — session trace output for the entropy chamber.
//!
//! A [`SessionTraceObserver`] plugs into `chamber_session::Session` and
//! records the session as two streams through any [`TraceWriter`] backend:
//!
//! | Stream    | One row per…                 | File (CSV backend) |
//! |-----------|------------------------------|--------------------|
//! | snapshots | snapshot-cadence state dump  | `snapshots.csv`    |
//! | events    | discrete chamber event       | `events.csv`       |
//!
//! # Usage
//!
//! ```rust,ignore
//! use chamber_trace::{CsvTraceWriter, SessionTraceObserver};
//!
//! let writer = CsvTraceWriter::new(Path::new("./trace"))?;
//! let mut obs = SessionTraceObserver::new(writer, config.max_dust);
//! session.step(60_000, &mut obs);
//! session.finish(&mut obs);
//! obs.take_error().map(|e| eprintln!("trace error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvTraceWriter;
pub use error::{TraceError, TraceResult};
pub use observer::SessionTraceObserver;
pub use row::{EventRow, SnapshotRow};
pub use writer::TraceWriter;
