//! The `TraceWriter` trait implemented by backend writers.

use crate::{EventRow, SnapshotRow, TraceResult};

/// Trait implemented by trace backends (currently CSV).
///
/// Errors are surfaced to the caller through
/// [`SessionTraceObserver::take_error`][crate::SessionTraceObserver::take_error] —
/// observer hooks themselves have no return value.
pub trait TraceWriter {
    /// Write one state snapshot row.
    fn write_snapshot(&mut self, row: &SnapshotRow) -> TraceResult<()>;

    /// Write one event row.
    fn write_event(&mut self, row: &EventRow) -> TraceResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> TraceResult<()>;
}
