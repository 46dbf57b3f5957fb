//! `SessionTraceObserver<W>` — bridges `ChamberObserver` to a `TraceWriter`.

use chamber_core::Millis;
use chamber_session::ChamberObserver;
use chamber_state::{ChamberEvent, ChamberState};

use crate::row::{EventRow, SnapshotRow};
use crate::writer::TraceWriter;
use crate::{TraceError, TraceResult};

/// A [`ChamberObserver`] that records the session through any
/// [`TraceWriter`] backend.
///
/// Errors from the writer are stored internally because observer hooks have
/// no return value.  After the session ends, check for errors with
/// [`take_error`][Self::take_error].
pub struct SessionTraceObserver<W: TraceWriter> {
    writer:     W,
    /// Needed to derive level and patience in rows; taken from snapshots.
    max_dust:   usize,
    last_error: Option<TraceError>,
}

impl<W: TraceWriter> SessionTraceObserver<W> {
    /// Create an observer backed by `writer`.
    ///
    /// `max_dust` must match the session's configured dust capacity so the
    /// derived level column agrees with the store's.
    pub fn new(writer: W, max_dust: usize) -> Self {
        Self {
            writer,
            max_dust,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the session ends.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<TraceError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the session).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn snapshot_row(&self, now: Millis, state: &ChamberState) -> SnapshotRow {
        let moss_growth = if state.moss.is_empty() {
            0.0
        } else {
            state.moss.iter().map(|m| m.growth).sum::<f32>() / state.moss.len() as f32
        };
        SnapshotRow {
            time_ms:       now.0,
            frequency:     state.frequency,
            dust_count:    state.dust.len(),
            dust_level:    state.dust_level(self.max_dust),
            overloaded:    state.overloaded,
            crack_count:   state.cracks.len(),
            moss_growth,
            patience_secs: state.patience_secs(now),
        }
    }

    fn store_err(&mut self, result: TraceResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter> ChamberObserver for SessionTraceObserver<W> {
    fn on_event(&mut self, now: Millis, event: &ChamberEvent) {
        let row = EventRow {
            time_ms: now.0,
            event:   event.to_string(),
        };
        let result = self.writer.write_event(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, now: Millis, state: &ChamberState) {
        let row = self.snapshot_row(now, state);
        let result = self.writer.write_snapshot(&row);
        self.store_err(result);
    }

    fn on_session_end(&mut self, now: Millis, state: &ChamberState) {
        // A final snapshot row so the trace always ends with the closing
        // state, then flush.
        let row = self.snapshot_row(now, state);
        let result = self.writer.write_snapshot(&row);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
