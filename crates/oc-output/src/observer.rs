//! `EventLogObserver<W>` — bridges `SimObserver` to an `EventWriter`.

use oc_core::{SubjectId, Tick};
use oc_mobility::MoveEvent;
use oc_sim::SimObserver;
use tracing::error;

use crate::writer::EventWriter;
use crate::{EventRow, OutputError, OutputResult, TickSummaryRow};

/// A [`SimObserver`] that logs every move event and a per-tick summary to
/// any [`EventWriter`].
///
/// Rows are buffered for the tick and written in one batch when it ends.
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value; check with [`take_error`][Self::take_error].
pub struct EventLogObserver<W: EventWriter> {
    writer:     W,
    now:        f64,
    pending:    Vec<EventRow>,
    last_error: Option<OutputError>,
}

impl<W: EventWriter> EventLogObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            now:        0.0,
            pending:    Vec::new(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                error!(error = %e, "event log write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: EventWriter> SimObserver for EventLogObserver<W> {
    fn on_tick_start(&mut self, _tick: Tick, now: f64) {
        self.now = now;
    }

    fn on_event(&mut self, tick: Tick, now: f64, subject: SubjectId, event: &MoveEvent) {
        self.pending.push(EventRow::new(tick, now, subject, event));
    }

    fn on_tick_end(&mut self, tick: Tick, active: usize) {
        let row = TickSummaryRow {
            tick:            tick.0,
            time_secs:       self.now,
            events:          self.pending.len() as u64,
            active_subjects: active as u64,
        };
        let rows = std::mem::take(&mut self.pending);
        if !rows.is_empty() {
            let result = self.writer.write_events(&rows);
            self.store_err(result);
        }
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
