//! The `EventWriter` trait implemented by log backends.

use crate::{EventRow, OutputResult, TickSummaryRow};

/// Sink for event rows and tick summaries.
///
/// Errors are stored by [`EventLogObserver`][crate::EventLogObserver] and
/// retrieved with [`take_error`][crate::EventLogObserver::take_error].
pub trait EventWriter {
    /// Write a batch of event rows, in order.
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush all underlying file handles.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
