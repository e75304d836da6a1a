//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `events.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::EventWriter;
use crate::{EventRow, OutputResult, TickSummaryRow};

pub const EVENTS_FILE: &str = "events.csv";
pub const SUMMARIES_FILE: &str = "tick_summaries.csv";

/// Writes the event log to two CSV files.
pub struct CsvEventWriter {
    events:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvEventWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut events = Writer::from_path(dir.join(EVENTS_FILE))?;
        events.write_record([
            "tick", "time_secs", "subject", "kind", "move_to_x", "move_to_y", "angle", "duration",
        ])?;

        let mut summaries = Writer::from_path(dir.join(SUMMARIES_FILE))?;
        summaries.write_record(["tick", "time_secs", "events", "active_subjects"])?;

        Ok(Self { events, summaries, finished: false })
    }
}

/// Empty cell for fields the event kind does not carry.
fn cell<T: ToString>(v: Option<T>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

impl EventWriter for CsvEventWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.tick.to_string(),
                row.time_secs.to_string(),
                row.subject.to_string(),
                row.kind.to_owned(),
                cell(row.move_to_x),
                cell(row.move_to_y),
                cell(row.angle),
                cell(row.duration),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.time_secs.to_string(),
            row.events.to_string(),
            row.active_subjects.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
