//! `oc-output` — move-event log writers for the opencombat movement engine.
//!
//! | Backend | Files created                          |
//! |---------|----------------------------------------|
//! | CSV     | `events.csv`, `tick_summaries.csv`     |
//!
//! Backends implement [`EventWriter`] and are driven by
//! [`EventLogObserver`], which implements `oc_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use oc_output::{CsvEventWriter, EventLogObserver};
//!
//! let writer = CsvEventWriter::new(Path::new("./output"))?;
//! let mut obs = EventLogObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvEventWriter;
pub use error::{OutputError, OutputResult};
pub use observer::EventLogObserver;
pub use row::{EventRow, TickSummaryRow};
pub use writer::EventWriter;
