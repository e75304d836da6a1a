//! Plain data row types written by output backends.

use oc_core::{SubjectId, Tick};
use oc_mobility::MoveEvent;

/// One move event, flattened.
///
/// Fields that do not apply to the event kind are `None`: tile moves carry
/// `move_to_*`, rotations carry `angle`, starts and continues carry
/// `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventRow {
    pub tick:      u64,
    /// Epoch seconds sampled for the tick.
    pub time_secs: f64,
    pub subject:   u32,
    pub kind:      &'static str,
    pub move_to_x: Option<i32>,
    pub move_to_y: Option<i32>,
    pub angle:     Option<f64>,
    pub duration:  Option<f64>,
}

impl EventRow {
    pub fn new(tick: Tick, time_secs: f64, subject: SubjectId, event: &MoveEvent) -> Self {
        let move_to = event.move_to();
        Self {
            tick:      tick.0,
            time_secs,
            subject:   subject.0,
            kind:      event.kind(),
            move_to_x: move_to.map(|t| t.x),
            move_to_y: move_to.map(|t| t.y),
            angle:     event.angle(),
            duration:  event.duration(),
        }
    }
}

/// Summary for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:            u64,
    pub time_secs:       f64,
    pub events:          u64,
    pub active_subjects: u64,
}
