//! Simulation observer trait for event collection and progress reporting.

use oc_core::{SubjectId, Tick, TileCoord};
use oc_mobility::{MobilityError, MoveEvent};

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] as the tick unfolds.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: arrival printer
///
/// ```rust,ignore
/// struct Arrivals;
///
/// impl SimObserver for Arrivals {
///     fn on_move_finished(&mut self, tick: Tick, subject: SubjectId, at: TileCoord) {
///         println!("{tick}: {subject} arrived on {at}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick with the sampled `now`.
    fn on_tick_start(&mut self, _tick: Tick, _now: f64) {}

    /// Called for every move event, in emission order.
    fn on_event(&mut self, _tick: Tick, _now: f64, _subject: SubjectId, _event: &MoveEvent) {}

    /// A move order could not be routed this tick.  The subject stays idle and
    /// the order stays pending.
    fn on_move_blocked(&mut self, _tick: Tick, _subject: SubjectId, _error: &MobilityError) {}

    /// An active subject lost its move order and stopped.
    fn on_move_cancelled(&mut self, _tick: Tick, _subject: SubjectId) {}

    /// A move order completed and was retired.
    fn on_move_finished(&mut self, _tick: Tick, _subject: SubjectId, _at: TileCoord) {}

    /// Called at the end of each tick.  `active` is the number of subjects
    /// still rotating or moving.
    fn on_tick_end(&mut self, _tick: Tick, _active: usize) {}

    /// Called once when a run loop returns.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
