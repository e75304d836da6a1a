//! Translation sub-state-machine: Idle → Moving → Idle, once per leg.
//!
//! A leg moves the subject from `position` to an adjacent tile.  The position
//! only changes when the leg finishes; the timer is never re-based.

use oc_core::TileCoord;

use crate::MoveEvent;
use crate::state::{IDLE, MovementState};

/// Enter the moving state towards `to`.
pub fn start(state: &mut MovementState, to: TileCoord, duration: f64, now: f64) -> MoveEvent {
    debug_assert!(!state.is_rotating(), "tile move started during a rotation");
    state.moving_to     = to;
    state.move_duration = duration;
    state.start_move    = now;
    MoveEvent::StartTileMove { move_to: to, duration }
}

/// Report the time left on the current leg.
pub fn advance(state: &MovementState, now: f64) -> MoveEvent {
    let elapsed = (now - state.start_move).max(0.0);
    MoveEvent::ContinueTileMove {
        move_to:  state.moving_to,
        duration: state.move_duration - elapsed,
    }
}

/// Arrive on `moving_to`, consume the leg from the cached path, and return
/// to idle.
pub fn finish(state: &mut MovementState) -> MoveEvent {
    let arrived = state.moving_to;
    state.position      = arrived;
    state.moving_to     = TileCoord::NONE;
    state.move_duration = IDLE;
    state.start_move    = IDLE;
    if !state.path.is_empty() {
        state.path.remove(0);
    }
    debug_assert!(state.path.first().is_none_or(|&t| t == arrived));
    MoveEvent::FinishTileMove { move_to: arrived }
}
