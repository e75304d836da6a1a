//! Rotation sub-state-machine: Idle → Rotating → Idle.
//!
//! A rotation turns the subject to face the next tile of its path.  Its
//! duration is proportional to the angle turned.  While it runs, every tick
//! interpolates `direction` linearly towards `rotate_to` and re-bases the
//! timer (`start_rotation = now`, `rotate_duration = remaining`), so the
//! stored state always describes the rotation still ahead.

use oc_core::TileCoord;
use oc_core::angle::{is_facing, normalize, shortest_turn};

use crate::MoveEvent;
use crate::state::{IDLE, MovementState};

/// A turn needed before a leg can start.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Turn {
    /// Signed shortest turn in `(-180, 180]` degrees.
    pub relative: f64,
    /// Target heading, `direction + relative`, not wrapped.
    pub absolute: f64,
}

/// The turn a subject facing `direction` needs before stepping from `from`
/// to `to`, or `None` if it already faces that way (or the leg is empty).
pub fn turn_towards(direction: f64, from: TileCoord, to: TileCoord) -> Option<Turn> {
    let bearing = from.bearing_to(to)?;
    if is_facing(direction, bearing) {
        return None;
    }
    let relative = shortest_turn(direction, bearing);
    Some(Turn { relative, absolute: direction + relative })
}

/// Degrees still to turn, signed.
#[inline]
pub fn remaining_turn(state: &MovementState) -> f64 {
    shortest_turn(state.direction, state.rotate_to)
}

/// Enter the rotating state.
pub fn start(state: &mut MovementState, turn: Turn, duration: f64, now: f64) -> MoveEvent {
    debug_assert!(!state.is_moving(), "rotation started during a tile move");
    state.rotate_to       = turn.absolute;
    state.rotate_duration = duration;
    state.start_rotation  = now;
    MoveEvent::StartRotation { rotate_relative: turn.relative, duration }
}

/// Interpolate `direction` up to `now` and re-base the timer.
///
/// Must only be called while the rotation is still running.
pub fn advance(state: &mut MovementState, now: f64) -> MoveEvent {
    let elapsed  = (now - state.start_rotation).max(0.0);
    let duration = state.rotate_duration;
    let fraction = if duration > 0.0 { (elapsed / duration).min(1.0) } else { 1.0 };

    let delta  = remaining_turn(state);
    let turned = delta * fraction;
    let remaining = duration - elapsed;

    state.direction       = normalize(state.direction + turned);
    state.start_rotation  = now;
    state.rotate_duration = remaining;

    MoveEvent::ContinueRotation { rotate_relative: delta - turned, duration: remaining }
}

/// Snap to the target heading and return to idle.
pub fn finish(state: &mut MovementState) -> MoveEvent {
    state.direction       = normalize(state.rotate_to);
    state.rotate_duration = IDLE;
    state.start_rotation  = IDLE;
    MoveEvent::FinishRotation { rotate_absolute: state.rotate_to }
}
