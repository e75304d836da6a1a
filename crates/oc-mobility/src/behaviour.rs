//! The move/rotation orchestrator.
//!
//! Each tick, for one subject, [`MoveWithRotation::run`] combines the cached
//! path, the rotation timer, and the tile-move timer into one
//! [`MoveDecision`]; [`MoveWithRotation::action`] then applies that decision
//! to the subject's [`MovementState`] and returns the resulting events.
//!
//! Precedence, evaluated against a single sampled `now`:
//!
//! 1. idle (or serving a different order): resolve a path; rotate first if the
//!    first leg needs a turn, otherwise start the leg;
//! 2. rotating, not done: continue the rotation;
//! 3. rotating, done: finish the rotation **and** start the leg it unblocks;
//! 4. moving, not done: continue the leg;
//! 5. moving, done: finish the leg, then either the order is complete, or the
//!    next leg's rotation (or the leg itself) starts in the same tick.

use oc_behavior::MoveIntention;
use oc_core::Clock;
use oc_spatial::{PathResolver, TileGraph};
use tracing::trace;

use crate::rotation::{self, Turn};
use crate::state::Progress;
use crate::translation;
use crate::{MobilityError, MobilityResult, MoveDecision, MoveEvent, MoveProfile, MovementState};

// ── MoveContext ───────────────────────────────────────────────────────────────

/// Read-only inputs shared by every subject evaluated in one tick.
///
/// `now` is sampled once when the context is built and never re-read during
/// the tick.
#[derive(Copy, Clone)]
pub struct MoveContext<'a> {
    /// Epoch seconds sampled at tick start.
    pub now: f64,

    /// Battlefield graph used to resolve new paths.
    pub graph: &'a TileGraph,
}

impl<'a> MoveContext<'a> {
    #[inline]
    pub fn new(now: f64, graph: &'a TileGraph) -> Self {
        Self { now, graph }
    }

    /// Sample `clock` once and build the context.
    #[inline]
    pub fn sample<C: Clock + ?Sized>(clock: &C, graph: &'a TileGraph) -> Self {
        Self::new(clock.now(), graph)
    }
}

// ── MoveWithRotation ──────────────────────────────────────────────────────────

/// Orchestrates rotation and tile moves for subjects following a
/// [`MoveIntention`].
///
/// Holds no per-subject state: everything lives in the subject's
/// [`MovementState`], so one orchestrator serves every subject and `run` can
/// be evaluated for many subjects in parallel.
pub struct MoveWithRotation<R: PathResolver> {
    /// The path-finding algorithm.
    pub resolver: R,
}

impl<R: PathResolver> MoveWithRotation<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Decide what `state` should do at `ctx.now` to follow `intention`.
    ///
    /// Pure: calling it twice with the same inputs yields the same decision.
    ///
    /// # Errors
    ///
    /// [`MobilityError::Routing`] if a new path is needed and the destination
    /// is unreachable; the caller should leave the subject idle.
    pub fn run(
        &self,
        state:     &MovementState,
        intention: &MoveIntention,
        ctx:       &MoveContext<'_>,
    ) -> MobilityResult<MoveDecision> {
        if !state.serves(intention) {
            return self.plan(state, intention, ctx);
        }

        if state.is_rotating() {
            return match state.rotation_progress(ctx.now) {
                Progress::Done => Ok(MoveDecision::FinishRotation {
                    tile_move_to:       next_tile(state)?,
                    rotate_to_finished: state.rotate_to,
                }),
                _ => Ok(MoveDecision::ContinueRotation {
                    rotate_relative: rotation::remaining_turn(state),
                    rotate_absolute: state.rotate_to,
                }),
            };
        }

        match state.move_progress(ctx.now) {
            Progress::Done => Ok(after_leg(state)),
            _ => Ok(MoveDecision::ContinueTileMove { tile_move_to: state.moving_to }),
        }
    }

    /// Apply `decision` to `state` and return the events it produced, in
    /// order.
    ///
    /// `intention` must be the one `decision` was computed for; its gait
    /// selects leg durations and it is recorded as the order being served.
    ///
    /// # Errors
    ///
    /// [`MobilityError::InvalidDuration`] if `profile` yields a non-finite or
    /// non-positive duration.  Durations are computed before anything is
    /// mutated, so `state` is unchanged on error.
    pub fn action(
        &self,
        state:     &mut MovementState,
        profile:   &MoveProfile,
        intention: &MoveIntention,
        decision:  MoveDecision,
        ctx:       &MoveContext<'_>,
    ) -> MobilityResult<Vec<MoveEvent>> {
        let now = ctx.now;
        trace!(decision = decision.label(), now, "applying move decision");

        let events = match decision {
            MoveDecision::StartRotation { path, rotate_relative, rotate_absolute } => {
                let duration = profile.rotate_duration(rotate_relative)?;
                begin_order(state, intention, path.into_tiles());
                let turn = Turn { relative: rotate_relative, absolute: rotate_absolute };
                vec![rotation::start(state, turn, duration, now)]
            }

            MoveDecision::StartTileMove { path, tile_move_to } => {
                let duration = profile.tile_duration(intention.gait)?;
                begin_order(state, intention, path.into_tiles());
                vec![translation::start(state, tile_move_to, duration, now)]
            }

            MoveDecision::ContinueRotation { .. } => {
                vec![rotation::advance(state, now)]
            }

            MoveDecision::FinishRotation { tile_move_to, .. } => {
                let duration = profile.tile_duration(intention.gait)?;
                let finished = rotation::finish(state);
                let started  = translation::start(state, tile_move_to, duration, now);
                vec![finished, started]
            }

            MoveDecision::ContinueTileMove { .. } => {
                vec![translation::advance(state, now)]
            }

            MoveDecision::FinishTileMoveThenRotate { rotate_relative, rotate_absolute, .. } => {
                let duration = profile.rotate_duration(rotate_relative)?;
                let finished = translation::finish(state);
                let turn = Turn { relative: rotate_relative, absolute: rotate_absolute };
                let started  = rotation::start(state, turn, duration, now);
                vec![finished, started]
            }

            MoveDecision::FinishTileMoveThenMove { tile_move_to, .. } => {
                let duration = profile.tile_duration(intention.gait)?;
                let finished = translation::finish(state);
                let started  = translation::start(state, tile_move_to, duration, now);
                vec![finished, started]
            }

            MoveDecision::MoveFinished { .. } => {
                let finished = translation::finish(state);
                state.reset();
                vec![finished]
            }

            MoveDecision::AlreadyArrived { .. } => {
                state.reset();
                vec![]
            }
        };

        debug_assert!(state.is_consistent(), "inconsistent movement state: {state:?}");
        debug_assert!(events.len() <= 2);
        debug_assert!(
            !events.windows(2).any(|w| w[0].is_start() && w[1].is_finish()),
            "start emitted before finish: {events:?}",
        );
        Ok(events)
    }

    /// Check that `profile` yields the durations `decision` needs, without
    /// touching any state.
    ///
    /// `action` succeeds for a decision that passes this check, so a caller
    /// applying many subjects can reject a bad tick before mutating any of
    /// them.
    ///
    /// # Errors
    ///
    /// The [`MobilityError::InvalidDuration`] that `action` would return.
    pub fn validate(
        &self,
        profile:   &MoveProfile,
        intention: &MoveIntention,
        decision:  &MoveDecision,
    ) -> MobilityResult<()> {
        match decision {
            MoveDecision::StartRotation { rotate_relative, .. }
            | MoveDecision::FinishTileMoveThenRotate { rotate_relative, .. } => {
                profile.rotate_duration(*rotate_relative).map(drop)
            }
            MoveDecision::StartTileMove { .. }
            | MoveDecision::FinishRotation { .. }
            | MoveDecision::FinishTileMoveThenMove { .. } => {
                profile.tile_duration(intention.gait).map(drop)
            }
            MoveDecision::ContinueRotation { .. }
            | MoveDecision::ContinueTileMove { .. }
            | MoveDecision::MoveFinished { .. }
            | MoveDecision::AlreadyArrived { .. } => Ok(()),
        }
    }

    /// Drop whatever `state` was doing: the order it served is gone.
    ///
    /// Facing and position stay where the last tick left them; no event is
    /// produced and nothing resumes on later ticks.
    pub fn cancel(&self, state: &mut MovementState) {
        trace!(position = %state.position, "cancelling movement");
        state.reset();
    }

    /// Plan from an idle state: resolve a fresh path from the current tile.
    fn plan(
        &self,
        state:     &MovementState,
        intention: &MoveIntention,
        ctx:       &MoveContext<'_>,
    ) -> MobilityResult<MoveDecision> {
        let path = self.resolver.resolve(ctx.graph, state.position, intention.move_to)?;
        let Some(next) = path.next_tile() else {
            return Ok(MoveDecision::AlreadyArrived { at: state.position });
        };
        Ok(match rotation::turn_towards(state.direction, state.position, next) {
            Some(turn) => MoveDecision::StartRotation {
                path,
                rotate_relative: turn.relative,
                rotate_absolute: turn.absolute,
            },
            None => MoveDecision::StartTileMove { path, tile_move_to: next },
        })
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn next_tile(state: &MovementState) -> MobilityResult<oc_core::TileCoord> {
    state.next_tile().ok_or(MobilityError::NoNextTile { at: state.position })
}

/// Decision for a leg that has just completed.
fn after_leg(state: &MovementState) -> MoveDecision {
    let arrived = state.moving_to;
    let Some(next) = state.tile_after_next() else {
        return MoveDecision::MoveFinished { move_to_finished: arrived };
    };
    match rotation::turn_towards(state.direction, arrived, next) {
        Some(turn) => MoveDecision::FinishTileMoveThenRotate {
            tile_move_to_finished: arrived,
            rotate_relative:       turn.relative,
            rotate_absolute:       turn.absolute,
        },
        None => MoveDecision::FinishTileMoveThenMove {
            tile_move_to_finished: arrived,
            tile_move_to:          next,
        },
    }
}

/// Forget any previous order and start serving `intention` along `path`.
fn begin_order(state: &mut MovementState, intention: &MoveIntention, path: Vec<oc_core::TileCoord>) {
    state.reset();
    state.path  = path;
    state.order = Some(intention.clone());
}
