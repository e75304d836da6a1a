//! Per-subject movement state.

use oc_behavior::MoveIntention;
use oc_core::TileCoord;

/// Sentinel for timer fields of an inactive rotation or tile move.
pub const IDLE: f64 = -1.0;

/// Where a timed operation stands at a sampled instant.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Progress {
    /// No operation is active.
    Idle,
    /// Active; `elapsed` seconds of `duration` have passed.
    Running { elapsed: f64, duration: f64 },
    /// Active and its duration has fully elapsed.
    Done,
}

impl Progress {
    fn of(start: f64, duration: f64, now: f64) -> Self {
        if start == IDLE {
            return Progress::Idle;
        }
        // A clock read before `start` counts as no time elapsed.
        let elapsed = (now - start).max(0.0);
        if elapsed < duration {
            Progress::Running { elapsed, duration }
        } else {
            Progress::Done
        }
    }
}

/// Movement state of one subject.
///
/// A subject is **idle**, **rotating** (turning to face its next tile), or
/// **moving** (crossing from `position` to `moving_to`), never rotating and
/// moving at once.  Timer pairs (`start_*`, `*_duration`) are both [`IDLE`]
/// or both set.
///
/// Movement is teleport-at-arrival: `position` stays on the departure tile
/// for the whole leg and jumps to `moving_to` when the leg finishes.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementState {
    /// Current tile.
    pub position: TileCoord,

    /// Facing in degrees, always in `[0, 360)`.
    pub direction: f64,

    /// Destination of the leg in progress; [`TileCoord::NONE`] when not moving.
    pub moving_to: TileCoord,

    /// Seconds the current leg takes; [`IDLE`] when not moving.
    pub move_duration: f64,

    /// Epoch seconds the current leg started; [`IDLE`] when not moving.
    pub start_move: f64,

    /// Target heading of the current (or last) rotation.  Unwrapped: may lie
    /// outside `[0, 360)` by less than half a turn.
    pub rotate_to: f64,

    /// Seconds of rotation remaining from `start_rotation`; [`IDLE`] when not
    /// rotating.
    pub rotate_duration: f64,

    /// Epoch seconds the rotation timer was last re-based; [`IDLE`] when not
    /// rotating.
    pub start_rotation: f64,

    /// Remaining path.  `path[0]` is the position at the start of the current
    /// leg; empty when no order is being served.
    pub path: Vec<TileCoord>,

    /// The move order the cached path serves.
    pub order: Option<MoveIntention>,
}

impl MovementState {
    /// An idle subject standing on `position`, facing `direction`.
    pub fn idle_at(position: TileCoord, direction: f64) -> Self {
        Self {
            position,
            direction:       oc_core::angle::normalize(direction),
            moving_to:       TileCoord::NONE,
            move_duration:   IDLE,
            start_move:      IDLE,
            rotate_to:       oc_core::angle::normalize(direction),
            rotate_duration: IDLE,
            start_rotation:  IDLE,
            path:            Vec::new(),
            order:           None,
        }
    }

    #[inline]
    pub fn is_rotating(&self) -> bool {
        self.start_rotation != IDLE
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.start_move != IDLE
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        !self.is_rotating() && !self.is_moving()
    }

    pub fn rotation_progress(&self, now: f64) -> Progress {
        Progress::of(self.start_rotation, self.rotate_duration, now)
    }

    pub fn move_progress(&self, now: f64) -> Progress {
        Progress::of(self.start_move, self.move_duration, now)
    }

    /// `true` while this state is working through `intention`.
    pub fn serves(&self, intention: &MoveIntention) -> bool {
        !self.is_idle() && self.order.as_ref() == Some(intention)
    }

    /// The tile after the current leg's start, if any.
    #[inline]
    pub fn next_tile(&self) -> Option<TileCoord> {
        self.path.get(1).copied()
    }

    /// The tile after `next_tile`, i.e. the destination of the following leg.
    #[inline]
    pub fn tile_after_next(&self) -> Option<TileCoord> {
        self.path.get(2).copied()
    }

    /// Clear both timers, the leg target, and the served order.  Position and
    /// facing are kept.
    pub fn reset(&mut self) {
        self.moving_to       = TileCoord::NONE;
        self.move_duration   = IDLE;
        self.start_move      = IDLE;
        self.rotate_duration = IDLE;
        self.start_rotation  = IDLE;
        self.path.clear();
        self.order = None;
    }

    /// Structural invariants: exclusive activity, paired sentinels, wrapped
    /// facing.
    pub fn is_consistent(&self) -> bool {
        let move_pair   = (self.start_move == IDLE) == (self.move_duration == IDLE);
        let rotate_pair = (self.start_rotation == IDLE) == (self.rotate_duration == IDLE);
        let target      = self.is_moving() != self.moving_to.is_none();
        move_pair
            && rotate_pair
            && target
            && !(self.is_rotating() && self.is_moving())
            && (0.0..360.0).contains(&self.direction)
    }
}
