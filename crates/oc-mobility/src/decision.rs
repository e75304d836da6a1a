//! The per-tick decision record.

use oc_core::TileCoord;
use oc_spatial::Path;

/// What the orchestrator decided for one subject at one sampled instant.
///
/// Produced by [`MoveWithRotation::run`][crate::MoveWithRotation::run]
/// without touching any state, then handed to
/// [`MoveWithRotation::action`][crate::MoveWithRotation::action] in the same
/// tick.  Each variant maps to a fixed, ordered event list; completions always
/// come before starts.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveDecision {
    /// Idle with a fresh path whose first leg needs a turn.
    /// Events: `[StartRotation]`.
    StartRotation {
        path:            Path,
        rotate_relative: f64,
        rotate_absolute: f64,
    },

    /// Idle with a fresh path, already facing the first leg.
    /// Events: `[StartTileMove]`.
    StartTileMove {
        path:         Path,
        tile_move_to: TileCoord,
    },

    /// Rotation still running.  `rotate_relative` is the turn left before
    /// this tick's interpolation.  Events: `[ContinueRotation]`.
    ContinueRotation {
        rotate_relative: f64,
        rotate_absolute: f64,
    },

    /// Rotation complete; the leg it unblocks starts now.
    /// Events: `[FinishRotation, StartTileMove]`.
    FinishRotation {
        tile_move_to:       TileCoord,
        rotate_to_finished: f64,
    },

    /// Leg still running.  Events: `[ContinueTileMove]`.
    ContinueTileMove {
        tile_move_to: TileCoord,
    },

    /// Leg complete and the next leg needs a turn.
    /// Events: `[FinishTileMove, StartRotation]`.
    FinishTileMoveThenRotate {
        tile_move_to_finished: TileCoord,
        rotate_relative:       f64,
        rotate_absolute:       f64,
    },

    /// Leg complete and the next leg continues straight on.
    /// Events: `[FinishTileMove, StartTileMove]`.
    FinishTileMoveThenMove {
        tile_move_to_finished: TileCoord,
        tile_move_to:          TileCoord,
    },

    /// Final leg complete; the order is fulfilled.  Events: `[FinishTileMove]`.
    MoveFinished {
        move_to_finished: TileCoord,
    },

    /// The order's destination is the current tile.  No events.
    AlreadyArrived {
        at: TileCoord,
    },
}

impl MoveDecision {
    /// `true` when the move order is complete after this decision is applied
    /// and its intention should be retired.
    pub fn completes_order(&self) -> bool {
        matches!(self, MoveDecision::MoveFinished { .. } | MoveDecision::AlreadyArrived { .. })
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            MoveDecision::StartRotation { .. }            => "start_rotation",
            MoveDecision::StartTileMove { .. }            => "start_tile_move",
            MoveDecision::ContinueRotation { .. }         => "continue_rotation",
            MoveDecision::FinishRotation { .. }           => "finish_rotation",
            MoveDecision::ContinueTileMove { .. }         => "continue_tile_move",
            MoveDecision::FinishTileMoveThenRotate { .. } => "finish_tile_move_then_rotate",
            MoveDecision::FinishTileMoveThenMove { .. }   => "finish_tile_move_then_move",
            MoveDecision::MoveFinished { .. }             => "move_finished",
            MoveDecision::AlreadyArrived { .. }           => "already_arrived",
        }
    }
}
