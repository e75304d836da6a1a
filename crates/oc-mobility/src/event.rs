//! Move events — facts emitted by the orchestrator for the dispatch layer.

use oc_core::TileCoord;

/// What happened to a subject's movement during one tick.
///
/// Events are plain records: the state change they describe has already been
/// applied to the subject's [`MovementState`][crate::MovementState] by the time
/// they are returned.  Angles are degrees, durations seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveEvent {
    /// A rotation of `rotate_relative` degrees begins and takes `duration`.
    StartRotation { rotate_relative: f64, duration: f64 },

    /// A rotation is under way; `rotate_relative` degrees and `duration`
    /// seconds remain.
    ContinueRotation { rotate_relative: f64, duration: f64 },

    /// A rotation ended facing `rotate_absolute`.
    FinishRotation { rotate_absolute: f64 },

    /// A leg towards `move_to` begins and takes `duration`.
    StartTileMove { move_to: TileCoord, duration: f64 },

    /// A leg towards `move_to` is under way; `duration` seconds remain.
    ContinueTileMove { move_to: TileCoord, duration: f64 },

    /// The subject arrived on `move_to`.
    FinishTileMove { move_to: TileCoord },
}

impl MoveEvent {
    /// Stable label used by logs and output writers.
    pub fn kind(&self) -> &'static str {
        match self {
            MoveEvent::StartRotation { .. }    => "start_rotation",
            MoveEvent::ContinueRotation { .. } => "continue_rotation",
            MoveEvent::FinishRotation { .. }   => "finish_rotation",
            MoveEvent::StartTileMove { .. }    => "start_tile_move",
            MoveEvent::ContinueTileMove { .. } => "continue_tile_move",
            MoveEvent::FinishTileMove { .. }   => "finish_tile_move",
        }
    }

    /// Target tile of tile-move events.
    pub fn move_to(&self) -> Option<TileCoord> {
        match *self {
            MoveEvent::StartTileMove { move_to, .. }
            | MoveEvent::ContinueTileMove { move_to, .. }
            | MoveEvent::FinishTileMove { move_to } => Some(move_to),
            _ => None,
        }
    }

    /// Relative angle of start/continue rotations, absolute angle of finish.
    pub fn angle(&self) -> Option<f64> {
        match *self {
            MoveEvent::StartRotation { rotate_relative, .. }
            | MoveEvent::ContinueRotation { rotate_relative, .. } => Some(rotate_relative),
            MoveEvent::FinishRotation { rotate_absolute } => Some(rotate_absolute),
            _ => None,
        }
    }

    /// Total (start) or remaining (continue) duration.
    pub fn duration(&self) -> Option<f64> {
        match *self {
            MoveEvent::StartRotation { duration, .. }
            | MoveEvent::ContinueRotation { duration, .. }
            | MoveEvent::StartTileMove { duration, .. }
            | MoveEvent::ContinueTileMove { duration, .. } => Some(duration),
            _ => None,
        }
    }

    pub fn is_finish(&self) -> bool {
        matches!(self, MoveEvent::FinishRotation { .. } | MoveEvent::FinishTileMove { .. })
    }

    pub fn is_start(&self) -> bool {
        matches!(self, MoveEvent::StartRotation { .. } | MoveEvent::StartTileMove { .. })
    }
}
