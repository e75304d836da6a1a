//! Subject intentions — pending high-level orders.

use std::fmt;

use oc_core::{Gait, TileCoord};

/// Order to travel from `from` to the final tile `move_to`.
///
/// Immutable once issued.  The orchestrator compares the intention it is
/// serving against the one in the queue every tick; replacing it (even with
/// identical tiles but a different `start_time`) restarts planning.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveIntention {
    /// Tile the subject stood on when the order was given.
    pub from: TileCoord,

    /// Final destination tile.
    pub move_to: TileCoord,

    /// Epoch seconds at which the order was given.
    pub start_time: f64,

    /// Speed class for every leg of the path.
    pub gait: Gait,
}

impl MoveIntention {
    /// A walking move order.
    pub fn walk(from: TileCoord, move_to: TileCoord, start_time: f64) -> Self {
        Self { from, move_to, start_time, gait: Gait::Walk }
    }

    pub fn with_gait(mut self, gait: Gait) -> Self {
        self.gait = gait;
        self
    }
}

/// A pending order held in a subject's [`IntentionQueue`][crate::IntentionQueue].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Intention {
    /// Move along the shortest path to a tile.
    MoveTo(MoveIntention),
}

impl Intention {
    pub fn kind(&self) -> IntentionKind {
        match self {
            Intention::MoveTo(_) => IntentionKind::MoveTo,
        }
    }

    pub fn as_move(&self) -> Option<&MoveIntention> {
        match self {
            Intention::MoveTo(m) => Some(m),
        }
    }
}

impl From<MoveIntention> for Intention {
    fn from(m: MoveIntention) -> Self {
        Intention::MoveTo(m)
    }
}

/// Key of an intention in the queue.  A subject holds at most one intention
/// per kind.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum IntentionKind {
    MoveTo,
}

impl IntentionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            IntentionKind::MoveTo => "move-to",
        }
    }
}

impl fmt::Display for IntentionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
