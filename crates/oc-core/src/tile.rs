//! Tile coordinates on the battlefield grid.

use std::fmt;

use crate::angle;

/// Integer `(x, y)` coordinate of a battlefield tile.
///
/// `+y` points "north": a bearing of 0° looks along `+y` and bearings grow
/// clockwise, so `(0, 0) → (1, 1)` is 45° and `(0, 0) → (1, 0)` is 90°.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct TileCoord {
    pub x: i32,
    pub y: i32,
}

impl TileCoord {
    /// Sentinel meaning "not moving anywhere".
    pub const NONE: TileCoord = TileCoord { x: -1, y: -1 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Absolute bearing from `self` towards `other`, in `[0, 360)` degrees.
    ///
    /// Returns `None` when both coordinates are the same tile.
    pub fn bearing_to(self, other: TileCoord) -> Option<f64> {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        Some(angle::normalize(dx.atan2(dy).to_degrees()))
    }

    /// `true` if `other` is one of the 8 tiles surrounding `self`.
    #[inline]
    pub fn is_adjacent(self, other: TileCoord) -> bool {
        self != other && (self.x - other.x).abs() <= 1 && (self.y - other.y).abs() <= 1
    }

    /// Euclidean distance in tiles.
    pub fn distance(self, other: TileCoord) -> f64 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        dx.hypot(dy)
    }
}

impl Default for TileCoord {
    fn default() -> Self {
        Self::NONE
    }
}

impl From<(i32, i32)> for TileCoord {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
