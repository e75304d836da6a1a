//! Spatial-subsystem error type.

use thiserror::Error;

use oc_core::TileCoord;

/// Errors produced by `oc-spatial`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpatialError {
    #[error("no path from {from} to {to}")]
    NoPath { from: TileCoord, to: TileCoord },

    #[error("tile {0} is not part of the graph")]
    TileNotFound(TileCoord),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
