use oc_core::TileCoord;
use oc_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MobilityError {
    #[error("routing failed: {0}")]
    Routing(#[from] SpatialError),

    #[error("{what} duration {value} is not a finite positive number of seconds")]
    InvalidDuration { what: &'static str, value: f64 },

    #[error("path cached at {at} has no next tile")]
    NoNextTile { at: TileCoord },
}

impl MobilityError {
    /// `true` for errors that stem from configuration or corrupted state
    /// rather than from the battlefield (an unreachable destination).
    ///
    /// Fatal errors must be reported up; routing errors leave the subject
    /// idle and the intention pending.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, MobilityError::Routing(_))
    }
}

pub type MobilityResult<T> = Result<T, MobilityError>;
