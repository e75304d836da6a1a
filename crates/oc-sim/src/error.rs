use oc_core::{CoreError, SubjectId};
use oc_mobility::MobilityError;
use oc_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("{what} length {got} does not match subject count {expected}")]
    CountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("invalid starting tile: {0}")]
    Placement(#[from] SpatialError),

    #[error("unknown subject {0}")]
    UnknownSubject(SubjectId),

    #[error("mobility error: {0}")]
    Mobility(#[from] MobilityError),
}

pub type SimResult<T> = Result<T, SimError>;
