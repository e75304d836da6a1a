use thiserror::Error;

use crate::IntentionKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BehaviorError {
    #[error("no pending {0} intention")]
    IntentionNotFound(IntentionKind),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
