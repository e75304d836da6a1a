//! Per-subject intention queue.

use crate::{BehaviorError, BehaviorResult, Intention, IntentionKind, MoveIntention};

/// Holds at most one pending [`Intention`] per [`IntentionKind`].
///
/// Lookups of an absent kind return
/// [`BehaviorError::IntentionNotFound`]; callers must not assume an intention
/// outlives the tick in which it was retired.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntentionQueue {
    pending: Vec<Intention>,
}

impl IntentionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `intention`, replacing any pending one of the same kind.
    ///
    /// Returns the replaced intention, if any.
    pub fn set(&mut self, intention: impl Into<Intention>) -> Option<Intention> {
        let intention = intention.into();
        let kind = intention.kind();
        match self.pending.iter_mut().find(|i| i.kind() == kind) {
            Some(slot) => Some(std::mem::replace(slot, intention)),
            None => {
                self.pending.push(intention);
                None
            }
        }
    }

    pub fn get(&self, kind: IntentionKind) -> BehaviorResult<&Intention> {
        self.pending
            .iter()
            .find(|i| i.kind() == kind)
            .ok_or(BehaviorError::IntentionNotFound(kind))
    }

    /// The pending move order.
    pub fn move_to(&self) -> BehaviorResult<&MoveIntention> {
        self.get(IntentionKind::MoveTo)?
            .as_move()
            .ok_or(BehaviorError::IntentionNotFound(IntentionKind::MoveTo))
    }

    /// Remove and return the intention of `kind`.
    pub fn remove(&mut self, kind: IntentionKind) -> BehaviorResult<Intention> {
        let pos = self
            .pending
            .iter()
            .position(|i| i.kind() == kind)
            .ok_or(BehaviorError::IntentionNotFound(kind))?;
        Ok(self.pending.remove(pos))
    }

    #[inline]
    pub fn contains(&self, kind: IntentionKind) -> bool {
        self.pending.iter().any(|i| i.kind() == kind)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
