//! The `MobilityStore` — per-subject movement state and profiles.

use oc_core::{MoveConfig, SubjectId, TileCoord};

use crate::{MoveProfile, MovementState, SubjectKind};

/// Movement state and capabilities for every subject, indexed by
/// [`SubjectId`].
///
/// All three vectors always have the same length.  Subjects are never
/// removed: ids stay dense.
#[derive(Default)]
pub struct MobilityStore {
    /// Per-subject movement state.
    pub states: Vec<MovementState>,

    /// Per-subject durations profile, fixed at creation.
    pub profiles: Vec<MoveProfile>,

    /// Per-subject kind, kept for reporting.
    pub kinds: Vec<SubjectKind>,
}

impl MobilityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an idle subject of `kind` standing on `position`, facing
    /// `direction`, and return its id.
    pub fn push(
        &mut self,
        kind:      SubjectKind,
        position:  TileCoord,
        direction: f64,
        config:    &MoveConfig,
    ) -> SubjectId {
        let id = SubjectId(self.states.len() as u32);
        self.states.push(MovementState::idle_at(position, direction));
        self.profiles.push(MoveProfile::for_kind(kind, config));
        self.kinds.push(kind);
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[inline]
    pub fn contains(&self, subject: SubjectId) -> bool {
        subject.index() < self.states.len()
    }

    #[inline]
    pub fn state(&self, subject: SubjectId) -> &MovementState {
        &self.states[subject.index()]
    }

    #[inline]
    pub fn state_mut(&mut self, subject: SubjectId) -> &mut MovementState {
        &mut self.states[subject.index()]
    }

    #[inline]
    pub fn profile(&self, subject: SubjectId) -> &MoveProfile {
        &self.profiles[subject.index()]
    }

    #[inline]
    pub fn kind(&self, subject: SubjectId) -> SubjectKind {
        self.kinds[subject.index()]
    }

    /// Ids of subjects currently rotating or moving.
    pub fn active(&self) -> impl Iterator<Item = SubjectId> + '_ {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_idle())
            .map(|(i, _)| SubjectId(i as u32))
    }
}
