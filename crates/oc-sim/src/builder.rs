//! Fluent builder for constructing a [`Sim`].

use oc_behavior::IntentionQueue;
use oc_core::{Clock, EngineConfig, Tick, TileCoord};
use oc_mobility::{MobilityStore, MoveWithRotation, SubjectKind};
use oc_spatial::{PathResolver, SpatialError, TileGraph};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<R, C>`].
///
/// # Required inputs
///
/// - [`EngineConfig`]: movement reference times and run-loop limits
/// - [`TileGraph`]: the battlefield
/// - `R: PathResolver`: the path-finding algorithm (e.g. [`oc_spatial::DijkstraResolver`])
/// - `C: Clock`: source of `now` (e.g. [`oc_core::FrozenClock`] for replays)
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                              |
/// |----------------------|--------------------------------------|
/// | `.positions(v)`      | no subjects                          |
/// | `.kinds(v)`          | all [`SubjectKind::Man`]             |
/// | `.directions(v)`     | all facing 0°                        |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, graph, DijkstraResolver, FrozenClock::at(FrozenClock::Y2K))
///     .positions(vec![TileCoord::new(0, 0)])
///     .kinds(vec![SubjectKind::Tank])
///     .build()?;
/// sim.order(SubjectId(0), TileCoord::new(2, 1), Gait::Walk)?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<R: PathResolver, C: Clock> {
    config:     EngineConfig,
    graph:      TileGraph,
    resolver:   R,
    clock:      C,
    positions:  Vec<TileCoord>,
    kinds:      Option<Vec<SubjectKind>>,
    directions: Option<Vec<f64>>,
}

impl<R: PathResolver, C: Clock> SimBuilder<R, C> {
    /// Create a builder with all required inputs.
    pub fn new(config: EngineConfig, graph: TileGraph, resolver: R, clock: C) -> Self {
        Self {
            config,
            graph,
            resolver,
            clock,
            positions:  Vec::new(),
            kinds:      None,
            directions: None,
        }
    }

    /// Starting tile of each subject.  Sets the subject count.
    pub fn positions(mut self, positions: Vec<TileCoord>) -> Self {
        self.positions = positions;
        self
    }

    /// Kind of each subject (must be the same length as `positions`).
    pub fn kinds(mut self, kinds: Vec<SubjectKind>) -> Self {
        self.kinds = Some(kinds);
        self
    }

    /// Initial facing of each subject in degrees (must be the same length as
    /// `positions`).  Wrapped into `[0, 360)`.
    pub fn directions(mut self, directions: Vec<f64>) -> Self {
        self.directions = Some(directions);
        self
    }

    /// Validate inputs, place every subject, and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim<R, C>> {
        self.config.validate()?;

        let count = self.positions.len();
        let kinds = checked_len(self.kinds, count, "subject kinds")?
            .unwrap_or_else(|| vec![SubjectKind::default(); count]);
        let directions = checked_len(self.directions, count, "initial directions")?
            .unwrap_or_else(|| vec![0.0; count]);

        if let Some(bad) = directions.iter().find(|d| !d.is_finite()) {
            return Err(SimError::Config(format!("initial direction {bad} is not finite")));
        }

        let mut mobility = MobilityStore::new();
        for ((&position, &kind), &direction) in self.positions.iter().zip(&kinds).zip(&directions) {
            if !self.graph.contains(position) {
                return Err(SpatialError::TileNotFound(position).into());
            }
            mobility.push(kind, position, direction, &self.config.movement);
        }

        Ok(Sim {
            config:     self.config,
            clock:      self.clock,
            tick:       Tick::ZERO,
            graph:      self.graph,
            engine:     MoveWithRotation::new(self.resolver),
            mobility,
            intentions: vec![IntentionQueue::new(); count],
        })
    }
}

fn checked_len<T>(v: Option<Vec<T>>, expected: usize, what: &'static str) -> SimResult<Option<Vec<T>>> {
    match v {
        Some(v) if v.len() != expected => Err(SimError::CountMismatch { expected, got: v.len(), what }),
        other => Ok(other),
    }
}
