//! The `Sim` struct and its tick loop.

use oc_behavior::{IntentionKind, IntentionQueue, MoveIntention};
use oc_core::{AdvanceClock, Clock, EngineConfig, Gait, SubjectId, Tick, TileCoord};
use oc_mobility::{
    MobilityError, MobilityResult, MobilityStore, MoveContext, MoveDecision, MoveProfile,
    MoveWithRotation, MovementState,
};
use oc_spatial::{PathResolver, TileGraph};
use tracing::{debug, info, warn};

use crate::{SimError, SimObserver, SimResult};

/// Outcome of the run phase for one subject.
enum Planned {
    /// No pending move order.
    Unordered,
    Decided(MobilityResult<MoveDecision>),
}

impl Planned {
    fn fatal(&self) -> Option<&MobilityError> {
        match self {
            Planned::Decided(Err(e)) if e.is_fatal() => Some(e),
            _ => None,
        }
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<R, C>` holds the battlefield, every subject's movement state and
/// pending orders, and the clock.  Each [`step`](Self::step):
///
/// 1. samples `now` once from the clock;
/// 2. **run phase** (optionally parallel with the `parallel` feature): calls
///    [`MoveWithRotation::run`] for every subject holding a move order;
/// 3. **apply phase** (sequential, ascending `SubjectId` for determinism):
///    applies each decision, forwards the events to the observer, and
///    retires completed orders.  Subjects whose order disappeared while they
///    were active are cancelled.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: PathResolver, C: Clock> {
    /// Movement constants and run-loop settings.
    pub config: EngineConfig,

    /// Source of `now`.  Read once per tick.
    pub clock: C,

    /// Index of the next tick to run.
    pub tick: Tick,

    /// Battlefield graph.
    pub graph: TileGraph,

    /// The orchestrator.  Shared by every subject.
    pub engine: MoveWithRotation<R>,

    /// Per-subject movement state and profiles, indexed by `SubjectId`.
    pub mobility: MobilityStore,

    /// Per-subject pending orders, indexed by `SubjectId`.
    pub intentions: Vec<IntentionQueue>,
}

impl<R: PathResolver, C: Clock> Sim<R, C> {
    // ── Public API ────────────────────────────────────────────────────────

    #[inline]
    pub fn subject_count(&self) -> usize {
        self.mobility.len()
    }

    /// Movement state of `subject`.
    ///
    /// # Panics
    ///
    /// If `subject` is out of range.
    #[inline]
    pub fn state(&self, subject: SubjectId) -> &MovementState {
        self.mobility.state(subject)
    }

    /// Give `subject` a move order to `move_to` at `gait`, replacing any
    /// pending one.  The order takes effect on the next step.
    pub fn order(&mut self, subject: SubjectId, move_to: TileCoord, gait: Gait) -> SimResult<()> {
        if !self.mobility.contains(subject) {
            return Err(SimError::UnknownSubject(subject));
        }
        let from = self.mobility.state(subject).position;
        let intention = MoveIntention {
            from,
            move_to,
            start_time: self.clock.now(),
            gait,
        };
        debug!(subject = %subject, %from, %move_to, %gait, "move ordered");
        self.intentions[subject.index()].set(intention);
        Ok(())
    }

    /// Withdraw `subject`'s move order.  An active subject stops on the next
    /// step.
    pub fn withdraw(&mut self, subject: SubjectId) -> SimResult<Option<MoveIntention>> {
        let queue = self
            .intentions
            .get_mut(subject.index())
            .ok_or(SimError::UnknownSubject(subject))?;
        Ok(match queue.remove(IntentionKind::MoveTo) {
            Ok(intention) => intention.as_move().cloned(),
            Err(_)        => None,
        })
    }

    /// `true` when no subject is moving and no order is pending.
    pub fn is_idle(&self) -> bool {
        self.mobility.active().next().is_none()
            && self.intentions.iter().all(|q| !q.contains(IntentionKind::MoveTo))
    }

    /// Run one tick at the clock's current time.
    ///
    /// Returns the number of subjects still active after the tick.
    ///
    /// # Errors
    ///
    /// Fatal mobility errors (invalid durations, corrupted paths) abort the
    /// tick before any subject is touched: no event reaches the observer and
    /// the tick index is not advanced.  Unreachable destinations do not
    /// abort: they are reported through [`SimObserver::on_move_blocked`] and
    /// the subject, if it was active, is cancelled.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<usize> {
        let tick = self.tick;
        let ctx  = MoveContext::sample(&self.clock, &self.graph);
        let now  = ctx.now;

        // Explicit field borrows so the borrow checker sees disjoint access.
        let engine     = &self.engine;
        let intentions = &mut self.intentions;
        let mobility   = &mut self.mobility;

        // ── Run phase (produce) ───────────────────────────────────────────
        let planned = plan_all(
            engine,
            &mobility.states,
            &mobility.profiles,
            intentions.as_slice(),
            &ctx,
        );
        if let Some(e) = planned.iter().find_map(Planned::fatal) {
            return Err(e.clone().into());
        }

        observer.on_tick_start(tick, now);

        // ── Apply phase (consume) ─────────────────────────────────────────
        for (i, plan) in planned.into_iter().enumerate() {
            let subject = SubjectId(i as u32);
            let state   = &mut mobility.states[i];

            let decision = match plan {
                Planned::Unordered => {
                    if !state.is_idle() {
                        engine.cancel(state);
                        debug!(subject = %subject, "move cancelled");
                        observer.on_move_cancelled(tick, subject);
                    }
                    continue;
                }
                Planned::Decided(Err(e)) if !e.is_fatal() => {
                    if !state.is_idle() {
                        engine.cancel(state);
                        debug!(subject = %subject, "move cancelled");
                        observer.on_move_cancelled(tick, subject);
                    }
                    warn!(subject = %subject, error = %e, "move blocked");
                    observer.on_move_blocked(tick, subject, &e);
                    continue;
                }
                Planned::Decided(result) => result?,
            };

            let completes = decision.completes_order();
            let at = match &decision {
                MoveDecision::MoveFinished { move_to_finished } => *move_to_finished,
                _ => state.position,
            };

            let Ok(intention) = intentions[i].move_to() else {
                continue;
            };
            let events = engine.action(state, &mobility.profiles[i], intention, decision, &ctx)?;
            for event in &events {
                debug!(subject = %subject, ?event, "move event");
                observer.on_event(tick, now, subject, event);
            }

            if completes && intentions[i].remove(IntentionKind::MoveTo).is_ok() {
                debug!(subject = %subject, %at, "move finished");
                observer.on_move_finished(tick, subject, at);
            }
        }

        let active = mobility.active().count();
        observer.on_tick_end(tick, active);
        self.tick = tick.next();
        Ok(active)
    }
}

impl<R: PathResolver, C: AdvanceClock> Sim<R, C> {
    /// Step, then advance the clock by `step_secs`, until nothing is moving
    /// or pending, or `max_ticks` steps have run.
    ///
    /// Returns the number of steps run.  The clock is not advanced after the
    /// final step.
    pub fn run_until_idle<O: SimObserver>(
        &mut self,
        max_ticks: u64,
        step_secs: f64,
        observer:  &mut O,
    ) -> SimResult<u64> {
        if !(step_secs.is_finite() && step_secs > 0.0) {
            return Err(SimError::Config(format!("step must be positive, got {step_secs}")));
        }
        info!(subjects = self.subject_count(), max_ticks, step_secs, "run started");

        let mut steps = 0;
        while steps < max_ticks {
            self.step(observer)?;
            steps += 1;
            if self.is_idle() {
                break;
            }
            self.clock.advance(step_secs);
        }

        if self.is_idle() {
            info!(steps, final_tick = %self.tick, "run finished");
        } else {
            warn!(steps, "tick limit reached with subjects still moving");
        }
        observer.on_sim_end(self.tick);
        Ok(steps)
    }

    /// [`run_until_idle`](Self::run_until_idle) with the limits from
    /// `config.sim`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<u64> {
        let (max_ticks, step_secs) = (self.config.sim.max_ticks, self.config.sim.step_secs);
        self.run_until_idle(max_ticks, step_secs, observer)
    }
}

// ── Run phase ─────────────────────────────────────────────────────────────────

/// Decide for every subject.  Pure: nothing is mutated, so with the
/// `parallel` feature the subjects are evaluated on Rayon's thread pool.
fn plan_all<R: PathResolver>(
    engine:     &MoveWithRotation<R>,
    states:     &[MovementState],
    profiles:   &[MoveProfile],
    intentions: &[IntentionQueue],
    ctx:        &MoveContext<'_>,
) -> Vec<Planned> {
    let plan_one = |((state, profile), queue): ((&MovementState, &MoveProfile), &IntentionQueue)| {
        match queue.move_to() {
            Ok(intention) => Planned::Decided(engine.run(state, intention, ctx).and_then(|d| {
                engine.validate(profile, intention, &d)?;
                Ok(d)
            })),
            Err(_) => Planned::Unordered,
        }
    };

    #[cfg(not(feature = "parallel"))]
    {
        states.iter().zip(profiles).zip(intentions).map(plan_one).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        states
            .par_iter()
            .zip(profiles.par_iter())
            .zip(intentions.par_iter())
            .map(plan_one)
            .collect()
    }
}
