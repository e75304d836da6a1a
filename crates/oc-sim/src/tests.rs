//! Integration tests for oc-sim.

use oc_core::{EngineConfig, FrozenClock, Gait, SubjectId, Tick, TileCoord};
use oc_mobility::{MobilityError, MoveEvent, SubjectKind};
use oc_spatial::{DijkstraResolver, TileGraph, TileGraphBuilder};

use crate::{Sim, SimBuilder, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn t(x: i32, y: i32) -> TileCoord {
    TileCoord::new(x, y)
}

fn walkthrough_graph() -> TileGraph {
    let mut b = TileGraphBuilder::new();
    b.add_passage(t(0, 0), t(1, 1));
    b.add_passage(t(1, 1), t(2, 1));
    b.build()
}

fn clock() -> FrozenClock {
    FrozenClock::at(FrozenClock::Y2K)
}

/// One tank at (0,0) facing 0°, on the walkthrough chain.
fn walkthrough_sim() -> Sim<DijkstraResolver, FrozenClock> {
    SimBuilder::new(EngineConfig::default(), walkthrough_graph(), DijkstraResolver, clock())
        .positions(vec![t(0, 0)])
        .kinds(vec![SubjectKind::Tank])
        .build()
        .unwrap()
}

/// Records every callback.
#[derive(Default)]
struct Recorder {
    events:    Vec<(Tick, SubjectId, MoveEvent)>,
    blocked:   Vec<(Tick, SubjectId)>,
    cancelled: Vec<(Tick, SubjectId)>,
    finished:  Vec<(Tick, SubjectId, TileCoord)>,
    started:   u64,
    ticks:     u64,
    ended:     Option<Tick>,
}

impl Recorder {
    fn at(&self, tick: u64) -> Vec<MoveEvent> {
        self.events.iter().filter(|(t, ..)| t.0 == tick).map(|&(.., e)| e).collect()
    }
}

impl SimObserver for Recorder {
    fn on_event(&mut self, tick: Tick, _now: f64, subject: SubjectId, event: &MoveEvent) {
        self.events.push((tick, subject, *event));
    }
    fn on_move_blocked(&mut self, tick: Tick, subject: SubjectId, _error: &MobilityError) {
        self.blocked.push((tick, subject));
    }
    fn on_move_cancelled(&mut self, tick: Tick, subject: SubjectId) {
        self.cancelled.push((tick, subject));
    }
    fn on_move_finished(&mut self, tick: Tick, subject: SubjectId, at: TileCoord) {
        self.finished.push((tick, subject, at));
    }
    fn on_tick_start(&mut self, _tick: Tick, _now: f64) {
        self.started += 1;
    }
    fn on_tick_end(&mut self, _tick: Tick, _active: usize) {
        self.ticks += 1;
    }
    fn on_sim_end(&mut self, final_tick: Tick) {
        self.ended = Some(final_tick);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SimError;

    #[test]
    fn builds_with_defaults() {
        let sim = SimBuilder::new(EngineConfig::default(), walkthrough_graph(), DijkstraResolver, clock())
            .positions(vec![t(0, 0), t(2, 1)])
            .build()
            .unwrap();
        assert_eq!(sim.subject_count(), 2);
        assert_eq!(sim.intentions.len(), 2);
        assert_eq!(sim.mobility.kind(SubjectId(1)), SubjectKind::Man);
        assert!(sim.is_idle());
    }

    #[test]
    fn kind_count_mismatch_errors() {
        let result = SimBuilder::new(EngineConfig::default(), walkthrough_graph(), DijkstraResolver, clock())
            .positions(vec![t(0, 0), t(1, 1)])
            .kinds(vec![SubjectKind::Tank])
            .build();
        assert!(matches!(result, Err(SimError::CountMismatch { expected: 2, got: 1, .. })));
    }

    #[test]
    fn non_finite_direction_errors() {
        let result = SimBuilder::new(EngineConfig::default(), walkthrough_graph(), DijkstraResolver, clock())
            .positions(vec![t(0, 0)])
            .directions(vec![f64::NAN])
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn off_graph_position_errors() {
        let result = SimBuilder::new(EngineConfig::default(), walkthrough_graph(), DijkstraResolver, clock())
            .positions(vec![t(7, 7)])
            .build();
        assert!(matches!(result, Err(SimError::Placement(_))));
    }

    #[test]
    fn invalid_config_errors() {
        let mut config = EngineConfig::default();
        config.movement.walk_ref_time = -1.0;
        let result = SimBuilder::new(config, walkthrough_graph(), DijkstraResolver, clock()).build();
        assert!(matches!(result, Err(SimError::Core(_))));
    }
}

// ── Reference walkthrough ─────────────────────────────────────────────────────

#[cfg(test)]
mod walkthrough {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn tank_reaches_destination_and_order_is_retired() {
        let mut sim = walkthrough_sim();
        let mut rec = Recorder::default();
        sim.order(SubjectId(0), t(2, 1), Gait::Walk).unwrap();

        let steps = sim.run_until_idle(100, 1.0, &mut rec).unwrap();
        assert_eq!(steps, 29);
        assert_eq!(rec.ticks, 29);
        assert_eq!(rec.ended, Some(Tick(29)));

        let e0 = rec.at(0);
        assert_eq!(e0.len(), 1);
        assert_eq!(e0[0].kind(), "start_rotation");
        assert!(approx(e0[0].angle().unwrap(), 45.0));
        assert!(approx(e0[0].duration().unwrap(), 4.9995));

        let e4 = rec.at(4);
        assert_eq!(e4[0].kind(), "continue_rotation");
        assert!(approx(e4[0].duration().unwrap(), 0.9995));

        let e5: Vec<_> = rec.at(5).iter().map(MoveEvent::kind).collect();
        assert_eq!(e5, ["finish_rotation", "start_tile_move"]);
        assert_eq!(rec.at(5)[1].duration(), Some(9.0));

        assert_eq!(rec.at(13), vec![MoveEvent::ContinueTileMove { move_to: t(1, 1), duration: 1.0 }]);

        let e14 = rec.at(14);
        assert_eq!(e14[0], MoveEvent::FinishTileMove { move_to: t(1, 1) });
        assert_eq!(e14[1].kind(), "start_rotation");
        assert!(approx(sim.state(SubjectId(0)).direction, 90.0));

        let e18 = rec.at(18);
        assert_eq!(e18.len(), 1);
        assert_eq!(e18[0].kind(), "continue_rotation");
        assert!((e18[0].angle().unwrap() - 9.0).abs() < 0.01);
        assert!(approx(e18[0].duration().unwrap(), 0.9995));

        let e19 = rec.at(19);
        assert_eq!(e19[0].kind(), "finish_rotation");
        assert!(approx(e19[0].angle().unwrap(), 90.0));
        assert_eq!(e19[1], MoveEvent::StartTileMove { move_to: t(2, 1), duration: 9.0 });

        assert_eq!(rec.at(27), vec![MoveEvent::ContinueTileMove { move_to: t(2, 1), duration: 1.0 }]);

        assert_eq!(rec.at(28), vec![MoveEvent::FinishTileMove { move_to: t(2, 1) }]);
        assert_eq!(rec.finished, vec![(Tick(28), SubjectId(0), t(2, 1))]);
        assert_eq!(sim.state(SubjectId(0)).position, t(2, 1));

        // Retired: a lookup now reports not-found.
        assert!(sim.intentions[0].move_to().is_err());
        assert!(sim.is_idle());
    }

    #[test]
    fn clock_is_sampled_once_per_tick() {
        let mut sim = walkthrough_sim();
        sim.order(SubjectId(0), t(2, 1), Gait::Walk).unwrap();
        sim.step(&mut Recorder::default()).unwrap();
        sim.clock.set(FrozenClock::Y2K + 100.0);

        // One long step finishes the rotation and starts the leg, nothing more.
        let mut rec = Recorder::default();
        sim.step(&mut rec).unwrap();
        let kinds: Vec<_> = rec.events.iter().map(|(.., e)| e.kind()).collect();
        assert_eq!(kinds, ["finish_rotation", "start_tile_move"]);
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dispatch {
    use super::*;
    use crate::{NoopObserver, SimError};

    #[test]
    fn unreachable_order_is_blocked_and_kept() {
        let mut b = TileGraphBuilder::new();
        b.add_passage(t(0, 0), t(1, 0));
        b.add_tile(t(9, 9));
        let mut sim = SimBuilder::new(EngineConfig::default(), b.build(), DijkstraResolver, clock())
            .positions(vec![t(0, 0)])
            .build()
            .unwrap();
        sim.order(SubjectId(0), t(9, 9), Gait::Walk).unwrap();

        let mut rec = Recorder::default();
        let steps = sim.run_until_idle(5, 1.0, &mut rec).unwrap();
        assert_eq!(steps, 5);
        assert_eq!(rec.blocked.len(), 5);
        assert!(rec.events.is_empty());
        assert!(sim.state(SubjectId(0)).is_idle());
        assert!(sim.intentions[0].move_to().is_ok());
    }

    #[test]
    fn withdrawn_order_cancels_active_subject() {
        let mut sim = walkthrough_sim();
        sim.order(SubjectId(0), t(2, 1), Gait::Walk).unwrap();
        let mut rec = Recorder::default();
        sim.step(&mut rec).unwrap();
        assert!(!sim.state(SubjectId(0)).is_idle());

        let withdrawn = sim.withdraw(SubjectId(0)).unwrap();
        assert_eq!(withdrawn.map(|w| w.move_to), Some(t(2, 1)));
        sim.clock.set(FrozenClock::Y2K + 1.0);
        sim.step(&mut rec).unwrap();

        assert_eq!(rec.cancelled, vec![(Tick(1), SubjectId(0))]);
        assert_eq!(rec.events.len(), 1);
        assert!(sim.state(SubjectId(0)).is_idle());
        assert!(sim.is_idle());
    }

    #[test]
    fn unreachable_replacement_cancels_active_subject() {
        let mut b = TileGraphBuilder::new();
        b.add_passage(t(0, 0), t(1, 1));
        b.add_passage(t(1, 1), t(2, 1));
        b.add_tile(t(9, 9));
        let mut sim = SimBuilder::new(EngineConfig::default(), b.build(), DijkstraResolver, clock())
            .positions(vec![t(0, 0)])
            .kinds(vec![SubjectKind::Tank])
            .build()
            .unwrap();
        sim.order(SubjectId(0), t(2, 1), Gait::Walk).unwrap();
        let mut rec = Recorder::default();
        sim.step(&mut rec).unwrap();
        assert!(sim.state(SubjectId(0)).is_rotating());

        sim.order(SubjectId(0), t(9, 9), Gait::Walk).unwrap();
        for secs in 1..=8 {
            sim.clock.set(FrozenClock::Y2K + f64::from(secs));
            sim.step(&mut rec).unwrap();
        }

        let state = sim.state(SubjectId(0));
        assert!(state.is_idle());
        assert!(state.order.is_none());
        assert!(state.path.is_empty());
        assert_eq!(state.position, t(0, 0));
        assert_eq!(rec.cancelled, vec![(Tick(1), SubjectId(0))]);
        assert_eq!(rec.blocked.len(), 8);
        // Only the first tick's rotation start was ever emitted.
        assert_eq!(rec.events.len(), 1);
        assert!(sim.intentions[0].move_to().is_ok());
    }

    #[test]
    fn fatal_error_leaves_tick_untouched() {
        let mut sim = SimBuilder::new(EngineConfig::default(), walkthrough_graph(), DijkstraResolver, clock())
            .positions(vec![t(0, 0), t(2, 1)])
            .kinds(vec![SubjectKind::Tank, SubjectKind::Tank])
            .build()
            .unwrap();
        sim.mobility.profiles[1].rotate_ref_time = 0.0;
        sim.order(SubjectId(0), t(2, 1), Gait::Walk).unwrap();
        sim.order(SubjectId(1), t(1, 1), Gait::Walk).unwrap();

        let mut rec = Recorder::default();
        let err = sim.step(&mut rec).unwrap_err();
        assert!(matches!(err, SimError::Mobility(MobilityError::InvalidDuration { .. })));

        // Subject 0 planned fine but was not applied.
        assert!(sim.state(SubjectId(0)).is_idle());
        assert!(sim.state(SubjectId(1)).is_idle());
        assert!(rec.events.is_empty());
        assert_eq!(rec.started, 0);
        assert_eq!(rec.ticks, 0);
        assert_eq!(sim.tick, Tick(0));
        assert!(sim.intentions[0].move_to().is_ok());
    }

    #[test]
    fn order_for_unknown_subject_errors() {
        let mut sim = walkthrough_sim();
        let err = sim.order(SubjectId(3), t(1, 1), Gait::Walk).unwrap_err();
        assert!(matches!(err, SimError::UnknownSubject(SubjectId(3))));
        assert!(sim.withdraw(SubjectId(3)).is_err());
    }

    #[test]
    fn invalid_profile_is_fatal() {
        let mut sim = walkthrough_sim();
        sim.mobility.profiles[0].rotate_ref_time = 0.0;
        sim.order(SubjectId(0), t(2, 1), Gait::Walk).unwrap();
        let err = sim.step(&mut NoopObserver).unwrap_err();
        assert!(matches!(err, SimError::Mobility(MobilityError::InvalidDuration { .. })));
        assert!(sim.state(SubjectId(0)).is_idle());
    }

    #[test]
    fn already_arrived_retires_without_events() {
        let mut sim = walkthrough_sim();
        sim.order(SubjectId(0), t(0, 0), Gait::Walk).unwrap();
        let mut rec = Recorder::default();
        sim.step(&mut rec).unwrap();
        assert!(rec.events.is_empty());
        assert_eq!(rec.finished, vec![(Tick(0), SubjectId(0), t(0, 0))]);
        assert!(sim.is_idle());
    }

    #[test]
    fn subjects_are_applied_in_id_order() {
        let graph = TileGraphBuilder::grid(4, 4).build();
        let mut sim = SimBuilder::new(EngineConfig::default(), graph, DijkstraResolver, clock())
            .positions(vec![t(3, 3), t(0, 0), t(0, 3)])
            .directions(vec![180.0, 90.0, 90.0])
            .build()
            .unwrap();
        for (i, to) in [t(3, 0), t(3, 0), t(3, 3)].into_iter().enumerate() {
            sim.order(SubjectId(i as u32), to, Gait::Run).unwrap();
        }
        let mut rec = Recorder::default();
        sim.run_until_idle(100, 0.5, &mut rec).unwrap();

        for tick in 0..rec.ticks {
            let ids: Vec<_> = rec.events.iter().filter(|(t, ..)| t.0 == tick).map(|(_, s, _)| s.0).collect();
            assert!(ids.windows(2).all(|w| w[0] <= w[1]), "tick {tick}: {ids:?}");
        }
        assert_eq!(rec.finished.len(), 3);
        assert_eq!(sim.state(SubjectId(0)).position, t(3, 0));
        assert_eq!(sim.state(SubjectId(2)).position, t(3, 3));
    }

    #[test]
    fn reordering_mid_leg_replans() {
        let graph = TileGraphBuilder::grid(3, 3).build();
        let mut sim = SimBuilder::new(EngineConfig::default(), graph, DijkstraResolver, clock())
            .positions(vec![t(0, 0)])
            .directions(vec![90.0])
            .build()
            .unwrap();
        sim.order(SubjectId(0), t(2, 0), Gait::Walk).unwrap();
        let mut rec = Recorder::default();
        sim.step(&mut rec).unwrap();

        sim.order(SubjectId(0), t(0, 2), Gait::Walk).unwrap();
        sim.clock.set(FrozenClock::Y2K + 1.0);
        sim.step(&mut rec).unwrap();

        assert!(rec.cancelled.is_empty());
        assert_eq!(rec.at(1)[0].kind(), "start_rotation");
        assert_eq!(sim.state(SubjectId(0)).position, t(0, 0));
    }
}
