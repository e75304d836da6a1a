//! walkthrough — replays the reference tank move on a three-tile chain.
//!
//! A tank on (0,0) facing 0° is ordered to (2,1) via (1,1).  It turns 45°,
//! crosses the diagonal, turns another 45°, and crosses east.  Every move
//! event is written to `output/walkthrough/events.csv`.
//!
//! Usage: `walkthrough [config.json]`.  Without an argument the embedded
//! configuration below is used.  Set `RUST_LOG=oc_sim=debug` to see each
//! event as it is emitted.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use oc_core::{EngineConfig, FrozenClock, Gait, SubjectId, TileCoord};
use oc_mobility::{MoveEvent, SubjectKind};
use oc_output::{CsvEventWriter, EventLogObserver, EventWriter};
use oc_sim::{SimBuilder, SimObserver};
use oc_spatial::{DijkstraResolver, TileGraph, TileGraphBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR: &str = "output/walkthrough";

// Reference tank constants, starting at 2000-01-01T00:00:00Z with 1 s ticks.
const CONFIG_JSON: &str = r#"{
  "move": {
    "walk_ref_time": 3.0,
    "run_ref_time": 1.0,
    "crawl_ref_time": 10.0,
    "rotate_ref_time": 0.01,
    "tank": { "global_move_coeff": 3.0, "rotate_ref_time": 0.1111 }
  },
  "sim": { "start_time_secs": 946684800.0, "step_secs": 1.0, "max_ticks": 120 }
}"#;

// ── Battlefield ───────────────────────────────────────────────────────────────

fn build_graph() -> TileGraph {
    let mut b = TileGraphBuilder::new();
    b.add_passage(TileCoord::new(0, 0), TileCoord::new(1, 1));
    b.add_passage(TileCoord::new(1, 1), TileCoord::new(2, 1));
    b.build()
}

// ── Observer wrapper to print events ──────────────────────────────────────────

struct PrintingObserver<W: EventWriter> {
    inner:  EventLogObserver<W>,
    start:  f64,
    events: usize,
}

impl<W: EventWriter> SimObserver for PrintingObserver<W> {
    fn on_tick_start(&mut self, tick: oc_core::Tick, now: f64) {
        self.inner.on_tick_start(tick, now);
    }

    fn on_event(&mut self, tick: oc_core::Tick, now: f64, subject: SubjectId, event: &MoveEvent) {
        self.events += 1;
        println!(
            "t={:>5.1}  {:<6} {:<20} {}",
            now - self.start,
            subject,
            event.kind(),
            describe(event),
        );
        self.inner.on_event(tick, now, subject, event);
    }

    fn on_move_finished(&mut self, _tick: oc_core::Tick, subject: SubjectId, at: TileCoord) {
        println!("        {subject} arrived on {at}; order retired");
    }

    fn on_tick_end(&mut self, tick: oc_core::Tick, active: usize) {
        self.inner.on_tick_end(tick, active);
    }

    fn on_sim_end(&mut self, final_tick: oc_core::Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

fn describe(event: &MoveEvent) -> String {
    match *event {
        MoveEvent::StartRotation { rotate_relative, duration }
        | MoveEvent::ContinueRotation { rotate_relative, duration } => {
            format!("turn {rotate_relative:+.4}° over {duration:.4} s")
        }
        MoveEvent::FinishRotation { rotate_absolute } => format!("facing {rotate_absolute:.1}°"),
        MoveEvent::StartTileMove { move_to, duration }
        | MoveEvent::ContinueTileMove { move_to, duration } => {
            format!("to {move_to} in {duration:.4} s")
        }
        MoveEvent::FinishTileMove { move_to } => format!("on {move_to}"),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    // 1. Configuration.
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => EngineConfig::from_path(&path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfig::from_json_str(CONFIG_JSON)?,
    };
    let start = config.sim.start_time_secs;
    info!(?config, "configuration loaded");

    // 2. Sim: one tank on (0,0) facing 0°.
    let graph = build_graph();
    println!("Battlefield: {} tiles, {} passages", graph.tile_count(), graph.edge_count());

    let mut sim = SimBuilder::new(config, graph, DijkstraResolver, FrozenClock::at(start))
        .positions(vec![TileCoord::new(0, 0)])
        .kinds(vec![SubjectKind::Tank])
        .directions(vec![0.0])
        .build()?;
    sim.order(SubjectId(0), TileCoord::new(2, 1), Gait::Walk)?;

    // 3. Output.
    let writer = CsvEventWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = PrintingObserver { inner: EventLogObserver::new(writer), start, events: 0 };

    // 4. Run.
    let t0 = Instant::now();
    let steps = sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    let state = sim.state(SubjectId(0));
    println!();
    println!("Replay complete in {:.3} ms", elapsed.as_secs_f64() * 1e3);
    println!("  ticks               : {steps}");
    println!("  events.csv          : {} rows", obs.events);
    println!("  final position      : {}", state.position);
    println!("  final direction     : {:.1}°", state.direction);

    Ok(())
}
