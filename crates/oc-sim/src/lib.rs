//! `oc-sim` — tick loop for the opencombat movement engine.
//!
//! # Two-phase tick loop
//!
//! ```text
//! every step:
//!   ① Sample  — read `now` from the clock once.
//!   ② Run     — MoveWithRotation::run for each subject with a move order
//!               (parallel with the `parallel` feature).  Pure.
//!   ③ Apply   — for each subject in ascending SubjectId order:
//!                 no order, still active → cancel
//!                 routing failure        → on_move_blocked, stay idle
//!                 decision               → action; events → on_event;
//!                                          completed order retired
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the run phase on Rayon's thread pool.             |
//! | `fx-hash`  | FxHash for the tile graph's coordinate index.          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use oc_core::{EngineConfig, FrozenClock, Gait, SubjectId, TileCoord};
//! use oc_sim::{NoopObserver, SimBuilder};
//! use oc_spatial::DijkstraResolver;
//!
//! let mut sim = SimBuilder::new(config, graph, DijkstraResolver, FrozenClock::at(FrozenClock::Y2K))
//!     .positions(vec![TileCoord::new(0, 0)])
//!     .build()?;
//! sim.order(SubjectId(0), TileCoord::new(2, 1), Gait::Walk)?;
//! sim.run_until_idle(1_000, 1.0, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
