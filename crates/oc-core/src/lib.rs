//! `oc-core` — foundational types for the opencombat movement engine.
//!
//! This crate is a dependency of every other `oc-*` crate and has no `oc-*`
//! dependencies of its own.
//!
//! # What lives here
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`ids`]      | `SubjectId`, `TileId`                                     |
//! | [`tile`]     | `TileCoord`, bearings between tiles                       |
//! | [`angle`]    | heading normalization and shortest-turn math              |
//! | [`time`]     | `Tick`, `Clock`, `SystemClock`, `FrozenClock`             |
//! | [`gait`]     | `Gait` (walk / run / crawl)                               |
//! | [`config`]   | `MoveConfig`, `TankConfig`, `SimConfig`, `EngineConfig`   |
//! | [`error`]    | `CoreError`, `CoreResult`                                 |
//!
//! Ids, tiles, ticks, and gaits derive `Serialize`/`Deserialize`; `serde` is
//! a hard dependency because configuration is loaded through it.

pub mod angle;
pub mod config;
pub mod error;
pub mod gait;
pub mod ids;
pub mod tile;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{EngineConfig, MoveConfig, SimConfig, TankConfig};
pub use error::{CoreError, CoreResult};
pub use gait::Gait;
pub use ids::{SubjectId, TileId};
pub use tile::TileCoord;
pub use time::{AdvanceClock, Clock, FrozenClock, SystemClock, Tick};
