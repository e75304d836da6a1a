//! `oc-mobility` — subject movement: rotation and tile-move state machines,
//! move events, and the per-tick orchestrator.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`state`]       | `MovementState`, `Progress`, the `IDLE` sentinel              |
//! | [`rotation`]    | rotation sub-state-machine (start / advance / finish)         |
//! | [`translation`] | tile-move sub-state-machine (start / advance / finish)        |
//! | [`profile`]     | `SubjectKind`, `MoveProfile` — durations per subject type     |
//! | [`event`]       | `MoveEvent` — what happened this tick                         |
//! | [`decision`]    | `MoveDecision` — what the orchestrator chose this tick        |
//! | [`behaviour`]   | `MoveWithRotation<R>`, `MoveContext` — run / action / cancel  |
//! | [`store`]       | `MobilityStore` — `Vec<MovementState>` + profiles             |
//! | [`error`]       | `MobilityError`, `MobilityResult<T>`                          |
//!
//! # Movement model (teleport-at-arrival)
//!
//! 1. `MoveWithRotation::run` samples nothing itself: it reads the state and
//!    the tick's `now`, and returns a [`MoveDecision`].  It never mutates.
//! 2. `MoveWithRotation::action` applies the decision and returns zero, one,
//!    or two [`MoveEvent`]s, completions first.
//! 3. A subject stays on its departure tile for the whole leg and jumps to
//!    the next tile when the leg finishes.  Rotation, by contrast, is
//!    interpolated every tick.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                         |
//! |---------|----------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` for events, kinds, and profiles.     |

pub mod behaviour;
pub mod decision;
pub mod error;
pub mod event;
pub mod profile;
pub mod rotation;
pub mod state;
pub mod store;
pub mod translation;


pub use behaviour::{MoveContext, MoveWithRotation};
pub use decision::MoveDecision;
pub use error::{MobilityError, MobilityResult};
pub use event::MoveEvent;
pub use profile::{MoveProfile, SubjectKind};
pub use state::{IDLE, MovementState, Progress};
pub use store::MobilityStore;
