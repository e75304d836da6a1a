//! `oc-behavior` — subject intentions and the intention queue.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`intent`] | `MoveIntention`, `Intention`, `IntentionKind`            |
//! | [`queue`]  | `IntentionQueue` — at most one pending order per kind    |
//! | [`error`]  | `BehaviorError`, `BehaviorResult<T>`                     |
//!
//! Intentions are high-level orders ("move to X").  They are tracked
//! independently of the low-level rotation/translation state in
//! `oc-mobility`: the tick loop reads the pending move order each tick and
//! retires it once the whole path has been walked.

pub mod error;
pub mod intent;
pub mod queue;


pub use error::{BehaviorError, BehaviorResult};
pub use intent::{Intention, IntentionKind, MoveIntention};
pub use queue::IntentionQueue;
