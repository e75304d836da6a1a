//! `oc-spatial` — battlefield tile graph and path resolution.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`graph`] | `TileGraph` (CSR), `TileGraphBuilder`, passage costs       |
//! | [`path`]  | `Path`, `PathResolver` trait, `DijkstraResolver`           |
//! | [`error`] | `SpatialError`, `SpatialResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | FxHash for the coordinate → tile id index.               |

pub mod error;
pub mod graph;
pub mod path;


pub use error::{SpatialError, SpatialResult};
pub use graph::{STEP_COST, TileGraph, TileGraphBuilder, geometric_cost};
pub use path::{DijkstraResolver, Path, PathResolver};
