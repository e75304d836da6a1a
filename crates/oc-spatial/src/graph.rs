//! Tile graph representation and builder.
//!
//! # Data layout
//!
//! Tiles are interned to dense [`TileId`]s and passages between them are
//! stored in **Compressed Sparse Row (CSR)** format.  Given a `TileId t`, its
//! outgoing passages occupy the slice:
//!
//! ```text
//! edge_to[ tile_out_start[t] .. tile_out_start[t+1] ]
//! ```
//!
//! All edge arrays are sorted by source tile, so iterating a tile's
//! neighbours is a contiguous scan — the inner loop of Dijkstra.
//!
//! # Costs
//!
//! Passage costs are integer **milli-tiles**: a straight step costs
//! [`STEP_COST`], a diagonal step `round(√2 × STEP_COST)`.  Integer costs keep
//! path selection exact and deterministic.

use oc_core::{TileCoord, TileId};

/// Cost of one straight (non-diagonal) step.
pub const STEP_COST: u32 = 1_000;

#[cfg(feature = "fx-hash")]
type TileIndex = rustc_hash::FxHashMap<TileCoord, TileId>;

#[cfg(not(feature = "fx-hash"))]
type TileIndex = std::collections::HashMap<TileCoord, TileId>;

/// Geometric cost between two tiles in milli-tiles.
#[inline]
pub fn geometric_cost(a: TileCoord, b: TileCoord) -> u32 {
    (a.distance(b) * STEP_COST as f64).round() as u32
}

// ── TileGraph ─────────────────────────────────────────────────────────────────

/// Directed passage graph between battlefield tiles, in CSR format.
///
/// Do not construct directly; use [`TileGraphBuilder`].
pub struct TileGraph {
    /// Coordinate of each tile.  Indexed by `TileId`.
    pub tile_pos: Vec<TileCoord>,

    /// CSR row pointer.  Length = `tile_count + 1`.
    pub tile_out_start: Vec<u32>,

    /// Source tile of each passage.
    pub edge_from: Vec<TileId>,

    /// Destination tile of each passage.
    pub edge_to: Vec<TileId>,

    /// Passage cost in milli-tiles.
    pub edge_cost: Vec<u32>,

    index: TileIndex,
}

impl TileGraph {
    /// A graph with no tiles.  Every path query against it fails with
    /// [`SpatialError::TileNotFound`][crate::SpatialError::TileNotFound].
    pub fn empty() -> Self {
        TileGraphBuilder::new().build()
    }

    pub fn tile_count(&self) -> usize {
        self.tile_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tile_pos.is_empty()
    }

    /// Dense id of `coord`, or `None` if the tile was never added.
    #[inline]
    pub fn tile_id(&self, coord: TileCoord) -> Option<TileId> {
        self.index.get(&coord).copied()
    }

    #[inline]
    pub fn contains(&self, coord: TileCoord) -> bool {
        self.index.contains_key(&coord)
    }

    /// Coordinate of an interned tile.
    #[inline]
    pub fn coord(&self, id: TileId) -> TileCoord {
        self.tile_pos[id.index()]
    }

    /// Range of edge indices leaving `tile`.  No allocation.
    #[inline]
    pub fn out_edges(&self, tile: TileId) -> std::ops::Range<usize> {
        let start = self.tile_out_start[tile.index()] as usize;
        let end   = self.tile_out_start[tile.index() + 1] as usize;
        start..end
    }

    #[inline]
    pub fn out_degree(&self, tile: TileId) -> usize {
        self.out_edges(tile).len()
    }

    /// Coordinates reachable in one step from `coord`.
    ///
    /// Empty if `coord` is not in the graph.
    pub fn neighbours(&self, coord: TileCoord) -> Vec<TileCoord> {
        match self.tile_id(coord) {
            None     => Vec::new(),
            Some(id) => self
                .out_edges(id)
                .map(|e| self.coord(self.edge_to[e]))
                .collect(),
        }
    }
}

// ── TileGraphBuilder ──────────────────────────────────────────────────────────

/// Construct a [`TileGraph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use oc_core::TileCoord;
/// use oc_spatial::TileGraphBuilder;
///
/// let mut b = TileGraphBuilder::new();
/// b.add_passage(TileCoord::new(0, 0), TileCoord::new(1, 1));
/// b.add_passage(TileCoord::new(1, 1), TileCoord::new(2, 1));
/// let graph = b.build();
/// assert_eq!(graph.tile_count(), 3);
/// assert_eq!(graph.edge_count(), 4); // bidirectional
/// ```
pub struct TileGraphBuilder {
    tiles:     Vec<TileCoord>,
    index:     TileIndex,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    from: TileId,
    to:   TileId,
    cost: u32,
}

impl TileGraphBuilder {
    pub fn new() -> Self {
        Self {
            tiles:     Vec::new(),
            index:     TileIndex::default(),
            raw_edges: Vec::new(),
        }
    }

    /// An 8-connected `width × height` grid with geometric costs, tiles
    /// spanning `(0, 0) ..= (width - 1, height - 1)`.
    pub fn grid(width: i32, height: i32) -> Self {
        let mut b = Self::new();
        for x in 0..width {
            for y in 0..height {
                let here = TileCoord::new(x, y);
                b.add_tile(here);
                // Link towards already-visited neighbours only; add_passage is
                // bidirectional.
                for (dx, dy) in [(-1, -1), (-1, 0), (-1, 1), (0, -1)] {
                    let there = TileCoord::new(x + dx, y + dy);
                    if there.x >= 0 && there.y >= 0 && there.y < height {
                        b.add_passage(here, there);
                    }
                }
            }
        }
        b
    }

    /// Intern `coord` and return its id.  Adding the same tile twice returns
    /// the existing id.
    pub fn add_tile(&mut self, coord: TileCoord) -> TileId {
        if let Some(&id) = self.index.get(&coord) {
            return id;
        }
        let id = TileId(self.tiles.len() as u32);
        self.tiles.push(coord);
        self.index.insert(coord, id);
        id
    }

    /// Add a **directed** passage from `from` to `to` with an explicit cost.
    pub fn add_directed_passage(&mut self, from: TileCoord, to: TileCoord, cost: u32) {
        let from = self.add_tile(from);
        let to   = self.add_tile(to);
        self.raw_edges.push(RawEdge { from, to, cost });
    }

    /// Passage in both directions with the given cost.
    pub fn add_passage_with_cost(&mut self, a: TileCoord, b: TileCoord, cost: u32) {
        self.add_directed_passage(a, b, cost);
        self.add_directed_passage(b, a, cost);
    }

    /// Passage in both directions costed by tile geometry.
    pub fn add_passage(&mut self, a: TileCoord, b: TileCoord) {
        self.add_passage_with_cost(a, b, geometric_cost(a, b));
    }

    pub fn tile_count(&self) -> usize { self.tiles.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce a [`TileGraph`].
    ///
    /// Time complexity: O(E log E) for the edge sort.
    pub fn build(self) -> TileGraph {
        let tile_count = self.tiles.len();
        let edge_count = self.raw_edges.len();

        // Stable sort keeps insertion order among a tile's passages, which in
        // turn keeps Dijkstra tie-breaking reproducible.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let edge_from: Vec<TileId> = raw.iter().map(|e| e.from).collect();
        let edge_to:   Vec<TileId> = raw.iter().map(|e| e.to).collect();
        let edge_cost: Vec<u32>    = raw.iter().map(|e| e.cost).collect();

        let mut tile_out_start = vec![0u32; tile_count + 1];
        for e in &raw {
            tile_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=tile_count {
            tile_out_start[i] += tile_out_start[i - 1];
        }
        debug_assert_eq!(tile_out_start[tile_count] as usize, edge_count);

        TileGraph {
            tile_pos: self.tiles,
            tile_out_start,
            edge_from,
            edge_to,
            edge_cost,
            index: self.index,
        }
    }
}

impl Default for TileGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
