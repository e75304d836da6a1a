//! Path type, resolver trait, and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The movement engine calls path-finding through the [`PathResolver`] trait,
//! so hosts can swap in A*, cached corridors, or terrain-aware costs without
//! touching the orchestrator.  [`DijkstraResolver`] is the default.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use oc_core::{TileCoord, TileId};

use crate::{SpatialError, SpatialResult, TileGraph};

// ── Path ──────────────────────────────────────────────────────────────────────

/// Ordered tiles from the current position to the final destination.
///
/// The first tile is always the position the path starts from.  Consecutive
/// duplicates are collapsed on construction, so every step is a real leg.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    tiles: Vec<TileCoord>,
}

impl Path {
    pub fn new(mut tiles: Vec<TileCoord>) -> Self {
        tiles.dedup();
        Self { tiles }
    }

    #[inline]
    pub fn tiles(&self) -> &[TileCoord] {
        &self.tiles
    }

    pub fn into_tiles(self) -> Vec<TileCoord> {
        self.tiles
    }

    /// Where the path starts.
    #[inline]
    pub fn start(&self) -> Option<TileCoord> {
        self.tiles.first().copied()
    }

    /// The tile after the start, i.e. the destination of the first leg.
    #[inline]
    pub fn next_tile(&self) -> Option<TileCoord> {
        self.tiles.get(1).copied()
    }

    #[inline]
    pub fn destination(&self) -> Option<TileCoord> {
        self.tiles.last().copied()
    }

    /// Number of legs (tile-to-tile steps).
    #[inline]
    pub fn legs(&self) -> usize {
        self.tiles.len().saturating_sub(1)
    }

    /// `true` when there is nothing left to walk: empty, or a single tile.
    #[inline]
    pub fn is_arrived(&self) -> bool {
        self.legs() == 0
    }
}

impl From<Vec<TileCoord>> for Path {
    fn from(tiles: Vec<TileCoord>) -> Self {
        Self::new(tiles)
    }
}

// ── PathResolver trait ────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// Implementations must be `Send + Sync` so the tick loop can resolve paths
/// for many subjects in parallel.
pub trait PathResolver: Send + Sync {
    /// Compute the path from `from` to `to`.
    ///
    /// `from == to` is a single-tile path, not an error.
    fn resolve(&self, graph: &TileGraph, from: TileCoord, to: TileCoord) -> SpatialResult<Path>;
}

// ── DijkstraResolver ──────────────────────────────────────────────────────────

/// Dijkstra's algorithm over the CSR tile graph using integer passage costs.
///
/// Ties are broken on the lower `TileId`, so the same graph always yields the
/// same path.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraResolver;

impl PathResolver for DijkstraResolver {
    fn resolve(&self, graph: &TileGraph, from: TileCoord, to: TileCoord) -> SpatialResult<Path> {
        let source = graph.tile_id(from).ok_or(SpatialError::TileNotFound(from))?;
        let target = graph.tile_id(to).ok_or(SpatialError::TileNotFound(to))?;
        if source == target {
            return Ok(Path::new(vec![from]));
        }
        dijkstra(graph, source, target)
            .map(|ids| Path::new(ids.into_iter().map(|id| graph.coord(id)).collect()))
            .ok_or(SpatialError::NoPath { from, to })
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

fn dijkstra(graph: &TileGraph, source: TileId, target: TileId) -> Option<Vec<TileId>> {
    let n = graph.tile_count();
    let mut dist      = vec![u32::MAX; n];
    let mut prev_tile = vec![TileId::INVALID; n];

    dist[source.index()] = 0;

    // Reverse turns BinaryHeap (max) into a min-heap.  TileId is the
    // secondary key for deterministic tie-breaking.
    let mut heap: BinaryHeap<Reverse<(u32, TileId)>> = BinaryHeap::new();
    heap.push(Reverse((0, source)));

    while let Some(Reverse((cost, tile))) = heap.pop() {
        if tile == target {
            return Some(reconstruct(&prev_tile, source, target));
        }
        if cost > dist[tile.index()] {
            continue;
        }
        for edge in graph.out_edges(tile) {
            let neighbour = graph.edge_to[edge];
            let new_cost  = cost.saturating_add(graph.edge_cost[edge]);
            if new_cost < dist[neighbour.index()] {
                dist[neighbour.index()] = new_cost;
                prev_tile[neighbour.index()] = tile;
                heap.push(Reverse((new_cost, neighbour)));
            }
        }
    }
    None
}

fn reconstruct(prev_tile: &[TileId], source: TileId, target: TileId) -> Vec<TileId> {
    let mut tiles = vec![target];
    let mut cur = target;
    while cur != source {
        cur = prev_tile[cur.index()];
        tiles.push(cur);
    }
    tiles.reverse();
    tiles
}
