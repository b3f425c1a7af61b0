//! Reachability flood fill: the start cell's connected component as an
//! explicit directed graph.

use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

use mazewalk_core::{Cell, Maze};

/// Directed adjacency over the connected component containing the maze
/// start.
///
/// One node per reachable cell, one edge per legal step out of it. The
/// underlying grid adjacency is symmetric and every endpoint of an edge gets
/// visited, so edges come out symmetric even though each direction is
/// recorded independently. Built once by [`flood_fill`] and immutable
/// afterwards; independent of the destination marker.
///
/// Ordered containers keep iteration deterministic, which is the point of
/// materializing the graph at all: it exists for inspection and
/// visualization, not for pathfinding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachabilityGraph {
    edges: BTreeMap<Cell, BTreeSet<Cell>>,
}

impl ReachabilityGraph {
    /// Whether `cell` belongs to the component reachable from the start.
    pub fn contains(&self, cell: Cell) -> bool {
        self.edges.contains_key(&cell)
    }

    /// The outgoing edges of `cell`, or `None` if it is not in the graph.
    pub fn edges_from(&self, cell: Cell) -> Option<&BTreeSet<Cell>> {
        self.edges.get(&cell)
    }

    /// Number of nodes (reachable cells).
    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    /// Iterate nodes with their edge sets, in cell order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &BTreeSet<Cell>)> {
        self.edges.iter().map(|(&c, out)| (c, out))
    }
}

/// Breadth-first flood fill from the maze start.
///
/// Unlike the search strategies this never tests for the destination and
/// never halts early: it runs until the frontier is exhausted, i.e. until
/// the whole connected component containing the start has been discovered.
pub fn flood_fill(maze: &Maze) -> ReachabilityGraph {
    let mut edges: BTreeMap<Cell, BTreeSet<Cell>> = BTreeMap::new();
    let mut frontier: VecDeque<Cell> = VecDeque::new();
    let mut visited: HashSet<Cell> = HashSet::new();

    frontier.push_back(maze.start());
    visited.insert(maze.start());

    while let Some(cur) = frontier.pop_front() {
        let out: BTreeSet<Cell> = maze.neighbors(cur).collect();
        for &n in &out {
            if visited.insert(n) {
                frontier.push_back(n);
            }
        }
        edges.insert(cur, out);
    }

    ReachabilityGraph { edges }
}
