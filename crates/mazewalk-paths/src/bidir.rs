//! Bidirectional breadth-first search.

use std::collections::{HashMap, HashSet, VecDeque};

use mazewalk_core::{Cell, Maze};

use crate::reconstruct::{reconstruct, reconstruct_rev};
use crate::traits::{Path, Strategy};

/// One direction of the bidirectional search: an ordinary BFS with its own
/// frontier, visited set and parent map.
struct Side {
    frontier: VecDeque<Cell>,
    visited: HashSet<Cell>,
    parents: HashMap<Cell, Cell>,
}

impl Side {
    fn rooted_at(root: Cell) -> Self {
        let mut side = Self {
            frontier: VecDeque::new(),
            visited: HashSet::new(),
            parents: HashMap::new(),
        };
        side.frontier.push_back(root);
        side.visited.insert(root);
        side
    }

    /// Perform one BFS step. The meeting test runs on the frontier head
    /// *before* expansion, for both sides alike: if the head is already in
    /// the opposite side's visited set the searches have met and the head is
    /// returned untouched.
    fn step(&mut self, maze: &Maze, other: &Side) -> Option<Cell> {
        let head = *self.frontier.front()?;
        if other.visited.contains(&head) {
            return Some(head);
        }
        self.frontier.pop_front();
        for n in maze.neighbors(head) {
            if self.visited.insert(n) {
                self.parents.insert(n, head);
                self.frontier.push_back(n);
            }
        }
        None
    }
}

/// Bidirectional BFS: two synchronized frontiers meeting in the middle.
///
/// A forward BFS rooted at the start and a backward BFS rooted at the
/// destination each take one step per round (grid adjacency is symmetric, so
/// the backward search uses the same neighbor relation). The final path is
/// the forward parent chain to the meeting cell joined with the backward
/// chain from it, duplicate meeting cell dropped.
///
/// The alternation is per step rather than per depth level, so the returned
/// path may exceed the true shortest length by one step; callers needing the
/// exact optimum should use [`Bfs`](crate::Bfs). In exchange each side only
/// explores about half the depth, which on large open grids is considerably
/// less total work.
#[derive(Debug, Clone, Copy, Default)]
pub struct BidirectionalBfs;

impl Strategy for BidirectionalBfs {
    fn find_path(&self, maze: &Maze) -> Path {
        let start = maze.start();
        let dest = maze.dest();

        let mut fwd = Side::rooted_at(start);
        let mut bwd = Side::rooted_at(dest);

        let meeting = loop {
            if fwd.frontier.is_empty() || bwd.frontier.is_empty() {
                return Vec::new();
            }
            if let Some(m) = fwd.step(maze, &bwd) {
                break m;
            }
            if let Some(m) = bwd.step(maze, &fwd) {
                break m;
            }
        };

        // start -> meeting, then meeting -> dest without repeating the
        // meeting cell.
        let mut path = reconstruct(&fwd.parents, start, meeting);
        path.extend(
            reconstruct_rev(&bwd.parents, dest, meeting)
                .into_iter()
                .skip(1),
        );
        path
    }
}
