//! Breadth-first search.

use std::collections::{HashMap, HashSet, VecDeque};

use mazewalk_core::{Cell, Maze};

use crate::reconstruct::reconstruct;
use crate::traits::{Path, Strategy};

/// Breadth-first search: guarantees a minimum-step path.
///
/// The FIFO frontier expands cells in non-decreasing distance from the start,
/// so the first time the destination is dequeued the recorded parent chain is
/// a shortest path in the unweighted grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bfs;

impl Strategy for Bfs {
    fn find_path(&self, maze: &Maze) -> Path {
        let start = maze.start();
        let dest = maze.dest();

        let mut frontier: VecDeque<Cell> = VecDeque::new();
        let mut visited: HashSet<Cell> = HashSet::new();
        let mut parents: HashMap<Cell, Cell> = HashMap::new();

        frontier.push_back(start);
        visited.insert(start);

        while let Some(cur) = frontier.pop_front() {
            if cur == dest {
                return reconstruct(&parents, start, dest);
            }
            for n in maze.neighbors(cur) {
                if visited.insert(n) {
                    parents.insert(n, cur);
                    frontier.push_back(n);
                }
            }
        }
        Vec::new()
    }
}
