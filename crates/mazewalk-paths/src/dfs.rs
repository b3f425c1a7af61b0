//! Depth-first search.

use std::collections::{HashMap, HashSet};

use mazewalk_core::{Cell, Maze};

use crate::reconstruct::reconstruct;
use crate::traits::{Path, Strategy};

/// Depth-first search: finds *some* path, with no length guarantee.
///
/// Bookkeeping is identical to [`Bfs`](crate::Bfs) — cells are marked
/// visited when discovered, the goal test runs when a cell is popped — only
/// the frontier is a LIFO stack instead of a FIFO queue.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dfs;

impl Strategy for Dfs {
    fn find_path(&self, maze: &Maze) -> Path {
        let start = maze.start();
        let dest = maze.dest();

        let mut frontier: Vec<Cell> = Vec::new();
        let mut visited: HashSet<Cell> = HashSet::new();
        let mut parents: HashMap<Cell, Cell> = HashMap::new();

        frontier.push(start);
        visited.insert(start);

        while let Some(cur) = frontier.pop() {
            if cur == dest {
                return reconstruct(&parents, start, dest);
            }
            for n in maze.neighbors(cur) {
                if visited.insert(n) {
                    parents.insert(n, cur);
                    frontier.push(n);
                }
            }
        }
        Vec::new()
    }
}
