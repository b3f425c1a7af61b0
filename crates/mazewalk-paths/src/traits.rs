use mazewalk_core::{Cell, Maze};

/// An ordered cell sequence from start to destination inclusive.
///
/// Consecutive cells are 4-adjacent and none is an obstacle. The empty
/// vector means "no path exists".
pub type Path = Vec<Cell>;

/// A maze search strategy.
///
/// Implementations are stateless unit types; all per-search bookkeeping
/// (frontier, visited set, parent map) lives inside a single `find_path`
/// call, so one strategy value may serve any number of mazes and threads.
pub trait Strategy {
    /// Search `maze` for a route from its start to its destination.
    fn find_path(&self, maze: &Maze) -> Path;
}
