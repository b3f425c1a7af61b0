//! Console rendering of mazes and solved paths.
//!
//! Pure string building over the maze's query surface; nothing here touches
//! stdout directly, so the same functions serve tests and the demo binary.

use std::collections::HashSet;

use mazewalk_core::{Cell, Maze};

/// Character used to overlay route cells in [`render_with_path`].
pub const PATH: char = 'o';

/// Render the maze inside its block border.
pub fn render(maze: &Maze) -> String {
    render_with_path(maze, &[])
}

/// Render the maze with the cells of `path` overlaid.
///
/// Start and destination keep their own glyphs even when on the path.
pub fn render_with_path(maze: &Maze, path: &[Cell]) -> String {
    let on_path: HashSet<Cell> = path.iter().copied().collect();
    let mut out = String::new();

    for _ in 0..maze.width() + 2 {
        out.push('▄');
    }
    out.push('\n');
    for row in 0..maze.height() {
        out.push('█');
        for col in 0..maze.width() {
            let cell = Cell::new(row, col);
            let ch = if cell == maze.start() {
                Maze::START
            } else if cell == maze.dest() {
                Maze::DEST
            } else if on_path.contains(&cell) {
                PATH
            } else if maze.is_obstacle(cell) {
                Maze::OBSTACLE
            } else {
                Maze::SPACE
            };
            out.push(ch);
        }
        out.push('█');
        out.push('\n');
    }
    for _ in 0..maze.width() + 2 {
        out.push('▀');
    }
    out.push('\n');
    out
}
