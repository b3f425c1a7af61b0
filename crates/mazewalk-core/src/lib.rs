//! Core maze model shared by the pathfinding crates.
//!
//! A [`Maze`] is an immutable rectangular obstacle map with one start and one
//! destination [`Cell`]. It exposes a pure query surface (`contains`,
//! `is_obstacle`, `neighbors`, marker accessors) that search algorithms and
//! presentation layers consume; it performs no I/O and never renders itself.
//!
//! Mazes are built either programmatically ([`Maze::new`]) or by parsing the
//! textual format of [`Maze::parse`].

mod cell;
mod maze;

pub use cell::Cell;
pub use maze::{Maze, MazeError};
