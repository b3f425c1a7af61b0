//! The maze grid: an immutable obstacle map with start and destination
//! markers.
//!
//! A [`Maze`] can be parsed from the textual format used by the original
//! console program (see [`Maze::parse`]) or built programmatically with
//! [`Maze::new`]. Either way it is read-only afterwards, so any number of
//! searches may run against the same maze concurrently without locking.

use std::fmt;

use crate::cell::Cell;

/// An `H × W` rectangular maze.
///
/// Obstacles are stored in a flat row-major boolean array sized at
/// construction time. Exactly one start and one destination cell exist; both
/// are guaranteed in-bounds and free of obstacles by construction. The two
/// markers may coincide, in which case every search yields the trivial
/// single-cell path.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    height: usize,
    width: usize,
    obstacles: Vec<bool>,
    start: Cell,
    dest: Cell,
}

impl Maze {
    /// Free-space character in the textual format.
    pub const SPACE: char = ' ';
    /// Obstacle character in the textual format.
    pub const OBSTACLE: char = '#';
    /// Start-marker character in the textual format.
    pub const START: char = '*';
    /// Destination-marker character in the textual format.
    pub const DEST: char = '.';

    /// Build a maze from explicit parts.
    ///
    /// `obstacles` is row-major, `true` meaning blocked. This is the
    /// constructor used by generators and tests; marker validation that the
    /// textual parser performs is a precondition here.
    ///
    /// # Panics
    ///
    /// Panics if `obstacles.len() != height * width`, if either marker lies
    /// out of bounds, or if either marker sits on an obstacle.
    pub fn new(height: usize, width: usize, obstacles: Vec<bool>, start: Cell, dest: Cell) -> Self {
        assert_eq!(
            obstacles.len(),
            height * width,
            "obstacle map size does not match {height}x{width}"
        );
        let maze = Self {
            height,
            width,
            obstacles,
            start,
            dest,
        };
        assert!(maze.contains(start), "start {start} out of bounds");
        assert!(maze.contains(dest), "destination {dest} out of bounds");
        assert!(!maze.is_obstacle(start), "start {start} is an obstacle");
        assert!(!maze.is_obstacle(dest), "destination {dest} is an obstacle");
        maze
    }

    /// Parse a maze from its textual form.
    ///
    /// Rows are separated by `'\n'` and must all have the same width. The
    /// recognized characters are [`Maze::SPACE`], [`Maze::OBSTACLE`],
    /// [`Maze::START`] (exactly one) and [`Maze::DEST`] (exactly one); any
    /// other character is an error. Leading/trailing blank lines around the
    /// whole input are trimmed, interior lines are taken verbatim.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        let s = s.trim_matches('\n');
        let mut width = 0usize;
        let mut height = 0usize;
        let mut obstacles = Vec::new();
        let mut start = None;
        let mut dest = None;

        for (row, line) in s.lines().enumerate() {
            let mut w = 0usize;
            for (col, ch) in line.chars().enumerate() {
                let at = Cell::new(row, col);
                match ch {
                    Self::SPACE => obstacles.push(false),
                    Self::OBSTACLE => obstacles.push(true),
                    Self::START => {
                        if start.is_some() {
                            return Err(MazeError::MultipleStarts(at));
                        }
                        start = Some(at);
                        obstacles.push(false);
                    }
                    Self::DEST => {
                        if dest.is_some() {
                            return Err(MazeError::MultipleDests(at));
                        }
                        dest = Some(at);
                        obstacles.push(false);
                    }
                    _ => return Err(MazeError::UnknownSymbol { ch, at }),
                }
                w += 1;
            }
            if row == 0 {
                width = w;
            } else if w != width {
                return Err(MazeError::InconsistentWidth { line: row });
            }
            height += 1;
        }

        let start = start.ok_or(MazeError::MissingStart)?;
        let dest = dest.ok_or(MazeError::MissingDest)?;
        Ok(Self::new(height, width, obstacles, start, dest))
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The start marker.
    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    /// The destination marker.
    #[inline]
    pub fn dest(&self) -> Cell {
        self.dest
    }

    /// Whether `cell` lies within the `H × W` bounds.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// Whether `cell` is blocked.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds; callers bounds-check with
    /// [`contains`](Self::contains) first.
    #[inline]
    pub fn is_obstacle(&self, cell: Cell) -> bool {
        assert!(self.contains(cell), "cell {cell} out of bounds");
        self.obstacles[cell.row * self.width + cell.col]
    }

    /// The in-bounds, non-obstacle 4-directional neighbors of `cell`.
    ///
    /// Yields in the fixed order up, left, right, down (a row-major scan of
    /// the four offsets), so search results are reproducible across runs.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        [cell.up(), cell.left(), Some(cell.right()), Some(cell.down())]
            .into_iter()
            .flatten()
            .filter(move |&c| self.contains(c) && !self.is_obstacle(c))
    }

    /// Row-major iterator over every cell in the maze bounds.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let (h, w) = (self.height, self.width);
        (0..h).flat_map(move |row| (0..w).map(move |col| Cell::new(row, col)))
    }
}

/// Errors reported while parsing a textual maze.
///
/// Each variant is a distinct fatal input condition; a [`Maze`] is only ever
/// constructed once none of them applies, so downstream search code never
/// re-validates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// A second start marker was found at the given cell.
    MultipleStarts(Cell),
    /// A second destination marker was found at the given cell.
    MultipleDests(Cell),
    /// No start marker anywhere in the input.
    MissingStart,
    /// No destination marker anywhere in the input.
    MissingDest,
    /// A character outside the recognized set.
    UnknownSymbol { ch: char, at: Cell },
    /// A row whose width differs from the first row's.
    InconsistentWidth { line: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MultipleStarts(at) => {
                write!(f, "multiple starting position characters (second at {at})")
            }
            Self::MultipleDests(at) => {
                write!(f, "multiple destination characters (second at {at})")
            }
            Self::MissingStart => write!(f, "no starting position character found"),
            Self::MissingDest => write!(f, "no destination character found"),
            Self::UnknownSymbol { ch, at } => {
                write!(f, "wrong character {ch:?} in the input field at {at}")
            }
            Self::InconsistentWidth { line } => {
                write!(f, "line {line} has a different width than the first line")
            }
        }
    }
}

impl std::error::Error for MazeError {}
