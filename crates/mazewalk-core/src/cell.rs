use std::fmt;

/// A grid coordinate pair. Row 0 is the top row, column 0 the left column.
///
/// `Cell` is a plain value type: equality compares both coordinates, and the
/// derived ordering is row-major (by row, then by column), which makes it
/// usable as an ordered map/set key with deterministic iteration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Create a new cell.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell directly above, or `None` on the top row.
    #[inline]
    pub fn up(self) -> Option<Cell> {
        self.row.checked_sub(1).map(|r| Cell::new(r, self.col))
    }

    /// The cell directly to the left, or `None` in the leftmost column.
    #[inline]
    pub fn left(self) -> Option<Cell> {
        self.col.checked_sub(1).map(|c| Cell::new(self.row, c))
    }

    /// The cell directly to the right.
    #[inline]
    pub fn right(self) -> Cell {
        Cell::new(self.row, self.col + 1)
    }

    /// The cell directly below.
    #[inline]
    pub fn down(self) -> Cell {
        Cell::new(self.row + 1, self.col)
    }

    /// Whether `other` is exactly one 4-directional step away.
    pub fn is_adjacent(self, other: Cell) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr + dc == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_row_major() {
        let mut cells = vec![Cell::new(1, 0), Cell::new(0, 3), Cell::new(0, 1)];
        cells.sort();
        assert_eq!(
            cells,
            vec![Cell::new(0, 1), Cell::new(0, 3), Cell::new(1, 0)]
        );
    }

    #[test]
    fn steps() {
        let c = Cell::new(2, 3);
        assert_eq!(c.up(), Some(Cell::new(1, 3)));
        assert_eq!(c.left(), Some(Cell::new(2, 2)));
        assert_eq!(c.right(), Cell::new(2, 4));
        assert_eq!(c.down(), Cell::new(3, 3));
        assert_eq!(Cell::new(0, 0).up(), None);
        assert_eq!(Cell::new(0, 0).left(), None);
    }

    #[test]
    fn adjacency() {
        let c = Cell::new(2, 2);
        assert!(c.is_adjacent(Cell::new(1, 2)));
        assert!(c.is_adjacent(Cell::new(2, 3)));
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Cell::new(1, 1)));
        assert!(!c.is_adjacent(Cell::new(2, 4)));
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(3, 4).to_string(), "(3, 4)");
    }
}
