//! Grid cell coordinates.

use std::{fmt, iter::FusedIterator};

/// Side length of a square puzzle grid, in cells.
///
/// A grid always has at least one cell. The upper bound keeps cell indices and
/// coordinates representable as `u8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridSize(u8);

impl GridSize {
    /// Largest supported grid side.
    pub const MAX: u8 = 15;

    /// Creates a grid size, returning `None` if `side` is zero or above [`GridSize::MAX`].
    ///
    /// # Examples
    ///
    /// ```
    /// use jigsaw_core::GridSize;
    ///
    /// assert_eq!(GridSize::new(4).map(GridSize::get), Some(4));
    /// assert!(GridSize::new(0).is_none());
    /// ```
    #[must_use]
    pub const fn new(side: u8) -> Option<Self> {
        if side == 0 || side > Self::MAX {
            None
        } else {
            Some(Self(side))
        }
    }

    /// Returns the number of cells along one side.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the total number of cells (`side * side`).
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.0 as usize * self.0 as usize
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        pos.col < self.0 && pos.row < self.0
    }

    /// Returns an iterator over all cells in row-major order.
    #[must_use]
    pub fn positions(self) -> Positions {
        Positions {
            side: self.0,
            next: 0,
            end: self.cell_count(),
        }
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.0)
    }
}

/// A grid cell coordinate `(col, row)`, with `(0, 0)` at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("({col}, {row})")]
pub struct Position {
    col: u8,
    row: u8,
}

impl Position {
    /// Creates a position from a column and a row.
    #[must_use]
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Returns the column (x axis).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row (y axis).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the row-major cell index of this position in a grid of `size`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the grid.
    #[must_use]
    pub const fn index(self, size: GridSize) -> usize {
        assert!(size.contains(self));
        self.row as usize * size.get() as usize + self.col as usize
    }

    /// Returns the position of the row-major cell `index` in a grid of `size`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than `size.cell_count()`.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_index(index: usize, size: GridSize) -> Self {
        assert!(index < size.cell_count());
        let side = size.get() as usize;
        Self::new((index % side) as u8, (index / side) as u8)
    }
}

impl From<(u8, u8)> for Position {
    fn from((col, row): (u8, u8)) -> Self {
        Self::new(col, row)
    }
}

/// Iterator over the cells of a grid in row-major order.
///
/// Returned by [`GridSize::positions`].
#[derive(Debug, Clone)]
pub struct Positions {
    side: u8,
    next: usize,
    end: usize,
}

impl Iterator for Positions {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let side = usize::from(self.side);
        #[expect(clippy::cast_possible_truncation)]
        let pos = Position::new((self.next % side) as u8, (self.next / side) as u8);
        self.next += 1;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.next;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Positions {}
impl FusedIterator for Positions {}
