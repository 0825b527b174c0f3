//! Coordinate and cell kind definitions shared by the loader, the solver and the viewer.

use std::fmt;

/// Glyph marking the unique start cell.
pub(crate) const START_GLYPH: char = 'S';

/// Glyph marking the unique end cell.
pub(crate) const END_GLYPH: char = 'E';

/// Glyph marking an open, walkable cell.
pub(crate) const OPEN_GLYPH: char = '.';

/// Glyphs recognized as walls: the filled square used by the bundled mazes and a plain ASCII hash.
pub(crate) const WALL_GLYPHS: [char; 2] = ['\u{25a0}', '#'];

/// Location of a single cell in the maze grid.
///
/// Equality and hashing are by value. The type deliberately carries no search metadata; a search
/// run keeps its own mapping from cells to back-references.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Zero-based row index, counted from the top of the maze.
    pub row: usize,
    /// Zero-based column index, counted from the left of the maze.
    pub col: usize,
}

impl Cell {
    /// Builds a cell from its row and column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the cell displaced by the given row and column deltas.
    ///
    /// Yields [`None`] when the displacement would leave the non-negative quadrant. The upper
    /// bounds are not checked here; that is the grid's business.
    #[must_use]
    pub const fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let Some(row) = self.row.checked_add_signed(d_row) else {
            return None;
        };
        let Some(col) = self.col.checked_add_signed(d_col) else {
            return None;
        };

        Some(Self { row, col })
    }

    /// Checks whether two cells are 4-connected neighbors.
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.row, self.col)
    }
}

/// Kind of a single maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Walkable cell.
    Open,
    /// Impassable cell.
    Wall,
    /// The unique starting cell.
    Start,
    /// The unique goal cell.
    End,
}

impl CellKind {
    /// Classifies a glyph, returning [`None`] for characters with no designated meaning.
    #[must_use]
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            START_GLYPH => Some(Self::Start),
            END_GLYPH => Some(Self::End),
            OPEN_GLYPH => Some(Self::Open),
            _ if WALL_GLYPHS.contains(&glyph) => Some(Self::Wall),
            _ => None,
        }
    }

    /// Whether a search may step onto a cell of this kind.
    #[must_use]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}
