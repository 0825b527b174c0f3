//! Maze grid model and text validation.
//!
//! This module contains the [`Grid`] struct, built once from a sequence of text lines and never
//! mutated afterwards, together with the errors that loading a maze may produce.

use std::{fmt, io, path::PathBuf};

use log::debug;
use thiserror::Error;

use crate::types::{Cell, CellKind};

/// Treatment of characters that are neither `S`, `E`, an open glyph nor a wall glyph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GlyphPolicy {
    /// Reject the maze with [`LoadError::UnknownGlyph`].
    #[default]
    Strict,
    /// Treat the character as a wall.
    Lenient,
}

/// Reasons a maze may fail to load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The maze source could not be read.
    #[error("maze file {} could not be read: {source}", path.display())]
    SourceNotFound {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The source contained no lines, or only empty ones.
    #[error("maze is empty")]
    Empty,
    /// A line differs in width from the first one.
    #[error("maze is not rectangular: row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// Offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A character with no designated meaning was found under [`GlyphPolicy::Strict`].
    #[error("unrecognized cell glyph {glyph:?} at row {row}, column {col}")]
    UnknownGlyph {
        /// Row of the glyph.
        row: usize,
        /// Column of the glyph.
        col: usize,
        /// The glyph itself.
        glyph: char,
    },
    /// No `S` cell.
    #[error("maze must have exactly one start (S) point, found none")]
    MissingStart,
    /// More than one `S` cell.
    #[error("maze must have exactly one start (S) point, found {0}")]
    DuplicateStart(usize),
    /// No `E` cell.
    #[error("maze must have exactly one end (E) point, found none")]
    MissingEnd,
    /// More than one `E` cell.
    #[error("maze must have exactly one end (E) point, found {0}")]
    DuplicateEnd(usize),
}

/// Validated rectangular maze.
///
/// Cells are stored row-major in flat vectors. Alongside each cell kind the original glyph is
/// kept, so that rendering the grid reproduces the input exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
    /// Row-major cell kinds.
    kinds: Vec<CellKind>,
    /// Row-major source glyphs.
    glyphs: Vec<char>,
    /// Location of the unique start cell.
    start: Cell,
    /// Location of the unique end cell.
    end: Cell,
}

impl Grid {
    /// Parses a multiline string into a grid.
    ///
    /// # Errors
    ///
    /// See [`Grid::from_lines`].
    pub fn parse(text: &str, policy: GlyphPolicy) -> Result<Self, LoadError> {
        Self::from_lines(text.lines(), policy)
    }

    /// Builds a grid from a sequence of text lines.
    ///
    /// Widths are measured in characters, so multibyte wall glyphs count as a single cell.
    ///
    /// # Errors
    ///
    /// This function returns an error if:
    /// - The sequence is empty or its lines are all empty
    /// - Any line differs in width from the first one
    /// - A glyph is unrecognized and the policy is [`GlyphPolicy::Strict`]
    /// - There is not exactly one start cell and exactly one end cell
    pub fn from_lines<I, S>(lines: I, policy: GlyphPolicy) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rows = 0;
        let mut width = None;
        let mut kinds = Vec::new();
        let mut glyphs = Vec::new();
        let mut starts = Vec::new();
        let mut ends = Vec::new();

        for (row, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();

            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(LoadError::Ragged {
                        row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }

            for (col, glyph) in line.chars().enumerate() {
                let kind = match (CellKind::from_glyph(glyph), policy) {
                    (Some(kind), _) => kind,
                    (None, GlyphPolicy::Lenient) => CellKind::Wall,
                    (None, GlyphPolicy::Strict) => {
                        return Err(LoadError::UnknownGlyph { row, col, glyph });
                    }
                };

                match kind {
                    CellKind::Start => starts.push(Cell::new(row, col)),
                    CellKind::End => ends.push(Cell::new(row, col)),
                    CellKind::Open | CellKind::Wall => {}
                }

                kinds.push(kind);
                glyphs.push(glyph);
            }

            rows += 1;
        }

        let cols = match width {
            Some(cols) if cols > 0 => cols,
            _ => return Err(LoadError::Empty),
        };

        let start = match starts.as_slice() {
            [start] => *start,
            [] => return Err(LoadError::MissingStart),
            _ => return Err(LoadError::DuplicateStart(starts.len())),
        };
        let end = match ends.as_slice() {
            [end] => *end,
            [] => return Err(LoadError::MissingEnd),
            _ => return Err(LoadError::DuplicateEnd(ends.len())),
        };

        debug!("loaded {rows}x{cols} maze, start at {start}, end at {end}");

        Ok(Self {
            rows,
            cols,
            kinds,
            glyphs,
            start,
            end,
        })
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Location of the start cell.
    #[must_use]
    pub const fn start(&self) -> Cell {
        self.start
    }

    /// Location of the end cell.
    #[must_use]
    pub const fn end(&self) -> Cell {
        self.end
    }

    /// Row-major position of a cell in the backing storage, or [`None`] when out of bounds.
    #[must_use]
    pub const fn flat_index(&self, cell: Cell) -> Option<usize> {
        if cell.row < self.rows && cell.col < self.cols {
            Some(cell.row * self.cols + cell.col)
        } else {
            None
        }
    }

    /// Kind of the cell at the given location, or [`None`] when out of bounds.
    #[must_use]
    pub fn kind(&self, row: usize, col: usize) -> Option<CellKind> {
        self.flat_index(Cell::new(row, col))
            .and_then(|index| self.kinds.get(index).copied())
    }

    /// Original glyph of the cell at the given location, or [`None`] when out of bounds.
    #[must_use]
    pub fn glyph(&self, row: usize, col: usize) -> Option<char> {
        self.flat_index(Cell::new(row, col))
            .and_then(|index| self.glyphs.get(index).copied())
    }

    /// Checks whether a search may step onto the given location.
    ///
    /// Out-of-bounds locations and walls are both reported as not passable.
    #[must_use]
    pub fn is_passable(&self, row: usize, col: usize) -> bool {
        self.kind(row, col).is_some_and(CellKind::is_passable)
    }

    /// Iterates over the rows of the grid as glyph slices.
    pub fn glyph_rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        self.glyphs.chunks(self.cols)
    }

    /// Iterates over every cell of the given kind, in row-major order.
    pub fn cells_of(&self, kind: CellKind) -> impl Iterator<Item = Cell> + '_ {
        self.kinds
            .iter()
            .enumerate()
            .filter(move |&(_, candidate)| *candidate == kind)
            .map(move |(index, _)| Cell::new(index / self.cols, index % self.cols))
    }

    /// Moves the end marker onto another cell, bypassing the glyph-based validation.
    #[cfg(test)]
    pub(crate) fn with_end(mut self, end: Cell) -> Self {
        self.end = end;
        self
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.glyph_rows().enumerate() {
            if index > 0 {
                writeln!(formatter)?;
            }
            for glyph in row {
                write!(formatter, "{glyph}")?;
            }
        }

        Ok(())
    }
}
