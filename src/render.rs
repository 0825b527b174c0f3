//! Plain text rendering of mazes and search results.

use std::collections::HashSet;

use crate::{
    maze::Grid,
    pathfinding::{Algorithm, SearchOutcome},
    types::{Cell, CellKind},
};

/// Default glyph used to mark path cells.
pub const DEFAULT_PATH_MARKER: char = '*';

/// Renders the grid with every path cell other than the start and end replaced by `marker`.
#[must_use]
pub fn render_path(grid: &Grid, path: &[Cell], marker: char) -> String {
    let on_path: HashSet<Cell> = path.iter().copied().collect();

    grid.glyph_rows()
        .enumerate()
        .map(|(row, glyphs)| {
            glyphs
                .iter()
                .enumerate()
                .map(|(col, glyph)| {
                    let cell = Cell::new(row, col);
                    let endpoint = matches!(
                        grid.kind(row, col),
                        Some(CellKind::Start | CellKind::End)
                    );

                    if on_path.contains(&cell) && !endpoint {
                        marker
                    } else {
                        *glyph
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the full report of a search run: header, marked grid when solved, and counters.
#[must_use]
pub fn report(grid: &Grid, outcome: &SearchOutcome, algorithm: Algorithm, marker: char) -> String {
    let mut lines = vec![format!("--- {algorithm} Result ---")];

    match &outcome.path {
        Some(path) => {
            lines.push("Path found!".to_owned());
            lines.push(render_path(grid, path, marker));
        }
        None => lines.push("No solution found.".to_owned()),
    }

    lines.push(format!("Steps: {}", outcome.steps()));
    lines.push(format!("Cells explored: {}", outcome.explored));

    lines.join("\n")
}
