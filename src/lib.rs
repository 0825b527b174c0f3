//! Maze loading and solving with depth-first and breadth-first search.
//!
//! A maze is a rectangular text grid with exactly one `S` (start) and one `E` (end) cell, open
//! cells marked `.` and walls marked `■` or `#`. [`load_grid`] and [`Grid::parse`] validate the
//! text into a [`Grid`], and [`solve`] searches it with the chosen [`Algorithm`]:
//!
//! ```
//! use mazerunner::{solve, Algorithm, GlyphPolicy, Grid};
//!
//! let grid = Grid::parse("S..\n.#.\n..E", GlyphPolicy::Strict)?;
//! let outcome = solve(&grid, Algorithm::Bfs);
//!
//! assert_eq!(outcome.steps(), 5);
//! # Ok::<(), mazerunner::LoadError>(())
//! ```
//!
//! The [`App`] type replays a search in an interactive terminal viewer.

mod app;
mod config;
mod events;
mod file_loader;
mod logging;
mod maze;
mod pathfinding;
mod render;
mod types;
mod ui;

pub use app::App;
pub use config::Config;
pub use file_loader::load_grid;
pub use logging::{init_logging, LOG_ENV, LOG_STYLE_ENV};
pub use maze::{GlyphPolicy, Grid, LoadError};
pub use pathfinding::{solve, Algorithm, SearchOutcome, SelectorError};
pub use render::{render_path, report, DEFAULT_PATH_MARKER};
pub use types::{Cell, CellKind};
