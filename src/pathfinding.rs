//! Pathfinding algorithm and animation module.
//!
//! This module contains the depth-first and breadth-first maze solvers, the animation system that
//! replays a search in the viewer, and coordinate transformation utilities for rendering.

use std::{
    collections::VecDeque,
    fmt,
    iter,
    str::FromStr,
    time::{Duration, Instant},
};

use clap::ValueEnum;
use color_eyre::eyre::Result;
use log::{debug, info, trace};
use thiserror::Error;

use crate::{maze::Grid, types::Cell};

/// Animation frame delay in milliseconds.
///
/// This constant controls the timing between animation frames in the viewer. A lower value
/// results in faster animation, while a higher value makes the exploration order easier to follow.
pub(crate) const ANIMATION_FRAME_DELAY_MS: u64 = 60;

/// Neighbor displacements in enumeration order: up, down, left, right.
///
/// The order decides which path depth-first search finds, so it is fixed.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Traversal strategy used by [`solve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Algorithm {
    /// Depth-first search; the frontier is a stack.
    #[value(alias = "1")]
    Dfs,
    /// Breadth-first search; the frontier is a queue. Finds a shortest path.
    #[value(alias = "2")]
    Bfs,
}

impl Algorithm {
    /// Removes the next node from the frontier according to this strategy's discipline.
    fn take<T>(self, frontier: &mut VecDeque<T>) -> Option<T> {
        match self {
            Self::Dfs => frontier.pop_back(),
            Self::Bfs => frontier.pop_front(),
        }
    }

    /// The other strategy.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dfs => Self::Bfs,
            Self::Bfs => Self::Dfs,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dfs => formatter.write_str("DFS"),
            Self::Bfs => formatter.write_str("BFS"),
        }
    }
}

/// Error raised when an algorithm selector is not recognized.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    /// The selector matched neither DFS nor BFS.
    #[error("invalid solver choice {0:?}: expected 1 (DFS) or 2 (BFS)")]
    Invalid(String),
}

impl FromStr for Algorithm {
    type Err = SelectorError;

    fn from_str(choice: &str) -> Result<Self, Self::Err> {
        match choice.trim().to_ascii_lowercase().as_str() {
            "1" | "dfs" => Ok(Self::Dfs),
            "2" | "bfs" => Ok(Self::Bfs),
            _ => Err(SelectorError::Invalid(choice.trim().to_owned())),
        }
    }
}

/// Result of a single search run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Cells from start to end inclusive, or [`None`] when the end is unreachable.
    pub path: Option<Vec<Cell>>,
    /// Number of distinct cells removed from the frontier and marked visited.
    pub explored: usize,
    /// Cells in the order they were marked visited.
    pub visit_order: Vec<Cell>,
}

impl SearchOutcome {
    /// Whether a path was found.
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.path.is_some()
    }

    /// Number of cells in the path, zero when there is none.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.path.as_ref().map_or(0, Vec::len)
    }
}

/// Frontier entry: a cell together with the cell it was discovered from in this run.
#[derive(Clone, Copy, Debug)]
struct SearchNode {
    /// Discovered cell.
    cell: Cell,
    /// Back-reference, absent for the start cell.
    parent: Option<Cell>,
}

/// Finds a path from the grid's start cell to its end cell.
///
/// Both strategies share one loop and differ only in which end of the frontier they take from.
/// Duplicate frontier entries are expected and skipped once their cell has been visited. The
/// back-reference of a cell is recorded when it is visited, taken from the frontier entry that
/// reached it first, so each run owns its own mapping and the grid is only read.
#[must_use]
pub fn solve(grid: &Grid, algorithm: Algorithm) -> SearchOutcome {
    let area = grid.rows() * grid.cols();
    let mut visited = vec![false; area];
    let mut parents: Vec<Option<Cell>> = vec![None; area];
    let mut visit_order = Vec::new();
    let mut frontier = VecDeque::from([SearchNode {
        cell: grid.start(),
        parent: None,
    }]);

    debug!("solving {}x{} maze with {algorithm}", grid.rows(), grid.cols());

    while let Some(SearchNode { cell: current, parent }) = algorithm.take(&mut frontier) {
        let Some(index) = grid.flat_index(current) else {
            continue;
        };

        match visited.get_mut(index) {
            Some(seen) if !*seen => *seen = true,
            _ => continue,
        }
        if let Some(slot) = parents.get_mut(index) {
            *slot = parent;
        }
        visit_order.push(current);
        trace!("visiting {current}");

        if current == grid.end() {
            let path = reconstruct_path(grid, &parents, current);
            info!(
                "{algorithm} found a {}-cell path after exploring {} cells",
                path.len(),
                visit_order.len()
            );

            return SearchOutcome {
                path: Some(path),
                explored: visit_order.len(),
                visit_order,
            };
        }

        frontier.extend(
            neighbors(grid, current)
                .filter(|neighbor| {
                    grid.flat_index(*neighbor)
                        .and_then(|neighbor_index| visited.get(neighbor_index))
                        .is_some_and(|seen| !seen)
                })
                .map(|neighbor| SearchNode {
                    cell: neighbor,
                    parent: Some(current),
                }),
        );
    }

    info!(
        "{algorithm} found no path after exploring {} cells",
        visit_order.len()
    );

    SearchOutcome {
        path: None,
        explored: visit_order.len(),
        visit_order,
    }
}

/// Enumerates the passable 4-connected neighbors of a cell, in the order up, down, left, right.
pub(crate) fn neighbors(grid: &Grid, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
    DIRECTIONS
        .into_iter()
        .filter_map(move |(d_row, d_col)| cell.offset(d_row, d_col))
        .filter(move |neighbor| grid.is_passable(neighbor.row, neighbor.col))
}

/// Follows back-references from `end` to the start cell and returns the path start first.
fn reconstruct_path(grid: &Grid, parents: &[Option<Cell>], end: Cell) -> Vec<Cell> {
    let mut path: Vec<Cell> = iter::successors(Some(end), |cell| {
        grid.flat_index(*cell)
            .and_then(|index| parents.get(index).copied().flatten())
    })
    .take(parents.len())
    .collect();
    path.reverse();

    path
}

/// Animation step types for search playback.
///
/// A recorded search is replayed first as its exploration order and then as the found path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AnimationStep {
    /// Mark a cell as explored.
    Explore(Cell),
    /// Mark a cell as part of the found path.
    Trace(Cell),
}

/// Animation state manager for search playback.
///
/// This structure manages timing and the current step of the replay shown in the viewer.
pub(crate) struct AnimationManager {
    /// Animation steps recorded from a search outcome.
    pub(crate) steps: Vec<AnimationStep>,
    /// Number of steps already played.
    ///
    /// This field indexes into [`steps`](AnimationManager::steps); everything before it is on
    /// screen.
    pub(crate) current_index: usize,
    /// Timestamp of the last animation frame update.
    pub(crate) last_update_time: Instant,
}

impl Default for AnimationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationManager {
    /// Creates a new animation manager with no steps.
    pub(crate) fn new() -> Self {
        Self {
            steps: Vec::new(),
            current_index: 0,
            last_update_time: Instant::now(),
        }
    }

    /// Creates an animation manager replaying the given search outcome.
    pub(crate) fn from_outcome(outcome: &SearchOutcome) -> Self {
        let explore = outcome.visit_order.iter().copied().map(AnimationStep::Explore);
        let trace = outcome
            .path
            .iter()
            .flatten()
            .copied()
            .map(AnimationStep::Trace);

        Self {
            steps: explore.chain(trace).collect(),
            ..Self::new()
        }
    }

    /// Resets the animation state to the beginning.
    pub(crate) fn reset(&mut self) {
        self.current_index = 0;
        self.last_update_time = Instant::now();
    }

    /// Whether every recorded step is on screen.
    pub(crate) fn is_finished(&self) -> bool {
        self.current_index >= self.steps.len()
    }

    /// Plays the next step, if any remain.
    pub(crate) fn advance(&mut self) {
        if !self.is_finished() {
            self.current_index += 1;
        }
    }

    /// Advances the animation when enough time has passed since the last frame.
    ///
    /// Once every step has been played, the final frame is held until [`reset`] is called.
    ///
    /// [`reset`]: AnimationManager::reset
    pub(crate) fn update(&mut self) {
        if self.last_update_time.elapsed() >= Duration::from_millis(ANIMATION_FRAME_DELAY_MS) {
            self.last_update_time = Instant::now();
            self.advance();
        }
    }

    /// Cells marked as explored so far.
    pub(crate) fn explored_cells(&self) -> Vec<Cell> {
        self.played()
            .filter_map(|step| match step {
                AnimationStep::Explore(cell) => Some(*cell),
                AnimationStep::Trace(_) => None,
            })
            .collect()
    }

    /// Path cells traced so far.
    pub(crate) fn traced_cells(&self) -> Vec<Cell> {
        self.played()
            .filter_map(|step| match step {
                AnimationStep::Trace(cell) => Some(*cell),
                AnimationStep::Explore(_) => None,
            })
            .collect()
    }

    /// Steps already played.
    fn played(&self) -> impl Iterator<Item = &AnimationStep> {
        self.steps.iter().take(self.current_index)
    }
}

/// Transforms maze coordinates to screen coordinates for canvas rendering.
///
/// This function converts maze cells to canvas points using the formulas y = (rows - 1) / 2 - row
/// and x = col - (cols - 1) / 2, which center the maze on the canvas origin.
///
/// # Errors
///
/// This function returns an error if a dimension or coordinate does not fit in a [`u16`].
pub(crate) fn transform_maze_to_screen_coords(
    maze_coords: &[Cell],
    grid: &Grid,
) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(u16::try_from(grid.rows())?);
    let cols_n = f64::from(u16::try_from(grid.cols())?);

    maze_coords
        .iter()
        .map(|cell| {
            let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(cell.row)?);
            let screen_x = f64::from(u16::try_from(cell.col)?) - (cols_n - 1.) / 2.;

            Ok((screen_x, screen_y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{maze::GlyphPolicy, types::CellKind};

    /// Three by three maze with a single central wall.
    const SCENARIO_A: &str = "S..\n.#.\n..E";

    /// Maze whose end cell is walled off from the start.
    const SCENARIO_B: &str = "S..#.\n.#.#.\n...#E";

    /// Open room where depth-first search wanders before reaching the end.
    const OPEN_ROOM: &str = "S....\n.....\n.....\n....E";

    /// Parses a test maze that is known to be valid.
    fn grid(text: &str) -> Grid {
        Grid::parse(text, GlyphPolicy::Strict).expect("test maze should be valid")
    }

    /// Asserts that a path starts at the start cell, ends at the end cell and only takes single
    /// steps onto passable cells.
    fn assert_valid_path(grid: &Grid, path: &[Cell]) {
        assert_eq!(path.first(), Some(&grid.start()), "path must begin at start");
        assert_eq!(path.last(), Some(&grid.end()), "path must finish at end");
        for cell in path {
            assert!(
                grid.is_passable(cell.row, cell.col),
                "path crosses impassable cell {cell}"
            );
        }
        for pair in path.windows(2) {
            if let [from, to] = pair {
                assert!(from.is_adjacent(*to), "{from} and {to} are not adjacent");
            }
        }
    }

    #[test]
    fn test_bfs_scenario_a() {
        let grid = grid(SCENARIO_A);
        let outcome = solve(&grid, Algorithm::Bfs);

        let path = outcome.path.as_ref().expect("scenario A is solvable");
        assert_eq!(path.len(), 5, "shortest path has five cells");
        assert_valid_path(&grid, path);
        assert_eq!(
            path,
            &vec![
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(2, 0),
                Cell::new(2, 1),
                Cell::new(2, 2)
            ],
            "down is enumerated before right, so the left column is discovered first"
        );
        assert_eq!(outcome.explored, 8, "every passable cell is dequeued, the end last");
    }

    #[test]
    fn test_dfs_scenario_a() {
        let grid = grid(SCENARIO_A);
        let outcome = solve(&grid, Algorithm::Dfs);

        let path = outcome.path.as_ref().expect("scenario A is solvable");
        assert!(path.len() >= 5);
        assert_valid_path(&grid, path);
        assert_eq!(
            path,
            &vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 2),
                Cell::new(2, 2)
            ],
            "right is pushed last, so it is explored first"
        );
        assert_eq!(outcome.explored, 5);
    }

    #[test]
    fn test_scenario_b_no_path() {
        let grid = grid(SCENARIO_B);
        let reachable = 8;

        for algorithm in [Algorithm::Dfs, Algorithm::Bfs] {
            let outcome = solve(&grid, algorithm);

            assert_eq!(outcome.path, None, "{algorithm} must not find a path");
            assert_eq!(outcome.steps(), 0);
            assert!(!outcome.is_solved());
            assert_eq!(
                outcome.explored, reachable,
                "{algorithm} explores every cell reachable from start"
            );
        }
    }

    #[test]
    fn test_start_is_end() {
        let base = grid("S.\n.E");
        let grid = base.clone().with_end(base.start());

        for algorithm in [Algorithm::Dfs, Algorithm::Bfs] {
            let outcome = solve(&grid, algorithm);

            assert_eq!(outcome.path, Some(vec![Cell::new(0, 0)]), "{algorithm} path");
            assert_eq!(outcome.explored, 1);
        }
    }

    #[test]
    fn test_adjacent_start_and_end() {
        let grid = grid("SE");

        for algorithm in [Algorithm::Dfs, Algorithm::Bfs] {
            let outcome = solve(&grid, algorithm);

            assert_eq!(outcome.steps(), 2);
            assert_eq!(outcome.explored, 2);
        }
    }

    #[test]
    fn test_isolated_start() {
        let grid = grid("S#.\n##E");

        for algorithm in [Algorithm::Dfs, Algorithm::Bfs] {
            let outcome = solve(&grid, algorithm);

            assert_eq!(outcome.path, None);
            assert_eq!(outcome.explored, 1, "only the start is visited");
            assert_eq!(outcome.visit_order, vec![Cell::new(0, 0)]);
        }
    }

    #[test]
    fn test_bfs_never_longer_than_dfs() {
        for text in [SCENARIO_A, OPEN_ROOM, "S.#...\n..#.#.\n#...#E\n..#...", "S.\n.E"] {
            let grid = grid(text);
            let bfs = solve(&grid, Algorithm::Bfs);
            let dfs = solve(&grid, Algorithm::Dfs);

            assert!(
                bfs.steps() <= dfs.steps(),
                "bfs path is longer than dfs path on {text:?}"
            );
            assert_valid_path(&grid, bfs.path.as_deref().expect("maze is solvable"));
            assert_valid_path(&grid, dfs.path.as_deref().expect("maze is solvable"));
        }
    }

    #[test]
    fn test_bfs_shortest_in_open_room() {
        let grid = grid(OPEN_ROOM);
        let outcome = solve(&grid, Algorithm::Bfs);

        assert_eq!(outcome.steps(), 8, "manhattan distance plus one");
    }

    #[test]
    fn test_explored_bounded_by_area() {
        for text in [SCENARIO_A, SCENARIO_B, OPEN_ROOM] {
            let grid = grid(text);

            for algorithm in [Algorithm::Dfs, Algorithm::Bfs] {
                let outcome = solve(&grid, algorithm);

                assert!(outcome.explored <= grid.rows() * grid.cols());
                assert_eq!(outcome.explored, outcome.visit_order.len());

                let mut distinct = outcome.visit_order.clone();
                distinct.sort_unstable();
                distinct.dedup();
                assert_eq!(
                    distinct.len(),
                    outcome.visit_order.len(),
                    "cells are visited at most once"
                );
            }
        }
    }

    #[test]
    fn test_runs_on_same_grid_are_independent() {
        let grid = grid(OPEN_ROOM);

        let first = solve(&grid, Algorithm::Dfs);
        let _ = solve(&grid, Algorithm::Bfs);
        let second = solve(&grid, Algorithm::Dfs);

        assert_eq!(first, second, "a bfs run must not affect later dfs runs");
    }

    #[test]
    fn test_neighbors_order_and_bounds() {
        let grid = grid("S..\n...\n..E");

        assert_eq!(
            neighbors(&grid, Cell::new(1, 1)).collect::<Vec<_>>(),
            vec![
                Cell::new(0, 1),
                Cell::new(2, 1),
                Cell::new(1, 0),
                Cell::new(1, 2)
            ]
        );
        assert_eq!(
            neighbors(&grid, Cell::new(0, 0)).collect::<Vec<_>>(),
            vec![Cell::new(1, 0), Cell::new(0, 1)]
        );
    }

    #[test]
    fn test_neighbors_skip_walls() {
        let grid = grid(SCENARIO_A);

        assert!(neighbors(&grid, Cell::new(0, 1)).all(|cell| {
            grid.kind(cell.row, cell.col) != Some(CellKind::Wall)
        }));
    }

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("1".parse::<Algorithm>(), Ok(Algorithm::Dfs));
        assert_eq!(" 2\n".parse::<Algorithm>(), Ok(Algorithm::Bfs));
        assert_eq!("DFS".parse::<Algorithm>(), Ok(Algorithm::Dfs));
        assert_eq!("bfs".parse::<Algorithm>(), Ok(Algorithm::Bfs));
        assert_eq!(
            "3".parse::<Algorithm>(),
            Err(SelectorError::Invalid("3".to_owned()))
        );
    }

    #[test]
    fn test_algorithm_display_and_toggle() {
        assert_eq!(Algorithm::Dfs.to_string(), "DFS");
        assert_eq!(Algorithm::Bfs.to_string(), "BFS");
        assert_eq!(Algorithm::Dfs.toggled(), Algorithm::Bfs);
        assert_eq!(Algorithm::Bfs.toggled(), Algorithm::Dfs);
    }

    #[test]
    fn test_animation_manager_replays_exploration_then_path() {
        let grid = grid(SCENARIO_A);
        let outcome = solve(&grid, Algorithm::Dfs);
        let mut manager = AnimationManager::from_outcome(&outcome);

        assert_eq!(manager.steps.len(), outcome.explored + outcome.steps());
        assert!(manager.explored_cells().is_empty());

        for _ in 0..outcome.explored {
            manager.advance();
        }
        assert_eq!(manager.explored_cells(), outcome.visit_order);
        assert!(manager.traced_cells().is_empty());

        while !manager.is_finished() {
            manager.advance();
        }
        assert_eq!(Some(manager.traced_cells()), outcome.path);

        manager.advance();
        assert_eq!(
            manager.current_index,
            manager.steps.len(),
            "advancing past the end holds the last frame"
        );

        manager.reset();
        assert_eq!(manager.current_index, 0);
    }

    #[test]
    fn test_transform_maze_to_screen_coords() {
        let grid = grid(SCENARIO_A);
        let coords = transform_maze_to_screen_coords(&[Cell::new(0, 0), Cell::new(2, 2)], &grid)
            .expect("coordinates fit");

        assert_eq!(coords, vec![(-1., 1.), (1., -1.)]);
    }
}
