//! Core application state for the terminal maze viewer.

use color_eyre::eyre::Result;
use log::debug;
use ratatui::DefaultTerminal;

use crate::{
    events,
    maze::Grid,
    pathfinding::{self, AnimationManager, Algorithm, SearchOutcome},
    ui,
};

/// Application state container for the maze viewer.
///
/// This structure holds the state from which Ratatui renders the replay of a search and which
/// Crossterm events update.
pub struct App {
    /// Application exit flag.
    ///
    /// This field is set to `true` when the user wants to quit the viewer.
    pub(crate) exit: bool,
    /// Maze being displayed.
    pub(crate) grid: Grid,
    /// Algorithm whose run is being replayed.
    pub(crate) algorithm: Algorithm,
    /// Result of running [`algorithm`](App::algorithm) over [`grid`](App::grid).
    pub(crate) outcome: SearchOutcome,
    /// Animation manager for search playback.
    ///
    /// This field manages timing and the current step of the exploration and path replay.
    pub(crate) animation_manager: AnimationManager,
}

impl App {
    /// Creates the viewer state and runs the first search.
    #[must_use]
    pub fn new(grid: Grid, algorithm: Algorithm) -> Self {
        let outcome = pathfinding::solve(&grid, algorithm);
        let animation_manager = AnimationManager::from_outcome(&outcome);

        Self {
            exit: false,
            grid,
            algorithm,
            outcome,
            animation_manager,
        }
    }

    /// Re-runs the search with another algorithm and restarts the replay.
    ///
    /// Selecting the algorithm already shown only restarts the replay.
    pub(crate) fn select_algorithm(&mut self, algorithm: Algorithm) {
        if algorithm != self.algorithm {
            debug!("switching viewer from {} to {algorithm}", self.algorithm);
            self.algorithm = algorithm;
            self.outcome = pathfinding::solve(&self.grid, algorithm);
            self.animation_manager = AnimationManager::from_outcome(&self.outcome);
        }

        self.animation_manager.reset();
    }

    /// Runs the main loop of the viewer.
    ///
    /// This function draws the current frame and handles user input until the exit flag is set,
    /// after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// This function returns an error if drawing to or polling the terminal fails.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame).map_err(|err| std::io::Error::other(err.to_string()))
            })?;
            events::handle_events(self)?;
        }

        Ok(())
    }
}
