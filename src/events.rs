//! Event handling functions for user input and viewer state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode};

use crate::{pathfinding::Algorithm, App};

/// Handles input events and updates the viewer state accordingly.
///
/// This function polls for keyboard events with a timeout so the animation keeps advancing while
/// the user is idle.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            handle_key(app, key.code);
        }
    }

    app.animation_manager.update();

    Ok(())
}

/// Applies a single key press to the viewer state.
///
/// - `q` quits
/// - `r` replays the current search from the beginning
/// - `d` and `b` switch to depth-first and breadth-first search
/// - `Tab` toggles between the two
pub(crate) fn handle_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') => app.exit = true,
        KeyCode::Char('r') => app.animation_manager.reset(),
        KeyCode::Char('d') => app.select_algorithm(Algorithm::Dfs),
        KeyCode::Char('b') => app.select_algorithm(Algorithm::Bfs),
        KeyCode::Tab => app.select_algorithm(app.algorithm.toggled()),
        _ => {}
    }
}
